//! Data-driven game balance
//!
//! Every field is optional in JSON; missing fields fall back to `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tuning errors
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    /// JSON could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is outside its allowed range
    #[error("Invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Recognized gameplay options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub jump_force: f32,
    pub initial_speed: f32,
    pub speed_increment: f32,
    pub cloud_spawn_chance: f64,
    pub obstacle_spawn_chance: f64,
    pub min_obstacle_gap: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            initial_speed: INITIAL_GAME_SPEED,
            speed_increment: SPEED_INCREMENT,
            cloud_spawn_chance: CLOUD_SPAWN_CHANCE,
            obstacle_spawn_chance: OBSTACLE_SPAWN_CHANCE,
            min_obstacle_gap: MIN_OBSTACLE_GAP,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON object
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every value is finite and in range
    pub fn validate(&self) -> Result<(), TuningError> {
        let floats = [
            ("gravity", self.gravity as f64),
            ("jump_force", self.jump_force as f64),
            ("initial_speed", self.initial_speed as f64),
            ("speed_increment", self.speed_increment as f64),
            ("cloud_spawn_chance", self.cloud_spawn_chance),
            ("obstacle_spawn_chance", self.obstacle_spawn_chance),
            ("min_obstacle_gap", self.min_obstacle_gap as f64),
        ];
        if let Some(&(field, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(field, "must be finite"));
        }

        if self.gravity <= 0.0 {
            return Err(invalid("gravity", "must be positive"));
        }
        if self.jump_force >= 0.0 {
            return Err(invalid("jump_force", "must be negative (up)"));
        }
        if self.initial_speed <= 0.0 {
            return Err(invalid("initial_speed", "must be positive"));
        }
        if self.speed_increment < 0.0 {
            return Err(invalid("speed_increment", "must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.cloud_spawn_chance) {
            return Err(invalid("cloud_spawn_chance", "must be within 0..=1"));
        }
        if !(0.0..=1.0).contains(&self.obstacle_spawn_chance) {
            return Err(invalid("obstacle_spawn_chance", "must be within 0..=1"));
        }
        if self.min_obstacle_gap < 0.0 {
            return Err(invalid("min_obstacle_gap", "must not be negative"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> TuningError {
    TuningError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_consts() {
        let t = Tuning::default();
        assert_eq!(t.gravity, GRAVITY);
        assert_eq!(t.jump_force, JUMP_FORCE);
        assert_eq!(t.initial_speed, INITIAL_GAME_SPEED);
        assert_eq!(t.min_obstacle_gap, MIN_OBSTACLE_GAP);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "gravity": 1.2, "speed_increment": 0.1 }"#).unwrap();
        assert_eq!(t.gravity, 1.2);
        assert_eq!(t.speed_increment, 0.1);
        assert_eq!(t.jump_force, JUMP_FORCE);
        assert_eq!(t.obstacle_spawn_chance, OBSTACLE_SPAWN_CHANCE);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Tuning::from_json("{}").unwrap(), Tuning::default());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Tuning::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let cases = [
            (r#"{ "gravity": -0.8 }"#, "gravity"),
            (r#"{ "jump_force": 16 }"#, "jump_force"),
            (r#"{ "initial_speed": 0 }"#, "initial_speed"),
            (r#"{ "speed_increment": -1 }"#, "speed_increment"),
            (r#"{ "cloud_spawn_chance": 1.5 }"#, "cloud_spawn_chance"),
            (r#"{ "obstacle_spawn_chance": -0.1 }"#, "obstacle_spawn_chance"),
            (r#"{ "min_obstacle_gap": -10 }"#, "min_obstacle_gap"),
        ];
        for (json, expected) in cases {
            match Tuning::from_json(json) {
                Err(TuningError::Invalid { field, .. }) => assert_eq!(field, expected, "{json}"),
                other => panic!("expected Invalid for {json}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let t = Tuning {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            t.validate(),
            Err(TuningError::Invalid { field: "gravity", .. })
        ));
    }
}
