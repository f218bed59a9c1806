//! Vertical integration for the player

use super::state::Player;

/// Apply one tick of gravity, then clamp the player onto the ground
pub fn integrate(player: &mut Player, gravity: f32, ground_y: f32) {
    player.dy += gravity;
    player.pos.y += player.dy;

    if player.bottom() > ground_y {
        player.pos.y = ground_y - player.size.y;
        player.dy = 0.0;
        player.grounded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Field;
    use proptest::prelude::*;

    fn field() -> Field {
        Field::new(800.0, 600.0)
    }

    #[test]
    fn test_resting_player_stays_put() {
        let f = field();
        let mut p = Player::on_ground(&f);
        let y = p.pos.y;
        integrate(&mut p, GRAVITY, f.ground_y());
        assert_eq!(p.pos.y, y);
        assert_eq!(p.dy, 0.0);
        assert!(p.grounded);
    }

    #[test]
    fn test_gravity_applied_before_position() {
        let f = field();
        let mut p = Player::on_ground(&f);
        p.pos.y -= 100.0;
        p.grounded = false;
        p.dy = JUMP_FORCE;
        let y = p.pos.y;
        integrate(&mut p, GRAVITY, f.ground_y());
        assert!((p.dy - (JUMP_FORCE + GRAVITY)).abs() < 1e-6);
        assert!((p.pos.y - (y + JUMP_FORCE + GRAVITY)).abs() < 1e-4);
        assert!(!p.grounded);
    }

    #[test]
    fn test_full_jump_lands() {
        let f = field();
        let mut p = Player::on_ground(&f);
        p.dy = JUMP_FORCE;
        p.grounded = false;

        let mut peak = p.pos.y;
        let mut ticks = 0;
        while !p.grounded {
            integrate(&mut p, GRAVITY, f.ground_y());
            peak = peak.min(p.pos.y);
            ticks += 1;
            assert!(ticks < 100, "player never landed");
        }
        // 16/0.8 = 20 ticks up, about the same down
        assert!((38..=42).contains(&ticks), "airtime {ticks}");
        assert!(f.ground_y() - PLAYER_HEIGHT - peak > 140.0);
        assert_eq!(p.bottom(), f.ground_y());
        assert_eq!(p.dy, 0.0);
    }

    proptest! {
        #[test]
        fn never_below_ground(start_dy in -40.0f32..40.0, lift in 0.0f32..300.0, ticks in 1usize..200) {
            let f = field();
            let mut p = Player::on_ground(&f);
            p.pos.y -= lift;
            p.dy = start_dy;
            p.grounded = false;
            for _ in 0..ticks {
                integrate(&mut p, GRAVITY, f.ground_y());
                prop_assert!(p.bottom() <= f.ground_y() + 1e-3);
            }
        }
    }
}
