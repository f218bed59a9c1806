//! Scene drawing, back to front
//!
//! Order: clear, ground, clouds, ship, obstacles, player. The player is
//! always last so it sits above everything else.

use super::palette::*;
use super::{Surface, TextAlign, TextBaseline};
use crate::consts::GROUND_HEIGHT;
use crate::hud::score_text;
use crate::sim::{Cloud, GameState, Obstacle, ObstacleKind, Player, Ship};

pub const GAME_OVER_TITLE: &str = "Adventure over!";
pub const RESTART_PROMPT: &str = "Tap to play again";

/// Draw the whole scene for the current state
pub fn draw_scene(state: &GameState, surface: &mut impl Surface) {
    let (w, h) = (state.field.width, state.field.height);
    surface.clear_rect(0.0, 0.0, w, h);

    draw_ground(surface, w, h);
    for cloud in &state.clouds {
        draw_cloud(surface, cloud);
    }
    draw_ship(surface, &state.ship);
    for obs in &state.obstacles {
        draw_obstacle(surface, obs);
    }
    draw_player(surface, &state.player);
}

/// Dim the frozen scene and show the final score
pub fn draw_game_over(state: &GameState, surface: &mut impl Surface) {
    let (w, h) = (state.field.width, state.field.height);
    let (cx, cy) = (w / 2.0, h / 2.0);

    surface.set_fill_style(OVERLAY);
    surface.fill_rect(0.0, 0.0, w, h);

    surface.set_fill_style(OVERLAY_TEXT);
    surface.set_text_align(TextAlign::Center);
    surface.set_text_baseline(TextBaseline::Middle);

    surface.set_font(TITLE_FONT);
    surface.fill_text(GAME_OVER_TITLE, cx, cy - 30.0);

    surface.set_font(BODY_FONT);
    surface.fill_text(&score_text(state.score), cx, cy + 20.0);
    surface.fill_text(RESTART_PROMPT, cx, cy + 70.0);
}

fn draw_ground(surface: &mut impl Surface, w: f32, h: f32) {
    let top = h - GROUND_HEIGHT;
    surface.set_fill_style(GROUND);
    surface.fill_rect(0.0, top, w, GROUND_HEIGHT);

    surface.set_stroke_style(GROUND_EDGE);
    surface.set_line_width(GROUND_EDGE_WIDTH);
    surface.begin_path();
    surface.move_to(0.0, top);
    surface.line_to(w, top);
    surface.stroke();
}

fn draw_cloud(surface: &mut impl Surface, cloud: &Cloud) {
    let (x, y) = (cloud.pos.x, cloud.pos.y);
    let (w, h) = (cloud.size.x, cloud.size.y);
    surface.set_fill_style(CLOUD);
    surface.fill_rect(x, y, w, h);
    // Two puffs on top
    surface.fill_rect(x + 20.0, y - 10.0, w / 2.0, h / 2.0);
    surface.fill_rect(x + w - 20.0, y - 10.0, w / 2.0, h / 2.0);
}

fn draw_ship(surface: &mut impl Surface, ship: &Ship) {
    let (x, y) = (ship.pos.x, ship.pos.y);
    let w = ship.size.x;
    surface.set_fill_style(SHIP_WOOD);
    surface.fill_rect(x, y + 30.0, w, 30.0);
    // Sail
    surface.begin_path();
    surface.move_to(x + 20.0, y + 30.0);
    surface.line_to(x + w - 20.0, y + 30.0);
    surface.line_to(x + w / 2.0, y);
    surface.fill();
}

fn draw_obstacle(surface: &mut impl Surface, obs: &Obstacle) {
    let (x, y) = (obs.pos.x, obs.pos.y);
    let (w, h) = (obs.size.x, obs.size.y);
    match obs.kind {
        ObstacleKind::Rock => {
            surface.set_fill_style(ROCK);
            surface.fill_rect(x, y, w, h);
            surface.set_fill_style(ROCK_SHADE);
            surface.fill_rect(x + 5.0, y + 5.0, w - 10.0, h - 10.0);
        }
        ObstacleKind::Barrel => {
            surface.set_fill_style(BARREL);
            surface.fill_rect(x, y, w, h);
            surface.set_stroke_style(BARREL_BAND);
            surface.set_line_width(BARREL_BAND_WIDTH);
            surface.stroke_rect(x, y + h / 3.0, w, h / 3.0);
        }
    }
}

fn draw_player(surface: &mut impl Surface, player: &Player) {
    let (x, y) = (player.pos.x, player.pos.y);

    surface.set_fill_style(SHORTS);
    surface.fill_rect(x + 10.0, y + 30.0, 30.0, 30.0);

    surface.set_fill_style(SKIN);
    surface.fill_rect(x + 15.0, y, 20.0, 20.0); // head
    surface.fill_rect(x, y + 20.0, 10.0, 20.0); // left arm
    surface.fill_rect(x + 40.0, y + 20.0, 10.0, 20.0); // right arm

    surface.set_fill_style(HAT);
    surface.fill_rect(x + 5.0, y - 10.0, 40.0, 10.0); // brim
    surface.fill_rect(x + 15.0, y - 20.0, 20.0, 10.0); // crown
}
