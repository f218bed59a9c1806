//! CSS colors and fonts

pub const GROUND: &str = "#A0522D";
pub const GROUND_EDGE: &str = "#8B4513";
pub const GROUND_EDGE_WIDTH: f32 = 3.0;

pub const CLOUD: &str = "rgba(255,255,255,0.8)";

pub const SHIP_WOOD: &str = "#8B4513";

pub const ROCK: &str = "#7f8c8d";
pub const ROCK_SHADE: &str = "#6c7a7b";
pub const BARREL: &str = "#964B00";
pub const BARREL_BAND: &str = "#5c3513";
pub const BARREL_BAND_WIDTH: f32 = 2.0;

// Runner: straw hat, skin, blue shorts
pub const SHORTS: &str = "#3498db";
pub const SKIN: &str = "#f1c40f";
pub const HAT: &str = "#e74c3c";

pub const OVERLAY: &str = "rgba(0,0,0,0.6)";
pub const OVERLAY_TEXT: &str = "white";
pub const TITLE_FONT: &str = "bold 40px 'Pixelify Sans'";
pub const BODY_FONT: &str = "bold 24px 'Pixelify Sans'";
