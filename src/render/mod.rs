//! 2D rendering module
//!
//! Scene drawing is written against the `Surface` trait, a small subset of
//! the browser's `CanvasRenderingContext2d`. The browser build draws through
//! `CanvasSurface`; tests and the headless runner use `Recorder` or
//! `NullSurface`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod palette;
pub mod recorder;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recorder::{DrawCommand, NullSurface, Recorder};
pub use scene::{draw_game_over, draw_scene};

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Center,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Center => "center",
        }
    }
}

/// Vertical text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Middle,
}

impl TextBaseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextBaseline::Middle => "middle",
        }
    }
}

/// Raster drawing capabilities the scene needs
pub trait Surface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}
