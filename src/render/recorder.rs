//! Off-screen surfaces for tests and headless runs

use super::{Surface, TextAlign, TextBaseline};

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f32, y: f32, w: f32, h: f32 },
    FillStyle(String),
    StrokeStyle(String),
    LineWidth(f32),
    FillRect { x: f32, y: f32, w: f32, h: f32 },
    StrokeRect { x: f32, y: f32, w: f32, h: f32 },
    BeginPath,
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    Fill,
    Stroke,
    Font(String),
    TextAlign(TextAlign),
    TextBaseline(TextBaseline),
    FillText { text: String, x: f32, y: f32 },
}

/// Records every call in order
#[derive(Debug, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Filled rectangles together with the fill style active when drawn
    pub fn filled_rects(&self) -> Vec<(String, [f32; 4])> {
        let mut style = String::new();
        let mut out = Vec::new();
        for cmd in &self.commands {
            match cmd {
                DrawCommand::FillStyle(s) => style = s.clone(),
                DrawCommand::FillRect { x, y, w, h } => out.push((style.clone(), [*x, *y, *w, *h])),
                _ => {}
            }
        }
        out
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::ClearRect { x, y, w, h });
    }
    fn set_fill_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::FillStyle(color.to_string()));
    }
    fn set_stroke_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::StrokeStyle(color.to_string()));
    }
    fn set_line_width(&mut self, width: f32) {
        self.commands.push(DrawCommand::LineWidth(width));
    }
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h });
    }
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::StrokeRect { x, y, w, h });
    }
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }
    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }
    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }
    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
    fn set_font(&mut self, font: &str) {
        self.commands.push(DrawCommand::Font(font.to_string()));
    }
    fn set_text_align(&mut self, align: TextAlign) {
        self.commands.push(DrawCommand::TextAlign(align));
    }
    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.commands.push(DrawCommand::TextBaseline(baseline));
    }
    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {}
    fn set_fill_style(&mut self, _color: &str) {}
    fn set_stroke_style(&mut self, _color: &str) {}
    fn set_line_width(&mut self, _width: f32) {}
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {}
    fn stroke_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {}
    fn begin_path(&mut self) {}
    fn move_to(&mut self, _x: f32, _y: f32) {}
    fn line_to(&mut self, _x: f32, _y: f32) {}
    fn fill(&mut self) {}
    fn stroke(&mut self) {}
    fn set_font(&mut self, _font: &str) {}
    fn set_text_align(&mut self, _align: TextAlign) {}
    fn set_text_baseline(&mut self, _baseline: TextBaseline) {}
    fn fill_text(&mut self, _text: &str, _x: f32, _y: f32) {}
}
