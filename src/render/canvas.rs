//! Drawing sink backed by a browser `CanvasRenderingContext2D`.

use web_sys::CanvasRenderingContext2d;

use super::sink::DrawingSink;
use crate::error::SinkError;

pub struct CanvasSink<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSink<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawingSink for CanvasSink<'_> {
    fn fill_background(&mut self, color: &str) -> Result<(), SinkError> {
        let canvas = self.ctx.canvas().ok_or(SinkError::NoCanvas)?;
        let (width, height) = (canvas.width() as f64, canvas.height() as f64);

        self.ctx.clear_rect(0.0, 0.0, width, height);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn begin_path(&mut self) -> Result<(), SinkError> {
        self.ctx.begin_path();
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), SinkError> {
        self.ctx.move_to(x, y);
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<(), SinkError> {
        self.ctx.line_to(x, y);
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), SinkError> {
        self.ctx.close_path();
        Ok(())
    }

    fn fill(&mut self, color: &str) -> Result<(), SinkError> {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        Ok(())
    }

    fn stroke(&mut self, color: &str, line_width: f64) -> Result<(), SinkError> {
        self.ctx.set_line_width(line_width);
        self.ctx.set_stroke_style_str(color);
        self.ctx.stroke();
        Ok(())
    }
}
