//! In-memory sink that keeps every command it receives.

use super::sink::DrawingSink;
use crate::error::SinkError;

/// One call made on a [`DrawingSink`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillBackground(String),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    Fill(String),
    Stroke { color: String, line_width: f64 },
}

/// Sink that records commands instead of drawing them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSink {
    commands: Vec<DrawCommand>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Fill colours of the recorded paths, in order.
    pub fn fills(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Fill(color) => Some(color.as_str()),
            _ => None,
        })
    }
}

impl DrawingSink for RecordingSink {
    fn fill_background(&mut self, color: &str) -> Result<(), SinkError> {
        self.commands.push(DrawCommand::FillBackground(color.to_owned()));
        Ok(())
    }

    fn begin_path(&mut self) -> Result<(), SinkError> {
        self.commands.push(DrawCommand::BeginPath);
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), SinkError> {
        self.commands.push(DrawCommand::MoveTo(x, y));
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<(), SinkError> {
        self.commands.push(DrawCommand::LineTo(x, y));
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), SinkError> {
        self.commands.push(DrawCommand::ClosePath);
        Ok(())
    }

    fn fill(&mut self, color: &str) -> Result<(), SinkError> {
        self.commands.push(DrawCommand::Fill(color.to_owned()));
        Ok(())
    }

    fn stroke(&mut self, color: &str, line_width: f64) -> Result<(), SinkError> {
        self.commands.push(DrawCommand::Stroke { color: color.to_owned(), line_width });
        Ok(())
    }
}
