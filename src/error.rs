//! Error types for the mesh, shading and drawing layers.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// A drawing sink refused a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SinkError {
    /// The 2D context is not attached to a canvas element.
    #[error("the 2D context has no canvas element")]
    NoCanvas,
}

/// A mesh or shading parameter is out of range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("`{name}` must be finite and greater than zero, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("`{name}` must be finite and not negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("`jitter_weight` must be in [0, 0.5), got {0}")]
    JitterWeight(f64),

    #[error("grid of {cells_x} x {cells_y} cells exceeds {limit} cells per side")]
    GridTooLarge { cells_x: f64, cells_y: f64, limit: usize },
}

/// A string is not a `#rrggbb` colour.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorParseError {
    #[error("`{0}` is not six hex digits")]
    Length(String),

    #[error("`{0}` contains a character that is not a hex digit")]
    Digit(String),
}

impl From<SinkError> for JsValue {
    fn from(err: SinkError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

impl From<ParamsError> for JsValue {
    fn from(err: ParamsError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

impl From<ColorParseError> for JsValue {
    fn from(err: ColorParseError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
