//! RGB colour on top of [`Vec3`].
//!
//! Channels are nominally in [0, 255] but the shading math is free to leave
//! that range. Values are only brought back into range when serialized.

use std::fmt;
use std::str::FromStr;

use super::utils;
use super::vector::{Rgb, Vec3};
use crate::error::ColorParseError;

/// Colour with one f64 per channel.
pub type Color = Vec3<Rgb>;

/// Brightest value a channel is written out as.
pub const MAX_CHANNEL: f64 = 250.0;

/// Round a channel and clamp it to [0, MAX_CHANNEL]. NaN becomes 0.
#[inline]
pub fn clamp_channel(v: f64) -> u8 {
    let rounded = v.round();
    if rounded.is_nan() {
        return 0;
    }
    utils::clamp(rounded, 0.0, MAX_CHANNEL) as u8
}

impl Vec3<Rgb> {
    /// Identity for light accumulation.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub fn r(self) -> f64 {
        self.x
    }

    pub fn g(self) -> f64 {
        self.y
    }

    pub fn b(self) -> f64 {
        self.z
    }

    /// The three channels as written to the canvas.
    pub fn channels(self) -> [u8; 3] {
        [clamp_channel(self.x), clamp_channel(self.y), clamp_channel(self.z)]
    }

    /// CSS colour string `#rrggbb`, lowercase.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.channels();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::Length(hex.to_owned()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digit(hex.to_owned()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(f64::from)
                .map_err(|_| ColorParseError::Digit(hex.to_owned()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Vec3<Rgb> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Vec3<Rgb> {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
