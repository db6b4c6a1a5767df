//! Vector and colour algebra.

pub mod color;
pub mod utils;
pub mod vector;
