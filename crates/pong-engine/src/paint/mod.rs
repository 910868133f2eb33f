//! Paint model. Currently just the clear color.

pub mod color;

pub use color::Color;
