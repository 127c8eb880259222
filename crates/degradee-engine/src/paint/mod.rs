//! Paint model shared between the widget layer and hosts.
//!
//! Colors are opaque 8-bit RGB triples; blending happens per channel in
//! linear integer space. Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
