//! Core helpers shared by every other module
//!
//! - utils/logging.rs - console macros (must be first for `#[macro_use]`)
//! - vec2.rs          - 2D vector math

#[macro_use]
#[path = "utils/logging.rs"]
mod logging;

pub mod vec2;

pub use vec2::Vec2;
