//! Drawing surfaces
//!
//! The simulation only needs a handful of 2D primitives, so it draws through
//! the [`Surface`] trait instead of a concrete graphics API:
//! - canvas.rs    - browser `CanvasRenderingContext2d`
//! - recording.rs - records every call (tests, debugging)
//! - null.rs      - discards everything (headless stepping)

mod surface;
mod canvas;
mod recording;
mod null;

pub use surface::{Surface, TextAlign, TextBaseline};
pub use recording::{DrawCommand, RecordingSurface};
pub use null::NullSurface;
