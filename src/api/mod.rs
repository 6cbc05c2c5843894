//! Browser entry points

pub mod driver;

pub use driver::{start, Animation};
