//! Systems that act on more than one particle

pub mod collision;

pub use collision::{detect, resolve, Resolution};
