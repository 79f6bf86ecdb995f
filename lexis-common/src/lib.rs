//! Lexis Common
//!
//! Source-position types shared by the lexis engine and its callers.

pub mod position;

pub use position::{LineTracker, Position};
