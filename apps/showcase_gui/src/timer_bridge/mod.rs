//! Timer runtime bridging the UI loop to periodic and one-shot callbacks.

pub mod commands;
pub mod runtime;

pub use runtime::launch;
