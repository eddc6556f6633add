//! Controller layer: timer/input events and command orchestration for the
//! showcase shell.

pub mod events;
pub mod orchestration;
