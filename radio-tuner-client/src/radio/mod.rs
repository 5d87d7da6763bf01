//! Radio tuner interfaces.

pub mod interface;

pub use interface::{RadioTuner, RemoteTuner};
