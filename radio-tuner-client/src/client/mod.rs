//! Client side of the radio tuner service.

pub mod adapter;
pub mod translate;

pub use adapter::TunerAdapter;
pub use translate::{translate, Operation, Translation};
