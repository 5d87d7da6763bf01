//! radio-tuner-client - Local facade for a remote radio tuner.
//!
//! The radio service hands out tuner sessions that live in another process.
//! [`TunerAdapter`] wraps one such session and exposes the [`RadioTuner`]
//! control surface: calls block until the service answers, remote faults are
//! translated into [`Status`] codes (or [`TunerError`] where an operation has
//! no status channel), and closing is safe to race from any number of
//! threads.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use radio_tuner_client::{Direction, RadioTuner, RemoteTuner, Status, TunerAdapter};
//!
//! fn seek_up(remote: Arc<dyn RemoteTuner>) -> Status {
//!     let config = radio_tuner_client::config::load_config();
//!     radio_tuner_client::logging::init_logger(&config.logging);
//!
//!     let tuner = TunerAdapter::from_remote(remote);
//!     let status = tuner.scan(Direction::Up, false);
//!     tuner.close();
//!     status
//! }
//! ```

pub mod client;
pub mod config;
pub mod logging;
pub mod radio;

#[cfg(test)]
mod testing;

pub use client::{translate, Operation, Translation, TunerAdapter};
pub use radio::{RadioTuner, RemoteTuner};

pub use radio_protocol::{
    Band, BandConfig, BandOptions, Direction, FaultKind, ProgramInfo, Region, RemoteError, Status,
    TunerError,
};
