//! Shared types for the radio tuner control adapter.
//!
//! This crate defines the data exchanged with the remote radio service and
//! the codes the adapter reports to its callers.
//!
//! # Status Codes
//!
//! Operations that follow the status-returning calling convention report
//! their outcome as a [`Status`]:
//!
//! ```text
//! +------------------+-------------+
//! | Status           | Raw value   |
//! +------------------+-------------+
//! | Ok               | 0           |
//! | BadValue         | -22         |
//! | DeadObject       | -32         |
//! | InvalidOperation | -38         |
//! | Error            | i32::MIN    |
//! +------------------+-------------+
//! ```
//!
//! # Example
//!
//! ```rust
//! use radio_protocol::{BandConfig, Region, Status};
//!
//! let fm = BandConfig::fm(Region::Itu2, 87_900, 107_900, 200);
//! assert!(fm.contains(98_100));
//!
//! let status = Status::from(-32);
//! assert_eq!(status, Status::DeadObject);
//! assert!(!status.is_ok());
//! ```

pub mod error;
pub mod types;

pub use error::{FaultKind, RemoteError, Status, TunerError};
pub use types::{Band, BandConfig, BandOptions, Direction, ProgramInfo, Region};
