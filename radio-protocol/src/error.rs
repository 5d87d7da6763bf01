//! Error and status types shared between the tuner adapter and its callers.

use thiserror::Error;

/// Classification of a fault raised by the remote tuner service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// The remote peer is unreachable or has terminated.
    DeadObject,
    /// The remote side rejected a caller-supplied argument.
    IllegalArgument,
    /// The remote tuner is not in a state that permits the action.
    IllegalState,
}

/// A fault raised by a call on the remote tuner handle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind:?}: {message}")]
pub struct RemoteError {
    kind: FaultKind,
    message: String,
}

impl RemoteError {
    /// Create a fault of the given kind.
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The remote peer went away.
    pub fn dead_object(message: impl Into<String>) -> Self {
        Self::new(FaultKind::DeadObject, message)
    }

    /// The remote side rejected an argument.
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::new(FaultKind::IllegalArgument, message)
    }

    /// The remote tuner is in the wrong state.
    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::new(FaultKind::IllegalState, message)
    }

    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if this fault means the remote peer is gone.
    pub fn is_dead_object(&self) -> bool {
        self.kind == FaultKind::DeadObject
    }
}

/// Errors the adapter surfaces in place of a status code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TunerError {
    /// The adapter was constructed without a remote handle.
    #[error("tuner handle must not be absent")]
    MissingHandle,

    /// An out-parameter slot did not hold exactly one element.
    #[error("the argument must be an array of length 1, got {0}")]
    InvalidSlot(usize),

    /// The remote service died during a call that has no status channel.
    #[error("service died: {0}")]
    ServiceDied(RemoteError),

    /// The remote tuner rejected a call that has no status channel.
    #[error("remote call failed: {0}")]
    Remote(RemoteError),

    /// The capability is not implemented.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}

/// Status code returned by the status-reporting tuner operations.
///
/// Numeric values match the platform radio API so callers that branch on raw
/// codes keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Status {
    /// Operation succeeded.
    Ok = 0,
    /// A caller-supplied argument was rejected.
    BadValue = -22,
    /// The remote peer is unreachable or terminated.
    DeadObject = -32,
    /// The tuner is not in a state that permits the action.
    InvalidOperation = -38,
    /// Generic failure.
    Error = i32::MIN,
}

impl From<i32> for Status {
    fn from(value: i32) -> Self {
        match value {
            0 => Status::Ok,
            -22 => Status::BadValue,
            -32 => Status::DeadObject,
            -38 => Status::InvalidOperation,
            _ => Status::Error,
        }
    }
}

impl From<Status> for i32 {
    fn from(value: Status) -> Self {
        value as i32
    }
}

impl Status {
    /// Returns true if this status indicates success.
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }

    /// Convert into a `Result`, keeping the failing status as the error.
    pub fn into_result(self) -> Result<(), Status> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(self)
        }
    }
}
