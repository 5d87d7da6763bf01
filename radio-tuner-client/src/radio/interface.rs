//! Tuner interface definitions.
//!
//! Two interfaces meet at the adapter:
//!
//! - [`RemoteTuner`] is the handle to a tuner session living in the radio
//!   service. Every call can fail with a [`RemoteError`].
//! - [`RadioTuner`] is the control surface handed to applications. Most of
//!   its operations report failure through a [`Status`] code; the few that
//!   have no status channel return a [`TunerError`].

use radio_protocol::{BandConfig, Direction, ProgramInfo, RemoteError, Status, TunerError};

/// Remote tuner session reached over the process boundary.
pub trait RemoteTuner: Send + Sync {
    /// Release the remote session.
    fn close(&self) -> Result<(), RemoteError>;

    fn set_configuration(&self, config: &BandConfig) -> Result<(), RemoteError>;

    fn get_configuration(&self) -> Result<BandConfig, RemoteError>;

    fn set_muted(&self, muted: bool) -> Result<(), RemoteError>;

    fn is_muted(&self) -> Result<bool, RemoteError>;

    /// Step to the next channel. `sense_down` selects the lower neighbour.
    fn step(&self, sense_down: bool, skip_sub_channel: bool) -> Result<(), RemoteError>;

    /// Seek the next station with a usable signal.
    fn scan(&self, sense_down: bool, skip_sub_channel: bool) -> Result<(), RemoteError>;

    fn tune(&self, channel: i32, sub_channel: i32) -> Result<(), RemoteError>;

    /// Cancel a pending step, scan or tune.
    fn cancel(&self) -> Result<(), RemoteError>;

    fn get_program_information(&self) -> Result<ProgramInfo, RemoteError>;

    fn start_background_scan(&self) -> Result<bool, RemoteError>;

    fn get_program_list(&self, filter: Option<&str>) -> Result<Vec<ProgramInfo>, RemoteError>;

    fn is_analog_forced(&self) -> Result<bool, RemoteError>;

    fn set_analog_forced(&self, forced: bool) -> Result<(), RemoteError>;

    fn is_antenna_connected(&self) -> Result<bool, RemoteError>;
}

/// Application-facing tuner control surface.
pub trait RadioTuner: Send + Sync {
    /// Release the tuner. Safe to call any number of times from any thread.
    fn close(&self);

    fn set_configuration(&self, config: &BandConfig) -> Status;

    /// Write the current band configuration into `config[0]`.
    ///
    /// `config` must hold exactly one element, otherwise
    /// [`TunerError::InvalidSlot`] is returned and nothing is forwarded.
    fn get_configuration(&self, config: &mut [Option<BandConfig>]) -> Result<Status, TunerError>;

    fn set_mute(&self, mute: bool) -> Status;

    /// Current mute state. Reports muted when the service cannot be reached.
    fn get_mute(&self) -> bool;

    fn step(&self, direction: Direction, skip_sub_channel: bool) -> Status;

    fn scan(&self, direction: Direction, skip_sub_channel: bool) -> Status;

    fn tune(&self, channel: i32, sub_channel: i32) -> Status;

    fn cancel(&self) -> Status;

    /// Write the current program information into `info[0]`.
    ///
    /// Same slot contract as [`RadioTuner::get_configuration`].
    fn get_program_information(&self, info: &mut [Option<ProgramInfo>]) -> Result<Status, TunerError>;

    fn start_background_scan(&self) -> Result<bool, TunerError>;

    fn get_program_list(&self, filter: Option<&str>) -> Result<Vec<ProgramInfo>, TunerError>;

    fn is_analog_forced(&self) -> Result<bool, TunerError>;

    fn set_analog_forced(&self, forced: bool) -> Result<(), TunerError>;

    fn is_antenna_connected(&self) -> Result<bool, TunerError>;

    /// Whether this client currently controls the tuner. Not implemented yet.
    fn has_control(&self) -> Result<bool, TunerError>;
}
