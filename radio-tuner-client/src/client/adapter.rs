//! Local facade over a remote tuner handle.

use std::fmt;
use std::sync::Arc;

use log::{debug, error};
use parking_lot::Mutex;

use radio_protocol::{BandConfig, Direction, ProgramInfo, RemoteError, Status, TunerError};

use crate::client::translate::{translate, Operation, Translation};
use crate::radio::{RadioTuner, RemoteTuner};

/// Implements [`RadioTuner`] by forwarding calls to the radio service.
///
/// Remote faults never reach the caller as-is: status operations turn them
/// into a [`Status`], value operations into [`TunerError::ServiceDied`] or
/// [`TunerError::Remote`]. Once closed, nothing more is forwarded and every
/// operation answers as if the service had died.
pub struct TunerAdapter {
    /// Remote session, owned for the adapter's lifetime.
    tuner: Arc<dyn RemoteTuner>,
    /// Set once by the first `close()`.
    closed: Mutex<bool>,
}

impl TunerAdapter {
    /// Wrap a remote tuner handle. Fails if the handle is absent.
    pub fn new(tuner: Option<Arc<dyn RemoteTuner>>) -> Result<Self, TunerError> {
        let tuner = tuner.ok_or(TunerError::MissingHandle)?;
        Ok(Self::from_remote(tuner))
    }

    /// Wrap a handle the caller already holds.
    pub fn from_remote(tuner: Arc<dyn RemoteTuner>) -> Self {
        Self {
            tuner,
            closed: Mutex::new(false),
        }
    }

    /// Whether `close()` has been called.
    pub fn is_closed(&self) -> bool {
        *self.closed.lock()
    }

    /// Current band configuration.
    pub fn configuration(&self) -> Result<BandConfig, Status> {
        self.forward(|t| t.get_configuration())
            .map_err(|e| fault_status(Operation::GetConfiguration, &e))
    }

    /// Information about the tuned program.
    pub fn program_information(&self) -> Result<ProgramInfo, Status> {
        self.forward(|t| t.get_program_information())
            .map_err(|e| fault_status(Operation::GetProgramInformation, &e))
    }

    /// Run `call` on the remote handle unless the adapter is closed.
    ///
    /// The flag is read without holding the lock across the call; a call
    /// racing `close()` may still reach the released handle.
    fn forward<T>(
        &self,
        call: impl FnOnce(&dyn RemoteTuner) -> Result<T, RemoteError>,
    ) -> Result<T, RemoteError> {
        if self.is_closed() {
            return Err(RemoteError::dead_object("tuner is closed"));
        }
        call(self.tuner.as_ref())
    }
}

impl RadioTuner for TunerAdapter {
    fn close(&self) {
        {
            let mut closed = self.closed.lock();
            if *closed {
                debug!("Tuner is already closed");
                return;
            }
            *closed = true;
        }

        if let Err(e) = self.tuner.close() {
            error!("Failed to close tuner: {}", e);
        }
    }

    fn set_configuration(&self, config: &BandConfig) -> Status {
        status(
            Operation::SetConfiguration,
            self.forward(|t| t.set_configuration(config)),
        )
    }

    fn get_configuration(&self, config: &mut [Option<BandConfig>]) -> Result<Status, TunerError> {
        check_slot(config.len())?;
        Ok(fill_slot(&mut config[0], self.configuration()))
    }

    fn set_mute(&self, mute: bool) -> Status {
        status(Operation::SetMute, self.forward(|t| t.set_muted(mute)))
    }

    fn get_mute(&self) -> bool {
        match self.forward(|t| t.is_muted()) {
            Ok(muted) => muted,
            Err(e) => {
                log_fault(Operation::GetMute, &e);
                // Assume the worst when the service cannot say.
                translate(Operation::GetMute, e.kind()) == Translation::AssumeMuted
            }
        }
    }

    fn step(&self, direction: Direction, skip_sub_channel: bool) -> Status {
        status(
            Operation::Step,
            self.forward(|t| t.step(direction.is_down(), skip_sub_channel)),
        )
    }

    fn scan(&self, direction: Direction, skip_sub_channel: bool) -> Status {
        status(
            Operation::Scan,
            self.forward(|t| t.scan(direction.is_down(), skip_sub_channel)),
        )
    }

    fn tune(&self, channel: i32, sub_channel: i32) -> Status {
        status(Operation::Tune, self.forward(|t| t.tune(channel, sub_channel)))
    }

    fn cancel(&self) -> Status {
        status(Operation::Cancel, self.forward(|t| t.cancel()))
    }

    fn get_program_information(&self, info: &mut [Option<ProgramInfo>]) -> Result<Status, TunerError> {
        check_slot(info.len())?;
        Ok(fill_slot(&mut info[0], self.program_information()))
    }

    fn start_background_scan(&self) -> Result<bool, TunerError> {
        value(
            Operation::StartBackgroundScan,
            self.forward(|t| t.start_background_scan()),
        )
    }

    fn get_program_list(&self, filter: Option<&str>) -> Result<Vec<ProgramInfo>, TunerError> {
        value(
            Operation::GetProgramList,
            self.forward(|t| t.get_program_list(filter)),
        )
    }

    fn is_analog_forced(&self) -> Result<bool, TunerError> {
        value(Operation::IsAnalogForced, self.forward(|t| t.is_analog_forced()))
    }

    fn set_analog_forced(&self, forced: bool) -> Result<(), TunerError> {
        value(
            Operation::SetAnalogForced,
            self.forward(|t| t.set_analog_forced(forced)),
        )
    }

    fn is_antenna_connected(&self) -> Result<bool, TunerError> {
        value(
            Operation::IsAntennaConnected,
            self.forward(|t| t.is_antenna_connected()),
        )
    }

    fn has_control(&self) -> Result<bool, TunerError> {
        // TODO: forward to the remote tuner once the service exposes control ownership.
        Err(TunerError::NotImplemented("has_control"))
    }
}

impl fmt::Debug for TunerAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TunerAdapter")
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

impl Drop for TunerAdapter {
    fn drop(&mut self) {
        self.close();
    }
}

/// Out-parameter slots must hold exactly one element.
fn check_slot(len: usize) -> Result<(), TunerError> {
    if len != 1 {
        return Err(TunerError::InvalidSlot(len));
    }
    Ok(())
}

fn fill_slot<T>(slot: &mut Option<T>, result: Result<T, Status>) -> Status {
    match result {
        Ok(v) => {
            *slot = Some(v);
            Status::Ok
        }
        Err(status) => status,
    }
}

fn log_fault(op: Operation, e: &RemoteError) {
    if e.is_dead_object() {
        error!("service died during {}: {}", op.name(), e.message());
    } else {
        error!("Can't {}: {}", op.name(), e);
    }
}

fn fault_status(op: Operation, e: &RemoteError) -> Status {
    log_fault(op, e);
    match translate(op, e.kind()) {
        Translation::Status(status) => status,
        Translation::AssumeMuted | Translation::Escalate => Status::Error,
    }
}

fn status(op: Operation, result: Result<(), RemoteError>) -> Status {
    match result {
        Ok(()) => Status::Ok,
        Err(e) => fault_status(op, &e),
    }
}

fn value<T>(op: Operation, result: Result<T, RemoteError>) -> Result<T, TunerError> {
    result.map_err(|e| {
        log_fault(op, &e);
        match translate(op, e.kind()) {
            Translation::Escalate if e.is_dead_object() => TunerError::ServiceDied(e),
            _ => TunerError::Remote(e),
        }
    })
}
