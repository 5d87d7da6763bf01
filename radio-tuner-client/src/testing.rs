//! Scripted remote tuner used by the unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use radio_protocol::{BandConfig, ProgramInfo, Region, RemoteError};

use crate::client::Operation;
use crate::radio::RemoteTuner;

/// Remote tuner stub with per-operation scripted faults.
pub struct StubTuner {
    faults: Mutex<HashMap<Operation, RemoteError>>,
    close_fault: Mutex<Option<RemoteError>>,
    close_delay: Duration,
    close_calls: AtomicUsize,
    forwarded: AtomicUsize,
    last_step: Mutex<Option<(bool, bool)>>,
    last_scan: Mutex<Option<(bool, bool)>>,
    last_tune: Mutex<Option<(i32, i32)>>,
    last_filter: Mutex<Option<Option<String>>>,
    muted: Mutex<bool>,
    analog_forced: Mutex<bool>,
    config: Mutex<BandConfig>,
    programs: Vec<ProgramInfo>,
}

impl StubTuner {
    pub fn new() -> Self {
        Self {
            faults: Mutex::new(HashMap::new()),
            close_fault: Mutex::new(None),
            close_delay: Duration::ZERO,
            close_calls: AtomicUsize::new(0),
            forwarded: AtomicUsize::new(0),
            last_step: Mutex::new(None),
            last_scan: Mutex::new(None),
            last_tune: Mutex::new(None),
            last_filter: Mutex::new(None),
            muted: Mutex::new(false),
            analog_forced: Mutex::new(false),
            config: Mutex::new(BandConfig::fm(Region::Itu2, 87_900, 107_900, 200)),
            programs: vec![
                ProgramInfo::new(88_500, 0).with_metadata("name", "KQED"),
                ProgramInfo::new(94_900, 1).with_metadata("name", "KPOO"),
            ],
        }
    }

    /// Make the remote release take a while, widening race windows.
    pub fn with_close_delay(mut self, delay: Duration) -> Self {
        self.close_delay = delay;
        self
    }

    /// Make the remote release itself fail.
    pub fn with_close_fault(self, fault: RemoteError) -> Self {
        *self.close_fault.lock() = Some(fault);
        self
    }

    /// Make every call of `op` fail with `fault`.
    pub fn fail(self, op: Operation, fault: RemoteError) -> Self {
        self.faults.lock().insert(op, fault);
        self
    }

    pub fn close_calls(&self) -> usize {
        self.close_calls.load(Ordering::SeqCst)
    }

    /// Number of non-close calls that reached the stub.
    pub fn forwarded(&self) -> usize {
        self.forwarded.load(Ordering::SeqCst)
    }

    pub fn last_step(&self) -> Option<(bool, bool)> {
        *self.last_step.lock()
    }

    pub fn last_scan(&self) -> Option<(bool, bool)> {
        *self.last_scan.lock()
    }

    pub fn last_tune(&self) -> Option<(i32, i32)> {
        *self.last_tune.lock()
    }

    pub fn last_filter(&self) -> Option<Option<String>> {
        self.last_filter.lock().clone()
    }

    fn enter(&self, op: Operation) -> Result<(), RemoteError> {
        self.forwarded.fetch_add(1, Ordering::SeqCst);
        match self.faults.lock().get(&op) {
            Some(fault) => Err(fault.clone()),
            None => Ok(()),
        }
    }
}

impl RemoteTuner for StubTuner {
    fn close(&self) -> Result<(), RemoteError> {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
        if !self.close_delay.is_zero() {
            std::thread::sleep(self.close_delay);
        }
        match self.close_fault.lock().clone() {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    }

    fn set_configuration(&self, config: &BandConfig) -> Result<(), RemoteError> {
        self.enter(Operation::SetConfiguration)?;
        *self.config.lock() = config.clone();
        Ok(())
    }

    fn get_configuration(&self) -> Result<BandConfig, RemoteError> {
        self.enter(Operation::GetConfiguration)?;
        Ok(self.config.lock().clone())
    }

    fn set_muted(&self, muted: bool) -> Result<(), RemoteError> {
        self.enter(Operation::SetMute)?;
        *self.muted.lock() = muted;
        Ok(())
    }

    fn is_muted(&self) -> Result<bool, RemoteError> {
        self.enter(Operation::GetMute)?;
        Ok(*self.muted.lock())
    }

    fn step(&self, sense_down: bool, skip_sub_channel: bool) -> Result<(), RemoteError> {
        *self.last_step.lock() = Some((sense_down, skip_sub_channel));
        self.enter(Operation::Step)
    }

    fn scan(&self, sense_down: bool, skip_sub_channel: bool) -> Result<(), RemoteError> {
        *self.last_scan.lock() = Some((sense_down, skip_sub_channel));
        self.enter(Operation::Scan)
    }

    fn tune(&self, channel: i32, sub_channel: i32) -> Result<(), RemoteError> {
        *self.last_tune.lock() = Some((channel, sub_channel));
        self.enter(Operation::Tune)
    }

    fn cancel(&self) -> Result<(), RemoteError> {
        self.enter(Operation::Cancel)
    }

    fn get_program_information(&self) -> Result<ProgramInfo, RemoteError> {
        self.enter(Operation::GetProgramInformation)?;
        let mut info = self.programs[0].clone();
        info.tuned = true;
        Ok(info)
    }

    fn start_background_scan(&self) -> Result<bool, RemoteError> {
        self.enter(Operation::StartBackgroundScan)?;
        Ok(true)
    }

    fn get_program_list(&self, filter: Option<&str>) -> Result<Vec<ProgramInfo>, RemoteError> {
        *self.last_filter.lock() = Some(filter.map(str::to_string));
        self.enter(Operation::GetProgramList)?;
        Ok(self.programs.clone())
    }

    fn is_analog_forced(&self) -> Result<bool, RemoteError> {
        self.enter(Operation::IsAnalogForced)?;
        Ok(*self.analog_forced.lock())
    }

    fn set_analog_forced(&self, forced: bool) -> Result<(), RemoteError> {
        self.enter(Operation::SetAnalogForced)?;
        *self.analog_forced.lock() = forced;
        Ok(())
    }

    fn is_antenna_connected(&self) -> Result<bool, RemoteError> {
        self.enter(Operation::IsAntennaConnected)?;
        Ok(true)
    }
}
