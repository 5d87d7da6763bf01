//! Remote fault translation.
//!
//! Every adapter operation funnels remote faults through [`translate`], so the
//! whole mapping lives in one table instead of being repeated per call site.

use radio_protocol::{FaultKind, Status};

/// Adapter operations that forward to the remote tuner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SetConfiguration,
    GetConfiguration,
    SetMute,
    GetMute,
    Step,
    Scan,
    Tune,
    Cancel,
    GetProgramInformation,
    StartBackgroundScan,
    GetProgramList,
    IsAnalogForced,
    SetAnalogForced,
    IsAntennaConnected,
}

impl Operation {
    /// Every forwarding operation, in table order.
    pub const ALL: [Operation; 14] = [
        Operation::SetConfiguration,
        Operation::GetConfiguration,
        Operation::SetMute,
        Operation::GetMute,
        Operation::Step,
        Operation::Scan,
        Operation::Tune,
        Operation::Cancel,
        Operation::GetProgramInformation,
        Operation::StartBackgroundScan,
        Operation::GetProgramList,
        Operation::IsAnalogForced,
        Operation::SetAnalogForced,
        Operation::IsAntennaConnected,
    ];

    /// Short name used in log messages.
    pub fn name(self) -> &'static str {
        match self {
            Operation::SetConfiguration => "set configuration",
            Operation::GetConfiguration => "get configuration",
            Operation::SetMute => "set muted",
            Operation::GetMute => "get muted",
            Operation::Step => "step",
            Operation::Scan => "scan",
            Operation::Tune => "tune",
            Operation::Cancel => "cancel",
            Operation::GetProgramInformation => "get program information",
            Operation::StartBackgroundScan => "start background scan",
            Operation::GetProgramList => "get program list",
            Operation::IsAnalogForced => "get analog forced",
            Operation::SetAnalogForced => "set analog forced",
            Operation::IsAntennaConnected => "get antenna state",
        }
    }

    /// Whether the operation reports failures through a [`Status`].
    pub fn has_status_channel(self) -> bool {
        matches!(
            self,
            Operation::SetConfiguration
                | Operation::GetConfiguration
                | Operation::SetMute
                | Operation::Step
                | Operation::Scan
                | Operation::Tune
                | Operation::Cancel
                | Operation::GetProgramInformation
        )
    }
}

/// What the adapter hands back to its caller for a remote fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translation {
    /// Report this status code.
    Status(Status),
    /// Report the tuner as muted.
    AssumeMuted,
    /// No status channel: surface the fault as an unrecoverable error.
    Escalate,
}

/// Map a remote fault raised during `op` to the caller-visible outcome.
pub fn translate(op: Operation, fault: FaultKind) -> Translation {
    use FaultKind::{DeadObject, IllegalArgument, IllegalState};

    match (op, fault) {
        (Operation::GetMute, _) => Translation::AssumeMuted,
        (op, _) if !op.has_status_channel() => Translation::Escalate,

        (_, DeadObject) => Translation::Status(Status::DeadObject),

        (Operation::SetConfiguration, IllegalArgument) => Translation::Status(Status::BadValue),
        (Operation::Tune, IllegalArgument) => Translation::Status(Status::BadValue),

        (Operation::SetMute, IllegalState) => Translation::Status(Status::Error),
        (Operation::Step | Operation::Scan | Operation::Tune | Operation::Cancel, IllegalState) => {
            Translation::Status(Status::InvalidOperation)
        }

        // Faults the remote contract does not list for this operation.
        _ => Translation::Status(Status::Error),
    }
}
