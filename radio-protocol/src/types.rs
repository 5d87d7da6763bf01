//! Tuner data types exchanged with the remote radio service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Step and scan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Direction {
    /// Toward higher frequencies.
    Up = 0,
    /// Toward lower frequencies.
    Down = 1,
}

impl Direction {
    /// Remote sense flag: the remote tuner takes `true` for a downward move.
    pub fn is_down(self) -> bool {
        self == Direction::Down
    }
}

impl From<i32> for Direction {
    /// Only the `Down` code selects the downward sense.
    fn from(value: i32) -> Self {
        if value == Direction::Down as i32 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

/// Radio band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Band {
    Am = 0,
    Fm = 1,
    FmHd = 2,
    AmHd = 3,
}

impl Band {
    pub fn is_am(self) -> bool {
        matches!(self, Band::Am | Band::AmHd)
    }

    pub fn is_fm(self) -> bool {
        matches!(self, Band::Fm | Band::FmHd)
    }
}

/// Regulatory region a band plan belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Region {
    /// ITU region 1 (Europe, Africa).
    Itu1 = 0,
    /// ITU region 2 (Americas).
    Itu2 = 1,
    /// Eastern European OIRT band.
    Oirt = 2,
    Japan = 3,
    Korea = 4,
}

/// Band-specific options of a [`BandConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandOptions {
    Fm {
        stereo: bool,
        /// Radio Data System decoding.
        rds: bool,
        /// Traffic announcements.
        ta: bool,
        /// Alternate frequency switching.
        af: bool,
    },
    Am {
        stereo: bool,
    },
}

/// Band configuration applied to a tuner.
///
/// Frequencies are expressed in kHz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandConfig {
    pub band: Band,
    pub region: Region,
    pub lower_limit: u32,
    pub upper_limit: u32,
    pub spacing: u32,
    pub options: BandOptions,
}

impl BandConfig {
    /// Create an FM band configuration with stereo enabled and RDS features off.
    pub fn fm(region: Region, lower_limit: u32, upper_limit: u32, spacing: u32) -> Self {
        Self {
            band: Band::Fm,
            region,
            lower_limit,
            upper_limit,
            spacing,
            options: BandOptions::Fm {
                stereo: true,
                rds: false,
                ta: false,
                af: false,
            },
        }
    }

    /// Create an AM band configuration with stereo disabled.
    pub fn am(region: Region, lower_limit: u32, upper_limit: u32, spacing: u32) -> Self {
        Self {
            band: Band::Am,
            region,
            lower_limit,
            upper_limit,
            spacing,
            options: BandOptions::Am { stereo: false },
        }
    }

    /// Whether stereo reception is enabled for this band.
    pub fn stereo(&self) -> bool {
        match self.options {
            BandOptions::Fm { stereo, .. } | BandOptions::Am { stereo } => stereo,
        }
    }

    /// Whether `frequency` lies within the band limits.
    pub fn contains(&self, frequency: u32) -> bool {
        (self.lower_limit..=self.upper_limit).contains(&frequency)
    }
}

/// Information about the program currently (or previously) tuned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramInfo {
    /// Channel frequency in kHz.
    pub channel: i32,
    /// HD sub-channel, 0 for analog.
    pub sub_channel: i32,
    pub tuned: bool,
    pub stereo: bool,
    pub digital: bool,
    /// Signal strength, 0 to 100.
    pub signal_strength: u8,
    /// Station metadata such as `name`, `title` and `artist`.
    pub metadata: BTreeMap<String, String>,
    /// Vendor-specific flags.
    pub flags: u32,
}

impl ProgramInfo {
    /// Create a program entry for a channel with no metadata.
    pub fn new(channel: i32, sub_channel: i32) -> Self {
        Self {
            channel,
            sub_channel,
            tuned: false,
            stereo: false,
            digital: false,
            signal_strength: 0,
            metadata: BTreeMap::new(),
            flags: 0,
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Station name, if the broadcaster supplied one.
    pub fn station_name(&self) -> Option<&str> {
        self.metadata.get("name").map(String::as_str)
    }
}
