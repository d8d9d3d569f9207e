//! Domain types shared by the device selector and the metric calculators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A compute target, described independently of the tensor runtime.
///
/// Displays the way device strings are usually written: `cpu`, `cuda:0`,
/// `metal:0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DeviceKind {
    Cpu,
    Cuda { ordinal: usize },
    Metal { ordinal: usize },
}

impl DeviceKind {
    pub fn is_accelerator(&self) -> bool {
        !matches!(self, DeviceKind::Cpu)
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceKind::Cpu => write!(f, "cpu"),
            DeviceKind::Cuda { ordinal } => write!(f, "cuda:{ordinal}"),
            DeviceKind::Metal { ordinal } => write!(f, "metal:{ordinal}"),
        }
    }
}

/// Which backend the selector should try.
///
/// `Auto` tries CUDA, then Metal, then settles on the CPU. Parsing accepts
/// `gpu` for CUDA and `mps` for Metal, case-insensitively.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DevicePreference {
    #[default]
    Auto,
    Cpu,
    Cuda,
    Metal,
}

impl FromStr for DevicePreference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "cpu" => Ok(Self::Cpu),
            "cuda" | "gpu" => Ok(Self::Cuda),
            "metal" | "mps" => Ok(Self::Metal),
            other => Err(Error::InvalidConfig(format!("unknown device preference '{other}'"))),
        }
    }
}

impl TryFrom<String> for DevicePreference {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

/// Both error metrics for one pair of arrays.
///
/// `shape` is the shape of the inputs and `device` is where they were
/// reduced. Non-finite metric values serialize as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricReport {
    pub mae: f64,
    pub mape: f64,
    pub shape: Vec<usize>,
    pub device: DeviceKind,
}
