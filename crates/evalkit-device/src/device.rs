use candle_core::{Device, DeviceLocation};
use evalkit_core::config::DeviceConfig;
use evalkit_core::traits::AcceleratorProbe;
use evalkit_core::types::{DeviceKind, DevicePreference};
use tracing::{debug, info};

use crate::probe::RuntimeProbe;

/// Accelerator 0 when the runtime has one, otherwise the CPU.
///
/// Evaluated fresh on every call.
pub fn choose_device() -> Device {
    choose_device_with(&DeviceConfig::default())
}

pub fn choose_device_with(config: &DeviceConfig) -> Device {
    select_from(&candidate_kinds(config, &RuntimeProbe))
}

/// Devices worth trying for `config`, best first. Always ends with the CPU.
pub fn candidate_kinds(config: &DeviceConfig, probe: &dyn AcceleratorProbe) -> Vec<DeviceKind> {
    let ordinal = config.ordinal;
    let want_cuda = matches!(config.preference, DevicePreference::Auto | DevicePreference::Cuda);
    let want_metal = matches!(config.preference, DevicePreference::Auto | DevicePreference::Metal);

    let mut kinds = Vec::with_capacity(3);
    if want_cuda && probe.cuda_available() { kinds.push(DeviceKind::Cuda { ordinal }); }
    if want_metal && probe.metal_available() { kinds.push(DeviceKind::Metal { ordinal }); }
    kinds.push(DeviceKind::Cpu);
    kinds
}

pub fn resolve_device_kind(config: &DeviceConfig, probe: &dyn AcceleratorProbe) -> DeviceKind {
    candidate_kinds(config, probe).first().copied().unwrap_or(DeviceKind::Cpu)
}

/// Opens the first candidate the backend accepts; the CPU if none does.
///
/// candle's availability checks only report compiled-in backends, so a
/// failed open here is the normal outcome on a machine without the hardware.
pub fn select_from(candidates: &[DeviceKind]) -> Device {
    for &kind in candidates {
        match try_open(kind) {
            Ok(dev) => {
                info!(device = %kind, accelerator = kind.is_accelerator(), "selected compute device");
                return dev;
            }
            Err(e) => debug!(device = %kind, error = %e, "device not available, trying next"),
        }
    }
    info!(device = %DeviceKind::Cpu, accelerator = false, "selected compute device");
    Device::Cpu
}

/// Opens `kind`, degrading to the CPU if the backend refuses.
pub fn open_device(kind: DeviceKind) -> Device {
    select_from(&[kind])
}

fn try_open(kind: DeviceKind) -> candle_core::Result<Device> {
    match kind {
        DeviceKind::Cpu => Ok(Device::Cpu),
        DeviceKind::Cuda { ordinal } => Device::new_cuda(ordinal),
        DeviceKind::Metal { ordinal } => Device::new_metal(ordinal),
    }
}

pub fn describe_device(device: &Device) -> DeviceKind {
    match device.location() {
        DeviceLocation::Cpu => DeviceKind::Cpu,
        DeviceLocation::Cuda { gpu_id } => DeviceKind::Cuda { ordinal: gpu_id },
        DeviceLocation::Metal { gpu_id } => DeviceKind::Metal { ordinal: gpu_id },
    }
}
