pub mod device;
pub mod probe;

pub use device::{
    candidate_kinds, choose_device, choose_device_with, describe_device, open_device, resolve_device_kind,
    select_from,
};
pub use probe::RuntimeProbe;
