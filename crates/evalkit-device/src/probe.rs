use candle_core::utils;
use evalkit_core::traits::AcceleratorProbe;

/// Asks candle which accelerator backends this build can reach.
///
/// These checks report compiled-in backends, not hardware: without the `cuda`
/// or `metal` feature the matching check is false, with it the check is true
/// even on a machine that has no such device.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeProbe;

impl AcceleratorProbe for RuntimeProbe {
    fn cuda_available(&self) -> bool { utils::cuda_is_available() }
    fn metal_available(&self) -> bool { utils::metal_is_available() }
}
