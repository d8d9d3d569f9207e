use evalkit_core::config::DeviceConfig;
use evalkit_core::traits::AcceleratorProbe;
use evalkit_core::types::{DeviceKind, DevicePreference};
use evalkit_device::{candidate_kinds, describe_device, open_device, resolve_device_kind, select_from};

struct FakeProbe { cuda: bool, metal: bool }
impl AcceleratorProbe for FakeProbe {
    fn cuda_available(&self) -> bool { self.cuda }
    fn metal_available(&self) -> bool { self.metal }
}

fn config(preference: DevicePreference) -> DeviceConfig { DeviceConfig { preference, ordinal: 0 } }

#[test]
fn auto_falls_back_to_cpu_without_accelerator() {
    let probe = FakeProbe { cuda: false, metal: false };
    assert_eq!(resolve_device_kind(&DeviceConfig::default(), &probe), DeviceKind::Cpu);
}

#[test]
fn auto_picks_accelerator_zero_when_registered() {
    let probe = FakeProbe { cuda: true, metal: false };
    assert_eq!(resolve_device_kind(&DeviceConfig::default(), &probe), DeviceKind::Cuda { ordinal: 0 });

    let probe = FakeProbe { cuda: false, metal: true };
    assert_eq!(resolve_device_kind(&DeviceConfig::default(), &probe), DeviceKind::Metal { ordinal: 0 });
}

#[test]
fn auto_prefers_cuda_over_metal() {
    let probe = FakeProbe { cuda: true, metal: true };
    assert_eq!(resolve_device_kind(&DeviceConfig::default(), &probe), DeviceKind::Cuda { ordinal: 0 });
}

#[test]
fn explicit_preferences_are_honored() {
    let probe = FakeProbe { cuda: true, metal: true };
    assert_eq!(resolve_device_kind(&config(DevicePreference::Cpu), &probe), DeviceKind::Cpu);
    assert_eq!(resolve_device_kind(&config(DevicePreference::Metal), &probe), DeviceKind::Metal { ordinal: 0 });

    // A requested backend that is missing still ends on the cpu
    let probe = FakeProbe { cuda: false, metal: true };
    assert_eq!(resolve_device_kind(&config(DevicePreference::Cuda), &probe), DeviceKind::Cpu);
}

#[test]
fn ordinal_is_carried_through() {
    let probe = FakeProbe { cuda: true, metal: false };
    let cfg = DeviceConfig { preference: DevicePreference::Auto, ordinal: 3 };
    assert_eq!(resolve_device_kind(&cfg, &probe), DeviceKind::Cuda { ordinal: 3 });
}

#[test]
fn cpu_opens_and_describes_as_cpu() {
    let dev = open_device(DeviceKind::Cpu);
    assert!(dev.is_cpu());
    assert_eq!(describe_device(&dev), DeviceKind::Cpu);
}

#[cfg(not(any(feature = "cuda", feature = "metal")))]
#[test]
fn choose_device_is_cpu_in_a_cpu_only_build() {
    let dev = evalkit_device::choose_device();
    assert!(dev.is_cpu());
    // Idempotent
    assert!(evalkit_device::choose_device().is_cpu());
}

#[cfg(not(feature = "cuda"))]
#[test]
fn unreachable_accelerator_degrades_to_cpu() {
    let dev = open_device(DeviceKind::Cuda { ordinal: 0 });
    assert!(dev.is_cpu());
}

#[test]
fn candidates_are_ordered_and_end_on_cpu() {
    let probe = FakeProbe { cuda: true, metal: true };
    assert_eq!(
        candidate_kinds(&DeviceConfig::default(), &probe),
        vec![DeviceKind::Cuda { ordinal: 0 }, DeviceKind::Metal { ordinal: 0 }, DeviceKind::Cpu]
    );
    assert_eq!(
        candidate_kinds(&config(DevicePreference::Metal), &probe),
        vec![DeviceKind::Metal { ordinal: 0 }, DeviceKind::Cpu]
    );
    assert_eq!(candidate_kinds(&config(DevicePreference::Cpu), &probe), vec![DeviceKind::Cpu]);
}

#[cfg(not(any(feature = "cuda", feature = "metal")))]
#[test]
fn selection_skips_backends_that_fail_to_open() {
    // Both accelerators refuse in a cpu-only build, so selection walks past them
    let candidates = [DeviceKind::Cuda { ordinal: 0 }, DeviceKind::Metal { ordinal: 0 }, DeviceKind::Cpu];
    assert!(select_from(&candidates).is_cpu());
    assert!(select_from(&[]).is_cpu());
}
