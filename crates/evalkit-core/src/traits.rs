/// Answers whether the tensor runtime can reach an accelerator backend.
pub trait AcceleratorProbe: Send + Sync {
    fn cuda_available(&self) -> bool;
    fn metal_available(&self) -> bool;
}
