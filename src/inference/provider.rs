//! Execution provider selection for ONNX Runtime.

use crate::config::InferenceDevice;
use ort::execution_providers::{
    CPUExecutionProvider, CUDAExecutionProvider, ExecutionProvider, ExecutionProviderDispatch,
};
use tracing::{info, warn};

/// Provider list handed to the session builder, with a label for logging.
pub struct ProviderSelection {
    /// Providers in registration order.
    pub providers: Vec<ExecutionProviderDispatch>,
    /// Human-readable description of the choice.
    pub label: &'static str,
}

/// Whether the CUDA provider is compiled into the loaded runtime.
fn cuda_available() -> bool {
    CUDAExecutionProvider::default()
        .is_available()
        .unwrap_or(false)
}

/// Choose execution providers for a device setting.
///
/// `Gpu` is best-effort: it warns and falls back to CPU when CUDA is missing.
pub fn select_providers(device: InferenceDevice) -> ProviderSelection {
    let cpu = CPUExecutionProvider::default().build();

    match device {
        InferenceDevice::Cpu => {
            info!("Requested device: CPU");
            ProviderSelection {
                providers: vec![cpu],
                label: "CPU",
            }
        }
        InferenceDevice::Auto => {
            if cuda_available() {
                info!("Auto mode: CUDA available, attempting GPU");
                ProviderSelection {
                    providers: vec![CUDAExecutionProvider::default().build(), cpu],
                    label: "CUDA",
                }
            } else {
                info!("Auto mode: no GPU provider available, using CPU");
                ProviderSelection {
                    providers: vec![cpu],
                    label: "Auto (CPU)",
                }
            }
        }
        InferenceDevice::Gpu => {
            if cuda_available() {
                info!("--gpu: selected CUDA provider");
                ProviderSelection {
                    providers: vec![CUDAExecutionProvider::default().build(), cpu],
                    label: "CUDA",
                }
            } else {
                warn!("--gpu requested but CUDA is not available, using CPU");
                ProviderSelection {
                    providers: vec![cpu],
                    label: "GPU (fallback to CPU)",
                }
            }
        }
    }
}
