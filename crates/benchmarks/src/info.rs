//! Benchmark identity types.
//!
//! A [`BenchmarkInfo`] describes one benchmark case: which model ran, where
//! it came from, on what device, and through which IREE runner. Its
//! `Display` form is the globally unique series identifier used by the
//! dashboard.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Framework the benchmarked model was imported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelSource {
    /// TensorFlow SavedModel.
    TensorFlow,
    /// TensorFlow Lite flatbuffer.
    TFLite,
}

impl ModelSource {
    /// Name as it appears in series identifiers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TensorFlow => "TensorFlow",
            Self::TFLite => "TFLite",
        }
    }
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// IREE runtime driver the benchmark executed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BenchmarkRunner {
    /// Dynamic library CPU backend, task-based execution.
    #[serde(rename = "iree-dylib")]
    Dylib,
    /// Dynamic library CPU backend, synchronous execution.
    #[serde(rename = "iree-dylib-sync")]
    DylibSync,
    /// VM-based vector extension interpreter.
    #[serde(rename = "iree-vmvx")]
    Vmvx,
    /// Vulkan GPU backend.
    #[serde(rename = "iree-vulkan")]
    Vulkan,
}

impl BenchmarkRunner {
    /// Driver name shown after the `IREE-` prefix.
    pub fn driver_name(&self) -> &'static str {
        match self {
            Self::Dylib => "Dylib",
            Self::DylibSync => "Dylib-Sync",
            Self::Vmvx => "VMVX",
            Self::Vulkan => "Vulkan",
        }
    }

    /// Whether the runner executes on the device GPU.
    pub fn is_gpu(&self) -> bool {
        matches!(self, Self::Vulkan)
    }
}

/// Device the benchmark ran on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Platform family, e.g. `Android`.
    pub platform_type: String,
    /// Device model, e.g. `Pixel-4`.
    pub model: String,
    /// CPU ABI, e.g. `arm64-v8a`.
    pub cpu_abi: String,
    /// CPU feature flags reported by the device.
    #[serde(default)]
    pub cpu_features: Vec<String>,
    /// GPU name, e.g. `Mali-G77`.
    pub gpu_name: String,
}

impl DeviceInfo {
    /// Target architecture label for the given runner.
    pub fn target_arch(&self, runner: BenchmarkRunner) -> String {
        if runner.is_gpu() {
            format!("GPU-{}", self.gpu_name)
        } else {
            format!("CPU-{}", self.cpu_abi)
        }
    }
}

/// Identity of one benchmark case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkInfo {
    /// Model name, e.g. `MobileNetV2`.
    pub model_name: String,
    /// Free-form model tags, e.g. `fp32` or `imagenet`.
    #[serde(default)]
    pub model_tags: Vec<String>,
    /// Framework the model came from.
    pub model_source: ModelSource,
    /// Benchmark mode labels, e.g. `4-thread`, `big-core`.
    pub bench_mode: Vec<String>,
    /// IREE runner.
    pub runner: BenchmarkRunner,
    /// Device the benchmark ran on.
    pub device_info: DeviceInfo,
}

impl fmt::Display for BenchmarkInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.model_name)?;
        if !self.model_tags.is_empty() {
            write!(f, " [{}]", self.model_tags.join(","))?;
        }
        write!(
            f,
            " ({}) {} with IREE-{} @ {} ({})",
            self.model_source,
            self.bench_mode.join(","),
            self.runner.driver_name(),
            self.device_info.model,
            self.device_info.target_arch(self.runner),
        )
    }
}
