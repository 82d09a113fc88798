use crate::domain::model::Part;
use crate::utils::error::{ConfiguratorError, Result};
use serde::Serialize;

pub const DEFAULT_THRESHOLD: f64 = 10.0;

pub const IMBALANCED_MESSAGE: &str = "Warning: your CPU or GPU may limit performance!";
pub const BALANCED_MESSAGE: &str = "Your configuration is well balanced.";

/// CPU/GPU balance signal derived from the two performance scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "verdict", rename_all = "lowercase")]
pub enum Bottleneck {
    Balanced { difference: f64 },
    Imbalanced { difference: f64 },
}

impl Bottleneck {
    /// Differences strictly above `threshold` are an imbalance; equal is still balanced.
    pub fn from_scores(cpu_performance: f64, gpu_performance: f64, threshold: f64) -> Self {
        let difference = (cpu_performance - gpu_performance).abs();
        if difference > threshold {
            Bottleneck::Imbalanced { difference }
        } else {
            Bottleneck::Balanced { difference }
        }
    }

    /// Compares two selected parts. A missing part or score is a missing-input error.
    pub fn assess(cpu: Option<&Part>, gpu: Option<&Part>, threshold: f64) -> Result<Self> {
        let cpu = cpu.ok_or_else(|| missing("cpu"))?;
        let gpu = gpu.ok_or_else(|| missing("gpu"))?;
        let cpu_performance = cpu.performance.ok_or_else(|| missing("cpu.performance"))?;
        let gpu_performance = gpu.performance.ok_or_else(|| missing("gpu.performance"))?;

        Ok(Self::from_scores(cpu_performance, gpu_performance, threshold))
    }

    pub fn is_imbalanced(&self) -> bool {
        matches!(self, Bottleneck::Imbalanced { .. })
    }

    pub fn difference(&self) -> f64 {
        match self {
            Bottleneck::Balanced { difference } | Bottleneck::Imbalanced { difference } => {
                *difference
            }
        }
    }

    pub fn message(&self) -> &'static str {
        if self.is_imbalanced() {
            IMBALANCED_MESSAGE
        } else {
            BALANCED_MESSAGE
        }
    }
}

fn missing(field: &str) -> ConfiguratorError {
    ConfiguratorError::MissingInputError {
        field: field.to_string(),
    }
}
