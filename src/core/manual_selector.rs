use crate::core::bottleneck::Bottleneck;
use crate::domain::model::{Catalog, Category, Configuration, MemorySize, PartId};
use serde::Serialize;

/// User picks for the manual configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualRequest {
    pub cpu_id: PartId,
    pub gpu_id: PartId,
    pub memory: MemorySize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManualSelection {
    pub configuration: Configuration,
    /// `None` when the cpu or gpu (or one of their scores) is missing.
    pub bottleneck: Option<Bottleneck>,
    /// Categories whose requested identifier is not in the catalog.
    pub not_found: Vec<Category>,
}

pub fn manual_select(catalog: &Catalog, request: ManualRequest, threshold: f64) -> ManualSelection {
    let cpu = catalog.find(Category::Cpu, request.cpu_id).cloned();
    let gpu = catalog.find(Category::Gpu, request.gpu_id).cloned();

    let mut not_found = Vec::new();
    if cpu.is_none() {
        tracing::warn!("Processor id {} not found in catalog", request.cpu_id);
        not_found.push(Category::Cpu);
    }
    if gpu.is_none() {
        tracing::warn!("Graphics card id {} not found in catalog", request.gpu_id);
        not_found.push(Category::Gpu);
    }

    let bottleneck = match Bottleneck::assess(cpu.as_ref(), gpu.as_ref(), threshold) {
        Ok(verdict) => Some(verdict),
        Err(e) => {
            tracing::warn!("Bottleneck not computed: {}", e);
            None
        }
    };

    let mut configuration = Configuration {
        cpu,
        gpu,
        ram: Some(request.memory.to_part()),
        storage: catalog.storage.first().cloned(),
        ..Default::default()
    };
    configuration.total = configuration.parts_total();

    ManualSelection {
        configuration,
        bottleneck,
        not_found,
    }
}
