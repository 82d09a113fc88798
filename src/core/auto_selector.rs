//! Greedy first-fit automatic configurator.
//!
//! Categories are filled in a fixed order (cpu, gpu, motherboard, then the
//! unconditional memory/storage defaults, then psu and case). For each
//! budget-gated category the earliest catalog entry whose price keeps the
//! running total within budget wins. This is a deterministic policy, not an
//! optimisation: catalog order decides the result.

use crate::domain::model::{Catalog, Configuration, Part, UseCase};

pub const DEFAULT_MEMORY_NAME: &str = "16 GB DDR4";
pub const DEFAULT_MEMORY_PRICE: f64 = 80.0;
pub const DEFAULT_STORAGE_NAME: &str = "Samsung 970 EVO Plus 1TB";
pub const DEFAULT_STORAGE_PRICE: f64 = 99.0;

/// Parts added to every automatic build regardless of budget.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionDefaults {
    pub memory: Part,
    pub storage: Part,
}

impl SelectionDefaults {
    pub fn unconditional_total(&self) -> f64 {
        self.memory.price + self.storage.price
    }
}

impl Default for SelectionDefaults {
    fn default() -> Self {
        Self {
            memory: Part::fixed(DEFAULT_MEMORY_NAME, DEFAULT_MEMORY_PRICE),
            storage: Part::fixed(DEFAULT_STORAGE_NAME, DEFAULT_STORAGE_PRICE),
        }
    }
}

fn first_fit<'a>(
    parts: &'a [Part],
    running_total: f64,
    budget: f64,
    compatible: impl Fn(&Part) -> bool,
) -> Option<&'a Part> {
    parts
        .iter()
        .find(|part| compatible(part) && part.fits(running_total, budget))
}

pub fn auto_select(
    catalog: &Catalog,
    budget: f64,
    use_case: UseCase,
    defaults: &SelectionDefaults,
) -> Configuration {
    tracing::debug!("Auto-selecting parts for budget {} ({})", budget, use_case);

    let mut config = Configuration::default();

    config.cpu = first_fit(&catalog.cpu, config.total, budget, |_| true).cloned();
    if let Some(cpu) = &config.cpu {
        config.total += cpu.price;
    } else {
        tracing::debug!("No processor fits within budget {}", budget);
    }

    config.gpu = first_fit(&catalog.gpu, config.total, budget, |_| true).cloned();
    if let Some(gpu) = &config.gpu {
        config.total += gpu.price;
    }

    // 沒有選到 CPU 時無法比對腳位，直接跳過主機板
    config.motherboard = match config.cpu.as_ref().and_then(|cpu| cpu.socket.as_deref()) {
        Some(socket) => first_fit(&catalog.motherboard, config.total, budget, |board| {
            board.socket.as_deref() == Some(socket)
        })
        .cloned(),
        None => {
            tracing::debug!("Skipping motherboard selection: no processor socket to match");
            None
        }
    };
    if let Some(board) = &config.motherboard {
        config.total += board.price;
    }

    config.ram = Some(defaults.memory.clone());
    config.storage = Some(defaults.storage.clone());
    config.total += defaults.unconditional_total();

    config.psu = first_fit(&catalog.psu, config.total, budget, |_| true).cloned();
    if let Some(psu) = &config.psu {
        config.total += psu.price;
    }

    config.case = first_fit(&catalog.case, config.total, budget, |_| true).cloned();
    if let Some(case) = &config.case {
        config.total += case.price;
    }

    tracing::debug!("Auto-selection total: {}", config.total);
    config
}
