use crate::core::auto_selector::{auto_select, SelectionDefaults};
use crate::core::bottleneck::DEFAULT_THRESHOLD;
use crate::core::manual_selector::{manual_select, ManualRequest, ManualSelection};
use crate::domain::model::{Catalog, Category, Configuration, MemorySize, UseCase};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_budget;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectorSettings {
    pub defaults: SelectionDefaults,
    pub bottleneck_threshold: f64,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            defaults: SelectionDefaults::default(),
            bottleneck_threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// A choosable entry of the manual configurator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManualOptions {
    pub cpu: Vec<SelectOption>,
    pub gpu: Vec<SelectOption>,
    pub ram: Vec<SelectOption>,
}

/// Owns the catalog after the one-shot load and runs both selectors against it.
pub struct Configurator {
    catalog: Catalog,
    settings: SelectorSettings,
}

impl Configurator {
    pub fn new(catalog: Catalog, settings: SelectorSettings) -> Self {
        Self { catalog, settings }
    }

    /// 啟動時載入一次目錄，失敗不重試
    pub async fn load<S: CatalogSource + ?Sized>(
        source: &S,
        settings: SelectorSettings,
    ) -> Result<Self> {
        tracing::info!("📦 Loading catalog from {}", source.describe());

        match source.load().await {
            Ok(catalog) => {
                tracing::info!(
                    "✅ Catalog loaded: {} parts ({} cpu, {} gpu, {} motherboard)",
                    catalog.total_parts(),
                    catalog.cpu.len(),
                    catalog.gpu.len(),
                    catalog.motherboard.len()
                );
                Ok(Self::new(catalog, settings))
            }
            Err(e) => {
                tracing::error!("❌ Failed to load catalog from {}: {}", source.describe(), e);
                Err(e)
            }
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &SelectorSettings {
        &self.settings
    }

    pub fn auto(&self, budget: f64, use_case: UseCase) -> Result<Configuration> {
        validate_budget("budget", budget)?;
        tracing::info!("⚙️  Auto configuration: budget {} for {}", budget, use_case);

        let config = auto_select(&self.catalog, budget, use_case, &self.settings.defaults);
        let missing: Vec<&str> = Category::ALL
            .iter()
            .filter(|c| config.get(**c).is_none())
            .map(|c| c.as_str())
            .collect();
        if !missing.is_empty() {
            tracing::info!("Budget too small for: {}", missing.join(", "));
        }

        Ok(config)
    }

    pub fn manual(&self, request: ManualRequest) -> ManualSelection {
        tracing::info!(
            "🛠️  Manual configuration: cpu {} / gpu {} / {}",
            request.cpu_id,
            request.gpu_id,
            request.memory
        );
        manual_select(&self.catalog, request, self.settings.bottleneck_threshold)
    }

    pub fn options(&self) -> ManualOptions {
        let describe = |category: Category| {
            self.catalog
                .parts(category)
                .iter()
                .map(|part| SelectOption {
                    value: part.id.to_string(),
                    label: format!("{} - {}", part.name, format_price(part.price)),
                })
                .collect::<Vec<_>>()
        };

        ManualOptions {
            cpu: describe(Category::Cpu),
            gpu: describe(Category::Gpu),
            ram: MemorySize::ALL
                .iter()
                .map(|size| SelectOption {
                    value: size.gigabytes().to_string(),
                    label: format!("{} - {}", size, format_price(size.price())),
                })
                .collect(),
        }
    }
}

/// Whole amounts print without decimals, others with two.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}€", price)
    } else {
        format!("{:.2}€", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Part;
    use crate::utils::error::ConfiguratorError;
    use async_trait::async_trait;

    struct StaticSource(Option<Catalog>);

    #[async_trait]
    impl CatalogSource for StaticSource {
        fn describe(&self) -> String {
            "static".to_string()
        }

        async fn load(&self) -> Result<Catalog> {
            self.0.clone().ok_or_else(|| ConfiguratorError::CatalogLoadError {
                source_name: "static".to_string(),
                message: "unavailable".to_string(),
            })
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            cpu: vec![Part {
                id: 7,
                socket: Some("AM4".to_string()),
                ..Part::fixed("Ryzen 5 5600X", 199.99)
            }],
            gpu: vec![Part {
                id: 3,
                ..Part::fixed("RTX 3060", 329.0)
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_load_keeps_catalog() {
        let configurator = Configurator::load(&StaticSource(Some(catalog())), SelectorSettings::default())
            .await
            .unwrap();
        assert_eq!(configurator.catalog().cpu.len(), 1);
    }

    #[tokio::test]
    async fn test_load_failure_is_returned() {
        let result = Configurator::load(&StaticSource(None), SelectorSettings::default()).await;
        assert!(matches!(result, Err(ConfiguratorError::CatalogLoadError { .. })));
    }

    #[test]
    fn test_auto_rejects_non_positive_budget() {
        let configurator = Configurator::new(catalog(), SelectorSettings::default());
        assert!(configurator.auto(0.0, UseCase::Gaming).is_err());
        assert!(configurator.auto(-5.0, UseCase::Gaming).is_err());
        assert!(configurator.auto(1000.0, UseCase::Gaming).is_ok());
    }

    #[test]
    fn test_options_list_parts_and_memory_sizes() {
        let configurator = Configurator::new(catalog(), SelectorSettings::default());
        let options = configurator.options();

        assert_eq!(options.cpu[0].value, "7");
        assert_eq!(options.cpu[0].label, "Ryzen 5 5600X - 199.99€");
        assert_eq!(options.gpu[0].label, "RTX 3060 - 329€");
        let ram: Vec<&str> = options.ram.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(ram, vec!["16 GB - 80€", "32 GB - 150€", "64 GB - 300€"]);
    }

    #[test]
    fn test_manual_uses_configured_threshold() {
        let mut catalog = catalog();
        catalog.cpu[0].performance = Some(50.0);
        catalog.gpu[0].performance = Some(80.0);
        let settings = SelectorSettings {
            bottleneck_threshold: 40.0,
            ..Default::default()
        };
        let configurator = Configurator::new(catalog, settings);

        let selection = configurator.manual(ManualRequest {
            cpu_id: 7,
            gpu_id: 3,
            memory: MemorySize::Gb16,
        });
        assert!(!selection.bottleneck.unwrap().is_imbalanced());
    }
}
