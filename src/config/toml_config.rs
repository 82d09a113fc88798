use crate::app::render::OutputFormat;
use crate::core::auto_selector::{
    SelectionDefaults, DEFAULT_MEMORY_NAME, DEFAULT_MEMORY_PRICE, DEFAULT_STORAGE_NAME,
    DEFAULT_STORAGE_PRICE,
};
use crate::core::bottleneck::DEFAULT_THRESHOLD;
use crate::core::configurator::SelectorSettings;
use crate::core::Part;
use crate::utils::error::{ConfiguratorError, Result};
use crate::utils::validation::{
    validate_catalog_location, validate_non_empty_string, validate_positive_number,
    validate_price, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CATALOG_SOURCE: &str = "components.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfiguratorConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub bottleneck: BottleneckConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Local path or http(s) URL of the catalog document.
    pub source: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_CATALOG_SOURCE.to_string(),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedPartConfig {
    pub name: String,
    pub price: f64,
    pub img: Option<String>,
    pub description: Option<String>,
}

impl FixedPartConfig {
    fn to_part(&self) -> Part {
        Part {
            img: self.img.clone().unwrap_or_default(),
            description: self.description.clone(),
            ..Part::fixed(self.name.clone(), self.price)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub memory: FixedPartConfig,
    pub storage: FixedPartConfig,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            memory: FixedPartConfig {
                name: DEFAULT_MEMORY_NAME.to_string(),
                price: DEFAULT_MEMORY_PRICE,
                img: None,
                description: None,
            },
            storage: FixedPartConfig {
                name: DEFAULT_STORAGE_NAME.to_string(),
                price: DEFAULT_STORAGE_PRICE,
                img: None,
                description: None,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BottleneckConfig {
    pub threshold: f64,
}

impl Default for BottleneckConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl ConfiguratorConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConfiguratorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ConfiguratorError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_URL})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConfiguratorError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn catalog_timeout(&self) -> Option<Duration> {
        self.catalog.timeout_seconds.map(Duration::from_secs)
    }

    pub fn selector_settings(&self) -> SelectorSettings {
        SelectorSettings {
            defaults: SelectionDefaults {
                memory: self.defaults.memory.to_part(),
                storage: self.defaults.storage.to_part(),
            },
            bottleneck_threshold: self.bottleneck.threshold,
        }
    }
}

impl Validate for ConfiguratorConfig {
    fn validate(&self) -> Result<()> {
        validate_catalog_location("catalog.source", &self.catalog.source)?;

        if let Some(timeout) = self.catalog.timeout_seconds {
            validate_positive_number("catalog.timeout_seconds", timeout, 1)?;
        }

        validate_non_empty_string("defaults.memory.name", &self.defaults.memory.name)?;
        validate_price("defaults.memory.price", self.defaults.memory.price)?;
        validate_non_empty_string("defaults.storage.name", &self.defaults.storage.name)?;
        validate_price("defaults.storage.price", self.defaults.storage.price)?;

        Ok(())
    }
}
