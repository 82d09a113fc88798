use crate::utils::error::{ConfiguratorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type PartId = u32;

/// 目錄中的單一零件，載入後不可變
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: PartId,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,
    #[serde(default)]
    pub img: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Part {
    /// Builds a part that is not taken from the catalog (fixed defaults, memory sizes).
    pub fn fixed(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            price,
            performance: None,
            socket: None,
            img: String::new(),
            description: None,
        }
    }

    pub fn fits(&self, running_total: f64, budget: f64) -> bool {
        running_total + self.price <= budget
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cpu,
    Gpu,
    Motherboard,
    Ram,
    Storage,
    Psu,
    Case,
}

impl Category {
    /// Display order of a configuration.
    pub const ALL: [Category; 7] = [
        Category::Cpu,
        Category::Gpu,
        Category::Motherboard,
        Category::Ram,
        Category::Storage,
        Category::Psu,
        Category::Case,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cpu => "cpu",
            Category::Gpu => "gpu",
            Category::Motherboard => "motherboard",
            Category::Ram => "ram",
            Category::Storage => "storage",
            Category::Psu => "psu",
            Category::Case => "case",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Cpu => "Processor",
            Category::Gpu => "Graphics card",
            Category::Motherboard => "Motherboard",
            Category::Ram => "Memory",
            Category::Storage => "Storage",
            Category::Psu => "Power supply",
            Category::Case => "Case",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parts grouped by category. List order is preference order for first-fit scans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub cpu: Vec<Part>,
    #[serde(default)]
    pub gpu: Vec<Part>,
    #[serde(default)]
    pub motherboard: Vec<Part>,
    #[serde(default)]
    pub ram: Vec<Part>,
    #[serde(default)]
    pub storage: Vec<Part>,
    #[serde(default)]
    pub psu: Vec<Part>,
    #[serde(default)]
    pub case: Vec<Part>,
}

impl Catalog {
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn parts(&self, category: Category) -> &[Part] {
        match category {
            Category::Cpu => &self.cpu,
            Category::Gpu => &self.gpu,
            Category::Motherboard => &self.motherboard,
            Category::Ram => &self.ram,
            Category::Storage => &self.storage,
            Category::Psu => &self.psu,
            Category::Case => &self.case,
        }
    }

    pub fn find(&self, category: Category, id: PartId) -> Option<&Part> {
        self.parts(category).iter().find(|part| part.id == id)
    }

    pub fn total_parts(&self) -> usize {
        Category::ALL.iter().map(|c| self.parts(*c).len()).sum()
    }
}

/// 一次組裝的結果，不做持久化
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Configuration {
    pub cpu: Option<Part>,
    pub gpu: Option<Part>,
    pub motherboard: Option<Part>,
    pub ram: Option<Part>,
    pub storage: Option<Part>,
    pub psu: Option<Part>,
    pub case: Option<Part>,
    pub total: f64,
}

impl Configuration {
    pub fn get(&self, category: Category) -> Option<&Part> {
        match category {
            Category::Cpu => self.cpu.as_ref(),
            Category::Gpu => self.gpu.as_ref(),
            Category::Motherboard => self.motherboard.as_ref(),
            Category::Ram => self.ram.as_ref(),
            Category::Storage => self.storage.as_ref(),
            Category::Psu => self.psu.as_ref(),
            Category::Case => self.case.as_ref(),
        }
    }

    /// Present parts in display order.
    pub fn present_parts(&self) -> impl Iterator<Item = (Category, &Part)> {
        Category::ALL
            .into_iter()
            .filter_map(move |category| self.get(category).map(|part| (category, part)))
    }

    pub fn parts_total(&self) -> f64 {
        self.present_parts().map(|(_, part)| part.price).sum()
    }

    pub fn is_socket_compatible(&self) -> bool {
        match (&self.cpu, &self.motherboard) {
            (Some(cpu), Some(board)) => cpu.socket.is_some() && cpu.socket == board.socket,
            _ => true,
        }
    }
}

/// Use-case label of the automatic configurator. Accepted but never changes selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UseCase {
    #[default]
    Gaming,
    Office,
    Creation,
}

impl UseCase {
    pub fn as_str(&self) -> &'static str {
        match self {
            UseCase::Gaming => "gaming",
            UseCase::Office => "office",
            UseCase::Creation => "creation",
        }
    }
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UseCase {
    type Err = ConfiguratorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gaming" => Ok(UseCase::Gaming),
            "office" => Ok(UseCase::Office),
            "creation" => Ok(UseCase::Creation),
            other => Err(ConfiguratorError::InvalidConfigValueError {
                field: "use_case".to_string(),
                value: other.to_string(),
                reason: "Expected one of: gaming, office, creation".to_string(),
            }),
        }
    }
}

/// Memory sizes offered by the manual configurator, in GB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MemorySize {
    #[default]
    Gb16,
    Gb32,
    Gb64,
}

impl MemorySize {
    pub const ALL: [MemorySize; 3] = [MemorySize::Gb16, MemorySize::Gb32, MemorySize::Gb64];

    pub fn gigabytes(&self) -> u32 {
        match self {
            MemorySize::Gb16 => 16,
            MemorySize::Gb32 => 32,
            MemorySize::Gb64 => 64,
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            MemorySize::Gb16 => 80.0,
            MemorySize::Gb32 => 150.0,
            MemorySize::Gb64 => 300.0,
        }
    }

    pub fn to_part(&self) -> Part {
        Part::fixed(format!("{} GB RAM", self.gigabytes()), self.price())
    }
}

impl FromStr for MemorySize {
    type Err = ConfiguratorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "16" => Ok(MemorySize::Gb16),
            "32" => Ok(MemorySize::Gb32),
            "64" => Ok(MemorySize::Gb64),
            other => Err(ConfiguratorError::InvalidConfigValueError {
                field: "ram".to_string(),
                value: other.to_string(),
                reason: "Memory size must be one of 16, 32 or 64".to_string(),
            }),
        }
    }
}

impl fmt::Display for MemorySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} GB", self.gigabytes())
    }
}

/// Which results panel a rendering goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRegion {
    AutoResults,
    ManualResults,
}

impl DisplayRegion {
    pub fn id(&self) -> &'static str {
        match self {
            DisplayRegion::AutoResults => "auto-config-results",
            DisplayRegion::ManualResults => "manual-config-results",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_missing_categories_default_to_empty() {
        let json = br#"{"cpu": [{"id": 1, "name": "Ryzen 5", "price": 200, "socket": "AM4", "img": "r5.png"}]}"#;
        let catalog = Catalog::from_json_slice(json).unwrap();

        assert_eq!(catalog.cpu.len(), 1);
        assert!(catalog.gpu.is_empty());
        assert!(catalog.case.is_empty());
        assert_eq!(catalog.cpu[0].socket.as_deref(), Some("AM4"));
        assert_eq!(catalog.cpu[0].performance, None);
        assert_eq!(catalog.total_parts(), 1);
    }

    #[test]
    fn test_catalog_find_by_id() {
        let json = br#"{"gpu": [
            {"id": 1, "name": "RTX 3060", "price": 300, "performance": 70, "img": ""},
            {"id": 2, "name": "RX 6700", "price": 350, "performance": 75, "img": ""}
        ]}"#;
        let catalog = Catalog::from_json_slice(json).unwrap();

        assert_eq!(catalog.find(Category::Gpu, 2).unwrap().name, "RX 6700");
        assert!(catalog.find(Category::Gpu, 9).is_none());
        assert!(catalog.find(Category::Cpu, 1).is_none());
    }

    #[test]
    fn test_fractional_performance_score_loads() {
        let json = br#"{"cpu": [{"id": 1, "name": "Ryzen 7", "price": 300, "performance": 87.5, "socket": "AM5", "img": ""}]}"#;
        let catalog = Catalog::from_json_slice(json).unwrap();

        assert_eq!(catalog.cpu[0].performance, Some(87.5));
    }

    #[test]
    fn test_memory_size_mapping() {
        assert_eq!("16".parse::<MemorySize>().unwrap().price(), 80.0);
        assert_eq!("32".parse::<MemorySize>().unwrap().price(), 150.0);
        assert_eq!("64".parse::<MemorySize>().unwrap().price(), 300.0);
        assert!("8".parse::<MemorySize>().is_err());
        assert!("128".parse::<MemorySize>().is_err());
        assert_eq!(MemorySize::Gb32.to_part().name, "32 GB RAM");
    }

    #[test]
    fn test_use_case_parsing() {
        assert_eq!("Gaming".parse::<UseCase>().unwrap(), UseCase::Gaming);
        assert_eq!("office".parse::<UseCase>().unwrap(), UseCase::Office);
        assert!("mining".parse::<UseCase>().is_err());
    }

    #[test]
    fn test_configuration_present_parts_in_display_order() {
        let config = Configuration {
            case: Some(Part::fixed("Case", 60.0)),
            cpu: Some(Part::fixed("CPU", 200.0)),
            ..Default::default()
        };

        let categories: Vec<Category> = config.present_parts().map(|(c, _)| c).collect();
        assert_eq!(categories, vec![Category::Cpu, Category::Case]);
        assert_eq!(config.parts_total(), 260.0);
    }
}
