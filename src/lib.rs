pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use app::render::{renderer_for, OutputFormat};
pub use app::sources::{source_for, FileCatalogSource, HttpCatalogSource};
pub use config::ConfiguratorConfig;
pub use crate::core::configurator::{Configurator, SelectorSettings};
pub use utils::error::{ConfiguratorError, Result};
