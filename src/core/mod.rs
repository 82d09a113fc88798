pub mod auto_selector;
pub mod bottleneck;
pub mod configurator;
pub mod manual_selector;

pub use crate::domain::model::{Catalog, Category, Configuration, MemorySize, Part, UseCase};
pub use crate::domain::ports::{CatalogSource, Renderer};
pub use crate::utils::error::Result;
