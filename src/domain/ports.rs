use crate::domain::model::{Catalog, Configuration, DisplayRegion};
use crate::core::bottleneck::Bottleneck;
use crate::utils::error::Result;
use async_trait::async_trait;

/// One-shot catalog loader. Called once at startup, never retried.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human readable location, used in logs and errors.
    fn describe(&self) -> String;

    async fn load(&self) -> Result<Catalog>;
}

/// Presentation contract: one card per present part plus an optional message.
///
/// Implementations clear `target` before writing into it.
pub trait Renderer {
    fn render(
        &self,
        target: &mut String,
        region: DisplayRegion,
        configuration: &Configuration,
        message: Option<&Bottleneck>,
    ) -> Result<()>;
}
