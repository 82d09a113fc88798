use super::DESCRIPTION_PLACEHOLDER;
use crate::core::bottleneck::Bottleneck;
use crate::core::{Configuration, Renderer};
use crate::domain::model::DisplayRegion;
use crate::utils::error::{ConfiguratorError, Result};

/// One row per selected part, followed by a total row and the optional message.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

impl Renderer for CsvRenderer {
    fn render(
        &self,
        target: &mut String,
        region: DisplayRegion,
        configuration: &Configuration,
        message: Option<&Bottleneck>,
    ) -> Result<()> {
        target.clear();
        tracing::debug!("Rendering {} as CSV", region.id());

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["category", "name", "img", "description", "price"])?;

        for (category, part) in configuration.present_parts() {
            writer.write_record([
                category.as_str(),
                part.name.as_str(),
                part.img.as_str(),
                part.description.as_deref().unwrap_or(DESCRIPTION_PLACEHOLDER),
                part.price.to_string().as_str(),
            ])?;
        }
        writer.write_record(["total", "", "", "", configuration.total.to_string().as_str()])?;

        if let Some(message) = message {
            let verdict = if message.is_imbalanced() { "imbalanced" } else { "balanced" };
            writer.write_record(["bottleneck", verdict, "", message.message(), ""])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ConfiguratorError::IoError(e.into_error()))?;
        target.push_str(&String::from_utf8_lossy(&bytes));

        Ok(())
    }
}
