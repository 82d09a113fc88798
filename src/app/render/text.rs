use super::DESCRIPTION_PLACEHOLDER;
use crate::core::bottleneck::Bottleneck;
use crate::core::configurator::format_price;
use crate::core::{Configuration, Renderer};
use crate::domain::model::DisplayRegion;
use crate::utils::error::Result;
use std::fmt::Write;

/// Plain-text cards for the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(
        &self,
        target: &mut String,
        region: DisplayRegion,
        configuration: &Configuration,
        message: Option<&Bottleneck>,
    ) -> Result<()> {
        target.clear();

        writeln!(target, "== {} ==", region.id())?;
        for (category, part) in configuration.present_parts() {
            writeln!(target, "[{}] {}", category.label(), part.name)?;
            if !part.img.is_empty() {
                writeln!(target, "  image: {}", part.img)?;
            }
            writeln!(
                target,
                "  {}",
                part.description.as_deref().unwrap_or(DESCRIPTION_PLACEHOLDER)
            )?;
            writeln!(target, "  Price: {}", format_price(part.price))?;
        }
        writeln!(target, "Total: {}", format_price(configuration.total))?;

        if let Some(message) = message {
            let marker = if message.is_imbalanced() { "[!]" } else { "[ok]" };
            writeln!(target, "{} {}", marker, message.message())?;
        }

        Ok(())
    }
}
