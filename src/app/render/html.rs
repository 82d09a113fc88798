use super::DESCRIPTION_PLACEHOLDER;
use crate::core::bottleneck::Bottleneck;
use crate::core::configurator::format_price;
use crate::core::{Configuration, Renderer};
use crate::domain::model::DisplayRegion;
use crate::utils::error::Result;
use std::fmt::Write;

/// `component-card` markup, one card per selected part.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

impl Renderer for HtmlRenderer {
    fn render(
        &self,
        target: &mut String,
        region: DisplayRegion,
        configuration: &Configuration,
        message: Option<&Bottleneck>,
    ) -> Result<()> {
        target.clear();

        writeln!(target, "<div id=\"{}\">", region.id())?;
        for (_, part) in configuration.present_parts() {
            let name = escape_html(&part.name);
            writeln!(target, "  <div class=\"component-card\">")?;
            writeln!(
                target,
                "    <img src=\"{}\" alt=\"{}\">",
                escape_html(&part.img),
                name
            )?;
            writeln!(target, "    <h4>{}</h4>", name)?;
            writeln!(
                target,
                "    <p>{}</p>",
                escape_html(part.description.as_deref().unwrap_or(DESCRIPTION_PLACEHOLDER))
            )?;
            writeln!(target, "    <p>Price: {}</p>", format_price(part.price))?;
            writeln!(target, "  </div>")?;
        }

        if let Some(message) = message {
            let color = if message.is_imbalanced() { "red" } else { "green" };
            writeln!(
                target,
                "  <p style=\"color: {}\">{}</p>",
                color,
                escape_html(message.message())
            )?;
        }
        writeln!(target, "</div>")?;

        Ok(())
    }
}
