use super::html::escape_html;
use super::OutputFormat;
use crate::core::configurator::{ManualOptions, SelectOption};
use crate::utils::error::{ConfiguratorError, Result};
use std::fmt::Write;

/// Renders the manual configurator's choices (cpu, gpu, ram) in the given format.
pub fn render_options(options: &ManualOptions, format: OutputFormat) -> Result<String> {
    let groups: [(&str, &[SelectOption]); 3] = [
        ("cpu", options.cpu.as_slice()),
        ("gpu", options.gpu.as_slice()),
        ("ram", options.ram.as_slice()),
    ];
    let mut out = String::new();

    match format {
        OutputFormat::Text => {
            for (name, entries) in groups {
                writeln!(out, "{}:", name)?;
                for entry in entries {
                    writeln!(out, "  {}: {}", entry.value, entry.label)?;
                }
            }
        }
        OutputFormat::Html => {
            for (name, entries) in groups {
                writeln!(out, "<select id=\"{}-manual\">", name)?;
                for entry in entries {
                    writeln!(
                        out,
                        "  <option value=\"{}\">{}</option>",
                        escape_html(&entry.value),
                        escape_html(&entry.label)
                    )?;
                }
                writeln!(out, "</select>")?;
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["category", "value", "label"])?;
            for (name, entries) in groups {
                for entry in entries {
                    writer.write_record([name, entry.value.as_str(), entry.label.as_str()])?;
                }
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| ConfiguratorError::IoError(e.into_error()))?;
            out.push_str(&String::from_utf8_lossy(&bytes));
        }
    }

    Ok(out)
}
