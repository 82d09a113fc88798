use crate::app::render::OutputFormat;
use crate::config::toml_config::ConfiguratorConfig;
use crate::core::{MemorySize, UseCase};
use crate::domain::model::PartId;
use crate::utils::error::Result;
use crate::utils::validation::{validate_budget, validate_catalog_location, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pc-configurator")]
#[command(about = "Assemble a PC parts list from a budget or from hand-picked parts")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog location (file path or http(s) URL), overrides the config file
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// Output format: text, html or csv
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Pick parts automatically within a budget
    Auto {
        #[arg(long)]
        budget: f64,

        /// gaming, office or creation
        #[arg(long, default_value = "gaming")]
        use_case: UseCase,
    },
    /// Build from a chosen processor and graphics card
    Manual {
        #[arg(long)]
        cpu: PartId,

        #[arg(long)]
        gpu: PartId,

        /// Memory size in GB: 16, 32 or 64
        #[arg(long, default_value = "16")]
        ram: MemorySize,
    },
    /// List the processors, graphics cards and memory sizes to choose from
    Options,
}

impl CliConfig {
    /// 讀取設定檔 (若有) 並套用命令列覆蓋
    pub fn resolve(&self) -> Result<ConfiguratorConfig> {
        let mut config = match &self.config {
            Some(path) => ConfiguratorConfig::from_file(path)?,
            None => ConfiguratorConfig::default(),
        };

        if let Some(catalog) = &self.catalog {
            config.catalog.source = catalog.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(catalog) = &self.catalog {
            validate_catalog_location("catalog", catalog)?;
        }
        if let Command::Auto { budget, .. } = &self.command {
            validate_budget("budget", *budget)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_auto_command() {
        let cli = CliConfig::try_parse_from([
            "pc-configurator",
            "auto",
            "--budget",
            "800",
            "--use-case",
            "office",
        ])
        .unwrap();

        match cli.command {
            Command::Auto { budget, use_case } => {
                assert_eq!(budget, 800.0);
                assert_eq!(use_case, UseCase::Office);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_manual_command_with_global_flags() {
        let cli = CliConfig::try_parse_from([
            "pc-configurator",
            "manual",
            "--cpu",
            "2",
            "--gpu",
            "5",
            "--ram",
            "64",
            "--format",
            "html",
            "--catalog",
            "parts.json",
        ])
        .unwrap();

        match cli.command {
            Command::Manual { cpu, gpu, ram } => {
                assert_eq!(cpu, 2);
                assert_eq!(gpu, 5);
                assert_eq!(ram, MemorySize::Gb64);
            }
            ref other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.format, Some(OutputFormat::Html));
        assert_eq!(cli.catalog.as_deref(), Some("parts.json"));
    }

    #[test]
    fn test_rejects_unknown_memory_size() {
        let result = CliConfig::try_parse_from([
            "pc-configurator",
            "manual",
            "--cpu",
            "1",
            "--gpu",
            "1",
            "--ram",
            "8",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_negative_budget() {
        let cli = CliConfig::try_parse_from(["pc-configurator", "auto", "--budget=-50"]).unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_resolve_applies_overrides() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[catalog]\nsource = \"from-file.json\"\n\n[output]\nformat = \"csv\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::try_parse_from([
            "pc-configurator",
            "--config",
            path.as_str(),
            "--catalog",
            "override.json",
            "options",
        ])
        .unwrap();

        let config = cli.resolve().unwrap();
        assert_eq!(config.catalog.source, "override.json");
        assert_eq!(config.output.format, OutputFormat::Csv);
    }
}
