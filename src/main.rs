use clap::Parser;
use pc_configurator::app::render::render_options;
use pc_configurator::core::manual_selector::ManualRequest;
use pc_configurator::domain::model::DisplayRegion;
use pc_configurator::utils::{logger, validation::Validate};
use pc_configurator::{renderer_for, source_for, CliConfig, Command, Configurator, ConfiguratorError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting pc-configurator");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        exit_with(e);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };

    // 目錄只在啟動時載入一次
    let source = source_for(&config.catalog.source, config.catalog_timeout());
    let configurator = match Configurator::load(source.as_ref(), config.selector_settings()).await {
        Ok(configurator) => configurator,
        Err(e) => exit_with(e),
    };

    let renderer = renderer_for(config.output.format);
    let mut output = String::new();

    match &cli.command {
        Command::Auto { budget, use_case } => {
            let configuration = match configurator.auto(*budget, *use_case) {
                Ok(configuration) => configuration,
                Err(e) => exit_with(e),
            };
            if let Err(e) =
                renderer.render(&mut output, DisplayRegion::AutoResults, &configuration, None)
            {
                exit_with(e);
            }
        }
        Command::Manual { cpu, gpu, ram } => {
            let selection = configurator.manual(ManualRequest {
                cpu_id: *cpu,
                gpu_id: *gpu,
                memory: *ram,
            });
            for category in &selection.not_found {
                eprintln!("⚠️  No {} with that id in the catalog", category.label().to_lowercase());
            }
            if let Err(e) = renderer.render(
                &mut output,
                DisplayRegion::ManualResults,
                &selection.configuration,
                selection.bottleneck.as_ref(),
            ) {
                exit_with(e);
            }
        }
        Command::Options => match render_options(&configurator.options(), config.output.format) {
            Ok(rendered) => output = rendered,
            Err(e) => exit_with(e),
        },
    }

    print!("{}", output);
    Ok(())
}

fn exit_with(e: ConfiguratorError) -> ! {
    tracing::error!(
        "❌ pc-configurator failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
