use clap::Parser;
use std::path::Path;
use std::time::Duration;

use biopax_fetch::config::toml_config::TomlConfig;
use biopax_fetch::utils::{logger, validation::Validate};
use biopax_fetch::{
    model_from_owl_file, model_from_owl_gz, BiopaxProcessor, CliConfig, EntityIndexExtractor,
    GraphQueryKind, PathwayCommonsClient, RunSettings,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting biopax-fetch");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Local OWL files bypass the remote query path entirely.
    if let Some(path) = config.owl_file.as_deref().or(config.owl_gz.as_deref()) {
        let model = if config.owl_file.is_some() {
            model_from_owl_file(path)?
        } else {
            model_from_owl_gz(path)?
        };
        let bp = BiopaxProcessor::process_model(model, &EntityIndexExtractor)?;
        let output_file = write_statements(&config.output_path, &bp)?;
        println!("✅ Processed {} with {} statement(s)", path, bp.statements.len());
        println!("📁 Statements saved to: {}", output_file);
        return Ok(());
    }

    let settings: RunSettings = match &config.config {
        Some(path) => TomlConfig::from_file(path)?.into_settings()?,
        None => RunSettings::from(&config),
    };

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = match settings.timeout_seconds {
        Some(seconds) => {
            PathwayCommonsClient::with_timeout(&settings.base_url, Duration::from_secs(seconds))?
        }
        None => PathwayCommonsClient::new(&settings.base_url),
    };
    let api = biopax_fetch::BiopaxApi::new(client, EntityIndexExtractor);

    let result = match settings.kind {
        GraphQueryKind::Neighborhood => {
            api.pc_neighborhood(&settings.genes, settings.limit, &settings.datasources)
                .await?
        }
        GraphQueryKind::PathsBetween => {
            api.pc_paths_between(
                &settings.genes,
                settings.limit,
                &settings.datasources,
                settings.block_size,
            )
            .await?
        }
        GraphQueryKind::PathsFromTo => {
            api.pc_paths_from_to(
                &settings.genes,
                &settings.targets,
                settings.limit,
                &settings.datasources,
            )
            .await?
        }
    };

    match result {
        Some(bp) => {
            let output_file = write_statements(&settings.output_path, &bp)?;
            tracing::info!("Query completed with {} statement(s)", bp.statements.len());
            println!("✅ Query completed with {} statement(s)", bp.statements.len());
            println!("📁 Statements saved to: {}", output_file);
        }
        None => {
            tracing::warn!("Query returned no model");
            println!("⚠️ Query returned no model; nothing to save");
        }
    }

    Ok(())
}

fn write_statements(output_path: &str, bp: &BiopaxProcessor) -> biopax_fetch::Result<String> {
    std::fs::create_dir_all(output_path)?;
    let file_path = Path::new(output_path).join("statements.json");
    let json = serde_json::to_string_pretty(&bp.statements)?;
    std::fs::write(&file_path, json)?;
    Ok(file_path.display().to_string())
}
