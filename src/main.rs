use clap::Parser;
use scotus_tracker::core::{ConfigProvider, TermCaseLoader};
use scotus_tracker::utils::error::ErrorSeverity;
use scotus_tracker::utils::{logger, validation::Validate};
use scotus_tracker::{
    CliConfig, DatasetLoader, LocalStorage, ReportEngine, SummaryPipeline, TomlConfig,
    TrackerError,
};

fn exit_code(e: &TrackerError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: TrackerError) -> ! {
    tracing::error!(
        "❌ Term summary failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e))
}

async fn list_terms(dataset: &str) -> Result<(), TrackerError> {
    let loader = DatasetLoader::new(LocalStorage::new(".".to_string()), dataset.to_string());
    for term in loader.list_terms().await? {
        let marker = if term.inactive { " (inactive)" } else { "" };
        println!("{}\t{}\t{}{}", term.id, term.ot_name, term.name, marker);
    }
    Ok(())
}

async fn run<C: ConfigProvider + Validate>(config: C) -> Result<String, TrackerError> {
    config.validate()?;

    let loader = DatasetLoader::new(
        LocalStorage::new(".".to_string()),
        config.dataset_path().to_string(),
    );
    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = SummaryPipeline::new(loader, storage, config);

    ReportEngine::new(pipeline).run().await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(mut config) => {
                if cli.term_id.is_some() {
                    config.report.term_id = cli.term_id;
                }
                Some(config)
            }
            Err(e) => {
                logger::init_cli_logger(cli.verbose);
                fail(e);
            }
        },
        None => None,
    };

    let logging = file_config
        .as_ref()
        .map(|c| c.logging())
        .unwrap_or_default();
    let verbose = cli.verbose || logging.verbose;
    if cli.log_json || logging.json {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting scotus-tracker");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(e);
    }

    if cli.list_terms {
        let dataset = file_config
            .as_ref()
            .map(|c| c.report.dataset.clone())
            .unwrap_or_else(|| cli.dataset.clone());
        if let Err(e) = list_terms(&dataset).await {
            fail(e);
        }
        return Ok(());
    }

    let result = match file_config {
        Some(config) => run(config).await,
        None => run(cli).await,
    };

    match result {
        Ok(output_path) => {
            tracing::info!("✅ Term summary completed successfully!");
            println!("✅ Term summary completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => fail(e),
    }

    Ok(())
}
