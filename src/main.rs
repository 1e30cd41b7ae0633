use clap::Parser;
use portlist_gen::utils::{logger, validation::Validate};
use portlist_gen::{CliConfig, EtlEngine, GenError, LocalStorage, ReadmePipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.log_json);

    tracing::info!("Starting portlist-gen");
    tracing::debug!("CLI config: {:?}", cli);

    // 解析並驗證配置
    let settings = match cli.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };
    tracing::debug!("Resolved settings: {:?}", settings);

    let storage = LocalStorage::new(cli.root.clone());
    let engine = EtlEngine::new(ReadmePipeline::new(storage, settings));

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - README will not be touched");
        match engine.render().await {
            Ok(result) => {
                println!("{}", result.portlist);
                if let Some(showcase) = result.showcase {
                    println!("\n{}", showcase);
                }
            }
            Err(e) => exit_with(e),
        }
        return Ok(());
    }

    match engine.run().await {
        Ok(report) if report.is_complete() => {
            tracing::info!("✅ README updated: {}", report.output_path);
        }
        Ok(report) => {
            for (section, reason) in &report.failed_sections {
                tracing::warn!("⚠️ {} section was not updated: {}", section, reason);
            }
            tracing::warn!("README written with partial updates: {}", report.output_path);
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}

fn exit_with(e: GenError) -> ! {
    tracing::error!(
        "❌ portlist-gen failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());

    std::process::exit(e.exit_code())
}
