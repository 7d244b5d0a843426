use anyhow::Context;
use clap::Parser;
use menu_order::utils::{logger, validation::Validate};
use menu_order::{CliConfig, OrderSession, SessionOutcome};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting menu-order");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置並建立菜單
    let catalog = match config.validate().and_then(|_| config.build_catalog()) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("❌ Failed to prepare the menu: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let session = OrderSession::with_options(&catalog, config.session_options());

    // `done` and `exit` both end with status 0; console failures return Err (status 1)
    let outcome = session
        .run(stdin.lock(), &mut stdout)
        .inspect_err(|e| {
            tracing::error!("❌ Session failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        })
        .context("order session ended on a console error")?;

    match outcome {
        SessionOutcome::Completed(order) => {
            tracing::info!("✅ Order placed: {} lines", order.len());
        }
        SessionOutcome::Aborted => {
            tracing::info!("Customer left without ordering");
        }
    }

    Ok(())
}
