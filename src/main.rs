use anyhow::Context;
use blog_reactions::adapters::{MemoryControl, MemoryDisplay, MemoryEvent};
use blog_reactions::utils::{logger, validation::Validate};
use blog_reactions::{CliConfig, CountDisplay, ReactionBindings, ReactionController};
use clap::Parser;
use std::rc::Rc;
use tokio::task::LocalSet;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 驗證配置
    let settings = match config.validate().and_then(|_| config.settings()) {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(config.verbose, None);
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose, settings.log_level.as_deref());
    tracing::debug!("Settings: {:?}", settings);

    let transport = settings
        .transport()
        .context("failed to build the HTTP client")?;

    // 兩個按鈕帶同一個 slug，與文章頁相同
    let controller = ReactionController::init(
        transport,
        ReactionBindings {
            like_control: Rc::new(MemoryControl::new(config.slug.clone())),
            dislike_control: Rc::new(MemoryControl::new(config.slug.clone())),
            like_display: Rc::new(MemoryDisplay::new("unchanged")),
            dislike_display: Rc::new(MemoryDisplay::new("unchanged")),
        },
    )
    .with_ordering(settings.ordering);

    tracing::info!(
        "Sending {} {} activation(s) for '{}' to {}",
        config.repeat,
        config.kind,
        config.slug,
        settings.base_url
    );

    let rendered = LocalSet::new()
        .run_until(async {
            let handles: Vec<_> = (0..config.repeat)
                .map(|_| tokio::task::spawn_local(controller.activate(config.kind, &MemoryEvent::new())))
                .collect();

            let mut rendered = 0usize;
            for handle in handles {
                if handle.await.context("activation task panicked")?.is_some() {
                    rendered += 1;
                }
            }
            anyhow::Ok(rendered)
        })
        .await?;

    let display = controller.display(config.kind);
    println!("{}: {}", config.kind.count_field(), display.text());

    if rendered == 0 {
        tracing::warn!("No response was rendered, display left unchanged");
        std::process::exit(2);
    }

    tracing::info!("✅ {} of {} response(s) rendered", rendered, config.repeat);
    Ok(())
}
