use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 預設過濾規則，`level` 來自設定檔
fn default_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("blog_reactions=debug,info");
    }
    match level {
        Some(level) => EnvFilter::try_new(format!("blog_reactions={}", level))
            .unwrap_or_else(|_| EnvFilter::new("blog_reactions=info")),
        None => EnvFilter::new("blog_reactions=info"),
    }
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    // RUST_LOG 優先
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose, level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr) // stdout 留給計數輸出
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
