// src/logger.rs

use crate::config::Config;
use tracing_subscriber::fmt;
use tracing_subscriber::filter::EnvFilter;

/// Инициализация логирования через tracing.
/// Пишем в stderr, чтобы отчёт в stdout оставался чистым.
pub fn init(cfg: &Config) {
    // Уровень из RUST_LOG, иначе INFO
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        "Logger initialized. Data dir = {}, equities = {}",
        cfg.data_dir,
        cfg.equities.len()
    );
}
