use anyhow::Context;
use dotenvy::dotenv;
use hrms_lite::{config::Config, db::init_db, server};
use std::net::TcpListener;
use tracing::info;
use tracing_appender::rolling;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "hrms.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let pool = init_db(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to connect to database")?;

    let listener = TcpListener::bind(&config.server_addr)
        .with_context(|| format!("Failed to bind {}", config.server_addr))?;

    server::run(listener, pool, config)?.await?;

    Ok(())
}
