//! biology-study: serves the Campbell Biology study-progress tracker.
//!
//! Startup is linear: open + migrate SQLite, seed the curriculum if the
//! store is empty, then serve the HTTP API until interrupted.

use std::net::SocketAddr;

use clap::Parser;
use storage::repository::Storage;
use storage::seed::seed_if_empty;
use tracing::info;

#[derive(Parser)]
#[command(name = "biology-study")]
#[command(about = "Study-progress tracker for the Campbell Biology curriculum")]
struct Cli {
    /// SQLite URL, e.g. sqlite:study.sqlite3
    #[arg(long, env = "STUDY_DB_URL", default_value = "sqlite:study.sqlite3")]
    db: String,

    /// Address to listen on
    #[arg(long, env = "STUDY_LISTEN", default_value = "127.0.0.1:3000")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("biology_study=info".parse()?)
                .add_directive("server=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    info!("Starting biology-study");
    info!("Database: {}", cli.db);

    // Ensure a file-backed database exists before sqlx opens it.
    prepare_sqlite_file(&cli.db)?;
    let storage = Storage::sqlite(&cli.db).await?;

    if seed_if_empty(storage.curriculum.as_ref()).await? {
        info!("Seeded the Campbell curriculum");
    } else {
        info!("Curriculum already present, skipping seed");
    }

    let app = server::create_router(storage);
    let listener = tokio::net::TcpListener::bind(cli.listen).await?;
    info!("Listening on {}", cli.listen);
    axum::serve(listener, app).await?;

    Ok(())
}

fn prepare_sqlite_file(db_url: &str) -> anyhow::Result<()> {
    if db_url == "sqlite::memory:" || db_url.contains("mode=memory") {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .or_else(|| db_url.strip_prefix("sqlite:"))
        .unwrap_or(db_url);
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        anyhow::bail!("invalid --db value: {db_url}");
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}
