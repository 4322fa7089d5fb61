mod handlers;
mod routes;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "jobharvest")]
#[command(about = "Scrape job listings from configured career sites over HTTP triggers")]
struct Cli {
    /// Input CSV of company,base_url,start_page,end_page
    #[arg(long, env = "JOBHARVEST_INPUT", default_value = "input.csv")]
    input: PathBuf,

    /// Directory the per-company CSVs are written to
    #[arg(long, env = "JOBHARVEST_OUTPUT_DIR", default_value = "output")]
    output_dir: PathBuf,

    /// Port to listen on
    #[arg(long, env = "JOBHARVEST_PORT", default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("jobharvest=info".parse().unwrap())
                .add_directive("jobharvest_lib=info".parse().unwrap())
                .add_directive("jobharvest_scrape=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let state = Arc::new(AppState::new(cli.input, cli.output_dir));
    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on port {}", cli.port);
    axum::serve(listener, app).await?;

    Ok(())
}
