//! Binary entry-point: fetch one colour from the hexbot and store it.

use std::ffi::OsString;
use std::sync::Arc;

use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use hexbot::config::HexbotSettings;
use hexbot::domain::ports::{ColourRepository, FixtureColourRepository};
use hexbot::domain::{ColourFetcher, ColourPersister, ColourPipeline};
use hexbot::outbound::hexbot::HexbotHttpSource;
use hexbot::outbound::persistence::{DbPool, DieselColourRepository};

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = HexbotSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|err| eyre!("failed to load hexbot settings: {err}"))?;

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    // The pipeline logs its own failures; the report goes to stderr.
    runtime.block_on(run(settings))
}

async fn run(settings: HexbotSettings) -> Result<()> {
    let source = HexbotHttpSource::new(settings.endpoint()?, settings.timeout())
        .wrap_err("build hexbot HTTP client")?;
    let repository = build_repository(&settings).await?;

    let pipeline = ColourPipeline::new(
        ColourFetcher::new(Arc::new(source)).with_deadline(settings.deadline()),
        ColourPersister::new(repository),
    );
    let colour = pipeline.run().await?;
    info!(%colour, dry_run = settings.dry_run(), "done");
    Ok(())
}

async fn build_repository(settings: &HexbotSettings) -> Result<Arc<dyn ColourRepository>> {
    if settings.dry_run() {
        info!("dry run: fetched colour will not be stored");
        return Ok(Arc::new(FixtureColourRepository));
    }

    let pool = DbPool::new(settings.pool_config()?)
        .await
        .wrap_err("create database pool")?;
    Ok(Arc::new(DieselColourRepository::new(pool)))
}
