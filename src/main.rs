use anyhow::{Context, Result};

use house_price_dashboard::{app, Artifacts, Settings};

fn main() -> Result<()> {
    let settings = Settings::from_env();
    app::logging::init(&settings.log_path);

    let artifacts = Artifacts::load(&settings.artifacts).context("failed to load model")?;

    app::run::run(&artifacts)
}
