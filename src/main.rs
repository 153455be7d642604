use anyhow::{Context, Result};
use log::info;
use tumweb::{Config, generate_site};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let summary = generate_site(&config)?;

    info!(
        "Generated {} pages for {} posts in {}",
        summary.pages,
        summary.posts,
        config.output.display()
    );

    Ok(())
}
