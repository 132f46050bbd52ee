// src/bin/cli.rs
use casp_extract::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    cli::run()?;
    Ok(())
}
