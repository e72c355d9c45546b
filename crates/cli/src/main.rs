use anyhow::Result;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use proofing_cli::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = Builder::from_default_env();
    if cli.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    cli.run()
}
