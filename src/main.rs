use anyhow::Result;
use clap::Parser;
use grandlivre::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();
    cli.run()
}
