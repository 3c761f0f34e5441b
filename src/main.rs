use anyhow::{Context, Result};
use std::io::IsTerminal;
use tracing::info;

use changesize::cli::{parse_args, run};

fn main() -> Result<()> {
    changesize::init_with_logger(std::io::stderr().is_terminal())
        .context("Failed to initialize changesize")?;

    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    };

    info!("Starting changesize v{}", changesize::version());

    run(&cli).with_context(|| format!("Failed to rewrite {}", cli.file.display()))?;

    Ok(())
}
