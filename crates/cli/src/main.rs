use std::process::ExitCode;

use clap::Parser;

use storefront_cli::{Cli, execute, load_product};

fn main() -> ExitCode {
    storefront_observability::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let product = load_product(&cli.product)?;
    let outcome = execute(&cli.command, &product)?;

    let rendered = if cli.compact {
        serde_json::to_string(&outcome.output)?
    } else {
        serde_json::to_string_pretty(&outcome.output)?
    };
    println!("{rendered}");

    Ok(ExitCode::from(outcome.exit_code))
}
