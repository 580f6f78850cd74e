//! Liquibase column comment generator.
//!
//! Turns `{table_name}.xlsx` column descriptions into `{table_name}.sql`
//! change-logs of `comment on` statements, echoing the SQL to stdout.

use anyhow::Context;
use clap::Parser;
use colcomment::Cli;
use colcomment_core::{RunOutcome, init_logging, run};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.global.verbose, cli.global.quiet)?;

    let config = cli.configuration();
    info!("Target schema: {}", config.schema);
    info!("Input: {}", config.input);

    let mut stdout = std::io::stdout().lock();
    let outcome = run(&config, &mut stdout).context("Failed to generate column comments")?;

    match outcome {
        RunOutcome::NoInputFiles => info!("Nothing to do"),
        RunOutcome::Completed(summary) => info!(
            "✓ Wrote {} file(s) to {}",
            summary.file_count(),
            config.output_directory.display()
        ),
    }

    Ok(())
}
