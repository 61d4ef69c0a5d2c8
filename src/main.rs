use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use llm_compare::comparator::LlmComparator;
use llm_compare::config::Cli;
use llm_compare::credentials::{resolve_credentials, ProcessEnvironment, StdinPrompt};
use llm_compare::fs::DefaultFS;
use llm_compare::report::ReportWriter;

fn init_tracing() {
    // stdout carries the progress lines, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    let credentials = resolve_credentials(&ProcessEnvironment {}, &mut StdinPrompt {})?;

    let reports = ReportWriter::new(Arc::new(DefaultFS {}), cli.output_dir.clone()).await?;
    let mut comparator = LlmComparator::new(
        cli.openai_provider(&credentials.openai_api_key),
        cli.gemini_provider(&credentials.google_api_key),
        reports,
    );

    let report_file = comparator.run(&cli.prompt, &mut std::io::stdout()).await?;

    println!("\n{}", "=".repeat(50));
    println!(
        "Comparison complete! Report saved as: {}",
        report_file.display()
    );
    println!("{}", "=".repeat(50));

    Ok(())
}
