use anyhow::Result;
use clap::Parser;
use crackstats::{compose_report, parse_analytics_file, render_all_charts, Language};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "crackstats",
    about = "Process password analytics into charts and generate a report",
    version,
    author
)]
struct Cli {
    /// Path to the analytics report file
    file: PathBuf,

    /// Report language (for the built-in templates)
    #[arg(short, long, default_value = "EN")]
    language: Language,

    /// Output directory for charts and report
    #[arg(short, long, default_value = "./data")]
    outdir: PathBuf,

    /// Path to a custom template file (overrides -l/--language template selection)
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Generate only charts without a report
    #[arg(long)]
    charts_only: bool,
}

fn run(cli: Cli) -> Result<()> {
    std::fs::create_dir_all(&cli.outdir)?;

    let data = parse_analytics_file(&cli.file)?;

    render_all_charts(&data, &cli.outdir, cli.language)?;
    println!("✓ Generated charts in {}", cli.outdir.display());

    if !cli.charts_only {
        let report = compose_report(&data, &cli.outdir, cli.language, cli.template.as_deref())?;
        println!("✓ Generated report: {}", report.display());
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
