use clap::Parser;
use factory_employees::application::payroll::{PayrollRun, sample_employees};
use factory_employees::application::registry::ProcessorRegistry;
use factory_employees::interfaces::report_writer::{ReportFormat, ReportWriter};
use miette::Result;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pay every employee with this processor instead of the one matching
    /// their compensation type
    #[arg(long)]
    processor: Option<String>,

    /// Print the registered processor identifiers and exit
    #[arg(long)]
    list: bool,

    /// Output format for processed payments
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Log registry and processor activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("factory_employees={log_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let registry = ProcessorRegistry::global();
    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());

    if cli.list {
        writer.write_identifiers(&registry.identifiers())?;
        return Ok(());
    }

    let mut payroll = PayrollRun::new(registry);
    if let Some(identifier) = cli.processor {
        payroll = payroll.with_override(identifier);
    }

    let notices = payroll.process(&sample_employees())?;
    writer.write_notices(&notices, cli.format)?;

    Ok(())
}
