//! normalize - strip ignored fields from Kubernetes manifests
//!
//! Reads YAML or JSON manifests, removes the fields declared in a settings
//! file and prints the result.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use diff_normalizer::{Settings, Unstructured};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "normalize", version, about = "Strip ignored fields from Kubernetes manifests")]
struct Cli {
    /// Settings file with ignoreDifferences and resourceOverrides
    #[arg(short, long)]
    settings: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    output: Format,

    /// Log skipped removals and per-resource statistics
    #[arg(short, long)]
    verbose: bool,

    /// Manifest files to normalize. Use '-' or nothing to read stdin
    files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load(&cli.settings)?;
    let normalizer = settings.normalizer()?;
    info!(rules = normalizer.rules().len(), "compiled ignore rules");

    let mut resources = Vec::new();
    if cli.files.is_empty() {
        resources.extend(read_manifests(None)?);
    }
    for file in &cli.files {
        let source = (file.as_os_str() != "-").then_some(file);
        resources.extend(read_manifests(source)?);
    }

    let stdout = io::stdout();
    let mut output = stdout.lock();
    for (i, resource) in resources.iter_mut().enumerate() {
        let report = normalizer.normalize_with_report(&mut *resource)?;
        debug!(
            kind = resource.kind(),
            matched = report.matched,
            applied = report.applied,
            skipped = report.skipped,
            "normalized resource"
        );
        write_resource(&mut output, resource, cli.output, i > 0)?;
    }
    Ok(())
}

fn read_manifests(file: Option<&PathBuf>) -> Result<Vec<Unstructured>, Box<dyn std::error::Error>> {
    let content = match file {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(Unstructured::from_yaml_documents(&content)?)
}

fn write_resource(
    output: &mut dyn Write,
    resource: &Unstructured,
    format: Format,
    separate: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        Format::Yaml => {
            if separate {
                writeln!(output, "---")?;
            }
            write!(output, "{}", serde_yaml::to_string(resource)?)?;
        }
        Format::Json => {
            writeln!(output, "{}", serde_json::to_string_pretty(resource)?)?;
        }
    }
    Ok(())
}
