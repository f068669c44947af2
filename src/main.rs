use anyhow::Context;
use clap::{Parser, Subcommand};
use dkkb_realisasi::cli::{self, OutputFormat};
use dkkb_realisasi::config::{InspectConfig, DEFAULT_WORKBOOK};
use dkkb_realisasi::excel::DEFAULT_TEMPLATE_OUTPUT;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dkkb")]
#[command(about = "Inspect DKKB budget workbooks and generate the REALISASI report template")]
#[command(long_about = "DKKB Realisasi - budget workbook utilities

COMMANDS:
  inspect   - Print the non-empty rows of a sheet window
  template  - Write the blank REALISASI report template
  sheets    - List the sheets of a workbook

EXAMPLES:
  dkkb inspect                                   # DKKB DAN REALISASI.xlsx, sheet 'DKKB 2025'
  dkkb inspect -f budget.xlsx -s 'DKKB 2025' --rows 100
  dkkb inspect --format json > rows.json
  dkkb template -o 'public/DKKB DAN REALISASI.xlsx'

Set RUST_LOG=debug for detailed logs on stderr.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Print every row holding at least one non-empty cell.

Formula cells show their last computed value; nothing is recalculated.
Text longer than the truncation limit is cut and marked with '...'.

CONFIG FILE (YAML, every key optional):
  workbook: DKKB DAN REALISASI.xlsx
  sheet: DKKB 2025
  max_row: 50
  max_col: 19
  truncate_at: 50

Command-line flags override values from the config file.")]
    /// Print the non-empty rows of a sheet window
    Inspect {
        /// Workbook to inspect (.xlsx) [default: DKKB DAN REALISASI.xlsx]
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Sheet name [default: DKKB 2025]
        #[arg(short, long)]
        sheet: Option<String>,

        /// Last row to scan, 1-based inclusive [default: 50]
        #[arg(long)]
        rows: Option<u32>,

        /// Last column to scan, 1-based inclusive [default: 19]
        #[arg(long)]
        cols: Option<u16>,

        /// Maximum characters shown per text cell [default: 50]
        #[arg(long)]
        truncate: Option<usize>,

        /// YAML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write the blank REALISASI report template (overwrites existing file)
    Template {
        /// Output Excel file path (.xlsx)
        #[arg(short, long, default_value = DEFAULT_TEMPLATE_OUTPUT)]
        output: PathBuf,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the sheets of a workbook
    Sheets {
        /// Workbook path (.xlsx)
        #[arg(short, long, default_value = DEFAULT_WORKBOOK)]
        file: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "dkkb=debug,dkkb_realisasi=debug"
    } else {
        "dkkb=warn,dkkb_realisasi=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect {
            file,
            sheet,
            rows,
            cols,
            truncate,
            config,
            format,
            verbose,
        } => {
            init_tracing(verbose);

            let mut settings = match &config {
                Some(path) => InspectConfig::from_yaml_file(path)
                    .with_context(|| format!("failed to load config {}", path.display()))?,
                None => InspectConfig::default(),
            };
            if let Some(file) = file {
                settings.workbook = file;
            }
            if let Some(sheet) = sheet {
                settings.sheet = sheet;
            }
            if let Some(rows) = rows {
                settings.max_row = rows;
            }
            if let Some(cols) = cols {
                settings.max_col = cols;
            }
            if let Some(truncate) = truncate {
                settings.truncate_at = truncate;
            }

            cli::inspect(settings, format, verbose).context("inspect failed")
        }

        Commands::Template { output, verbose } => {
            init_tracing(verbose);
            cli::template(output, verbose).context("template generation failed")
        }

        Commands::Sheets { file } => {
            init_tracing(false);
            cli::sheets(file).context("listing sheets failed")
        }
    }
}
