//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use edurh_domain::model::{ReportKind, UnitSource};
use edurh_types::OutputFormat;

#[derive(Parser)]
#[command(name = "edurh")]
#[command(version)]
#[command(about = "Teacher workload checks and report export for EduRH")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the maximum teaching periods for a weekly-hour regime
    Periods {
        /// Contracted weekly hours (RT)
        #[arg(allow_negative_numbers = true)]
        hours: i64,
    },

    /// Evaluate one workload against a regime
    Evaluate {
        /// Contracted weekly hours (RT)
        #[arg(long, short = 'r', allow_negative_numbers = true)]
        regime: Option<i64>,

        /// JSON file with assignment records (each carrying a period count)
        #[arg(long, conflicts_with = "periods")]
        units: Option<PathBuf>,

        /// Period counts, comma separated (e.g. 10,8)
        #[arg(long, short = 'p', value_delimiter = ',')]
        periods: Vec<u32>,
    },

    /// Check every teacher of a roster against their regime
    CheckWorkload {
        /// Teacher list JSON (GET /professores)
        #[arg(long, short = 't')]
        teachers: PathBuf,

        /// Distribution report JSON (GET /professores/relatorio/distribuicao-ch-turno).
        /// Without it each teacher's own linked units are used.
        #[arg(long, short = 'd')]
        distribution: Option<PathBuf>,

        /// Relation used when no distribution is given (curricula, subjects)
        #[arg(long)]
        source: Option<UnitSource>,

        /// Only show teachers whose name contains this text
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Check a single teacher record (GET /professores/{id})
    Teacher {
        /// Teacher JSON file
        #[arg(long)]
        file: PathBuf,

        /// Relation carrying the assigned periods (curricula, subjects)
        #[arg(long)]
        source: Option<UnitSource>,
    },

    /// Export report rows to CSV or Excel
    Export {
        /// Report kind (ch, matriz, matriz-detalhado, distribuicao)
        #[arg(long, short = 'k')]
        kind: ReportKind,

        /// Report JSON file as returned by the backend
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Output file (.csv or .xlsx). Defaults to <report>.csv next to the input.
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Start a session from a saved login response (POST /auth/login)
    Login {
        /// Login response JSON file
        #[arg(long)]
        response: PathBuf,
    },

    /// End the current session
    Logout,

    /// Show the current session
    Whoami,

    /// Print the URL and authorization header for a backend request
    Request {
        /// Endpoint path (e.g. /professores) or report kind
        path: String,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set backend base URL
        #[arg(long)]
        set_api_url: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set data directory (session storage)
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set default unit source for teacher checks
        #[arg(long)]
        set_unit_source: Option<UnitSource>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
