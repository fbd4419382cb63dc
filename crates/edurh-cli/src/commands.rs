//! Command handlers

use std::path::PathBuf;

use edurh_app::config::Config;
use edurh_app::export::{default_output_path, export_report};
use edurh_app::repository::open_session_repo;
use edurh_domain::model::{AssignedUnit, ReportKind, Session, UnitSource};
use edurh_domain::repository::SessionRepository;
use edurh_domain::service::{
    check_roster, check_teacher, check_teachers, evaluate, filter_by_name, max_allowed_periods,
    periods_by_teacher, TeacherWorkloadInput, TeacherWorkloadRow,
};
use edurh_infra::payload_loader::{
    load_distribution, load_json, load_report, load_teachers, load_units,
};
use edurh_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::{
    output_periods, output_request, output_roster, output_session, output_teacher,
    output_workload,
};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Periods { hours } => {
            output_periods(output_format, hours, max_allowed_periods(Some(hours)))
        }

        Commands::Evaluate {
            regime,
            units,
            periods,
        } => cmd_evaluate(regime, units, periods, output_format),

        Commands::CheckWorkload {
            teachers,
            distribution,
            source,
            search,
        } => cmd_check_workload(
            teachers,
            distribution,
            source.unwrap_or(config.unit_source),
            search,
            output_format,
        ),

        Commands::Teacher { file, source } => {
            cmd_teacher(file, source.unwrap_or(config.unit_source), output_format)
        }

        Commands::Export {
            kind,
            input,
            output,
        } => cmd_export(kind, input, output),

        Commands::Login { response } => cmd_login(&config, response),

        Commands::Logout => cmd_logout(&config),

        Commands::Whoami => {
            let session = open_session_repo(&config)?.require()?;
            output_session(output_format, &session)
        }

        Commands::Request { path } => {
            let session = open_session_repo(&config)?.require()?;
            cmd_request(&config, &session, &path, output_format)
        }

        Commands::Config {
            show,
            set_api_url,
            set_output,
            set_data_dir,
            set_unit_source,
            reset,
        } => cmd_config(
            show,
            set_api_url,
            set_output,
            set_data_dir,
            set_unit_source,
            reset,
        ),
    }
}

fn cmd_evaluate(
    regime: Option<i64>,
    units_path: Option<PathBuf>,
    periods: Vec<u32>,
    output_format: OutputFormat,
) -> Result<()> {
    let result = match units_path {
        Some(path) => {
            let units = load_units(&path)?;
            log::debug!("Evaluating {} raw units from {}", units.len(), path.display());
            evaluate(&TeacherWorkloadInput::new(regime, units))
        }
        None => {
            let units: Vec<AssignedUnit> = periods.into_iter().map(AssignedUnit::new).collect();
            evaluate(&TeacherWorkloadInput::new(regime, units))
        }
    };
    output_workload(output_format, &result)
}

fn cmd_check_workload(
    teachers_path: PathBuf,
    distribution_path: Option<PathBuf>,
    source: UnitSource,
    search: Option<String>,
    output_format: OutputFormat,
) -> Result<()> {
    let teachers = load_teachers(&teachers_path)?;

    let rows = match distribution_path {
        Some(path) => {
            let distribution = load_distribution(&path)?;
            let totals = periods_by_teacher(&distribution);
            log::debug!(
                "Distribution covers {} teachers in {} rows",
                totals.len(),
                distribution.len()
            );
            check_roster(&teachers, &totals)
        }
        None => check_teachers(&teachers, source),
    };
    let rows = filter_by_name(rows, search.as_deref().unwrap_or(""));

    output_roster(output_format, &rows)?;
    warn_over_capacity(&rows);
    Ok(())
}

fn cmd_teacher(file: PathBuf, source: UnitSource, output_format: OutputFormat) -> Result<()> {
    let teachers = load_teachers(&file)?;
    let teacher = teachers.first().ok_or_else(|| {
        Error::InvalidArgument(format!("no teacher record in {}", file.display()))
    })?;
    if teachers.len() > 1 {
        log::warn!(
            "{} contains {} teachers; showing the first",
            file.display(),
            teachers.len()
        );
    }

    let row = check_teacher(teacher, source);
    output_teacher(output_format, &row)?;
    warn_over_capacity(std::slice::from_ref(&row));
    Ok(())
}

fn cmd_export(kind: ReportKind, input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let rows = load_report(&input, kind)?;
    let output_path = output.unwrap_or_else(|| default_output_path(&rows, &input));

    export_report(&rows, &output_path)?;

    println!("Exported to: {}", output_path.display());
    Ok(())
}

fn cmd_login(config: &Config, response: PathBuf) -> Result<()> {
    let body = load_json(&response)?;
    let session = Session::from_login_response(&body)?;
    let repo = open_session_repo(config)?;
    repo.save(&session)?;
    println!("Login realizado com sucesso! ({})", session.display_name());
    Ok(())
}

fn cmd_logout(config: &Config) -> Result<()> {
    let repo = open_session_repo(config)?;
    if repo.clear()? {
        println!("Session ended");
    } else {
        println!("No active session");
    }
    Ok(())
}

fn cmd_request(
    config: &Config,
    session: &Session,
    path: &str,
    output_format: OutputFormat,
) -> Result<()> {
    let endpoint = match path.parse::<ReportKind>() {
        Ok(kind) => kind.endpoint(),
        Err(_) => path,
    };
    output_request(output_format, &config.endpoint_url(endpoint), session)
}

fn cmd_config(
    show: bool,
    set_api_url: Option<String>,
    set_output: Option<OutputFormat>,
    set_data_dir: Option<PathBuf>,
    set_unit_source: Option<UnitSource>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(api_url) = set_api_url {
        config.api_base_url = api_url;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(data_dir) = set_data_dir {
        config.data_dir = Some(data_dir);
        modified = true;
    }

    if let Some(unit_source) = set_unit_source {
        config.unit_source = unit_source;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

fn warn_over_capacity(rows: &[TeacherWorkloadRow]) {
    let over_count = rows.iter().filter(|r| r.workload.is_over_capacity).count();
    if over_count > 0 {
        eprintln!(
            "\nAviso: {} professor(es) acima do limite de períodos do RT",
            over_count
        );
    }
}
