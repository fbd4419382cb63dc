//! Output formatting module

use serde::Serialize;

use edurh_domain::model::Session;
use edurh_domain::service::{generate_workload_report, TeacherWorkloadRow, WorkloadResult};
use edurh_types::{OutputFormat, Result};

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

pub fn output_periods(output_format: OutputFormat, hours: i64, max_periods: u32) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&serde_json::json!({
            "regime_hours": hours,
            "max_allowed_periods": max_periods,
        }));
    }
    println!("RT {}h -> {} períodos", hours, max_periods);
    Ok(())
}

pub fn output_workload(output_format: OutputFormat, result: &WorkloadResult) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(result);
    }

    println!("\nWorkload Result");
    println!("===============");
    println!("Assigned periods:  {}", result.total_assigned_periods);
    println!("Allowed periods:   {}", result.max_allowed_periods);
    if let Some(ratio) = result.load_ratio_percent() {
        println!("Load:              {:.1}%", ratio);
    }
    match result.excess_periods() {
        Some(excess) => println!("Status:            OVER CAPACITY (+{})", excess),
        None => println!(
            "Status:            ok ({} free)",
            result.remaining_periods()
        ),
    }
    Ok(())
}

pub fn output_roster(output_format: OutputFormat, rows: &[TeacherWorkloadRow]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(rows);
    }

    println!(
        "{:<6} {:<28} {:<34} {:<10}",
        "ID", "Nome", "Carga Horária (Períodos)", "Turno"
    );
    println!("{}", "-".repeat(80));
    if rows.is_empty() {
        println!("Nenhum professor cadastrado.");
    }
    for row in rows {
        let marker = if row.workload.is_over_capacity { " !" } else { "" };
        println!(
            "{:<6} {:<28} {:<34} {:<10}{}",
            row.id.map(|id| id.to_string()).unwrap_or_default(),
            row.name,
            row.summary(),
            row.shift.as_deref().unwrap_or(""),
            marker
        );
    }
    println!();
    println!("{}", generate_workload_report(rows));
    Ok(())
}

pub fn output_teacher(output_format: OutputFormat, row: &TeacherWorkloadRow) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(row);
    }

    println!("\n{}", if row.name.is_empty() { "(sem nome)" } else { row.name.as_str() });
    println!("{}", "=".repeat(40));
    match row.regime_hours {
        Some(hours) => println!("CH Máxima:         {} horas", hours),
        None => println!("CH Máxima:         (não definida)"),
    }
    if let Some(ref shift) = row.shift {
        println!("Turno:             {}", shift);
    }
    output_workload(OutputFormat::Table, &row.workload)
}

pub fn output_session(output_format: OutputFormat, session: &Session) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&serde_json::json!({
            "user_name": session.user_name,
            "email": session.email,
            "created_at": session.created_at,
        }));
    }

    println!("Logged in as:  {}", session.display_name());
    if let Some(ref email) = session.email {
        println!("E-mail:        {}", email);
    }
    println!("Since:         {}", session.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
    Ok(())
}

pub fn output_request(output_format: OutputFormat, url: &str, session: &Session) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&serde_json::json!({
            "method": "GET",
            "url": url,
            "headers": {"Authorization": session.authorization_header()},
        }));
    }
    println!("GET {}", url);
    println!("Authorization: {}", session.authorization_header());
    Ok(())
}
