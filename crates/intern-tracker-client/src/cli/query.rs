/*
[INPUT]:  AppConfig and query arguments from the command line
[OUTPUT]: Health, statistics, cleanup and follow-up session listings printed to stdout
[POS]:    CLI backend query and maintenance commands
[UPDATE]: When read endpoints or their output format change
*/

use anyhow::{Context, Result, bail};
use console::style;
use dialoguer::{Confirm, theme::ColorfulTheme};
use intern_tracker_adapter::{FollowupSessionRecord, SessionListQuery, SessionStatus};
use tracing::info;

use intern_tracker_client::AppConfig;

pub async fn run_health(config: &AppConfig) -> Result<()> {
    let client = config.build_client()?;
    let health = client.health().await.context("query backend health")?;

    let status = if health.is_healthy() {
        style(health.status.as_str()).green()
    } else {
        style(health.status.as_str()).red()
    };
    println!("{} {}", style("Backend:").bold(), status);
    if let Some(database) = &health.database {
        println!("  database:        {database}");
    }
    if let Some(ttl_index) = &health.ttl_index {
        println!("  ttl index:       {ttl_index}");
    }
    if let Some(running) = health.cleanup_task_running {
        println!("  cleanup running: {running}");
    }
    if let Some(error) = &health.error {
        println!("  error:           {}", style(error).red());
    }

    if !health.is_healthy() {
        bail!("backend reported status '{}'", health.status);
    }

    let cleanup = client
        .cleanup_status()
        .await
        .context("query cleanup status")?;
    let ttl = if cleanup.ttl_index.active {
        style("active").green()
    } else {
        style("inactive").yellow()
    };
    println!("{} {}", style("TTL cleanup:").bold(), ttl);
    if let Some(expiry) = &cleanup.ttl_index.expiry_time {
        println!("  expiry:          {expiry}");
    }
    if let Some(frequency) = &cleanup.manual_cleanup.frequency {
        println!("  manual cleanup:  {frequency}");
    }
    if let Some(recommendation) = &cleanup.recommendation {
        println!("  {}", style(recommendation).dim());
    }
    Ok(())
}

pub async fn run_stats(config: &AppConfig) -> Result<()> {
    let client = config.build_client()?;
    let Some(stats) = client.stats().await.context("query database statistics")? else {
        println!("{}", style("Backend returned no statistics.").yellow());
        return Ok(());
    };

    println!("{}", style("Work updates").bold());
    println!("  total:                {}", stats.work_updates.total);
    println!("  follow-up completed:  {}", stats.work_updates.completed_followups);
    println!("  follow-up incomplete: {}", stats.work_updates.incomplete_followups);
    println!("{}", style("Temporary work updates").bold());
    println!("  total:                {}", stats.temp_work_updates.total);
    println!("  pending follow-up:    {}", stats.temp_work_updates.pending);
    println!("{}", style("Follow-up sessions").bold());
    println!("  total:                {}", stats.followup_sessions.total);
    println!("  pending:              {}", stats.followup_sessions.pending);
    println!("  completed:            {}", stats.followup_sessions.completed);
    if let Some(cleanup) = &stats.cleanup_system {
        println!("{}", style("Cleanup").bold());
        println!("  ttl index active:     {}", cleanup.ttl_index_active);
        if let Some(deletion) = &cleanup.automatic_deletion {
            println!("  automatic deletion:   {deletion}");
        }
    }
    Ok(())
}

pub async fn run_cleanup(config: &AppConfig, assume_yes: bool) -> Result<()> {
    if !assume_yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Delete temporary work updates older than 24 hours?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", style("Cleanup cancelled.").yellow());
            return Ok(());
        }
    }

    let client = config.build_client()?;
    let report = client
        .cleanup_temp_updates()
        .await
        .context("run manual cleanup")?;
    info!(
        deleted_temp_updates = report.deleted_temp_updates,
        deleted_sessions = report.deleted_sessions,
        "manual cleanup completed"
    );

    println!(
        "{} removed {} temporary update(s) and {} session(s)",
        style("Cleanup done:").bold().green(),
        report.deleted_temp_updates,
        report.deleted_sessions
    );
    if let Some(note) = &report.note {
        println!("  {}", style(note).dim());
    }
    Ok(())
}

pub async fn run_sessions(config: &AppConfig, user_id: &str, limit: u32, skip: u32) -> Result<()> {
    let client = config.build_client()?;
    let query = SessionListQuery {
        limit: Some(limit),
        skip: Some(skip),
    };
    let list = client
        .list_followup_sessions(user_id, &query)
        .await
        .with_context(|| format!("list follow-up sessions of {user_id}"))?;
    info!(user_id, count = list.count, "follow-up sessions loaded");

    if list.sessions.is_empty() {
        println!("{}", style("No follow-up sessions found.").yellow());
        return Ok(());
    }

    println!(
        "{}",
        style(format!("{} session(s) for {user_id}", list.count)).bold()
    );
    for session in &list.sessions {
        println!("{}", summary_line(session));
    }
    Ok(())
}

pub async fn run_session(config: &AppConfig, session_id: &str) -> Result<()> {
    let client = config.build_client()?;
    let session = client
        .get_followup_session(session_id)
        .await
        .with_context(|| format!("load follow-up session {session_id}"))?;

    println!("{}", summary_line(&session));
    for (index, question) in session.questions.iter().enumerate() {
        let answer = session
            .answers
            .get(index)
            .map(String::as_str)
            .filter(|answer| !answer.trim().is_empty());
        println!("\n{} {}", style(format!("Q{}.", index + 1)).bold(), question);
        match answer {
            Some(answer) => println!("   {answer}"),
            None => println!("   {}", style("(no answer)").dim()),
        }
    }
    Ok(())
}

fn summary_line(session: &FollowupSessionRecord) -> String {
    let status = match session.status {
        SessionStatus::Completed => style("completed").green(),
        SessionStatus::Pending => style("pending").yellow(),
    };
    let date = match (&session.session_date, session.created_at) {
        (Some(date), _) => date.clone(),
        (None, Some(created_at)) => created_at.format("%Y-%m-%d %H:%M").to_string(),
        (None, None) => "-".to_string(),
    };
    format!(
        "{} | {} | {} | {}/{} answered",
        session.session_id,
        date,
        status,
        session.answered_count(),
        session.questions.len()
    )
}
