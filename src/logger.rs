use std::fs::File;

use anyhow::Context;
use time::{
    format_description::{self, parse},
    OffsetDateTime,
};
use tracing::{subscriber::set_global_default, Level};
use tracing_subscriber::{fmt::writer::BoxMakeWriter, FmtSubscriber};

/// Send every planner event to a timestamped log file in the working directory.
///
/// Fails if the file cannot be created or a global subscriber is already set.
pub fn init_logger() -> anyhow::Result<()> {
    let file_name = get_log_file_name()?;
    let file = File::create(&file_name)
        .with_context(|| format!("could not create log file '{file_name}'"))?;
    let writer = BoxMakeWriter::new(file);
    let local_offset =
        time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = tracing_subscriber::fmt::time::OffsetTime::new(
        local_offset,
        format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]")?,
    );

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_timer(timer)
        .with_writer(writer)
        .finish();

    set_global_default(subscriber).context(
        "could not set global default tracing subscriber, one is probably already set",
    )
}

/// Send events up to `max_level` to stderr, for command line use.
pub fn init_stderr_logger(max_level: Level) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level)
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    set_global_default(subscriber).context("could not set global default tracing subscriber")
}

fn get_log_file_name() -> anyhow::Result<String> {
    let format = parse("[year]-[month]-[day]_[hour]-[minute]-[second]_war_planner_log.txt")?;
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    Ok(now.format(&format)?)
}
