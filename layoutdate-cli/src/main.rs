use anyhow::Context;
use layoutdate::{parse, Layout, Timestamp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DATE: &str = "2021-02-04";

/// Logs go to stderr so stdout only ever carries the timestamp
fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("layoutdate=warn,layoutdate_cli=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn run() -> anyhow::Result<Timestamp> {
    tracing::debug!(layout = %Layout::DATE_ONLY, date = DATE, "parsing");

    parse(&Layout::DATE_ONLY, DATE)
        .with_context(|| format!("{DATE:?} is not a date of the form {}", Layout::DATE_ONLY))
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let timestamp = run()?;
    println!("{timestamp}");

    Ok(())
}

#[test]
fn test_run() {
    let timestamp = run().unwrap();

    assert_eq!((2021, 2, 4), (timestamp.year(), timestamp.month(), timestamp.day()));
    assert_eq!("2021-02-04 00:00:00 +0000 UTC", timestamp.to_string());
}
