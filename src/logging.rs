use colored::{Color, Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Step,
    Info,
    Success,
    Warning,
    Error,
}

const PREFIX_WIDTH: usize = 12;

fn prefix(level: LogLevel) -> String {
    let (label, color) = match level {
        LogLevel::Step => ("STEP", Color::Magenta),
        LogLevel::Info => ("INFO", Color::Cyan),
        LogLevel::Success => ("SUCCESS", Color::Green),
        LogLevel::Warning => ("WARNING", Color::Yellow),
        LogLevel::Error => ("ERROR", Color::Red),
    };

    let inner = format!(" {} ", label).color(color).bold();
    let bracketed = format!("[{}]", inner);
    let padding = PREFIX_WIDTH.saturating_sub(label.len() + 4) + 1;
    format!("{}{}", bracketed, " ".repeat(padding))
}

pub fn setup_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    let format = tracing_subscriber::fmt::format()
        .without_time()
        .with_level(false)
        .with_target(false)
        .compact();

    tracing_subscriber::fmt()
        .event_format(format)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

pub fn log(level: LogLevel, message: &str) {
    let line = format!("{}{}", prefix(level), message);

    match level {
        LogLevel::Step => tracing::info!(target: "step", "{}", line),
        LogLevel::Info | LogLevel::Success => tracing::info!("{}", line),
        LogLevel::Warning => tracing::warn!("{}", line),
        LogLevel::Error => tracing::error!("{}", line),
    }
}
