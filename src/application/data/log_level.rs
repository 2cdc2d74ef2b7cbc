use clap::ValueEnum;
use derive_more::Display;

/// Verbosity of the tracing output; `Silent` installs no subscriber at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Display)]
pub enum LogLevel {
    #[display("trace")]
    Trace,
    #[display("debug")]
    Debug,
    #[display("info")]
    Info,
    #[default]
    #[display("warn")]
    Warn,
    #[display("error")]
    Error,
    #[display("silent")]
    Silent,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Trace => Some(tracing::Level::TRACE),
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}
