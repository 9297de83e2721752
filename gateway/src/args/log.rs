use clap::ValueEnum;
use strum::{AsRefStr, Display};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum LogLevel {
    /// Completely disables logging
    Off,
    /// Only errors from the gateway crates
    Error,
    /// Warnings and errors from the gateway crates
    Warn,
    /// Info, warning and error messages from the gateway crates
    #[default]
    Info,
    /// Debug, info, warning and error messages from the gateway crates
    Debug,
    /// Trace, debug, info, warning and error messages from all dependencies
    Trace,
}

impl LogLevel {
    pub(crate) fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "speedrun=error,speedrun_graphql=error,speedrun_gateway=error,off",
            LogLevel::Warn => "speedrun=warn,speedrun_graphql=warn,speedrun_gateway=warn,off",
            LogLevel::Info => "speedrun=info,speedrun_graphql=info,speedrun_gateway=info,off",
            LogLevel::Debug => "speedrun=debug,speedrun_graphql=debug,speedrun_gateway=debug,off",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum LogStyle {
    /// Standard text
    Text,
    /// JSON objects
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_the_command_line_values() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::default().as_ref(), "info");
        assert_eq!(LogStyle::Json.to_string(), "json");
    }

    #[test]
    fn levels_below_trace_only_cover_the_workspace_crates() {
        let filter = LogLevel::Debug.as_filter_str();

        assert!(filter.starts_with("speedrun=debug,"));
        assert!(filter.ends_with(",off"));
        assert_eq!(LogLevel::Trace.as_filter_str(), "trace");
    }
}
