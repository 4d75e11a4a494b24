use thiserror::Error;

use crate::catalog::{Pattern, Style};

pub const DEFAULT_DURATION_SECS: u64 = 180;
pub const MIN_DURATION_SECS: u64 = 10;
pub const MAX_DURATION_SECS: u64 = 3600;

/// A startup validation failure. The `Display` text is printed to the
/// user verbatim.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Duration must be between 10 and 3600 seconds")]
    DurationOutOfRange,
    #[error("Invalid pattern. Choose from: square, relaxed, zen, energy")]
    UnknownPattern,
    #[error("Invalid style. Choose from: circle, wave, lotus, zen")]
    UnknownStyle,
}

/// Validated session parameters. Built once from CLI input, immutable
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub duration_secs: u64,
    pub pattern: Pattern,
    pub style: Style,
}

impl SessionConfig {
    /// Validate raw positional arguments.
    ///
    /// A duration that fails to parse as an integer falls back to the
    /// default instead of erroring; only a value that parses and lies
    /// outside [10, 3600] is rejected. Negative values parse, so they
    /// hit the range check.
    pub fn from_args(
        duration: Option<&str>,
        pattern: Option<&str>,
        style: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let requested = duration
            .and_then(|arg| arg.parse::<i64>().ok())
            .unwrap_or(DEFAULT_DURATION_SECS as i64);
        let duration_secs = match u64::try_from(requested) {
            Ok(secs) if (MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&secs) => secs,
            _ => return Err(ConfigError::DurationOutOfRange),
        };

        let pattern = match pattern {
            Some(name) => Pattern::from_name(name).ok_or(ConfigError::UnknownPattern)?,
            None => Pattern::Square,
        };
        let style = match style {
            Some(name) => Style::from_name(name).ok_or(ConfigError::UnknownStyle)?,
            None => Style::Circle,
        };

        Ok(Self {
            duration_secs,
            pattern,
            style,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_args() {
        let config = SessionConfig::from_args(None, None, None).unwrap();
        assert_eq!(config.duration_secs, 180);
        assert_eq!(config.pattern, Pattern::Square);
        assert_eq!(config.style, Style::Circle);
    }

    #[test]
    fn duration_boundaries() {
        assert_eq!(
            SessionConfig::from_args(Some("10"), None, None)
                .unwrap()
                .duration_secs,
            10
        );
        assert_eq!(
            SessionConfig::from_args(Some("3600"), None, None)
                .unwrap()
                .duration_secs,
            3600
        );
        assert_eq!(
            SessionConfig::from_args(Some("9"), None, None),
            Err(ConfigError::DurationOutOfRange)
        );
        assert_eq!(
            SessionConfig::from_args(Some("3601"), None, None),
            Err(ConfigError::DurationOutOfRange)
        );
        assert_eq!(
            SessionConfig::from_args(Some("5"), Some("square"), Some("circle")),
            Err(ConfigError::DurationOutOfRange)
        );
    }

    #[test]
    fn negative_duration_is_out_of_range() {
        assert_eq!(
            SessionConfig::from_args(Some("-5"), None, None),
            Err(ConfigError::DurationOutOfRange)
        );
    }

    #[test]
    fn unparseable_duration_falls_back_to_default() {
        // Deliberate asymmetry: "abc" never errors, it becomes 180.
        let config = SessionConfig::from_args(Some("abc"), None, None).unwrap();
        assert_eq!(config.duration_secs, 180);
    }

    #[test]
    fn pattern_names() {
        for name in ["square", "relaxed", "zen", "energy"] {
            assert!(SessionConfig::from_args(None, Some(name), None).is_ok());
        }
        assert_eq!(
            SessionConfig::from_args(Some("60"), Some("bogus"), Some("circle")),
            Err(ConfigError::UnknownPattern)
        );
    }

    #[test]
    fn style_names() {
        for name in ["circle", "wave", "lotus", "zen"] {
            assert!(SessionConfig::from_args(None, None, Some(name)).is_ok());
        }
        assert_eq!(
            SessionConfig::from_args(Some("60"), Some("square"), Some("triangle")),
            Err(ConfigError::UnknownStyle)
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::DurationOutOfRange.to_string(),
            "Duration must be between 10 and 3600 seconds"
        );
        assert_eq!(
            ConfigError::UnknownPattern.to_string(),
            "Invalid pattern. Choose from: square, relaxed, zen, energy"
        );
        assert_eq!(
            ConfigError::UnknownStyle.to_string(),
            "Invalid style. Choose from: circle, wave, lotus, zen"
        );
    }
}
