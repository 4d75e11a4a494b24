use clap::Parser;

const AFTER_HELP: &str = "\
Examples:
  breathe                  # 3 minutes, square pattern, circle style
  breathe 300 zen wave     # 5 minutes, zen pattern, wave style
  breathe 60 energy lotus  # 1 minute, energy pattern, lotus style";

/// Command-line arguments.
///
/// The positionals are captured as raw strings; validation (including
/// the duration parse fallback) lives in [`breathe::config`].
#[derive(Parser, Debug)]
#[command(
    name = "breathe",
    about = "A guided breathing exercise for your terminal",
    version,
    after_help = AFTER_HELP,
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Session length in seconds (10-3600).
    #[arg(value_name = "DURATION")]
    pub duration: Option<String>,

    /// Breathing pattern: square, relaxed, zen or energy.
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Visualization style: circle, wave, lotus or zen.
    #[arg(value_name = "STYLE")]
    pub style: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positionals_parse_in_order() {
        let cli = Cli::parse_from(["breathe", "300", "zen", "wave"]);
        assert_eq!(cli.duration.as_deref(), Some("300"));
        assert_eq!(cli.pattern.as_deref(), Some("zen"));
        assert_eq!(cli.style.as_deref(), Some("wave"));
    }

    #[test]
    fn all_positionals_are_optional() {
        let cli = Cli::parse_from(["breathe"]);
        assert!(cli.duration.is_none());
        assert!(cli.pattern.is_none());
        assert!(cli.style.is_none());
    }

    #[test]
    fn negative_duration_reaches_validation() {
        let cli = Cli::parse_from(["breathe", "-5"]);
        assert_eq!(cli.duration.as_deref(), Some("-5"));
    }
}
