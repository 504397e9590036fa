pub mod config;
pub mod init;
pub mod process;

use colored::Colorize;
use linesift::error::{ConfigError, LineSiftError, PipelineError};

/// Display an error message with proper formatting
pub fn display_error(err: &anyhow::Error) {
    eprintln!("\n{} {}", "✗".bright_red().bold(), "Operation failed".bright_red().bold());
    eprintln!("  {} {}", "├".bright_black(), err);

    // Display error chain
    for cause in err.chain().skip(1) {
        eprintln!("  {} Caused by: {}", "├".bright_black(), cause);
    }

    if is_pattern_error(err) {
        eprintln!("  {} Check the --pattern value or transform.pattern in the config", "└".bright_cyan());
        eprintln!("    Patterns use Rust regex syntax, e.g. (\\d+)");
        return;
    }

    match find_config_error(err) {
        Some(ConfigError::UnknownKey { .. }) => {
            eprintln!("  {} Run {} to see the known keys", "└".bright_cyan(), "linesift config list".bright_cyan());
        }
        Some(_) => {
            eprintln!("  {} Check .linesift/config.toml for typos", "└".bright_cyan());
            eprintln!("    Run: linesift init to regenerate the defaults");
        }
        None => {
            eprintln!("  {} Run with {} for more details",
                "└".bright_black(),
                "--verbose".bright_cyan()
            );
        }
    }
}

fn is_pattern_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause.downcast_ref::<PipelineError>().is_some()
            || matches!(
                cause.downcast_ref::<LineSiftError>(),
                Some(LineSiftError::Pipeline(_))
            )
    })
}

fn find_config_error(err: &anyhow::Error) -> Option<&ConfigError> {
    err.chain().find_map(|cause| {
        cause.downcast_ref::<ConfigError>().or_else(|| match cause.downcast_ref::<LineSiftError>() {
            Some(LineSiftError::Config(inner)) => Some(inner),
            _ => None,
        })
    })
}
