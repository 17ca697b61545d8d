use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Chipbox - headless harness for the searchable multi-select widget
#[derive(Parser, Debug, Clone)]
#[command(name = "chipbox", version, about, long_about = None)]
pub struct Cli {
    /// Path to the catalog configuration file
    #[arg(short, long, env = "CHIPBOX_CONFIG", default_value = "chipbox.toml", global = true)]
    pub config: PathBuf,

    /// Placeholder shown in the empty text input
    #[arg(long, env = "CHIPBOX_PLACEHOLDER", global = true)]
    pub placeholder: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate the catalog and list its candidates
    Check,

    /// Print the dropdown rows a search text produces
    Filter {
        /// Search text
        query: String,

        /// Treat these candidate ids as already selected
        #[arg(long = "exclude", value_name = "ID")]
        exclude: Vec<String>,
    },

    /// Replay a scripted session and print the widget after each step
    Replay {
        /// YAML or JSON session script
        script: PathBuf,

        /// Emit the steps as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["chipbox", "check"]);
        assert_eq!(cli.config, PathBuf::from("chipbox.toml"));
        assert!(cli.placeholder.is_none());
        assert_eq!(cli.command, Command::Check);
    }

    #[test]
    fn test_cli_filter_with_excludes() {
        let cli = Cli::parse_from([
            "chipbox",
            "--config",
            "people.toml",
            "filter",
            "ze",
            "--exclude",
            "1",
            "--exclude",
            "4",
        ]);
        assert_eq!(cli.config, PathBuf::from("people.toml"));
        assert_eq!(
            cli.command,
            Command::Filter {
                query: "ze".to_string(),
                exclude: vec!["1".to_string(), "4".to_string()],
            }
        );
    }

    #[test]
    fn test_cli_replay_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "chipbox",
            "replay",
            "session.yaml",
            "--json",
            "--placeholder",
            "Find people",
        ]);
        assert_eq!(cli.placeholder, Some("Find people".to_string()));
        assert_eq!(
            cli.command,
            Command::Replay {
                script: PathBuf::from("session.yaml"),
                json: true,
            }
        );
    }
}
