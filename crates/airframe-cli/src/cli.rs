use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Airframe Developers",
    version,
    about = "Airframe CLI - Resolve automatic radii and report mass properties of rocket body components.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve an assembly definition and print the geometry and mass report.
    Inspect(InspectArgs),
    /// List the entries of a component preset catalog.
    Presets(PresetsArgs),
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the assembly definition in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub assembly: PathBuf,

    /// Preset catalog used to resolve `preset = "..."` references.
    #[arg(short, long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Flight configuration whose motors are reported.
    #[arg(long = "config-id", value_name = "ID", default_value = "default")]
    pub config_id: String,

    /// Fail if an enabled motor mount has no motor in the selected configuration.
    #[arg(long)]
    pub require_motors: bool,
}

/// Arguments for the `presets` subcommand.
#[derive(Args, Debug)]
pub struct PresetsArgs {
    /// Path to the preset catalog in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub catalog: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_arguments_are_parsed_with_defaults() {
        let cli = Cli::parse_from(["airframe", "inspect", "-a", "rocket.toml"]);
        match cli.command {
            Commands::Inspect(args) => {
                assert_eq!(args.assembly, PathBuf::from("rocket.toml"));
                assert!(args.catalog.is_none());
                assert_eq!(args.config_id, "default");
                assert!(!args.require_motors);
            }
            Commands::Presets(_) => panic!("Expected 'inspect' subcommand"),
        }
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() {
        let cli = Cli::parse_from([
            "airframe",
            "presets",
            "--catalog",
            "parts.toml",
            "-vv",
            "--log-file",
            "run.log",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_file, Some(PathBuf::from("run.log")));
        assert!(matches!(cli.command, Commands::Presets(_)));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["airframe", "-q", "-v", "presets", "-c", "parts.toml"]);
        assert!(result.is_err());
    }
}
