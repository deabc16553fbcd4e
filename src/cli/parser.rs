use crate::config::Backend;
use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for zeitkonto
#[derive(Parser, Debug)]
#[command(
    name = "zeitkonto",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record daily work intervals, sum worked hours by week or month and export reports",
    long_about = None
)]
pub struct Cli {
    /// Override the local database path (useful for tests or a custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the configured storage backend
    #[arg(global = true, long = "backend", value_enum)]
    pub backend: Option<Backend>,

    /// Debug logging on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PeriodKind {
    All,
    Week,
    Month,
}

/// Period selection shared by `list` and `export`.
///
/// Without `--period` the kind follows the other flags: `--week-of` means a
/// week, `--year`/`--month` a month, nothing at all every entry.
#[derive(Args, Debug, Clone)]
pub struct PeriodArgs {
    #[arg(long, short = 'p', value_enum)]
    pub period: Option<PeriodKind>,

    /// Year of the month period (default: current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Month 1-12 of the month period (default: current month)
    #[arg(long)]
    pub month: Option<u32>,

    /// Any day of the wanted week (YYYY-MM-DD, default: today)
    #[arg(
        long = "week-of",
        value_name = "DATE",
        conflicts_with_all = ["year", "month"]
    )]
    pub week_of: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the configuration file and the local database
    Init,

    /// Inspect or maintain the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Record a work day
    Add {
        /// Date of the work day (YYYY-MM-DD)
        date: String,

        #[arg(long = "start", help = "Start time (HH:MM)")]
        start: String,

        #[arg(long = "end", help = "End time (HH:MM)")]
        end: String,

        #[arg(long = "edit", value_name = "ID", help = "Replace the work day with this id")]
        edit: Option<String>,
    },

    /// List work days and their total
    List {
        #[command(flatten)]
        period: PeriodArgs,
    },

    /// Delete a work day by id
    Del {
        id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export a report of work days
    Export {
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Absolute output path (default: report_<period>.<ext> in the current directory)"
        )]
        file: Option<String>,

        #[command(flatten)]
        period: PeriodArgs,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn month_export_flags() {
        let cli = Cli::parse_from([
            "zeitkonto", "export", "--format", "html", "--period", "month", "--year", "2025",
            "--month", "9",
        ]);
        match cli.command {
            Commands::Export { format, period, .. } => {
                assert_eq!(format, ExportFormat::Html);
                assert_eq!(period.period, Some(PeriodKind::Month));
                assert_eq!(period.month, Some(9));
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn week_of_excludes_month_flags() {
        let res = Cli::try_parse_from([
            "zeitkonto", "list", "--week-of", "2025-03-12", "--month", "3",
        ]);
        assert!(res.is_err());
    }
}
