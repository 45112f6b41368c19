//! rutils CLI entry point.
//!
//! Command-line front end for Russian plural agreement, numbers in words and
//! relative time phrases:
//! - `rutils plural 5 минута минуты минут` - agree a noun with a number
//! - `rutils words 21.5` - spell a number
//! - `rutils distance 2024-05-09` - "вчера", "через 2 часа", ...

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_age, run_date, run_distance, run_money, run_plural, run_plural_table, run_words, AgeArgs,
    DateArgs, DistanceArgs, MoneyArgs, PluralArgs, PluralTableArgs, WordsArgs,
};
use output::RutilsDiagnostic;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "RUTILS_LOG";

/// Russian numerals and relative time phrases.
#[derive(Debug, Parser)]
#[command(name = "rutils")]
#[command(about = "Russian numerals, plural agreement and relative time phrases", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Log decisions to stderr (overridden by RUTILS_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Agree a noun with a number ("5 минут")
    Plural(PluralArgs),
    /// Show the agreed form for a range of numbers
    PluralTable(PluralTableArgs),
    /// Spell a number in words
    Words(WordsArgs),
    /// Spell a money amount in words
    Money(MoneyArgs),
    /// Describe the distance between two instants
    Distance(DistanceArgs),
    /// Age in full years
    Age(AgeArgs),
    /// Format a date with Russian month and weekday names
    Date(DateArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors checks TTY, NO_COLOR and FORCE_COLOR itself
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install the stderr log subscriber.
fn setup_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    // A second subscriber can only come from a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(false)
        .try_init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Plural(args) => run_plural(args),
        Commands::PluralTable(args) => run_plural_table(args),
        Commands::Words(args) => run_words(args),
        Commands::Money(args) => run_money(args),
        Commands::Distance(args) => run_distance(args),
        Commands::Age(args) => run_age(args),
        Commands::Date(args) => run_date(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(report) => {
            let code = report
                .downcast_ref::<RutilsDiagnostic>()
                .map_or(exitcode::SOFTWARE, RutilsDiagnostic::exit_code);
            eprintln!("{report:?}");
            exit(code);
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use rutils::{Accuracy, Gender};

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn plural_takes_three_forms() {
        let cli = parse(&["rutils", "plural", "21", "минута", "минуты", "минут"]);
        let Commands::Plural(args) = cli.command else {
            panic!("expected plural command");
        };
        assert_eq!(args.amount, 21);
        assert_eq!(args.forms, vec!["минута", "минуты", "минут"]);
        assert_eq!(args.absence, None);

        assert!(Cli::try_parse_from(["rutils", "plural", "21", "минута", "минуты"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["rutils", "words", "5", "--color", "never", "-v"]);
        assert_eq!(cli.color, ColorWhen::Never);
        assert!(cli.verbose);
    }

    #[test]
    fn words_accepts_gender_tags_and_negative_numbers() {
        let cli = parse(&["rutils", "words", "2", "--gender", "fem"]);
        let Commands::Words(args) = cli.command else {
            panic!("expected words command");
        };
        assert_eq!(args.gender, Gender::Feminine);

        let cli = parse(&["rutils", "words", "-3"]);
        let Commands::Words(args) = cli.command else {
            panic!("expected words command");
        };
        assert_eq!(args.amount, -3.0);
        assert_eq!(args.gender, Gender::Masculine);

        assert!(Cli::try_parse_from(["rutils", "words", "2", "--gender", "plural"]).is_err());
    }

    #[test]
    fn distance_parses_instants_and_accuracy() {
        let cli = parse(&[
            "rutils",
            "distance",
            "2024-05-09 10:00",
            "--now",
            "2024-05-10T12:00:00+03:00",
            "--accuracy",
            "hour",
        ]);
        let Commands::Distance(args) = cli.command else {
            panic!("expected distance command");
        };
        assert_eq!(args.accuracy, Accuracy::Hour);
        assert_eq!(args.now.map(|now| now.offset().local_minus_utc()), Some(3 * 3600));
        assert!(args.reference.is_none());

        assert!(Cli::try_parse_from(["rutils", "distance", "not a date"]).is_err());
        assert!(
            Cli::try_parse_from(["rutils", "distance", "2024-05-09", "--accuracy", "6"]).is_err()
        );
    }

    #[test]
    fn now_and_reference_conflict() {
        let result = Cli::try_parse_from([
            "rutils",
            "distance",
            "2024-05-09",
            "--now",
            "2024-05-10",
            "--reference",
            "2024-05-10",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn money_defaults_to_rubles() {
        let cli = parse(&["rutils", "money", "1.05"]);
        let Commands::Money(args) = cli.command else {
            panic!("expected money command");
        };
        assert_eq!(args.currency, commands::CurrencyArg::Rub);
        assert!(!args.always_fraction);
    }

    #[test]
    fn date_defaults() {
        let cli = parse(&["rutils", "date"]);
        let Commands::Date(args) = cli.command else {
            panic!("expected date command");
        };
        assert!(args.instant.is_none());
        assert_eq!(args.format, "%d.%m.%Y");
    }
}
