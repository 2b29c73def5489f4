use std::{env, path::Path};

use log::LevelFilter;
use tsp_3d_derive::{CliOptions, CliValue, KvDisplay};

use crate::{
    Error, Result,
    constants::{
        DEFAULT_EXHAUSTIVE_BELOW, DEFAULT_HELD_KARP_MAX, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH,
        STDIO_PATH,
    },
    io::output::CostFormat,
};

/// Runtime options for solving and I/O.
#[derive(Clone, Debug, CliOptions, KvDisplay)]
pub struct SolverOptions {
    /// Waypoint file. `-` reads stdin.
    #[cli(long = "input")]
    pub input: String,
    /// Tour file. `-` writes stdout.
    #[cli(long = "output")]
    pub output: String,
    /// Which solver to run; `auto` picks by point count.
    #[cli(long = "strategy", parse_with = "Strategy::parse")]
    pub strategy: Strategy,
    /// `auto` runs exhaustive search when there are fewer points than this.
    #[cli(long = "exhaustive-below")]
    pub exhaustive_below: usize,
    /// `auto` runs Held-Karp up to and including this many points.
    #[cli(long = "held-karp-max")]
    pub held_karp_max: usize,
    /// Fixed number of decimals for the cost. Unset prints the shortest
    /// representation that round-trips.
    #[cli(long = "cost-decimals")]
    #[kv(fmt = "opt")]
    pub cost_decimals: Option<usize>,
    #[cli(long = "log-level", parse_with = "LogLevel::parse")]
    pub log_level: LogLevel,
    #[cli(long = "log-format", parse_with = "LogFormat::parse")]
    pub log_format: LogFormat,
    /// Include timestamps in log lines.
    #[cli(long = "log-timestamp", flag)]
    pub log_timestamp: bool,
    /// Optional output file path for logs. Empty means stderr.
    #[cli(long = "log-output")]
    pub log_output: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "strategy")]
pub enum Strategy {
    Auto,
    #[cli(alias = "brute-force")]
    Exhaustive,
    #[cli(alias = "dp")]
    HeldKarp,
    #[cli(alias = "nn", alias = "greedy")]
    NearestNeighbor,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "log-level")]
pub enum LogLevel {
    Error,
    #[cli(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "log-format")]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT_PATH.to_string(),
            output: DEFAULT_OUTPUT_PATH.to_string(),
            strategy: Strategy::Auto,
            exhaustive_below: DEFAULT_EXHAUSTIVE_BELOW,
            held_karp_max: DEFAULT_HELD_KARP_MAX,
            cost_decimals: None,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
            log_timestamp: false,
            log_output: String::new(),
        }
    }
}

impl SolverOptions {
    pub fn from_args() -> Result<Self> {
        Self::parse_from_iter(env::args().skip(1))
    }

    pub fn parse_from_iter<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_owned())
            .peekable();

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Error::Usage(Self::usage()));
            }

            let Some(raw_name) = arg.strip_prefix("--") else {
                return Err(Error::invalid_input(format!(
                    "Unexpected argument: {arg}\n\n{}",
                    Self::usage()
                )));
            };

            if raw_name.is_empty() {
                return Err(Error::invalid_input(format!(
                    "Invalid option name: {arg}\n\n{}",
                    Self::usage()
                )));
            }

            let (name, value) = Self::split_arg(raw_name, &mut args);
            if !options.apply_cli_option(&name, value)? {
                return Err(Error::invalid_input(format!(
                    "Unknown option: --{name}\n\n{}",
                    Self::usage()
                )));
            }
        }

        Ok(options)
    }

    pub fn usage() -> &'static str {
        concat!(
            "Usage:\n",
            "  tsp-3d [options]\n",
            "  tsp-3d --input - --output - < waypoints.txt\n\n",
            "Input records are `id x y z`, whitespace separated. The tour is written as\n",
            "the visited ids, the first id again, then the total cost.\n\n",
            "Options:\n",
            "  --input <path>             Waypoint file, `-` for stdin (default: waypoints.txt)\n",
            "  --output <path>            Tour file, `-` for stdout (default: path.txt)\n",
            "  --strategy <auto|exhaustive|held-karp|nearest-neighbor>\n",
            "  --exhaustive-below <usize> Exhaustive search below this many points (default: 8)\n",
            "  --held-karp-max <usize>    Held-Karp up to this many points (default: 15)\n",
            "  --cost-decimals <usize>    Print the cost with fixed decimals\n",
            "  --log-level <error|warn|info|debug|trace|off>\n",
            "  --log-format <compact|pretty>\n",
            "  --log-timestamp[=<bool>]\n",
            "  --no-log-timestamp\n",
            "  --log-output <path>\n",
            "  --help\n",
            "\n",
            "Examples:\n",
            "  tsp-3d\n",
            "  tsp-3d --input waypoints.txt --output path.txt --log-level=info\n",
            "  tsp-3d --strategy=held-karp --cost-decimals=2 --output - < waypoints.txt\n",
            "  tsp-3d --exhaustive-below=6 --held-karp-max=18 --log-level=debug\n",
        )
    }

    pub fn log_output_path(&self) -> Option<&Path> {
        stdio_or_path(&self.log_output)
    }

    pub fn output_path(&self) -> Option<&Path> {
        stdio_or_path(&self.output)
    }

    pub fn input_path(&self) -> Option<&Path> {
        stdio_or_path(&self.input)
    }

    pub fn cost_format(&self) -> CostFormat {
        CostFormat::from_decimals(self.cost_decimals)
    }
}

fn stdio_or_path(raw: &str) -> Option<&Path> {
    let raw = raw.trim();
    if raw.is_empty() || raw == STDIO_PATH {
        None
    } else {
        Some(Path::new(raw))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use log::LevelFilter;

    use super::{LogFormat, LogLevel, SolverOptions, Strategy};
    use crate::{CostFormat, Error};

    #[test]
    fn defaults_match_original_file_names_and_thresholds() {
        let options = SolverOptions::default();

        assert_eq!(options.input, "waypoints.txt");
        assert_eq!(options.output, "path.txt");
        assert_eq!(options.strategy, Strategy::Auto);
        assert_eq!(options.exhaustive_below, 8);
        assert_eq!(options.held_karp_max, 15);
        assert_eq!(options.cost_decimals, None);
        assert_eq!(options.log_level, LogLevel::Warn);
        assert!(!options.log_timestamp);
    }

    #[test]
    fn log_level_maps_to_expected_filter() {
        assert_eq!(LogLevel::Error.to_filter(), LevelFilter::Error);
        assert_eq!(LogLevel::Warn.to_filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_filter(), LevelFilter::Info);
        assert_eq!(LogLevel::Debug.to_filter(), LevelFilter::Debug);
        assert_eq!(LogLevel::Trace.to_filter(), LevelFilter::Trace);
        assert_eq!(LogLevel::Off.to_filter(), LevelFilter::Off);
    }

    #[test]
    fn strategy_parses_canonical_names_and_aliases() {
        assert_eq!(Strategy::parse("auto").expect("parse"), Strategy::Auto);
        assert_eq!(Strategy::parse("HELD-KARP").expect("parse"), Strategy::HeldKarp);
        assert_eq!(Strategy::parse("dp").expect("parse"), Strategy::HeldKarp);
        assert_eq!(Strategy::parse("brute-force").expect("parse"), Strategy::Exhaustive);
        assert_eq!(Strategy::parse("nn").expect("parse"), Strategy::NearestNeighbor);
        assert_eq!(Strategy::NearestNeighbor.to_string(), "nearest-neighbor");
        assert_eq!(
            Strategy::VALUES,
            &["auto", "exhaustive", "held-karp", "nearest-neighbor"]
        );
    }

    #[test]
    fn strategy_rejects_unknown_values() {
        let err = Strategy::parse("simulated-annealing").expect_err("unknown strategy");
        assert!(err.to_string().contains(
            "Invalid value for --strategy: simulated-annealing (expected auto|exhaustive|held-karp|nearest-neighbor)"
        ));
    }

    #[test]
    fn parse_from_iter_applies_known_cli_options() {
        let options = SolverOptions::parse_from_iter([
            "--input=in.txt",
            "--output",
            "out.txt",
            "--strategy=nearest-neighbor",
            "--exhaustive-below=5",
            "--held-karp-max=12",
            "--cost-decimals=2",
            "--log-level=debug",
            "--log-format=pretty",
            "--log-timestamp",
            "--log-output=run.log",
        ])
        .expect("parse options");

        assert_eq!(options.input, "in.txt");
        assert_eq!(options.output, "out.txt");
        assert_eq!(options.strategy, Strategy::NearestNeighbor);
        assert_eq!(options.exhaustive_below, 5);
        assert_eq!(options.held_karp_max, 12);
        assert_eq!(options.cost_decimals, Some(2));
        assert_eq!(options.log_level, LogLevel::Debug);
        assert_eq!(options.log_format, LogFormat::Pretty);
        assert!(options.log_timestamp);
        assert_eq!(options.log_output, "run.log");
    }

    #[test]
    fn log_timestamp_flag_accepts_explicit_bool_and_negation() {
        let options =
            SolverOptions::parse_from_iter(["--log-timestamp=off"]).expect("parse options");
        assert!(!options.log_timestamp);

        let options = SolverOptions::parse_from_iter(["--log-timestamp", "--no-log-timestamp"])
            .expect("parse options");
        assert!(!options.log_timestamp);
    }

    #[test]
    fn parse_from_iter_rejects_negated_flag_with_value() {
        let err = SolverOptions::parse_from_iter(["--no-log-timestamp=true"])
            .expect_err("expected flag value rejection");
        assert!(err.to_string().contains("does not take a value"));
    }

    #[test]
    fn parse_from_iter_rejects_invalid_bool() {
        let err = SolverOptions::parse_from_iter(["--log-timestamp=maybe"])
            .expect_err("invalid bool should fail");
        assert!(
            err.to_string()
                .contains("Invalid boolean for --log-timestamp: maybe")
        );
    }

    #[test]
    fn parse_from_iter_rejects_non_numeric_threshold() {
        let err = SolverOptions::parse_from_iter(["--held-karp-max=lots"])
            .expect_err("non numeric should fail");
        assert!(err.to_string().contains("Invalid value for --held-karp-max: lots"));
    }

    #[test]
    fn parse_from_iter_requires_value_for_input() {
        let err =
            SolverOptions::parse_from_iter(["--input"]).expect_err("missing value should fail");
        assert!(err.to_string().contains("Missing value for --input"));
    }

    #[test]
    fn parse_from_iter_rejects_unknown_option() {
        let err = SolverOptions::parse_from_iter(["--two-opt=1"])
            .expect_err("expected unknown option error");
        assert!(err.to_string().contains("Unknown option: --two-opt"));
    }

    #[test]
    fn parse_from_iter_rejects_unexpected_positional_argument() {
        let err = SolverOptions::parse_from_iter(["waypoints.txt"])
            .expect_err("expected positional error");
        assert!(err.to_string().contains("Unexpected argument: waypoints.txt"));
    }

    #[test]
    fn parse_from_iter_help_returns_usage() {
        let err =
            SolverOptions::parse_from_iter(["--help"]).expect_err("help should short-circuit");
        assert!(matches!(err, Error::Usage(_)));
        assert!(err.to_string().starts_with("Usage:"));
    }

    #[test]
    fn stdio_paths_treat_empty_and_dash_as_streams() {
        let options = SolverOptions {
            input: "-".to_string(),
            output: " ".to_string(),
            ..SolverOptions::default()
        };
        assert!(options.input_path().is_none());
        assert!(options.output_path().is_none());
        assert!(options.log_output_path().is_none());
    }

    #[test]
    fn paths_are_returned_for_non_empty_values() {
        let options = SolverOptions {
            log_output: "out/run.log".to_string(),
            ..SolverOptions::default()
        };
        assert_eq!(
            options.input_path().expect("path should exist"),
            Path::new("waypoints.txt")
        );
        assert_eq!(
            options.output_path().expect("path should exist"),
            Path::new("path.txt")
        );
        assert_eq!(
            options.log_output_path().expect("path should exist"),
            Path::new("out/run.log")
        );
    }

    #[test]
    fn cost_format_follows_cost_decimals() {
        assert_eq!(SolverOptions::default().cost_format(), CostFormat::Shortest);

        let options = SolverOptions {
            cost_decimals: Some(3),
            ..SolverOptions::default()
        };
        assert_eq!(options.cost_format(), CostFormat::Fixed(3));
    }

    #[test]
    fn display_lists_every_option() {
        let rendered = SolverOptions::default().to_string();
        assert!(rendered.contains("strategy"));
        assert!(rendered.contains("= auto"));
        assert!(rendered.contains("cost_decimals"));
        assert!(rendered.contains("= -"));
    }

    #[test]
    fn display_marks_unset_cost_decimals() {
        let line_for = |options: &SolverOptions, key: &str| {
            options
                .to_string()
                .lines()
                .find(|line| line.trim_start().starts_with(key))
                .map(|line| line.split(" = ").nth(1).unwrap_or_default().to_string())
        };

        let mut options = SolverOptions::default();
        assert_eq!(line_for(&options, "cost_decimals").as_deref(), Some("-"));
        assert_eq!(line_for(&options, "strategy").as_deref(), Some("auto"));

        options.cost_decimals = Some(2);
        assert_eq!(line_for(&options, "cost_decimals").as_deref(), Some("2"));
    }
}
