use clap::{Parser, Subcommand, ValueEnum};

/// Portfolio aggregation backend
#[derive(Parser, Debug)]
#[command(
    name = "folio",
    about = "Portfolio aggregation backend for GitHub projects, competitive-programming stats, and contact relay",
    version,
    author,
    long_about = "folio aggregates a GitHub account's repositories into display-ready project \
                  cards with best-effort technology detection, pulls competitive-programming \
                  statistics from LeetCode, Codeforces, and CodeChef, and relays contact-form \
                  submissions via a transactional email API."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(
        short = 'v',
        long,
        global = true,
        help = "Increase verbosity (debug-level logging)"
    )]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Run the HTTP API server",
        long_about = "Serves GET /api/projects, GET /api/stats, POST /api/contact, \
                      and GET /health.\n\n\
                      Examples:\n  \
                      folio serve\n  \
                      folio serve --bind 0.0.0.0:3001"
    )]
    Serve(ServeArgs),

    #[command(
        about = "Aggregate project cards once and print them",
        long_about = "Lists the configured user's repositories, filters them against the \
                      project allow-list, detects technologies, and prints the resulting \
                      cards.\n\n\
                      Examples:\n  \
                      folio projects\n  \
                      folio projects --username someone-else --format json"
    )]
    Projects(ProjectsArgs),

    #[command(
        about = "Fetch competitive-programming stats once and print them",
        long_about = "Fetches LeetCode, Codeforces, and CodeChef statistics for the \
                      configured handles.\n\n\
                      Examples:\n  \
                      folio stats\n  \
                      folio stats --format json"
    )]
    Stats(StatsArgs),

    #[command(
        about = "Check upstream API reachability",
        long_about = "Probes the GitHub API and the three stats providers, and reports \
                      whether the email relay is configured."
    )]
    Health(HealthArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    #[arg(
        short = 'b',
        long,
        value_name = "ADDR",
        help = "Bind address override (e.g. 0.0.0.0:3001)"
    )]
    pub bind: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ProjectsArgs {
    #[arg(short = 'u', long, value_name = "USER", help = "GitHub username override")]
    pub username: Option<String>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        long,
        value_name = "SECONDS",
        help = "Per-request timeout override in seconds"
    )]
    pub timeout: Option<u64>,
}

#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct HealthArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_default_projects_args() {
        let args = CliArgs::parse_from(["folio", "projects"]);
        match args.command {
            Commands::Projects(projects_args) => {
                assert_eq!(projects_args.format, OutputFormatArg::Human);
                assert!(projects_args.username.is_none());
                assert!(projects_args.timeout.is_none());
            }
            _ => panic!("Expected Projects command"),
        }
    }

    #[test]
    fn test_projects_with_options() {
        let args = CliArgs::parse_from([
            "folio",
            "projects",
            "--username",
            "someone",
            "--format",
            "json",
            "--timeout",
            "30",
        ]);

        match args.command {
            Commands::Projects(projects_args) => {
                assert_eq!(projects_args.username.as_deref(), Some("someone"));
                assert_eq!(projects_args.format, OutputFormatArg::Json);
                assert_eq!(projects_args.timeout, Some(30));
            }
            _ => panic!("Expected Projects command"),
        }
    }

    #[test]
    fn test_serve_with_bind() {
        let args = CliArgs::parse_from(["folio", "serve", "--bind", "0.0.0.0:3001"]);
        match args.command {
            Commands::Serve(serve_args) => {
                assert_eq!(serve_args.bind.as_deref(), Some("0.0.0.0:3001"));
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_stats_command() {
        let args = CliArgs::parse_from(["folio", "stats"]);
        match args.command {
            Commands::Stats(stats_args) => {
                assert_eq!(stats_args.format, OutputFormatArg::Human);
            }
            _ => panic!("Expected Stats command"),
        }
    }

    #[test]
    fn test_global_verbose_flag() {
        let args = CliArgs::parse_from(["folio", "-v", "stats"]);
        assert!(args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_global_quiet_flag() {
        let args = CliArgs::parse_from(["folio", "-q", "health"]);
        assert!(!args.verbose);
        assert!(args.quiet);
    }

    #[test]
    fn test_log_level_flag() {
        let args = CliArgs::parse_from(["folio", "--log-level", "debug", "serve"]);
        assert_eq!(args.log_level, Some("debug".to_string()));
    }
}
