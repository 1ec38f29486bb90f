use crate::listing::{
    run_catalog_check, run_catalog_list, run_catalog_options, run_profile, CatalogArgs,
    ListArgs, ProfileArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use intern_match::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "InternMatch",
    about = "Browse internship postings and capture student profiles",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the internship catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Validate a student profile and show it alongside the postings
    Profile(ProfileArgs),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// List postings, optionally narrowed by exact-match filters
    List(ListArgs),
    /// Show the values available for each filter
    Options(CatalogArgs),
    /// Parse the data file strictly and report any problem
    Check(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured catalog CSV path
    #[arg(long)]
    pub(crate) data_path: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Catalog { command } => match command {
            CatalogCommand::List(args) => run_catalog_list(args),
            CatalogCommand::Options(args) => run_catalog_options(args),
            CatalogCommand::Check(args) => run_catalog_check(args),
        },
        Command::Profile(args) => run_profile(args),
    }
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
    fn missing_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["intern-match-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn list_accepts_filter_flags() {
        let cli = Cli::try_parse_from([
            "intern-match-api",
            "catalog",
            "list",
            "--location",
            "Remote",
            "--education-level",
            "Master",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Catalog {
                command: CatalogCommand::List(args),
            }) => {
                assert_eq!(args.location.as_deref(), Some("Remote"));
                assert_eq!(args.education_level.as_deref(), Some("Master"));
                assert!(args.duration.is_none());
            }
            other => panic!("expected catalog list, got {other:?}"),
        }
    }
}
