//! CLI entrypoint for brew-grep
//!
//! Runs as the `brew grep` external command: picks a search tool, lists the
//! taps and streams each tap's matches to stdout.

use brew_grep::cli::{Cli, LOG_ENV, USAGE};
use brew_grep::{
    CommandRegistry, HomebrewTaps, ReportOptions, SearchError, SearchOptions, Searcher, SystemEnv,
};
use std::io::Write;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// No search tool could be resolved, or the search failed.
const EXIT_FAILURE: u8 = 1;
/// Nothing to search for.
const EXIT_USAGE: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::parse_args(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let registry = CommandRegistry::system();

    if cli.list_commands {
        for name in registry.names() {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    if cli.info {
        return print_report(&registry, &cli).await;
    }

    if !cli.is_query() && cli.search_args.is_empty() {
        eprintln!("{USAGE}");
        return ExitCode::from(EXIT_USAGE);
    }

    let tool = match registry.select(cli.command.as_deref()) {
        Ok(tool) => tool,
        Err(e) => return fail(&e),
    };

    if cli.which {
        println!("{}", tool.command_name());
        return ExitCode::SUCCESS;
    }

    let searcher = Searcher::new(
        tool,
        SearchOptions {
            exclude_casks: cli.exclude_casks,
        },
    );
    info!("Searching with: {}", searcher.tool().display_name());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = if cli.tap_dir.is_empty() {
        match HomebrewTaps::discover(&SystemEnv) {
            Ok(taps) => searcher.search(&taps, &cli.search_args, &mut out).await,
            Err(e) => Err(e),
        }
    } else {
        searcher.search(&cli.tap_dir, &cli.search_args, &mut out).await
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

async fn print_report(registry: &CommandRegistry, cli: &Cli) -> ExitCode {
    let selected = registry.select(cli.command.as_deref()).ok();
    let reports = registry.report(selected, &ReportOptions::default()).await;

    let mut out = std::io::stdout().lock();
    let written = if cli.json {
        serde_json::to_writer_pretty(&mut out, &reports)
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(out))
    } else {
        reports.iter().try_for_each(|report| writeln!(out, "{report}"))
    };

    match written {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&SearchError::Output(e)),
    }
}

fn fail(error: &SearchError) -> ExitCode {
    eprintln!("Error: {error}");
    eprintln!("{}", error.fix_suggestion());
    ExitCode::from(EXIT_FAILURE)
}
