//! Cross-test a repository of solutions against peers' test suites.
//!
//! Resolves peer names against the registry, clones missing mirrors into the
//! storage root, then runs every `<assignment>/<task>` program of the subject
//! repository against each peer's `<assignment>/<task>/tests` through the
//! configured Tester, printing aggregated statistics at the end.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::debug;

use crosstest::exit_codes;
use crosstest::io::config::{DEFAULT_CONFIG_FILE, load_config};
use crosstest::io::git::GitCli;
use crosstest::io::tester::CommandTester;
use crosstest::logging::{self, LogOptions};
use crosstest::report::{RunReport, render_summary, write_json_report};
use crosstest::run::run_crosstest;
use crosstest::select::{SelectRequest, parse_who, select_repos};

#[derive(Parser, Debug)]
#[command(
    name = "crosstest",
    version,
    about = "Run your solutions against other people's tests"
)]
struct Cli {
    /// Path to the repository under test.
    #[arg(default_value = ".")]
    repo: PathBuf,

    /// Names separated with ",". People whose tests you want to take.
    #[arg(short, long, default_value = "")]
    who: String,

    /// Mirror and test against every repository in the registry.
    #[arg(long)]
    saveall: bool,

    /// Your own name; your repository is never selected.
    #[arg(short, long)]
    me: Option<String>,

    /// Print debug output.
    #[arg(short = 'v', long, visible_alias = "verbose")]
    debug: bool,

    /// Disable colours in log output.
    #[arg(long)]
    nocolors: bool,

    /// Configuration file (defaults apply if it does not exist).
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Print the registry and exit.
    #[arg(long)]
    list: bool,

    /// Also write the statistics as JSON to this path.
    #[arg(long)]
    report_json: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(LogOptions {
        verbose: cli.debug,
        color: !cli.nocolors,
    });
    let code = match run(cli) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::FATAL
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<()> {
    debug!(?cli, "arguments parsed");
    let config = load_config(&cli.config).context("load config")?;
    let registry = config.registry();

    if cli.list {
        for entry in registry.entries() {
            println!("{}\t{}\t{}", entry.owner, entry.group, entry.url);
        }
        return Ok(());
    }

    let request = SelectRequest {
        who: parse_who(&cli.who),
        saveall: cli.saveall,
        me: cli.me.clone(),
    };
    let selection = select_repos(&registry, &request)?;
    debug!(selected = selection.entries.len(), "repositories selected");

    let tester = CommandTester::from_config(&config.tester)?;
    let started_at = Utc::now();
    let stats = run_crosstest(&cli.repo, &config, &selection.entries, &GitCli, &tester)?;
    let finished_at = Utc::now();

    print!("{}", render_summary(&stats));

    if let Some(path) = &cli.report_json {
        write_json_report(path, &RunReport::new(&stats, started_at, finished_at))?;
    }
    Ok(())
}
