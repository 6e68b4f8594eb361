use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::{generate, Shell};
use rayon::prelude::*;
use std::io::{self, BufRead};
use wordcase::cli::output::{print_results, Conversion, InputResult, OutputFormat};
use wordcase::{Config, Convention, Conventions};

#[derive(Parser, Debug)]
#[command(name = "wordcase")]
#[command(version, about = "Convert identifiers between naming conventions", long_about = None)]
struct Cli {
    /// Strings to convert (reads lines from stdin when none are given)
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// Convention to convert to (e.g., snake, kebab-case, camelCase)
    #[arg(short, long)]
    case: Option<Convention>,

    /// Show every convention for each input
    #[arg(short, long, conflicts_with = "case")]
    all: bool,

    /// Extra keyword to keep fully uppercase (repeatable)
    #[arg(short, long)]
    keyword: Vec<String>,

    /// Do not seed the keyword set with the built-in acronyms
    #[arg(long)]
    no_default_keywords: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "wordcase", &mut io::stdout());
        return Ok(());
    }

    init_logging(cli.verbose);

    let config = Config::load(cli.case, cli.keyword.clone(), cli.no_default_keywords)?;
    log::debug!("Configuration: {:?}", config);

    let conventions = Conventions::with_keywords(config.keyword_set());

    let inputs = if cli.inputs.is_empty() {
        read_stdin_lines()?
    } else {
        cli.inputs.clone()
    };
    log::info!("Converting {} inputs", inputs.len());

    let targets: Vec<Convention> = if cli.all {
        Convention::ALL.to_vec()
    } else {
        vec![config.case]
    };

    let results: Vec<InputResult> = inputs
        .par_iter()
        .map(|input| InputResult {
            input: input.clone(),
            conversions: targets
                .iter()
                .map(|&case| Conversion {
                    case,
                    output: conventions.convert(case, input),
                })
                .collect(),
        })
        .collect();

    print_results(&results, cli.all, !cli.no_color, &cli.format)
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn read_stdin_lines() -> Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .map(|line| line.context("Failed to read from stdin"))
        .collect()
}
