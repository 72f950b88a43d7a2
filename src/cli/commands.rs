//! Command implementations for the Javelin CLI.

use std::io::{BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::SearchEngine;
use crate::error::Result;
use crate::query::Strategy;
use crate::store::Record;

/// Execute a CLI command.
pub fn execute_command(args: JavelinArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search_corpus(search_args.clone(), &args),
        Command::List(list_args) => list_corpus(list_args.clone(), &args),
        Command::Repl(repl_args) => {
            let stdin = std::io::stdin();
            run_repl(repl_args.clone(), &args, &mut stdin.lock(), &mut std::io::stdout())
        }
    }
}

/// Load the engine from a corpus file.
fn load_engine(corpus: &Path, cli_args: &JavelinArgs) -> Result<SearchEngine> {
    let engine = SearchEngine::from_path(corpus)
        .with_context(|| format!("failed to load corpus {}", corpus.display()))?;

    if cli_args.verbosity() > 1 {
        println!("Loaded {} records from {}", engine.len(), corpus.display());
    }
    Ok(engine)
}

/// Run a one-shot query against a corpus file.
fn search_corpus(args: SearchArgs, cli_args: &JavelinArgs) -> Result<()> {
    // Strategy names are validated here, at the boundary; unknown names are
    // rejected rather than defaulted.
    let strategy = Strategy::from_str(&args.strategy)?;
    let engine = load_engine(&args.corpus, cli_args)?;

    let positions = engine.search(&args.query, strategy)?;
    let results = collect_results(&engine, &args.query, strategy, &positions)?;

    output_result(&results, cli_args)
}

/// Print every record of a corpus file in position order.
fn list_corpus(args: ListArgs, cli_args: &JavelinArgs) -> Result<()> {
    let engine = load_engine(&args.corpus, cli_args)?;
    output_result(&collect_listing(&engine), cli_args)
}

/// The interactive menu loop.
///
/// Reads menu selections from `input` and writes to `output`, so tests can
/// drive it with in-memory buffers.
pub fn run_repl<R: BufRead, W: Write>(
    args: ReplArgs,
    cli_args: &JavelinArgs,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let engine = load_engine(&args.corpus, cli_args)?;

    loop {
        writeln!(output, "=== Menu ===")?;
        writeln!(output, "1. Search records")?;
        writeln!(output, "2. Print all records")?;
        writeln!(output, "0. Exit")?;

        let Some(choice) = read_line(input)? else {
            break; // EOF
        };

        match choice.trim() {
            "1" => {
                writeln!(output, "Select a matching strategy: ALL, ANY, NONE")?;
                let Some(strategy_line) = read_line(input)? else {
                    break;
                };
                let strategy = match Strategy::from_str(strategy_line.trim()) {
                    Ok(strategy) => strategy,
                    Err(e) => {
                        writeln!(output, "{e}")?;
                        continue;
                    }
                };

                writeln!(output, "Enter a query to search all matching records.")?;
                let Some(query) = read_line(input)? else {
                    break;
                };

                let positions = engine.search(&query, strategy)?;
                let results = collect_results(&engine, &query, strategy, &positions)?;
                writeln!(output, "{}", results.human())?;
            }
            "2" => {
                writeln!(output, "{}", collect_listing(&engine).human())?;
            }
            "0" => break,
            _ => writeln!(output, "Incorrect option! Try again.")?,
        }
    }

    Ok(())
}

/// Collect every record of the corpus, in position order.
fn collect_listing(engine: &SearchEngine) -> CorpusListing {
    let records = engine
        .store()
        .iter()
        .enumerate()
        .map(|(position, text)| Record::new(text, position))
        .collect::<Vec<_>>();

    CorpusListing {
        total_records: records.len(),
        records,
    }
}

/// Resolve matched positions back to record text.
fn collect_results(
    engine: &SearchEngine,
    query: &str,
    strategy: Strategy,
    positions: &ahash::AHashSet<usize>,
) -> Result<SearchResults> {
    let mut hits = Vec::with_capacity(positions.len());
    for &position in positions {
        hits.push(Record::new(engine.record(position)?, position));
    }
    // The engine result is unordered; sort by position for stable display.
    hits.sort_by_key(|r| r.position);

    Ok(SearchResults {
        query: query.to_string(),
        strategy: strategy.to_string(),
        total_hits: hits.len(),
        hits,
    })
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
