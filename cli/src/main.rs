//! Command-line front end: loads documentation search index files and runs
//! one query, printing `label<TAB>page[#anchor]` per hit.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use symdex_core::{Index, ParseError, RawRecord};
use symdex_search::{SearchConfig, SearchEngine, SearchQuery};
use thiserror::Error;

#[derive(Parser)]
#[command(
    name = "symdex",
    version,
    about = "Query a generated documentation search index"
)]
struct Cli {
    /// Query text (case-insensitive substring; prefix matches rank first)
    query: String,

    /// Index files: `.json` interchange files or generator search shards,
    /// concatenated in the order given
    #[arg(short, long = "index", required = true, num_args = 1..)]
    index: Vec<PathBuf>,

    /// Maximum number of hits to print
    #[arg(short, long)]
    limit: Option<usize>,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("failed to read {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {}", path.display(), source)]
    Parse {
        path: PathBuf,
        source: symdex_core::Error,
    },

    #[error(transparent)]
    Malformed(#[from] symdex_core::MalformedIndexError),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("symdex: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let index = load_files(&cli.index)?;
    let engine = SearchEngine::new(
        index,
        SearchConfig {
            result_limit: cli.limit,
        },
    );

    for entry in engine.query(&SearchQuery::Substring(cli.query.clone())) {
        println!("{}\t{}", entry.label, entry.target.href());
    }
    Ok(())
}

/// Reads every file, concatenates their records in argument order, and loads
/// them as one index. The load stays atomic across files: any malformed
/// record anywhere aborts the whole thing.
fn load_files(paths: &[PathBuf]) -> Result<Index, CliError> {
    let mut records: Vec<RawRecord> = Vec::new();
    for path in paths {
        let src = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
        records.extend(parse_records(path, &src)?);
    }
    Ok(Index::load(records)?)
}

fn parse_records(path: &Path, src: &str) -> Result<Vec<RawRecord>, CliError> {
    let parsed: Result<Vec<RawRecord>, symdex_core::Error> = match path
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some("json") => serde_json::from_str(src)
            .map_err(|err| symdex_core::Error::Parse(ParseError::Json(err))),
        // Generator shards are `.js`, but take anything else as one too.
        _ => symdex_core::searchdata::parse(src).map_err(Into::into),
    };
    parsed.map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
