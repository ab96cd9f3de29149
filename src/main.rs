//! prealgebra-drill-gen CLI - writes a worksheet and its answer key.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use prealgebra_drill_gen::{
    generate_equation_set,
    render::{file_stamp, to_json, Document, DEFAULT_PER_PAGE},
    GenerationRequest, DEFAULT_PROBLEM_COUNT,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "prealgebra-drill-gen")]
#[command(version)]
#[command(about = "Generate a staged set of pre-algebra practice problems with an answer key")]
struct Cli {
    /// Seed for reproducible output (drawn and printed when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of problems to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_PROBLEM_COUNT as u64,
          value_parser = clap::value_parser!(u64).range(1..))]
    count: u64,

    /// Directory the documents are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Problems per page
    #[arg(long, default_value_t = DEFAULT_PER_PAGE as u64,
          value_parser = clap::value_parser!(u64).range(1..))]
    per_page: u64,

    /// Also write the full set with metadata as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--verbose`.
fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let count = usize::try_from(cli.count).context("--count is too large for this platform")?;
    let per_page = usize::try_from(cli.per_page).context("--per-page is too large for this platform")?;

    let mut request = GenerationRequest::new(count);
    request.seed = cli.seed;

    info!(count, seed = ?cli.seed, "generating equation set");
    let set = generate_equation_set(request).context("Failed to generate equation set")?;
    info!(seed = set.seed, count = set.len(), "generation complete");
    println!("Generated {} equations", set.len());
    println!("  Seed used: {}", set.seed);

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("Failed to create output directory {}", cli.out_dir.display()))?;

    let now = Local::now().naive_local();
    let stamp = file_stamp(&now);

    let problems_path = cli.out_dir.join(format!("equations_{stamp}.txt"));
    write_file(&problems_path, &Document::problems(&set, &now, per_page).render())?;
    println!("Created: {}", problems_path.display());

    let answers_path = cli.out_dir.join(format!("answers_{stamp}.txt"));
    write_file(&answers_path, &Document::answers(&set, &now, per_page).render())?;
    println!("Created: {}", answers_path.display());

    if cli.json {
        let json_path = cli.out_dir.join(format!("equations_{stamp}.json"));
        let value = to_json(&set, &now).context("Failed to serialize equation set")?;
        let text = serde_json::to_string_pretty(&value).context("Failed to format JSON")?;
        write_file(&json_path, &text)?;
        println!("Created: {}", json_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("prealgebra-drill-gen").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_apply_without_flags() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.seed, None);
        assert_eq!(cli.count, DEFAULT_PROBLEM_COUNT as u64);
        assert_eq!(cli.per_page, DEFAULT_PER_PAGE as u64);
        assert_eq!(cli.out_dir, PathBuf::from("."));
        assert!(!cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn all_flags_parse() {
        let cli = parse(&[
            "--seed", "42", "-n", "10", "--out-dir", "out", "--per-page", "20", "--json", "-v",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.count, 10);
        assert_eq!(cli.per_page, 20);
        assert_eq!(cli.out_dir, PathBuf::from("out"));
        assert!(cli.json);
        assert!(cli.verbose);
    }

    #[test]
    fn zero_count_and_page_size_are_rejected() {
        assert!(parse(&["--count", "0"]).is_err());
        assert!(parse(&["-n", "0"]).is_err());
        assert!(parse(&["--per-page", "0"]).is_err());
        assert!(parse(&["--count", "-3"]).is_err());
        assert_eq!(parse(&["--count", "1"]).unwrap().count, 1);
    }
}
