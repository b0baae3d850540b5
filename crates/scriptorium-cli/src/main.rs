use anyhow::{Context, Result, bail};
use scriptorium_config::Config;
use scriptorium_engine::{Settings, io, parse_document, render_summary};
use std::{env, path::PathBuf, process};

const USAGE: &str = "Usage: scriptorium <transcription> [--config <path>] [--table <path>]";

#[derive(Debug, PartialEq, Eq)]
struct Args {
    transcription: PathBuf,
    config: Option<PathBuf>,
    table: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut transcription = None;
    let mut config = None;
    let mut table = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            "--table" => {
                let path = iter.next().context("--table needs a path")?;
                table = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            path if transcription.is_none() => transcription = Some(PathBuf::from(path)),
            extra => bail!("unexpected argument {extra}"),
        }
    }

    Ok(Args {
        transcription: transcription.context("no transcription file given")?,
        config,
        table,
    })
}

/// Loads the configuration named on the command line, or the default one.
/// Without any configuration only the title header is known.
fn load_config(path: Option<&PathBuf>) -> Result<Option<Config>> {
    match path {
        Some(path) => {
            let config = Config::load_from_path(path)?;
            if config.is_none() {
                bail!("config file '{}' not found", path.display());
            }
            Ok(config)
        }
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::warn!(
                    "No config file at {}, only #[title] headers are configured",
                    Config::config_path().display()
                );
            }
            Ok(config)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let argv: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let config = load_config(args.config.as_ref())?;
    let (settings, table_output) = match config {
        Some(config) => (
            Settings::new(config.header_tags, config.shortcut_mappings)?,
            config.table_output,
        ),
        None => (Settings::default(), None),
    };

    log::info!("Parsing {}", args.transcription.display());
    let rope = io::read_transcription(&args.transcription)?;
    let doc = parse_document(&rope, &settings)
        .with_context(|| format!("Failed to parse {}", args.transcription.display()))?;

    print!("{}", render_summary(&doc));

    if let Some(path) = args.table.or(table_output) {
        io::write_records(&path, &doc.records.to_delimited('\t'))?;
        log::info!("Wrote {} records to {}", doc.records.len(), path.display());
    }

    if !doc.diagnostics.is_empty() {
        log::warn!("{} line(s) could not be fully interpreted", doc.diagnostics.len());
    }
    Ok(())
}
