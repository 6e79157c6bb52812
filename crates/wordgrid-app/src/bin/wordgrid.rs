//! `wordgrid` command line: look words up and inspect screen layouts.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use wordgrid_app::{
    AppConfig, DictionaryClient, FilterDelegate, FilterStyle, HomeModel, HttpTransport,
    LoadingOverlay, WordDetail,
};
use wordgrid_core::Rect;
use wordgrid_layout::Surface;

#[derive(Debug, Parser)]
#[command(name = "wordgrid", version, about = "Dictionary lookups from the terminal")]
struct Cli {
    /// Configuration file (defaults to the XDG location)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, PartialEq, Subcommand)]
enum Command {
    /// Print definitions and synonyms for a word
    Lookup {
        word: String,
        /// Only show these parts of speech
        #[arg(short, long)]
        filter: Vec<String>,
        /// Skip the synonym request
        #[arg(long)]
        no_synonyms: bool,
    },
    /// List or clear recent searches
    Recent {
        #[arg(long)]
        clear: bool,
    },
    /// Print the detail screen's track frames as JSON
    Layout {
        word: String,
        #[arg(long, default_value_t = 375.0)]
        width: f32,
        #[arg(long, default_value_t = 667.0)]
        height: f32,
    },
}

struct LogDelegate;

impl FilterDelegate for LogDelegate {
    fn on_filter_selected(&mut self, label: &str) {
        debug!(label, "filter toggled");
    }

    fn on_filter_clear(&mut self) {
        debug!("filters cleared");
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    match path {
        Some(path) => Ok(AppConfig::load_from_file(path)?),
        None => Ok(AppConfig::load()),
    }
}

/// Search like the home screen does, so the term lands in recent searches.
fn search(
    config: &AppConfig,
    word: &str,
) -> Result<(WordDetail, DictionaryClient<HttpTransport>)> {
    let client = DictionaryClient::new(HttpTransport::new(), config);
    let mut home = HomeModel::new(client.clone(), config.open_recent(), LoadingOverlay::new());
    let entry = home
        .search(word)
        .map_err(|err| anyhow!("{}: {err}", err.title()))?;
    Ok((WordDetail::new(entry, config.max_synonyms), client))
}

/// Select the filters named in `wanted`, ignoring case.
fn apply_filters(detail: &mut WordDetail, wanted: &[String]) {
    for name in wanted {
        let index = detail
            .filters()
            .labels()
            .iter()
            .position(|label| label.eq_ignore_ascii_case(name));
        match index {
            Some(index) => {
                detail.toggle_filter(index, &mut LogDelegate);
            }
            None => warn!(filter = %name, "no such part of speech"),
        }
    }
}

fn render_detail(detail: &WordDetail, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", detail.title())?;
    if let Some(phonetic) = detail.phonetic() {
        writeln!(out, "{phonetic}")?;
    }
    if let Some(audio) = detail.audio_url() {
        writeln!(out, "Audio: {audio}")?;
    }
    for row in detail.rows() {
        writeln!(out)?;
        writeln!(out, "{}{}", row.number_label(), row.part_of_speech)?;
        writeln!(out, "    {}", row.definition)?;
        if let Some(example) = &row.example {
            writeln!(out, "    \"{example}\"")?;
        }
    }
    let synonyms = detail.synonyms();
    if !synonyms.is_empty() {
        writeln!(out)?;
        writeln!(out, "Synonyms: {}", synonyms.join(", "))?;
    }
    Ok(())
}

fn lookup(config: &AppConfig, word: &str, filters: &[String], synonyms: bool) -> Result<()> {
    let (mut detail, client) = search(config, word)?;
    apply_filters(&mut detail, filters);

    if synonyms {
        if let Err(err) = detail.load_synonyms(&client) {
            warn!(error = %err, "synonyms unavailable");
        }
    }

    render_detail(&detail, &mut io::stdout().lock())?;
    Ok(())
}

fn recent(config: &AppConfig, clear: bool) -> Result<()> {
    let mut recent = config.open_recent();
    if clear {
        recent.clear().context("clearing recent searches")?;
        return Ok(());
    }
    let mut out = io::stdout().lock();
    for (i, term) in recent.iter().enumerate() {
        writeln!(out, "{}. {term}", i + 1)?;
    }
    Ok(())
}

fn layout(config: &AppConfig, word: &str, width: f32, height: f32) -> Result<()> {
    let (detail, _) = search(config, word)?;
    let grid = detail.build_grid(&FilterStyle::default())?;

    let mut surface = Surface::new(grid);
    surface.resize(Rect::new(0.0, 0.0, width, height));
    let json = serde_json::to_string_pretty(surface.root().states())?;
    writeln!(io::stdout().lock(), "{json}")?;
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    match &cli.command {
        Command::Lookup {
            word,
            filter,
            no_synonyms,
        } => lookup(&config, word, filter, !no_synonyms),
        Command::Recent { clear } => recent(&config, *clear),
        Command::Layout {
            word,
            width,
            height,
        } => layout(&config, word, *width, *height),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use wordgrid_app::WordEntry;

    fn detail() -> WordDetail {
        let entry: WordEntry = serde_json::from_str(
            r#"{
                "word": "lamp",
                "phonetic": "/læmp/",
                "phonetics": [{"text": "/læmp/", "audio": "https://example.test/lamp.mp3"}],
                "meanings": [
                    {"partOfSpeech": "noun", "definitions": [
                        {"definition": "A device for giving light.", "example": "a desk lamp"}
                    ]},
                    {"partOfSpeech": "verb", "definitions": [
                        {"definition": "To supply with lamps."}
                    ]}
                ]
            }"#,
        )
        .unwrap();
        WordDetail::new(entry, 5)
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lookup_with_filters() {
        let cli = Cli::try_parse_from([
            "wordgrid", "-vv", "lookup", "lamp", "-f", "noun", "--filter", "verb",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.command,
            Command::Lookup {
                word: "lamp".to_string(),
                filter: vec!["noun".to_string(), "verb".to_string()],
                no_synonyms: false,
            }
        );
    }

    #[test]
    fn test_parse_layout_defaults() {
        let cli = Cli::try_parse_from(["wordgrid", "layout", "lamp"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Layout {
                word: "lamp".to_string(),
                width: 375.0,
                height: 667.0,
            }
        );
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["wordgrid"]).is_err());
    }

    #[test]
    fn test_apply_filters_ignores_case_and_unknown() {
        let mut d = detail();
        apply_filters(&mut d, &["VERB".to_string(), "adverb".to_string()]);
        assert!(d.filters().is_selected("Verb"));
        assert_eq!(d.rows().len(), 1);
    }

    #[test]
    fn test_render_detail() {
        let mut out = Vec::new();
        render_detail(&detail(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Lamp\n/læmp/\nAudio: https://example.test/lamp.mp3\n"));
        assert!(text.contains("1 - Noun\n    A device for giving light.\n    \"a desk lamp\"\n"));
        assert!(text.contains("2 - Verb\n"));
        assert!(!text.contains("Synonyms"));
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let err = load_config(Some(&PathBuf::from("/nonexistent/wordgrid.yaml"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/wordgrid.yaml"));
    }
}
