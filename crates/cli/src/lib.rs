use anyhow::{bail, Context as AnyhowContext, Result};
use cefr_annotator::{default_output_path, AnnotateStats, Annotator, AnnotatorConfig};
use cefr_classifier::{
    Classification, ClassificationReport, Classifier, HttpRemoteLookup, RemoteConfig,
    DEFAULT_REMOTE_TIMEOUT_MS,
};
use cefr_lexicon::Lexicon;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::env;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

const ENV_REMOTE: &str = "CEFR_REMOTE";
const ENV_REMOTE_URL: &str = "CEFR_REMOTE_URL";
const ENV_REMOTE_TIMEOUT_MS: &str = "CEFR_REMOTE_TIMEOUT_MS";
const ENV_LEXICON: &str = "CEFR_LEXICON";

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "cefr")]
#[command(about = "Tag words, phrases and flashcard exports with CEFR levels", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Ask the remote level service first (overrides CEFR_REMOTE)
    #[arg(long, global = true)]
    remote: bool,

    /// Remote level service endpoint (overrides CEFR_REMOTE_URL)
    #[arg(long, global = true)]
    remote_url: Option<String>,

    /// Remote wait limit in milliseconds (overrides CEFR_REMOTE_TIMEOUT_MS)
    #[arg(long, global = true)]
    remote_timeout_ms: Option<u64>,

    /// TOML lexicon replacing the built-in word lists (overrides CEFR_LEXICON)
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single word
    Word(WordArgs),

    /// Classify a word or phrase; phrases take the level of their hardest word
    Text(TextArgs),

    /// Append a level to every record of a tab-separated file
    File(FileArgs),

    /// Classify lines read from stdin until `exit` or end of input
    Interactive,
}

#[derive(Args)]
struct WordArgs {
    word: String,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct TextArgs {
    text: String,

    /// Output JSON with a per-token breakdown
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct FileArgs {
    /// Tab-separated input file
    input: PathBuf,

    /// Output path (default: <stem>_CEFR.<ext> next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Classify at most this many entries; later records are copied unchanged
    #[arg(long)]
    max_entries: Option<usize>,

    /// Lines classified at once, at most 1024 (output order is unaffected)
    #[arg(long, default_value_t = 1)]
    concurrency: usize,

    /// Zero-based index of the field holding the text
    #[arg(long, default_value_t = 3)]
    text_field: usize,

    /// Zero-based index of the field receiving the level
    #[arg(long, default_value_t = 11)]
    level_field: usize,

    /// Records with fewer fields are copied unchanged
    #[arg(long, default_value_t = 12)]
    min_fields: usize,

    /// Prefix marking comment lines
    #[arg(long, default_value = "#")]
    comment_marker: String,

    /// Output run statistics as JSON
    #[arg(long)]
    json: bool,
}

impl FileArgs {
    fn config(&self) -> AnnotatorConfig {
        AnnotatorConfig {
            text_field: self.text_field,
            level_field: self.level_field,
            min_fields: self.min_fields,
            comment_marker: self.comment_marker.clone(),
            max_entries: self.max_entries,
            concurrency: self.concurrency,
        }
    }
}

#[derive(Serialize)]
struct FileReport {
    input: PathBuf,
    output: PathBuf,
    #[serde(flatten)]
    stats: AnnotateStats,
}

fn env_truthy(var: &str) -> bool {
    env::var(var)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn env_nonempty(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.trim().is_empty())
}

pub async fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();

    let json_output = match &cli.command {
        Commands::Word(args) => args.json,
        Commands::Text(args) => args.json,
        Commands::File(args) => args.json,
        Commands::Interactive => false,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let classifier = build_classifier(&cli)?;

    match cli.command {
        Commands::Word(args) => run_classify(&classifier, &args.word, args.json).await?,
        Commands::Text(args) => run_classify(&classifier, &args.text, args.json).await?,
        Commands::File(args) => run_file(classifier, args).await?,
        Commands::Interactive => run_interactive(&classifier).await?,
    }

    Ok(())
}

fn build_classifier(cli: &Cli) -> Result<Classifier> {
    let lexicon_path = cli
        .lexicon
        .clone()
        .or_else(|| env_nonempty(ENV_LEXICON).map(PathBuf::from));
    let lexicon = match lexicon_path {
        Some(path) => {
            let lexicon = Lexicon::load(&path)
                .with_context(|| format!("Failed to load lexicon {}", path.display()))?;
            log::debug!("Loaded {} words from {}", lexicon.word_count(), path.display());
            Arc::new(lexicon)
        }
        None => Lexicon::shared(),
    };
    let classifier = Classifier::new(lexicon);

    if !(cli.remote || env_truthy(ENV_REMOTE)) {
        return Ok(classifier);
    }

    let Some(url) = cli.remote_url.clone().or_else(|| env_nonempty(ENV_REMOTE_URL)) else {
        bail!("--remote requires --remote-url or {ENV_REMOTE_URL}");
    };
    let timeout_ms = match cli.remote_timeout_ms {
        Some(ms) => ms,
        None => match env_nonempty(ENV_REMOTE_TIMEOUT_MS) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_REMOTE_TIMEOUT_MS} must be an integer, got {raw:?}"))?,
            None => DEFAULT_REMOTE_TIMEOUT_MS,
        },
    };

    let remote = HttpRemoteLookup::new(RemoteConfig::new(url).with_timeout_ms(timeout_ms))
        .context("Failed to set up remote level lookup")?;
    Ok(classifier.with_remote(Arc::new(remote)))
}

async fn run_classify(classifier: &Classifier, input: &str, json: bool) -> Result<()> {
    let classification = classifier.classify(input).await;
    if json {
        let report = ClassificationReport {
            input: input.to_string(),
            classification,
        };
        print_stdout(&serde_json::to_string_pretty(&report)?)
    } else {
        print_stdout(classification.level.as_str())
    }
}

async fn run_file(classifier: Classifier, args: FileArgs) -> Result<()> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    let annotator = Annotator::new(classifier, args.config())?;

    let stats = annotator
        .annotate_file(&args.input, &output)
        .await
        .with_context(|| format!("Failed to annotate {}", args.input.display()))?;

    log::info!(
        "Tagged {} of {} lines into {} ({} passed through, {} from remote)",
        stats.annotated,
        stats.lines,
        output.display(),
        stats.passed_through(),
        stats.remote
    );
    for (level, count) in &stats.by_level {
        log::debug!("  {level}: {count}");
    }

    if args.json {
        let report = FileReport {
            input: args.input,
            output,
            stats,
        };
        print_stdout(&serde_json::to_string_pretty(&report)?)?;
    }
    Ok(())
}

async fn run_interactive(classifier: &Classifier) -> Result<()> {
    log::info!("Enter a word or phrase per line; `exit` quits");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") {
            break;
        }
        if input.is_empty() {
            continue;
        }
        let Classification { level, .. } = classifier.classify(input).await;
        print_stdout(&format!("{input} → {level}"))?;
    }
    Ok(())
}
