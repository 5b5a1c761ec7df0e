//! hancut CLI - Chinese chat message normalization and segmentation tool
//!
//! Every command takes the text as an argument, or reads stdin line by line
//! when it is omitted.

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use hancut::{
    clean_message, convert_full_width_char, CutMode, CutOptions, ExtractOptions, Hancut,
    KeywordMethod, ProcessOptions,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Normalize and segment Chinese chat messages
#[derive(Parser)]
#[command(
    name = "hancut",
    version,
    about = "Normalize and segment Chinese chat messages",
    long_about = "hancut - Chinese chat message normalization and segmentation.\n\n\
                  Usage:\n  \
                  hancut cut <text>         Boundary-aware segmentation\n  \
                  hancut clean <text>       Punctuation cleanup\n  \
                  echo <text> | hancut cut  Process stdin line by line"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log pipeline diagnostics to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Extra user dictionary for the segmenter
    #[arg(long, global = true)]
    dict: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the message cleaner punctuation rules
    Clean {
        /// Message text (default: stdin)
        text: Option<String>,
    },

    /// Convert full-width characters and CJK quotes to ASCII
    #[command(visible_alias = "fw")]
    Width {
        /// Message text (default: stdin)
        text: Option<String>,
    },

    /// Segment Chinese runs, keeping placeholder tags intact
    Cut {
        /// Message text (default: stdin)
        text: Option<String>,
    },

    /// Print the raw engine tokens
    Tokens {
        /// Message text (default: stdin)
        text: Option<String>,

        /// Segmentation mode
        #[arg(long, default_value = "precise")]
        mode: ModeArg,

        /// Disable HMM new-word discovery
        #[arg(long)]
        no_hmm: bool,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Print tokens with part-of-speech tags
    Tag {
        /// Message text (default: stdin)
        text: Option<String>,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract the top keywords
    Extract {
        /// Message text (default: stdin)
        text: Option<String>,

        /// Number of keywords
        #[arg(long, default_value_t = hancut::segment::DEFAULT_TOP_K)]
        top_k: usize,

        /// Ranking algorithm
        #[arg(long, default_value = "tfidf")]
        method: MethodArg,

        /// Output JSON (keywords with weights)
        #[arg(long)]
        json: bool,
    },

    /// Run full-width conversion, cleaning and segmentation
    Process {
        /// Message text (default: stdin)
        text: Option<String>,

        /// Stages to run
        #[arg(long, default_value = "standard")]
        preset: Preset,
    },

    /// Show version information
    Version,
}

/// Segmentation mode
#[derive(Clone, ValueEnum)]
enum ModeArg {
    /// Most likely segmentation
    Precise,
    /// Precise plus overlapping sub-words
    Search,
    /// Every dictionary word
    All,
}

impl From<ModeArg> for CutMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Precise => CutMode::Precise,
            ModeArg::Search => CutMode::Search,
            ModeArg::All => CutMode::All,
        }
    }
}

/// Keyword ranking algorithm
#[derive(Clone, ValueEnum)]
enum MethodArg {
    /// TF-IDF weighting
    Tfidf,
    /// TextRank graph ranking
    Textrank,
}

impl From<MethodArg> for KeywordMethod {
    fn from(method: MethodArg) -> Self {
        match method {
            MethodArg::Tfidf => KeywordMethod::TfIdf,
            MethodArg::Textrank => KeywordMethod::TextRank,
        }
    }
}

/// Processing preset
#[derive(Clone, ValueEnum)]
enum Preset {
    /// Segmentation only
    Minimal,
    /// Full-width conversion and segmentation (default)
    Standard,
    /// Full-width conversion, cleaning and segmentation
    Full,
}

impl From<Preset> for ProcessOptions {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Minimal => ProcessOptions::minimal(),
            Preset::Standard => ProcessOptions::default(),
            Preset::Full => ProcessOptions::full(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "hancut=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn build_hancut(dict: Option<&PathBuf>) -> hancut::Result<Hancut> {
    match dict {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using user dictionary");
            Hancut::new().with_user_dict(path)
        }
        None => Ok(Hancut::new()),
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Clean { text } => {
            for_each_input(text, |line| Ok(clean_message(line)))?;
        }

        Commands::Width { text } => {
            for_each_input(text, |line| Ok(convert_full_width_char(line)))?;
        }

        Commands::Cut { text } => {
            let hancut = build_hancut(cli.dict.as_ref())?;
            for_each_input(text, |line| Ok(hancut.cut(line)?))?;
        }

        Commands::Tokens {
            text,
            mode,
            no_hmm,
            json,
        } => {
            let hancut = build_hancut(cli.dict.as_ref())?;
            let mut options = CutOptions::new().with_mode(mode.into());
            if no_hmm {
                options = options.without_hmm();
            }

            for_each_input(text, |line| {
                let tokens = hancut.tokens(line, options)?;
                if json {
                    Ok(serde_json::to_string(&tokens)?)
                } else {
                    Ok(tokens.join(" "))
                }
            })?;
        }

        Commands::Tag { text, json } => {
            let hancut = build_hancut(cli.dict.as_ref())?;
            for_each_input(text, |line| {
                let tokens = hancut.tag(line)?;
                if json {
                    Ok(serde_json::to_string(&tokens)?)
                } else {
                    Ok(tokens
                        .iter()
                        .map(|t| format!("{}/{}", t.word, t.tag))
                        .collect::<Vec<_>>()
                        .join(" "))
                }
            })?;
        }

        Commands::Extract {
            text,
            top_k,
            method,
            json,
        } => {
            let hancut = build_hancut(cli.dict.as_ref())?;
            let options = ExtractOptions::new()
                .with_top_k(top_k)
                .with_method(method.into());

            for_each_input(text, |line| {
                let keywords = hancut.extract(line, &options)?;
                if json {
                    Ok(serde_json::to_string(&keywords)?)
                } else {
                    Ok(keywords
                        .into_iter()
                        .map(|k| k.keyword)
                        .collect::<Vec<_>>()
                        .join(" "))
                }
            })?;
        }

        Commands::Process { text, preset } => {
            let hancut = build_hancut(cli.dict.as_ref())?.with_options(preset.into());
            for_each_input(text, |line| Ok(hancut.process(line)?))?;
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

/// Applies `f` to the text argument, or to every stdin line when absent,
/// printing one result per line.
fn for_each_input<F>(text: Option<String>, mut f: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnMut(&str) -> Result<String, Box<dyn std::error::Error>>,
{
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match text {
        Some(text) => {
            writeln!(handle, "{}", f(text.as_str())?)?;
        }
        None => {
            for line in io::stdin().lock().lines() {
                let line = line?;
                writeln!(handle, "{}", f(line.as_str())?)?;
            }
        }
    }

    Ok(())
}

fn print_version() {
    println!("{} {}", "hancut".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Chinese chat message normalization and segmentation");
    println!();
    println!("Segmentation engine: jieba");
    println!("Plugin directory: {}", hancut::MESSAGE_PLUGIN_DIR);
}
