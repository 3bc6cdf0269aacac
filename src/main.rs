use clap::Parser;
use folio::{FolioError, FormatConfig, Formatter, convert_file, load_config};
use std::path::PathBuf;

/// Renders a dictionary as an XSL-FO document and optionally formats it to PDF.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about, long_about = None)]
struct Args {
    /// Path to the dictionary JSON file
    dictionary: PathBuf,

    /// Where to write the XSL-FO document
    output: PathBuf,

    /// Language of the parts to render
    #[arg(short, long, default_value = "ja")]
    language: String,

    /// Style configuration JSON overriding the default house style
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also run the formatter and write a PDF here
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// Formatter executable used with --pdf
    #[arg(long, default_value = folio::formatter::DEFAULT_FORMATTER)]
    formatter: String,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<(), FolioError> {
    let args = Args::parse();
    let level = if args.verbose { "folio=debug" } else { "folio=info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => FormatConfig::default(),
    };
    convert_file(&args.dictionary, &args.output, &args.language, config)?;

    if let Some(pdf) = &args.pdf {
        Formatter::new(args.formatter.as_str()).run(&args.output, pdf)?;
    }
    Ok(())
}
