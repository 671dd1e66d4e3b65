//! redmark CLI - rich-text document to wiki markup conversion tool

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use redmark::{parse_json_file, JsonFormat, MarkupSink, RenderOptions, WriteSink};

#[derive(Parser)]
#[command(name = "redmark")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert rich-text documents to Redmine/Textile wiki markup", long_about = None)]
struct Cli {
    /// Input document file (JSON document tree)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to wiki markup
    #[command(alias = "w")]
    Wiki {
        /// Input document file (JSON document tree)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Disable character escaping
        #[arg(long)]
        no_escape: bool,

        /// Disable list-prefix rewriting
        #[arg(long)]
        no_lists: bool,

        /// Maximum frame nesting depth
        #[arg(long, default_value = "64")]
        max_depth: usize,
    },

    /// Convert a document to plain text
    Text {
        /// Input document file (JSON document tree)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Re-emit the document tree as normalized JSON
    Json {
        /// Input document file (JSON document tree)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document structure information
    Info {
        /// Input document file (JSON document tree)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Wiki {
            input,
            output,
            no_escape,
            no_lists,
            max_depth,
        }) => cmd_wiki(&input, output.as_deref(), no_escape, no_lists, max_depth),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert to wiki markup if input is provided
            if let Some(input) = cli.input {
                cmd_wiki(&input, cli.output.as_deref(), false, false, 64)
            } else {
                println!("{}", "Usage: redmark <FILE> [OUTPUT]".yellow());
                println!("       redmark --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_wiki(
    input: &Path,
    output: Option<&Path>,
    no_escape: bool,
    no_lists: bool,
    max_depth: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_json_file(input)?;

    let options = RenderOptions::new()
        .with_escaping(!no_escape)
        .with_list_rewrites(!no_lists)
        .with_max_depth(max_depth);

    let markup = redmark::to_wiki(&doc, &options)?;

    if let Some(path) = output {
        fs::write(path, &markup)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        let mut sink = WriteSink::new(io::stdout());
        sink.accept(&markup)?;
    }

    Ok(())
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_json_file(input)?;
    let text = redmark::to_text(&doc);

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_json_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = redmark::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_json_file(input)?;
    let result = redmark::to_wiki_with_stats(&doc, &RenderOptions::new())?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Frames".bold(), result.stats.frame_count);
    println!("{}: {}", "Tables".bold(), result.stats.table_count);
    println!("{}: {}", "Blocks".bold(), result.stats.block_count);
    println!("{}: {}", "Fragments".bold(), result.stats.fragment_count);

    println!();
    println!("{}", "Output Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Words".bold(), result.stats.word_count);
    println!("{}: {}", "Characters".bold(), result.stats.char_count);
    println!("{}: {} bytes", "Markup".bold(), result.content_len());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "redmark".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Rich-text to wiki markup conversion tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/iyulab/redmark".dimmed()
    );
    println!("License: MIT");
}
