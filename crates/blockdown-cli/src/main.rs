//! Command-line interface for blockdown.
//!
//! Reads HTML from a file or stdin and writes Markdown to stdout or a file.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use blockdown::{ConversionOptions, convert_html};
use clap::Parser;
use log::debug;

/// Convert HTML to Markdown.
#[derive(Parser, Debug)]
#[command(name = "blockdown", version, about, long_about = None)]
struct Cli {
    /// Input HTML file (use "-" or omit for stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Keep <img> elements as raw HTML instead of Markdown image syntax
    #[arg(long)]
    keep_img_tags: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let html = read_input(cli.input.as_deref())?;
    debug!("read {} bytes of HTML", html.len());

    let options = ConversionOptions::default().with_keep_img_tags(cli.keep_img_tags);
    let markdown = convert_html(&html, &options).context("failed to convert HTML")?;

    let mut rendered = markdown;
    if !rendered.is_empty() {
        rendered.push('\n');
    }

    match &cli.output {
        Some(path) => fs::write(path, rendered).with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes()).context("failed to write to stdout")?;
            stdout.flush().context("failed to write to stdout")?;
        }
    }

    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            let mut html = String::new();
            io::stdin()
                .read_to_string(&mut html)
                .context("failed to read from stdin")?;
            Ok(html)
        }
    }
}
