use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use regex_lens::report::{self, CrosstermOutput, Options, PlainOutput};
use regex_lens::{BuiltinKnowledge, Flags, Request, analyze};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern to explain
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// Flags, any of "gimsuy"
    #[arg(short = 'f', long, default_value = "g")]
    flags: Flags,

    /// Sample text to match against
    #[arg(short = 't', long, conflicts_with = "file")]
    text: Option<String>,

    /// Read the sample text from a file ("-" for stdin)
    #[arg(long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,

    /// Disable colours
    #[arg(long)]
    no_color: bool,

    /// Narrate the contents of groups and sets
    #[arg(short = 'n', long)]
    narrate: bool,
}

fn sample_text(args: &Args) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    match &args.file {
        Some(path) if path.as_os_str() == "-" => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => Ok(String::new()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let text = sample_text(&args)?;
    let request = Request::new(args.pattern.as_str(), args.flags, text);

    let analysis = analyze(&request, &BuiltinKnowledge);

    if args.json {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &analysis)?;
        println!();
    } else {
        let options = Options {
            narrate: args.narrate,
        };
        if args.no_color || !io::stdout().is_terminal() {
            let mut out = PlainOutput::default();
            report::render(&mut out, &analysis, &request.text, options);
            print!("{}", out.buffer);
        } else {
            let mut out = CrosstermOutput::new(io::stdout().lock());
            report::render(&mut out, &analysis, &request.text, options);
            out.flush()?;
        }
    }

    if !analysis.validation.valid {
        std::process::exit(1);
    }
    Ok(())
}
