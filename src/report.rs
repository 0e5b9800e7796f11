//! Human-readable rendering of an [`Analysis`].
//!
//! Rendering goes through the [`Output`] trait so the same report can be
//! written to a colour terminal ([`CrosstermOutput`]) or collected as plain
//! text ([`PlainOutput`]) for `--no-color` and for tests.

use std::io::Write;

use crossterm::style::{Print, PrintStyledContent, Stylize};
use itertools::Itertools;

use crate::engine::Match;
use crate::explain::outline;
use crate::flags::Flags;
use crate::session::Analysis;

/// Role of a piece of text; each output decides how to show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Heading,
    Kind,
    Dim,
    Warning,
    Error,
    /// A match in the sample text; the index alternates the highlight.
    Match(usize),
}

/// Destination for report text.
pub trait Output {
    fn write(&mut self, text: &str, style: Style);

    fn newline(&mut self) {
        self.write("\n", Style::Plain);
    }

    fn line(&mut self, text: &str, style: Style) {
        self.write(text, style);
        self.newline();
    }
}

/// Styled output through crossterm.
pub struct CrosstermOutput<W: Write> {
    out: W,
}

impl<W: Write> CrosstermOutput<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Output for CrosstermOutput<W> {
    fn write(&mut self, text: &str, style: Style) {
        let styled = match style {
            Style::Plain => {
                crossterm::queue!(self.out, Print(text)).ok();
                return;
            }
            Style::Heading => text.bold(),
            Style::Kind => text.cyan(),
            Style::Dim => text.dark_grey(),
            Style::Warning => text.yellow(),
            Style::Error => text.red().bold(),
            Style::Match(i) if i % 2 == 0 => text.black().on_green(),
            Style::Match(_) => text.black().on_cyan(),
        };
        crossterm::queue!(self.out, PrintStyledContent(styled)).ok();
    }
}

/// Unstyled output collected into a string; matches are shown in brackets.
#[derive(Debug, Default)]
pub struct PlainOutput {
    pub buffer: String,
}

impl Output for PlainOutput {
    fn write(&mut self, text: &str, style: Style) {
        match style {
            Style::Match(_) => {
                self.buffer.push('[');
                self.buffer.push_str(text);
                self.buffer.push(']');
            }
            _ => self.buffer.push_str(text),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Include the narration of each token's contents.
    pub narrate: bool,
}

/// Render `analysis` of the sample `text`.
pub fn render(out: &mut dyn Output, analysis: &Analysis, text: &str, options: Options) {
    out.write("Pattern: ", Style::Heading);
    out.line(&format!("/{}/{}", analysis.pattern, analysis.flags), Style::Plain);
    for letter in analysis.flags.chars() {
        if let Some(meaning) = Flags::describe(letter) {
            out.write(&format!("  {letter}  "), Style::Kind);
            out.line(meaning, Style::Dim);
        }
    }

    out.write("Complexity: ", Style::Heading);
    match (analysis.score, analysis.difficulty) {
        (Some(score), Some(difficulty)) => {
            out.line(&format!("{score}/100 ({})", difficulty.label()), Style::Plain)
        }
        _ => out.line("n/a", Style::Dim),
    }

    render_tokens(out, analysis, options);
    out.newline();

    if let Some(message) = &analysis.validation.error_message {
        out.write("Invalid pattern: ", Style::Error);
        out.line(message, Style::Plain);
        return;
    }
    if let Some(message) = &analysis.execution_error {
        out.write("Matching failed: ", Style::Error);
        out.line(message, Style::Plain);
        return;
    }
    render_matches(out, &analysis.matches, text);
}

fn render_tokens(out: &mut dyn Output, analysis: &Analysis, options: Options) {
    out.line(&format!("Tokens ({}):", analysis.tokens.len()), Style::Heading);
    for (token, explanation) in analysis.tokens.iter().zip(&analysis.explanations) {
        out.write(&format!("  {:>3}  ", token.position), Style::Dim);
        out.write(&format!("{:<24}", token.kind.as_str()), Style::Kind);
        out.write(&token.value, Style::Plain);
        out.line(&format!("  {}", explanation.title), Style::Dim);

        if let Some(matches) = &explanation.matches {
            out.line(&format!("         matches {matches}"), Style::Plain);
        }
        if let Some(repetition) = &explanation.repetition {
            out.line(&format!("         repeated {repetition}"), Style::Plain);
        }
        for caveat in &explanation.caveats {
            out.line(&format!("         note: {caveat}"), Style::Warning);
        }
        if options.narrate {
            for (depth, entry) in outline(&explanation.narration) {
                let indent = "  ".repeat(depth + 2);
                out.line(&format!("       {indent}- {}", entry.line()), Style::Plain);
            }
        }
    }
}

fn render_matches(out: &mut dyn Output, matches: &[Match], text: &str) {
    let count = match matches.len() {
        1 => "1 match".to_string(),
        n => format!("{n} matches"),
    };
    out.line(&count, Style::Heading);
    if text.is_empty() {
        return;
    }

    let mut cursor = 0;
    for (i, m) in matches.iter().enumerate() {
        if m.start < cursor || m.end > text.len() {
            continue;
        }
        out.write(&text[cursor..m.start], Style::Plain);
        out.write(&m.value, Style::Match(i));
        cursor = m.end;
    }
    out.line(&text[cursor..], Style::Plain);

    for (i, m) in matches.iter().enumerate() {
        out.write(&format!("  {}. ", i + 1), Style::Dim);
        out.write(&format!("{:?}", m.value), Style::Plain);
        out.write(&format!(" at {}..{}", m.start, m.end), Style::Dim);
        if !m.groups.is_empty() {
            let groups = m
                .groups
                .iter()
                .enumerate()
                .map(|(n, g)| match g {
                    Some(value) => format!("${}={value:?}", n + 1),
                    None => format!("${}=-", n + 1),
                })
                .join(" ");
            out.write(&format!("  {groups}"), Style::Plain);
        }
        if !m.named.is_empty() {
            let named = m
                .named
                .iter()
                .map(|(name, value)| match value {
                    Some(value) => format!("{name}={value:?}"),
                    None => format!("{name}=-"),
                })
                .join(" ");
            out.write(&format!("  {named}"), Style::Plain);
        }
        out.newline();
    }
}
