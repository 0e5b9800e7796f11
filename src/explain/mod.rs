//! Plain-language explanations of tokens.
//!
//! [`Resolver`] turns a [`Token`](crate::pattern::Token) into an
//! [`Explanation`] looked up from a [`KnowledgeBase`]; [`explain_contents`]
//! narrates the inside of a group or set as nested bullets.

pub mod knowledge;
pub mod narrate;
pub mod resolver;

use serde::{Serialize, Serializer};

pub use knowledge::{BuiltinKnowledge, Category, KnowledgeBase};
pub use narrate::{describe_quantifier, explain_contents, narrate_token};
pub use resolver::Resolver;

/// What one construct does, for a detail panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syntax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caveats: Vec<String>,
    /// How often the construct repeats, when a quantifier is folded into it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetition: Option<String>,
    /// Narration of the construct's contents, filled in on demand.
    /// Serialized as a flat outline of `{depth, text, quantifier}` rows.
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "serialize_outline")]
    pub narration: Vec<Narration>,
}

impl Explanation {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

/// One bullet in the narration of a sub-pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    pub text: String,
    pub quantifier: Option<String>,
    pub children: Vec<Narration>,
}

impl Narration {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quantifier: None,
            children: Vec::new(),
        }
    }

    /// The bullet text with its quantifier clause appended.
    pub fn line(&self) -> String {
        match (&self.quantifier, self.text.strip_suffix(':')) {
            (Some(q), Some(head)) => format!("{head} ({q}):"),
            (Some(q), None) => format!("{}, {}", self.text, q),
            (None, _) => self.text.clone(),
        }
    }
}

impl Drop for Narration {
    // Unlink descendants one at a time so deep trees don't drop recursively.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut entry) = pending.pop() {
            pending.append(&mut entry.children);
        }
    }
}

/// Pre-order walk over `entries` and all their descendants, with depth.
pub fn outline(entries: &[Narration]) -> impl Iterator<Item = (usize, &Narration)> {
    let mut stack: Vec<_> = entries.iter().rev().map(|entry| (0, entry)).collect();
    std::iter::from_fn(move || {
        let (depth, entry) = stack.pop()?;
        stack.extend(entry.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, entry))
    })
}

/// Render a whole narration as an indented bullet list.
pub fn render_narration(entries: &[Narration]) -> String {
    let mut out = String::new();
    for (depth, entry) in outline(entries) {
        out.push_str(&"  ".repeat(depth));
        out.push_str("- ");
        out.push_str(&entry.line());
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct OutlineRow<'a> {
    depth: usize,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantifier: Option<&'a str>,
}

fn serialize_outline<S: Serializer>(
    entries: &[Narration],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(outline(entries).map(|(depth, entry)| OutlineRow {
        depth,
        text: &entry.text,
        quantifier: entry.quantifier.as_deref(),
    }))
}
