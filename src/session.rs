//! The analysis pipeline and the bookkeeping around repeated edits.
//!
//! [`analyze`] runs tokenize, score, explain, validate and execute for one
//! request. [`Session`] keeps the result of the newest request only, and
//! [`Debouncer`] coalesces bursts of edits into one request.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::complexity::{self, Difficulty};
use crate::engine::{self, Match, Validation};
use crate::explain::{Explanation, KnowledgeBase, Resolver};
use crate::flags::Flags;
use crate::pattern::{Token, tokenize};

/// One pattern, flag set and sample text to analyze together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub pattern: String,
    pub flags: Flags,
    pub text: String,
}

impl Request {
    pub fn new(pattern: impl Into<String>, flags: Flags, text: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            flags,
            text: text.into(),
        }
    }
}

/// Everything computed for a request.
#[derive(Debug, Serialize)]
pub struct Analysis {
    pub pattern: String,
    pub flags: String,
    pub tokens: Vec<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// One per token, in token order.
    pub explanations: Vec<Explanation>,
    pub validation: Validation,
    pub matches: Vec<Match>,
    /// Set when a valid pattern failed while matching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_error: Option<String>,
}

/// Run the whole pipeline for `request`.
///
/// Matching only runs when the pattern compiles.
pub fn analyze<K: KnowledgeBase + ?Sized>(request: &Request, kb: &K) -> Analysis {
    let tokens = tokenize(&request.pattern);
    let score = complexity::score(&tokens);
    let resolver = Resolver::new(kb).with_flags(request.flags);
    let explanations = tokens.iter().map(|t| resolver.explain(t)).collect();

    let compiled = engine::compile(&request.pattern, request.flags);
    let (validation, matches, execution_error) = match compiled {
        Ok(compiled) => match compiled.execute(&request.text) {
            Ok(matches) => (Validation::ok(), matches, None),
            Err(err) => (Validation::ok(), Vec::new(), Some(err.to_string())),
        },
        Err(err) => (Validation::failed(&err), Vec::new(), None),
    };

    Analysis {
        pattern: request.pattern.clone(),
        flags: request.flags.to_string(),
        tokens,
        score,
        difficulty: score.map(Difficulty::from_score),
        explanations,
        validation,
        matches,
        execution_error,
    }
}

/// Identifies one submitted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Keeps the analysis of the newest request; older results are discarded.
pub struct Session<K> {
    kb: K,
    generation: u64,
    latest: Option<Analysis>,
}

impl<K: KnowledgeBase> Session<K> {
    pub fn new(kb: K) -> Self {
        Self {
            kb,
            generation: 0,
            latest: None,
        }
    }

    /// Start a request, superseding every earlier one.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Compute the analysis for a started request.
    pub fn analyze(&self, request: &Request) -> Analysis {
        analyze(request, &self.kb)
    }

    /// Store `analysis` if `ticket` is still the newest request.
    ///
    /// Returns false, dropping the analysis, when a newer request has started.
    pub fn complete(&mut self, ticket: Ticket, analysis: Analysis) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.latest = Some(analysis);
        true
    }

    /// Begin, analyze and complete in one step.
    pub fn run(&mut self, request: &Request) -> Option<&Analysis> {
        let ticket = self.begin();
        let analysis = self.analyze(request);
        self.complete(ticket, analysis);
        self.latest.as_ref()
    }

    pub fn latest(&self) -> Option<&Analysis> {
        self.latest.as_ref()
    }
}

/// Trailing-edge debouncer: an item is released once no newer item has been
/// pushed for `window`.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Replace any pending item and restart the window.
    pub fn push(&mut self, item: T, now: Instant) {
        self.pending = Some((item, now));
    }

    /// Release the pending item if its window has elapsed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, pushed)) if now.saturating_duration_since(*pushed) >= self.window => {
                self.pending.take().map(|(item, _)| item)
            }
            _ => None,
        }
    }

    /// When the pending item becomes due, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, pushed)| *pushed + self.window)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::BuiltinKnowledge;
    use crate::pattern::TokenKind;

    fn request(pattern: &str, text: &str) -> Request {
        Request::new(pattern, Flags::global(), text)
    }

    #[test]
    fn valid_pattern_is_matched() {
        let analysis = analyze(&request(r"\d+", "a1 b22"), &BuiltinKnowledge);
        assert!(analysis.validation.valid);
        assert_eq!(analysis.matches.len(), 2);
        assert_eq!(analysis.explanations.len(), analysis.tokens.len());
        assert_eq!(analysis.flags, "g");
    }

    #[test]
    fn invalid_pattern_is_not_matched() {
        let analysis = analyze(&request("a(", "a("), &BuiltinKnowledge);
        assert!(!analysis.validation.valid);
        assert!(analysis.validation.error_message.is_some());
        assert!(analysis.matches.is_empty());
        assert_eq!(analysis.tokens[1].kind, TokenKind::Literal);
        assert_eq!(analysis.tokens[1].value, "(");
    }

    #[test]
    fn execution_failure_keeps_pattern_valid() {
        let analysis = analyze(&request(r"(a+)+\1b", &"a".repeat(30)), &BuiltinKnowledge);
        assert!(analysis.validation.valid);
        assert!(analysis.matches.is_empty());
        let message = analysis.execution_error.unwrap();
        assert!(message.starts_with("execution failed: "), "{message}");
    }

    #[test]
    fn empty_pattern_has_no_score() {
        let analysis = analyze(&request("", "abc"), &BuiltinKnowledge);
        assert!(analysis.tokens.is_empty());
        assert_eq!(analysis.score, None);
        assert_eq!(analysis.difficulty, None);
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut session = Session::new(BuiltinKnowledge);
        let first = session.begin();
        let old = session.analyze(&request("a", "a"));
        let second = session.begin();
        let new = session.analyze(&request("b", "b"));

        assert!(!session.complete(first, old));
        assert!(session.latest().is_none());
        assert!(session.complete(second, new));
        assert_eq!(session.latest().map(|a| a.pattern.as_str()), Some("b"));
    }

    #[test]
    fn run_keeps_newest() {
        let mut session = Session::new(BuiltinKnowledge);
        session.run(&request("a", "a"));
        let latest = session.run(&request("b+", "bbb")).unwrap();
        assert_eq!(latest.pattern, "b+");
        assert_eq!(latest.matches[0].value, "bbb");
    }

    #[test]
    fn debouncer_releases_after_quiet_window() {
        let start = Instant::now();
        let ms = Duration::from_millis;
        let mut debouncer = Debouncer::new(ms(100));

        debouncer.push("a", start);
        debouncer.push("ab", start + ms(50));
        assert_eq!(debouncer.poll(start + ms(120)), None);
        assert_eq!(debouncer.deadline(), Some(start + ms(150)));
        assert_eq!(debouncer.poll(start + ms(150)), Some("ab"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + ms(500)), None);
    }
}
