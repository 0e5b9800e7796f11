//! Explains regular expressions in plain language and runs them against
//! sample text.
//!
//! A pattern is split into classified tokens, each token is resolved to an
//! explanation, the whole pattern gets a complexity score, and the pattern is
//! validated and executed on the `fancy-regex` engine.
//!
//! # Example
//!
//! ```rust
//! use regex_lens::{BuiltinKnowledge, Flags, Resolver, TokenKind, execute, tokenize};
//!
//! let tokens = tokenize("(?:abc)+");
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].kind, TokenKind::GroupNoncapture);
//! assert_eq!(tokens[0].value, "(?:abc)+");
//!
//! let explanation = Resolver::new(&BuiltinKnowledge).explain(&tokens[0]);
//! assert_eq!(explanation.repetition.as_deref(), Some("1 or more times"));
//! assert_eq!(explanation.narration[0].text, "the literal text \"abc\"");
//!
//! let matches = execute("a{2,4}", Flags::global(), "aaaa aaa aa a").unwrap();
//! let values: Vec<_> = matches.iter().map(|m| m.value.as_str()).collect();
//! assert_eq!(values, ["aaaa", "aaa", "aa"]);
//! ```

pub mod complexity;
pub mod engine;
pub mod explain;
mod flags;
pub mod pattern;
pub mod report;
pub mod session;

pub use complexity::{Difficulty, score};
pub use engine::{CompiledPattern, EngineError, Match, Validation, compile, execute, validate};
pub use explain::{
    BuiltinKnowledge, Explanation, KnowledgeBase, Narration, Resolver, explain_contents,
};
pub use flags::{Flags, FlagsError};
pub use pattern::{Token, TokenKind, find_closing_delimiter, tokenize};
pub use session::{Analysis, Debouncer, Request, Session, analyze};
