//! Pattern decomposition.
//!
//! A pattern is split into a flat list of [`Token`]s. Groups and sets are kept
//! whole (their contents are re-tokenized on demand by the explainer), and a
//! quantifier directly following an atom is folded into that atom's token.
//!
//! # Recognised constructs
//!
//! | Syntax                               | Token kind                  |
//! |--------------------------------------|-----------------------------|
//! | `a`, `é`                             | `literal`                   |
//! | `.`, `\d`, `\w`, `\s`, ...           | `character-class`           |
//! | `[a-z]`, `[^\]]`                     | `character-set`             |
//! | `[[:alpha:]]`                        | `posix-class`               |
//! | `*`, `+`, `?`, `{n,m}`               | `quantifier-greedy`         |
//! | `*?`, `{n,m}?`                       | `quantifier-lazy`           |
//! | `*+`, `{n,m}+`                       | `quantifier-possessive`     |
//! | `^`, `$`, `\A`, `\z`, `\Z`, `\G`     | `anchor`                    |
//! | `\b`, `\B`                           | `boundary`                  |
//! | `(...)`                              | `group-capture`             |
//! | `(?:...)`                            | `group-noncapture`          |
//! | `(?<n>...)`, `(?'n'...)`, `(?P<n>...)` | `group-named`             |
//! | `(?>...)`                            | `group-atomic`              |
//! | `(?(cond)yes\|no)`                   | `group-conditional`         |
//! | `(?\|...)`                           | `group-branch-reset`        |
//! | `(?#...)`                            | `comment`                   |
//! | `(?i)`, `(?i-s:...)`                 | `mode-modifier`             |
//! | `(?=...)`, `(?!...)`                 | `assertion-lookahead-*`     |
//! | `(?<=...)`, `(?<!...)`               | `assertion-lookbehind-*`    |
//! | `\1`, `\g{-1}`                       | `backreference-numbered`    |
//! | `\k<n>`, `\g{n}`, `(?P=n)`           | `backreference-named`       |
//! | `(?R)`, `(?1)`                       | `recursion`                 |
//! | `(?&n)`, `\g<n>`, `(?P>n)`           | `subroutine`                |
//! | `\p{L}`, `\PL`                       | `unicode-property`          |
//! | `\t`, `\n`, `\cM`                    | `escape-control`            |
//! | `\x41`, `\x{263A}`                   | `escape-hex`                |
//! | `\u00E9`, `\u{E9}`                   | `escape-unicode`            |
//! | `\0`, `\012`, `\o{12}`               | `escape-octal`              |
//! | `\.`, `\(`                           | `escape-special`            |
//! | `\Q...\E`                            | `literal-mode`              |
//! | `\K`, other `(?...)`                 | `special-construct`         |
//! | `(*FAIL)`, `(*SKIP)`                 | `verb`                      |
//! | `\|`                                 | `alternation`               |

pub mod classifier;
pub mod quantifier;
pub mod scanner;
pub mod token;
pub mod tokenizer;

pub use classifier::classify;
pub use quantifier::detect_quantifier;
pub use scanner::{find_closing_delimiter, split_alternatives};
pub use token::{Quantifier, QuantifierMode, Token, TokenKind};
pub use tokenizer::tokenize;
