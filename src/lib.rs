//! # rexcomb: Parser Combinators over Regular Expressions
//!
//! rexcomb builds structured parsers out of regular-expression fragments.
//! A caller pairs a pattern with an [`Interpreter`] to get a primitive
//! parser, then combines primitives algebraically instead of writing
//! recursive-descent code by hand.
//!
//! ## Layers
//!
//! ```text
//! Pattern (lexer) → RegexParser (primitive) → Combinators (composite)
//! ```
//!
//! - Regex extraction ([`lexer`]): find the first match anywhere in the
//!   input, cut it out, keep the non-empty capture groups
//! - Interpretation ([`interpreter`]): turn an extraction into a value
//! - Parsing ([`parser`], [`combinators`]): the [`Parser`] trait and the
//!   operators that compose parsers
//!
//! ## Operators
//!
//! | Operator  | Meaning                                      | Function       |
//! |-----------|----------------------------------------------|----------------|
//! | `f <^> p` | map the result of `p`                        | `map`          |
//! | `v <^ p`  | run `p`, return `v`                          | `value`        |
//! | `p ^> v`  | run `p`, return `v`                          | `replace`      |
//! | `pure v`  | succeed with `v`, consume nothing            | `pure`         |
//! | `f <*> p` | apply a parsed function to a parsed value    | `apply`        |
//! | `p *> q`  | run both, keep `q`'s result and remainder    | `keep_right`   |
//! | `p <* q`  | run both, keep `p`'s result and remainder    | `keep_left`    |
//! | `p <\|> q`| try `p`, else `q` on the original input      | `or_else`      |
//!
//! ## Failure
//!
//! Two kinds of failure are kept apart:
//!
//! - An unusable pattern is a [`PatternError`], returned when the parser is
//!   built. It never shows up while parsing.
//! - A parse failure is `None`. It short-circuits every combinator, and only
//!   `or_else` / `choice` recover from it.
//!
//! ## Example
//!
//! ```
//! use rexcomb::prelude::*;
//!
//! # fn main() -> Result<(), PatternError> {
//! let digit = |pattern: &str| {
//!     build_parser(pattern, Interpreter::group(0).map(|g| g.unwrap_or_default()))
//! };
//! let pair = apply(
//!     map(digit(r"^(\d)")?, |a: String| move |b: String| format!("{a}/{b}")),
//!     keep_right(build_parser("^-", Interpreter::constant(()))?, digit(r"^(\d)")?),
//! );
//!
//! assert_eq!(pair.parse("4-2 rest"), Some(("4/2".to_string(), " rest".to_string())));
//! assert_eq!(pair.parse("4+2"), None);
//! # Ok(())
//! # }
//! ```

pub mod combinators;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod prelude;

// Re-exports
pub use crate::config::PatternConfig;
pub use crate::error::PatternError;
pub use crate::interpreter::Interpreter;
pub use crate::lexer::{extract, LexResult, Pattern};
pub use crate::parser::{ParseResult, Parser};
pub use crate::prelude::build_parser;
