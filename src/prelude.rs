//! Constructor functions for every parser and combinator.
//!
//! | Operator  | Function                  |
//! |-----------|---------------------------|
//! | `f <^> p` | [`map`]`(p, f)`           |
//! | `v <^ p`  | [`value`]`(v, p)`         |
//! | `p ^> v`  | [`replace`]`(p, v)`       |
//! | `pure v`  | [`pure`]`(v)`             |
//! | `f <*> p` | [`apply`]`(f, p)`         |
//! | `p *> q`  | [`keep_right`]`(p, q)`    |
//! | `p <* q`  | [`keep_left`]`(p, q)`     |
//! | `p <\|> q`| [`or_else`]`(p, q)`       |

pub use super::combinators::*;
pub use super::config::PatternConfig;
pub use super::error::PatternError;
pub use super::interpreter::Interpreter;
pub use super::lexer::{extract, LexResult, Pattern};
pub use super::parser::{ParseResult, Parser};

use super::error::Result;

pub fn build_parser<T>(pattern: &str, interpreter: Interpreter<T>) -> Result<RegexParser<T>> {
    RegexParser::new(pattern, interpreter)
}

pub fn build_parser_with_config<T>(
    pattern: &str,
    config: &PatternConfig,
    interpreter: Interpreter<T>,
) -> Result<RegexParser<T>> {
    RegexParser::with_config(pattern, config, interpreter)
}

pub fn from_fn<O, F>(f: F) -> FromFn<F>
where
    F: Fn(&str) -> ParseResult<O>,
{
    FromFn::new(f)
}

pub fn map<P, F, A, B>(parser: P, f: F) -> Map<P, F, A, B>
where
    P: Parser<A>,
    F: Fn(A) -> B,
{
    Map::new(parser, f)
}

/// `value <^ parser`
pub fn value<V, P, O>(value: V, parser: P) -> Value<P, O, V>
where
    P: Parser<O>,
    V: Clone,
{
    Value::new(parser, value)
}

/// `parser ^> value`
pub fn replace<P, O, V>(parser: P, value: V) -> Value<P, O, V>
where
    P: Parser<O>,
    V: Clone,
{
    Value::new(parser, value)
}

pub fn pure<O: Clone>(value: O) -> Pure<O> {
    Pure::new(value)
}

pub fn apply<PF, PA, F, A, B>(function: PF, argument: PA) -> Apply<PF, PA, F, A, B>
where
    PF: Parser<F>,
    PA: Parser<A>,
    F: FnOnce(A) -> B,
{
    Apply::new(function, argument)
}

pub fn keep_right<P1, P2, O1, O2>(parser1: P1, parser2: P2) -> KeepRight<P1, P2, O1, O2>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
{
    KeepRight::new(parser1, parser2)
}

pub fn keep_left<P1, P2, O1, O2>(parser1: P1, parser2: P2) -> KeepLeft<P1, P2, O1, O2>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
{
    KeepLeft::new(parser1, parser2)
}

pub fn or_else<P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2, O>
where
    P1: Parser<O>,
    P2: Parser<O>,
{
    Or::new(parser1, parser2)
}

pub fn choice<O>(parsers: Vec<Box<dyn Parser<O>>>) -> Choice<O> {
    Choice::new(parsers)
}

pub fn tuple2<P1, P2, O1, O2>(parser1: P1, parser2: P2) -> Tuple2<P1, P2, O1, O2>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
{
    Tuple2::new(parser1, parser2)
}

pub fn tuple3<P1, P2, P3, O1, O2, O3>(
    parser1: P1,
    parser2: P2,
    parser3: P3,
) -> Tuple3<P1, P2, P3, O1, O2, O3>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
    P3: Parser<O3>,
{
    Tuple3::new(parser1, parser2, parser3)
}

pub fn lazy<O, F, P>(f: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<O>,
{
    Lazy::new(f)
}
