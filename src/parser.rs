//! # Core Parser Definitions
//!
//! This module defines the parser interface every primitive and combinator
//! implements.

/// Parser trait defines the core parsing interface.
///
/// A parser takes the remaining input and either produces a value together
/// with a new remaining string, or fails. Parsers are immutable: running one
/// never changes it, so the same parser can be run any number of times.
///
/// # Type Parameters
///
/// * `O` - The output value type
pub trait Parser<O> {
    /// Attempts to parse `input`.
    ///
    /// # Returns
    ///
    /// * `Some((output, stripped_input))` - The parsed value and what is left of the input
    /// * `None` - The parser did not match
    fn parse(&self, input: &str) -> ParseResult<O>;
}

/// Result type for parsing operations.
///
/// Parse failure carries no information; construction problems are reported
/// separately through [`crate::error::PatternError`].
pub type ParseResult<O> = Option<(O, String)>;

impl<O, P> Parser<O> for &P
where
    P: Parser<O> + ?Sized,
{
    fn parse(&self, input: &str) -> ParseResult<O> {
        (**self).parse(input)
    }
}

impl<O, P> Parser<O> for Box<P>
where
    P: Parser<O> + ?Sized,
{
    fn parse(&self, input: &str) -> ParseResult<O> {
        (**self).parse(input)
    }
}

impl<O, P> Parser<O> for std::rc::Rc<P>
where
    P: Parser<O> + ?Sized,
{
    fn parse(&self, input: &str) -> ParseResult<O> {
        (**self).parse(input)
    }
}

impl<O, P> Parser<O> for std::sync::Arc<P>
where
    P: Parser<O> + ?Sized,
{
    fn parse(&self, input: &str) -> ParseResult<O> {
        (**self).parse(input)
    }
}
