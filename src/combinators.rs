//! # Parser Combinators
//!
//! This module implements the primitive regex parser and the combinators that
//! compose parsers into larger ones.
//!
//! ## Combinator Types
//!
//! * **Primitive**: `RegexParser` (one pattern, one interpreter), `FromFn`
//! * **Functor / Applicative**: `Map`, `Value`, `Pure`, `Apply`
//! * **Sequential Combinators**: `KeepRight`, `KeepLeft`, `Tuple2`, `Tuple3`
//! * **Alternative Combinators**: `Or`, `Choice`
//! * **Recursion**: `Lazy`
//!
//! Every combinator short-circuits: the first failing step fails the whole
//! composite and later steps are not run. Only `Or` and `Choice` recover, by
//! retrying on the original input.

use super::config::PatternConfig;
use super::parser::ParseResult;
use super::parser::Parser;
use super::error::Result;
use super::interpreter::Interpreter;
use super::lexer::Pattern;
use std::fmt;
use std::marker::PhantomData;

/// RegexParser: A primitive parser built from one pattern and one interpreter
///
/// Runs [`Pattern::extract`] on the input and hands the extraction to the
/// interpreter. The pattern is compiled when the parser is built, so an
/// invalid pattern is reported at construction and never while parsing.
pub struct RegexParser<T> {
    pattern: Pattern,
    interpreter: Interpreter<T>,
}

impl<T> Clone for RegexParser<T> {
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
            interpreter: self.interpreter.clone(),
        }
    }
}

impl<T> RegexParser<T> {
    /// Creates a new RegexParser, compiling `pattern` case-insensitively
    ///
    /// # Arguments
    ///
    /// * `pattern` - The regular expression to search for
    /// * `interpreter` - Turns the extraction into the parser's value
    pub fn new(pattern: &str, interpreter: Interpreter<T>) -> Result<Self> {
        Ok(Self::from_pattern(Pattern::new(pattern)?, interpreter))
    }

    pub fn with_config(
        pattern: &str,
        config: &PatternConfig,
        interpreter: Interpreter<T>,
    ) -> Result<Self> {
        Ok(Self::from_pattern(
            Pattern::with_config(pattern, config)?,
            interpreter,
        ))
    }

    pub fn from_pattern(pattern: Pattern, interpreter: Interpreter<T>) -> Self {
        Self {
            pattern,
            interpreter,
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

impl<T> fmt::Debug for RegexParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegexParser")
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

impl<T> Parser<T> for RegexParser<T> {
    fn parse(&self, input: &str) -> ParseResult<T> {
        let lex_result = self.pattern.extract(input)?;
        let value = self.interpreter.eval(&lex_result);
        Some((value, lex_result.stripped_input))
    }
}

/// FromFn: Wraps a plain function as a parser
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<F> FromFn<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<O, F> Parser<O> for FromFn<F>
where
    F: Fn(&str) -> ParseResult<O>,
{
    fn parse(&self, input: &str) -> ParseResult<O> {
        (self.f)(input)
    }
}

/// Map: Transforms the output of a parser using a function
///
/// This parser applies a transformation function to the result of another parser.
/// The remaining input is passed through untouched.
#[derive(Clone)]
pub struct Map<P, F, A, B> {
    /// The parser whose output will be transformed
    parser: P,
    /// The transformation function
    f: F,
    _phantom: PhantomData<(A, B)>,
}

impl<P, F, A, B> Map<P, F, A, B> {
    /// Creates a new Map parser
    ///
    /// # Arguments
    ///
    /// * `parser` - The parser whose output will be transformed
    /// * `f` - The transformation function to apply to the parser's output
    pub fn new(parser: P, f: F) -> Self {
        Self {
            parser,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<A, B, P, F> Parser<B> for Map<P, F, A, B>
where
    P: Parser<A>,
    F: Fn(A) -> B,
{
    fn parse(&self, input: &str) -> ParseResult<B> {
        self.parser
            .parse(input)
            .map(|(value, rest)| ((self.f)(value), rest))
    }
}

/// Value: Runs a parser and replaces its result with a constant
///
/// The inner parser must succeed; its result is dropped and a clone of
/// `value` is returned with the inner parser's remaining input.
#[derive(Clone)]
pub struct Value<P, O, V> {
    parser: P,
    value: V,
    _phantom: PhantomData<O>,
}

impl<P, O, V> Value<P, O, V> {
    pub fn new(parser: P, value: V) -> Self {
        Self {
            parser,
            value,
            _phantom: PhantomData,
        }
    }
}

impl<P, O, V> Parser<V> for Value<P, O, V>
where
    P: Parser<O>,
    V: Clone,
{
    fn parse(&self, input: &str) -> ParseResult<V> {
        let (_, rest) = self.parser.parse(input)?;
        Some((self.value.clone(), rest))
    }
}

/// Pure: Always succeeds with a constant, consuming nothing
#[derive(Clone)]
pub struct Pure<O> {
    value: O,
}

impl<O> Pure<O> {
    pub fn new(value: O) -> Self {
        Self { value }
    }
}

impl<O: Clone> Parser<O> for Pure<O> {
    fn parse(&self, input: &str) -> ParseResult<O> {
        Some((self.value.clone(), input.to_string()))
    }
}

/// Apply: Applies a parsed function to a parsed argument
///
/// Runs the function parser first, then the argument parser on what the
/// function parser left. Chaining `Apply` over a curried function lifted with
/// `Map` combines any number of parsers.
#[derive(Clone)]
pub struct Apply<PF, PA, F, A, B> {
    /// Parser producing the function
    function: PF,
    /// Parser producing the argument
    argument: PA,
    _phantom: PhantomData<(F, A, B)>,
}

impl<PF, PA, F, A, B> Apply<PF, PA, F, A, B> {
    pub fn new(function: PF, argument: PA) -> Self {
        Self {
            function,
            argument,
            _phantom: PhantomData,
        }
    }
}

impl<PF, PA, F, A, B> Parser<B> for Apply<PF, PA, F, A, B>
where
    PF: Parser<F>,
    PA: Parser<A>,
    F: FnOnce(A) -> B,
{
    fn parse(&self, input: &str) -> ParseResult<B> {
        let (f, rest) = self.function.parse(input)?;
        let (argument, rest) = self.argument.parse(&rest)?;
        Some((f(argument), rest))
    }
}

/// KeepRight: Runs two parsers in sequence and keeps the second result
#[derive(Clone)]
pub struct KeepRight<P1, P2, O1, O2> {
    parser1: P1,
    parser2: P2,
    _phantom: PhantomData<(O1, O2)>,
}

impl<P1, P2, O1, O2> KeepRight<P1, P2, O1, O2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Self {
            parser1,
            parser2,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, O1, O2> Parser<O2> for KeepRight<P1, P2, O1, O2>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
{
    fn parse(&self, input: &str) -> ParseResult<O2> {
        let (_, rest) = self.parser1.parse(input)?;
        self.parser2.parse(&rest)
    }
}

/// KeepLeft: Runs two parsers in sequence and keeps the first result
///
/// The second parser has to succeed, but what it consumed is not removed:
/// the returned remaining input is the one the first parser produced.
#[derive(Clone)]
pub struct KeepLeft<P1, P2, O1, O2> {
    parser1: P1,
    parser2: P2,
    _phantom: PhantomData<(O1, O2)>,
}

impl<P1, P2, O1, O2> KeepLeft<P1, P2, O1, O2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Self {
            parser1,
            parser2,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, O1, O2> Parser<O1> for KeepLeft<P1, P2, O1, O2>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
{
    fn parse(&self, input: &str) -> ParseResult<O1> {
        let (result, rest) = self.parser1.parse(input)?;
        self.parser2.parse(&rest)?;
        Some((result, rest))
    }
}

/// Or: Ordered choice between two parsers
///
/// The second parser only runs if the first fails, and it always sees the
/// original input.
#[derive(Clone)]
pub struct Or<P1, P2, O> {
    parser1: P1,
    parser2: P2,
    _phantom: PhantomData<O>,
}

impl<P1, P2, O> Or<P1, P2, O> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Self {
            parser1,
            parser2,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, O> Parser<O> for Or<P1, P2, O>
where
    P1: Parser<O>,
    P2: Parser<O>,
{
    fn parse(&self, input: &str) -> ParseResult<O> {
        if let Some(result) = self.parser1.parse(input) {
            return Some(result);
        }
        tracing::trace!(target: "parser::or_else", input, "First alternative failed");
        self.parser2.parse(input)
    }
}

/// Choice: Tries multiple parsers and succeeds with the first successful one
///
/// Every parser is run against the original input. If all of them fail the
/// choice fails.
pub struct Choice<O> {
    /// The list of parsers to try
    parsers: Vec<Box<dyn Parser<O>>>,
}

impl<O> Choice<O> {
    /// Creates a new Choice parser
    ///
    /// # Arguments
    ///
    /// * `parsers` - A vector of boxed parsers to try in order
    pub fn new(parsers: Vec<Box<dyn Parser<O>>>) -> Self {
        Self { parsers }
    }
}

impl<O> Parser<O> for Choice<O> {
    fn parse(&self, input: &str) -> ParseResult<O> {
        for (index, parser) in self.parsers.iter().enumerate() {
            if let Some(result) = parser.parse(input) {
                return Some(result);
            }
            tracing::trace!(
                target: "parser::choice",
                alternative = index,
                remaining = self.parsers.len() - index - 1,
                "Alternative failed"
            );
        }
        None
    }
}

#[derive(Clone)]
pub struct Tuple2<P1, P2, O1, O2> {
    parser1: P1,
    parser2: P2,
    _phantom: PhantomData<(O1, O2)>,
}

impl<P1, P2, O1, O2> Tuple2<P1, P2, O1, O2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Self {
            parser1,
            parser2,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, O1, O2> Parser<(O1, O2)> for Tuple2<P1, P2, O1, O2>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
{
    fn parse(&self, input: &str) -> ParseResult<(O1, O2)> {
        let (result1, rest) = self.parser1.parse(input)?;
        let (result2, rest) = self.parser2.parse(&rest)?;
        Some(((result1, result2), rest))
    }
}

#[derive(Clone)]
pub struct Tuple3<P1, P2, P3, O1, O2, O3> {
    parser1: P1,
    parser2: P2,
    parser3: P3,
    _phantom: PhantomData<(O1, O2, O3)>,
}

impl<P1, P2, P3, O1, O2, O3> Tuple3<P1, P2, P3, O1, O2, O3> {
    pub fn new(parser1: P1, parser2: P2, parser3: P3) -> Self {
        Self {
            parser1,
            parser2,
            parser3,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, P3, O1, O2, O3> Parser<(O1, O2, O3)> for Tuple3<P1, P2, P3, O1, O2, O3>
where
    P1: Parser<O1>,
    P2: Parser<O2>,
    P3: Parser<O3>,
{
    fn parse(&self, input: &str) -> ParseResult<(O1, O2, O3)> {
        let (result1, rest) = self.parser1.parse(input)?;
        let (result2, rest) = self.parser2.parse(&rest)?;
        let (result3, rest) = self.parser3.parse(&rest)?;
        Some(((result1, result2, result3), rest))
    }
}

/// Lazy: Builds its parser on every run
///
/// Lets a grammar refer to itself. The closure runs once per parse and once
/// per nesting level, so build regex parsers outside it (in a static or a
/// captured reference) rather than compiling them inside.
#[derive(Clone)]
pub struct Lazy<F> {
    f: F,
}

impl<F> Lazy<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<O, F, P> Parser<O> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<O>,
{
    fn parse(&self, input: &str) -> ParseResult<O> {
        (self.f)().parse(input)
    }
}
