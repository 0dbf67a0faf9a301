//! # Interpreters
//!
//! An [`Interpreter`] turns the raw outcome of a regex extraction into a
//! domain value. Every primitive parser pairs one pattern with one
//! interpreter.

use std::fmt;
use std::sync::Arc;

use crate::lexer::LexResult;

/// A named, shareable function from a [`LexResult`] to a value.
///
/// Cloning is cheap; clones share the same function. Interpreters are
/// `Send + Sync`, so parsers built from them can live in statics.
pub struct Interpreter<D> {
    eval: Arc<dyn Fn(&LexResult) -> D + Send + Sync>,
}

impl<D> Clone for Interpreter<D> {
    fn clone(&self) -> Self {
        Self {
            eval: Arc::clone(&self.eval),
        }
    }
}

impl<D> fmt::Debug for Interpreter<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpreter")
            .field("output", &std::any::type_name::<D>())
            .finish()
    }
}

impl<D> Interpreter<D> {
    pub fn eval(&self, lex_result: &LexResult) -> D {
        (self.eval)(lex_result)
    }
}

impl<D: 'static> Interpreter<D> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&LexResult) -> D + Send + Sync + 'static,
    {
        Self { eval: Arc::new(f) }
    }

    /// Post-composes `f` onto this interpreter.
    pub fn map<E: 'static, F>(self, f: F) -> Interpreter<E>
    where
        F: Fn(D) -> E + Send + Sync + 'static,
    {
        Interpreter::new(move |lex_result| f(self.eval(lex_result)))
    }
}

impl<D: Clone + Send + Sync + 'static> Interpreter<D> {
    /// Ignores the extraction and always yields `value`.
    pub fn constant(value: D) -> Self {
        Self::new(move |_| value.clone())
    }
}

impl Interpreter<Vec<String>> {
    /// Yields every captured group.
    pub fn groups() -> Self {
        Self::new(|lex_result| lex_result.groups.clone())
    }
}

impl Interpreter<Option<String>> {
    /// Yields the `index`-th non-empty group, if there is one.
    pub fn group(index: usize) -> Self {
        Self::new(move |lex_result| lex_result.groups.get(index).cloned())
    }
}

impl Interpreter<String> {
    /// Yields the input left over after the match.
    pub fn stripped() -> Self {
        Self::new(|lex_result| lex_result.stripped_input.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> LexResult {
        LexResult::new("rest", vec!["12".to_string(), "34".to_string()])
    }

    #[test]
    fn test_new_and_eval() {
        let count = Interpreter::new(|lex: &LexResult| lex.groups.len());
        assert_eq!(count.eval(&sample()), 2);
    }

    #[test]
    fn test_stock_interpreters() {
        assert_eq!(
            Interpreter::groups().eval(&sample()),
            vec!["12".to_string(), "34".to_string()]
        );
        assert_eq!(Interpreter::group(1).eval(&sample()), Some("34".to_string()));
        assert_eq!(Interpreter::group(2).eval(&sample()), None);
        assert_eq!(Interpreter::stripped().eval(&sample()), "rest");
        assert_eq!(Interpreter::constant('k').eval(&sample()), 'k');
    }

    #[test]
    fn test_map() {
        let first_number = Interpreter::group(0).map(|g| g.and_then(|s| s.parse::<u32>().ok()));
        assert_eq!(first_number.eval(&sample()), Some(12));
    }

    #[test]
    fn test_clones_share_function() {
        let interpreter = Interpreter::new(|lex: &LexResult| lex.stripped_input.len());
        let cloned = interpreter.clone();
        assert_eq!(interpreter.eval(&sample()), cloned.eval(&sample()));
    }

    #[test]
    fn test_shared_across_threads() {
        let interpreter = Interpreter::group(0);
        let handle = std::thread::spawn({
            let interpreter = interpreter.clone();
            move || interpreter.eval(&sample())
        });
        assert_eq!(handle.join().unwrap(), interpreter.eval(&sample()));
    }
}
