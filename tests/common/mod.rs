use rexcomb::prelude::*;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    // テストの前に一度だけ tracing_subscriber を初期化
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// A parser for `pattern` whose value is the concatenation of its groups.
#[allow(dead_code)]
pub fn captured(pattern: &str) -> RegexParser<String> {
    build_parser(
        pattern,
        Interpreter::new(|lex: &LexResult| lex.groups.concat()),
    )
    .expect("test pattern should compile")
}

/// A parser that matches one literal character and yields it.
#[allow(dead_code)]
pub fn character(c: char) -> RegexParser<char> {
    build_parser(&regex::escape(&c.to_string()), Interpreter::constant(c))
        .expect("test pattern should compile")
}
