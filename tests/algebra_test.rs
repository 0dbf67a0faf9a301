mod common;

use common::{captured, character};
use pretty_assertions::assert_eq;
use rexcomb::prelude::*;

#[test]
fn it_sequences_keeping_the_right_result() {
    let parser = keep_right(captured("(a)"), captured("(b)"));
    assert_eq!(parser.parse("ab"), Some(("b".to_string(), String::new())));
}

#[test]
fn it_matches_anywhere_in_the_input() {
    let result = extract("b", "ab").unwrap();
    assert_eq!(result, Some(LexResult::new("a", vec![])));

    let parser = captured("(b)");
    assert_eq!(parser.parse("ab"), Some(("b".to_string(), "a".to_string())));
}

#[test]
fn it_keeps_left_remainder_after_keep_left() {
    let a = captured("(a)");
    let b = captured("(b)");
    let parser = keep_left(&a, &b);

    assert_eq!(parser.parse("ab"), a.parse("ab"));
    assert_eq!(parser.parse("ab"), Some(("a".to_string(), "b".to_string())));

    // b is still required
    assert_eq!(parser.parse("ac"), None);
}

#[test]
fn it_applies_a_curried_combiner() {
    let first_char = |s: String| s.chars().next().unwrap_or_default();
    let combine = |x: char| move |y: char| (x, y);
    let parser = apply(
        map(captured("(x)"), move |s: String| combine(first_char(s))),
        map(captured("(y)"), first_char),
    );

    assert_eq!(parser.parse("xy"), Some((('x', 'y'), String::new())));
    assert_eq!(parser.parse("x"), None);
}

#[test]
fn it_applies_three_arguments() {
    let date = apply(
        apply(
            map(captured(r"^(\d{4})"), |year: String| {
                move |month: String| move |day: String| format!("{day}.{month}.{year}")
            }),
            captured(r"^-(\d{2})"),
        ),
        captured(r"^-(\d{2})"),
    );

    assert_eq!(
        date.parse("2014-09-08T12:00"),
        Some(("08.09.2014".to_string(), "T12:00".to_string()))
    );
    assert_eq!(date.parse("2014-09"), None);
}

#[test]
fn it_maps_identity_as_noop() {
    let p = captured(r"(\d+)");
    let mapped = map(&p, |x: String| x);
    for input in ["12ab", "ab12", "ab", ""] {
        assert_eq!(mapped.parse(input), p.parse(input));
    }
}

#[test]
fn it_maps_composition() {
    let f = |n: usize| n * 3;
    let g = |s: String| s.len();
    let p = captured(r"(\w+)");

    let composed = map(&p, move |s: String| f(g(s)));
    let nested = map(map(&p, g), f);
    for input in ["hello world", "  ", "x"] {
        assert_eq!(composed.parse(input), nested.parse(input));
    }
}

#[test]
fn it_keeps_input_untouched_with_pure() {
    let parser = pure(vec![1, 2, 3]);
    assert_eq!(
        parser.parse("unchanged"),
        Some((vec![1, 2, 3], "unchanged".to_string()))
    );
}

#[test]
fn it_satisfies_applicative_identity_and_homomorphism() {
    let v = captured(r"(\d)");
    let identity = apply(pure(|x: String| x), &v);
    for input in ["a1b", "abc"] {
        assert_eq!(identity.parse(input), v.parse(input));
    }

    let homomorphism = apply(pure(|n: i32| n + 1), pure(41));
    assert_eq!(homomorphism.parse("xyz"), pure(42).parse("xyz"));
}

#[test]
fn it_falls_back_to_original_input() {
    // 最初の分岐は a を消費した後に失敗する
    let first = keep_right(character('a'), character('z'));
    let second = map(captured("^(a)"), |_: String| 'A');
    let parser = or_else(&first, &second);

    assert_eq!(first.parse("abc"), None);
    assert_eq!(parser.parse("abc"), second.parse("abc"));
    assert_eq!(parser.parse("abc"), Some(('A', "bc".to_string())));
}

#[test]
fn it_prefers_the_first_alternative() {
    let parser = or_else(value("first", character('a')), value("second", character('a')));
    assert_eq!(parser.parse("a"), Some(("first", String::new())));
}

#[test]
fn it_returns_constants() {
    let on = value(true, captured("^(on)"));
    let off = replace(captured("^(off)"), false);
    let switch = or_else(on, off);

    assert_eq!(switch.parse("ON!"), Some((true, "!".to_string())));
    assert_eq!(switch.parse("off!"), Some((false, "!".to_string())));
    assert_eq!(switch.parse("toggle"), None);
}

#[test]
fn it_short_circuits_on_failure() {
    use std::cell::Cell;

    let runs = Cell::new(0);
    let counting = from_fn(|input: &str| {
        runs.set(runs.get() + 1);
        Some(((), input.to_string()))
    });

    let parser = keep_right(character('q'), &counting);
    assert_eq!(parser.parse("abc"), None);
    assert_eq!(runs.get(), 0);

    let parser = tuple2(character('q'), &counting);
    assert_eq!(parser.parse("abc"), None);
    assert_eq!(runs.get(), 0);

    assert_eq!(parser.parse("q"), Some((('q', ()), String::new())));
    assert_eq!(runs.get(), 1);
}

#[test]
fn it_reports_invalid_patterns_at_construction() {
    let result = build_parser("(?P<unclosed", Interpreter::constant(()));
    assert!(matches!(result, Err(PatternError::InvalidPattern { .. })));

    let result = extract("[z-a]", "anything");
    assert!(result.is_err());
}
