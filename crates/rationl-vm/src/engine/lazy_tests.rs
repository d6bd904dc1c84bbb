use super::search::is_match;
use super::{LazyDfa, NoopTracer};
use crate::test_utils::{engines, nfa, spans, strings};

#[test]
fn states_are_built_on_demand() {
    let lazy = LazyDfa::new(nfa("(a|b)*abb"), 64);
    assert_eq!(lazy.cached_states(), 1);

    assert!(is_match(&mut lazy.cursor(), b"babb", &mut NoopTracer));
    assert!(lazy.cached_states() > 2);
    assert_eq!(lazy.cache_clears(), 0);
}

#[test]
fn capacity_has_a_floor() {
    assert_eq!(LazyDfa::new(nfa("a"), 0).capacity(), 2);
    assert_eq!(LazyDfa::new(nfa("a"), 7).capacity(), 7);
}

#[test]
fn tiny_cache_still_agrees_with_the_eager_table() {
    for pattern in ["(a|b)*abb", "a(b|c)*a", "^(ab)*$", "(a|ab)(c|bcd)"] {
        let [eager, lazy, _] = engines(pattern, 2);
        for s in strings(&['a', 'b', 'c'], 5) {
            assert_eq!(
                lazy.is_match(s.as_bytes(), &mut NoopTracer),
                eager.is_match(s.as_bytes(), &mut NoopTracer),
                "{pattern:?} on {s:?}"
            );
            assert_eq!(spans(&lazy, &s), spans(&eager, &s), "{pattern:?} on {s:?}");
        }
    }
}

#[test]
fn cache_is_cleared_when_full() {
    let lazy = LazyDfa::new(nfa("abcdef"), 3);

    assert!(is_match(&mut lazy.cursor(), b"abcdef", &mut NoopTracer));
    assert!(lazy.cache_clears() > 0);
    assert!(lazy.cached_states() <= 3);
}

#[test]
fn lock_is_released_between_matches() {
    let [_, lazy, _] = engines("a+", 16);
    let mut found = Vec::new();

    for span in lazy.find_iter(b"aa b aaa", NoopTracer) {
        // Would deadlock if the iterator kept the cache locked.
        assert!(lazy.is_match(b"aaaa", &mut NoopTracer));
        found.push((span.start, span.end));
    }
    assert_eq!(found, [(0, 2), (5, 8)]);
}

#[test]
fn shared_across_threads() {
    let [_, lazy, _] = engines("(ab|cd)+e", 8);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for s in ["abe", "cdabe", "abcde", "e", "abab"] {
                    let expected = s != "e" && s != "abab";
                    assert_eq!(lazy.is_match(s.as_bytes(), &mut NoopTracer), expected);
                }
            });
        }
    });
}
