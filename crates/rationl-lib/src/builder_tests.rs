use crate::{Automaton, AutomatonBuilder, ErrorKind, Strategy};

#[test]
fn defaults() {
    let builder = AutomatonBuilder::new();

    assert_eq!(builder.get_strategy(), Strategy::Eager);
    assert_eq!(builder.get_cache_capacity(), 4096);
}

#[test]
fn strategy_names() {
    for strategy in Strategy::ALL {
        assert_eq!(Strategy::from_name(strategy.name()), Some(strategy));
    }
    assert_eq!(Strategy::from_name("backtrack"), None);
    assert_eq!(Strategy::Lazy.to_string(), "lazy");
}

#[test]
fn every_strategy_finds_the_same_matches() {
    let text = "xx abcbcd abd ad abcx";
    let expected: Vec<_> = crate::compile("a(b|c)*d").unwrap().find_all(text).collect();
    assert_eq!(expected.len(), 3);

    for strategy in Strategy::ALL {
        let automaton = Automaton::builder()
            .strategy(strategy)
            .build("a(b|c)*d")
            .unwrap();
        assert_eq!(automaton.strategy(), strategy);
        assert_eq!(automaton.find_all(text).collect::<Vec<_>>(), expected, "{strategy}");
    }
}

#[test]
fn unminimized_tables_are_larger() {
    let minimized = Automaton::builder().build("(a|b)*abb").unwrap();
    let raw = Automaton::builder().minimize(false).build("(a|b)*abb").unwrap();

    assert!(raw.state_count() > minimized.state_count());
    assert!(raw.matches("aabb"));
}

#[test]
fn dfa_ceiling_only_applies_to_eager() {
    let pattern = "[ab]*a[ab]{12}";
    let e = Automaton::builder()
        .dfa_size_limit(500)
        .build(pattern)
        .unwrap_err();
    assert_eq!(e.kind, ErrorKind::AutomatonTooLarge);

    let lazy = Automaton::builder()
        .strategy(Strategy::Lazy)
        .dfa_size_limit(500)
        .cache_capacity(64)
        .build(pattern)
        .unwrap();
    let text = format!("b{}", "a".repeat(13));
    assert!(lazy.matches(&text));
    assert!(!lazy.matches("b"));
}

#[test]
fn nfa_ceiling() {
    let e = Automaton::builder()
        .nfa_size_limit(50)
        .build("a{100}")
        .unwrap_err();

    assert_eq!(e.kind, ErrorKind::AutomatonTooLarge);
}

#[test]
fn nesting_limit() {
    let pattern = format!("{}a{}", "(".repeat(10), ")".repeat(10));

    assert!(Automaton::builder().nesting_limit(10).build(&pattern).is_ok());
    let e = Automaton::builder()
        .nesting_limit(9)
        .build(&pattern)
        .unwrap_err();
    assert_eq!(e.kind, ErrorKind::NestingTooDeep);
}

#[test]
fn cache_capacity_has_a_floor() {
    let builder = Automaton::builder().cache_capacity(0);

    assert_eq!(builder.get_cache_capacity(), 2);
    let automaton = builder.strategy(Strategy::Lazy).build("abc|abd").unwrap();
    assert!(automaton.matches("abd"));
}
