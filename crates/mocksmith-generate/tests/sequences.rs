use chrono::{Datelike, Local};
use mocksmith_generate::{SequenceEngine, SequenceSpec};

#[test]
fn values_form_arithmetic_progression() {
    let mut engine = SequenceEngine::new();
    let spec = SequenceSpec {
        start_value: 100,
        increment: 7,
        ..SequenceSpec::default()
    };

    let values: Vec<String> = (0..5)
        .map(|_| engine.next_value("order_id", Some(&spec)))
        .collect();
    assert_eq!(values, ["100", "107", "114", "121", "128"]);
}

#[test]
fn defaults_start_at_one_step_one() {
    let mut engine = SequenceEngine::new();
    assert_eq!(engine.next_value("id", None), "1");
    assert_eq!(engine.next_value("id", None), "2");
    assert_eq!(engine.next_value("id", None), "3");
}

#[test]
fn named_sequences_are_independent() {
    let mut engine = SequenceEngine::new();
    engine.next_value("a", None);
    engine.next_value("a", None);
    assert_eq!(engine.next_value("b", None), "1");
}

#[test]
fn reset_matches_fresh_sequence() {
    let spec = SequenceSpec {
        start_value: 50,
        increment: 3,
        ..SequenceSpec::default()
    };

    let mut engine = SequenceEngine::new();
    for _ in 0..10 {
        engine.next_value("seq", Some(&spec));
    }
    engine.reset("seq", 50);
    let after_reset = engine.next_value("seq", Some(&spec));

    let mut fresh = SequenceEngine::new();
    let from_fresh = fresh.next_value("seq", Some(&spec));

    assert_eq!(after_reset, from_fresh);
}

#[test]
fn reset_of_unknown_name_is_ignored() {
    let mut engine = SequenceEngine::new();
    engine.reset("never_created", 10);
    assert_eq!(engine.current_value("never_created"), None);
}

#[test]
fn prefix_and_suffix_wrap_the_counter() {
    let mut engine = SequenceEngine::new();
    let spec = SequenceSpec {
        start_value: 42,
        prefix: "EMP-".to_string(),
        suffix: "-X".to_string(),
        ..SequenceSpec::default()
    };
    assert_eq!(engine.next_value("emp", Some(&spec)), "EMP-42-X");
}

#[test]
fn padded_token_width_is_a_minimum() {
    let mut engine = SequenceEngine::new();
    let spec = SequenceSpec {
        start_value: 7,
        pattern: Some("INV-{0000}-END".to_string()),
        ..SequenceSpec::default()
    };
    assert_eq!(engine.next_value("inv", Some(&spec)), "INV-0007-END");

    let mut engine = SequenceEngine::new();
    let spec = SequenceSpec {
        start_value: 12345,
        pattern: Some("INV-{0000}-END".to_string()),
        ..SequenceSpec::default()
    };
    assert_eq!(engine.next_value("inv", Some(&spec)), "INV-12345-END");
}

#[test]
fn date_tokens_expand_to_wall_clock() {
    let mut engine = SequenceEngine::new();
    let spec = SequenceSpec {
        pattern: Some("{YYYY}/{MM}/{DD}-{000}".to_string()),
        ..SequenceSpec::default()
    };
    let value = engine.next_value("dated", Some(&spec));

    let now = Local::now();
    let expected = format!(
        "{:04}/{:02}/{:02}-001",
        now.year(),
        now.month(),
        now.day()
    );
    assert_eq!(value, expected);
}

#[test]
fn reset_all_discards_every_counter() {
    let mut engine = SequenceEngine::new();
    engine.next_value("a", None);
    engine.next_value("b", None);
    engine.reset_all();
    assert_eq!(engine.current_value("a"), None);
    assert_eq!(engine.next_value("a", None), "1");
}
