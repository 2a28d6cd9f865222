use std::collections::BTreeSet;

use mocksmith_core::{Record, Value};
use mocksmith_generate::{GenerationError, RelationKind, Relationship, RelationshipEngine};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn users_orders_link() -> Relationship {
    Relationship {
        parent_table: "users".to_string(),
        child_table: "orders".to_string(),
        parent_column: "id".to_string(),
        child_column: "user_id".to_string(),
        kind: RelationKind::OneToMany,
    }
}

fn user_row(id: &str) -> Record {
    let mut record = Record::new();
    record.push("id".to_string(), Value::Text(id.to_string()));
    record
}

#[test]
fn unregistered_relationship_is_an_error() {
    let engine = RelationshipEngine::new();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let err = engine.foreign_key("nope", &mut rng).expect_err("not found");
    assert!(matches!(err, GenerationError::RelationshipNotFound(name) if name == "nope"));
}

#[test]
fn missing_parent_pool_yields_null_not_error() {
    let mut engine = RelationshipEngine::new();
    engine.register("user_id", users_orders_link());

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let resolved = engine.foreign_key("user_id", &mut rng).expect("resolve");
    assert_eq!(resolved, None);
}

#[test]
fn empty_parent_pool_yields_null_not_error() {
    let mut engine = RelationshipEngine::new();
    engine.register("user_id", users_orders_link());
    engine.store_parent_rows("users", &[]);

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    assert_eq!(engine.foreign_key("user_id", &mut rng).expect("resolve"), None);
}

#[test]
fn resolution_only_draws_from_the_parent_pool() {
    let mut engine = RelationshipEngine::new();
    engine.register("user_id", users_orders_link());
    engine.store_parent_rows("users", &[user_row("a"), user_row("b")]);

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut seen = BTreeSet::new();
    for _ in 0..1000 {
        let value = engine
            .foreign_key("user_id", &mut rng)
            .expect("resolve")
            .expect("non-empty pool");
        let Value::Text(id) = value else {
            panic!("expected text key");
        };
        assert!(id == "a" || id == "b", "unexpected key '{id}'");
        seen.insert(id);
    }
    // Uniform sampling over 1000 draws should hit both parents.
    assert_eq!(seen.len(), 2);
}

#[test]
fn row_missing_the_parent_column_contributes_null() {
    let mut engine = RelationshipEngine::new();
    engine.register("user_id", users_orders_link());

    let mut row = Record::new();
    row.push("name".to_string(), Value::Text("no id here".to_string()));
    engine.store_parent_rows("users", &[row]);

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let resolved = engine.foreign_key("user_id", &mut rng).expect("resolve");
    assert_eq!(resolved, Some(Value::Null));
}

#[test]
fn clear_parent_rows_keeps_registrations() {
    let mut engine = RelationshipEngine::new();
    engine.register("user_id", users_orders_link());
    engine.store_parent_rows("users", &[user_row("a")]);
    engine.clear_parent_rows();

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    // Still registered, but the pool is gone.
    assert_eq!(engine.foreign_key("user_id", &mut rng).expect("resolve"), None);
}
