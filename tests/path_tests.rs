use scalarize::path::{rekey, replace_key, undot, Prefix, Selector};
use scalarize::{to_literal, value, Error, Key, Reflected, Value};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Account {
    handle: String,
    plan: String,
}

#[test]
fn test_undot_builds_nested_config() {
    let flat = vec![
        ("app.name", Value::from("demo")),
        ("app.debug", Value::from(false)),
        ("db.hosts.0", Value::from("primary")),
        ("db.hosts.1", Value::from("replica")),
        ("db.port", Value::from(5432)),
    ];
    let tree = undot(flat);
    assert_eq!(
        to_literal(&[Value::Container(tree)]).unwrap(),
        "[\n  'app' => [\n    'name' => 'demo',\n    'debug' => false,\n  ],\n  'db' => [\n    'hosts' => [\n      0 => 'primary',\n      1 => 'replica',\n    ],\n    'port' => 5432,\n  ],\n]"
    );
}

#[test]
fn test_undot_owned_keys() {
    let flat: Vec<(String, Value)> = (0..3)
        .map(|i| (format!("row.{}", i), Value::from(i * 10)))
        .collect();
    let tree = undot(flat);
    assert_eq!(Value::Container(tree), value!({ "row": [0, 10, 20] }));
}

#[test]
fn test_undot_overwrite_keeps_sibling_position() {
    let tree = undot(vec![
        ("a", Value::from(1)),
        ("b", Value::from(2)),
        ("a.c", Value::from(3)),
    ]);
    let keys: Vec<&Key> = tree.keys().collect();
    assert_eq!(keys, vec![&Key::from("a"), &Key::from("b")]);
    assert_eq!(Value::Container(tree), value!({ "a": { "c": 3 }, "b": 2 }));
}

#[test]
fn test_undot_empty_segments() {
    let tree = undot(vec![("a..b", Value::from(1)), ("", Value::from(2))]);
    assert_eq!(
        Value::Container(tree),
        value!({ "a": { "": { "b": 1 } }, "": 2 })
    );
}

#[test]
fn test_rekey_fixed_prefix() {
    let out = rekey(vec![("x", 1), ("y", 2)], "pre_");
    let pairs: Vec<(&str, i32)> = out.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(pairs, vec![("pre_x", 1), ("pre_y", 2)]);
}

#[test]
fn test_rekey_owned_prefix() {
    let prefix = format!("{}:", "ns");
    let out = rekey(vec![("k", "v")], prefix);
    assert_eq!(out.get("ns:k"), Some(&"v"));
}

#[test]
fn test_replace_key_reads_reflected_objects() {
    let items = vec![
        (
            0,
            Value::opaque(Reflected(Account {
                handle: "ann".to_string(),
                plan: "pro".to_string(),
            })),
        ),
        (1, value!({ "handle": "bob", "plan": "free" })),
    ];
    let out = replace_key(items, Selector::field("handle"), Some("@".into())).unwrap();
    assert_eq!(out.keys().collect::<Vec<_>>(), vec!["@ann", "@bob"]);
}

#[test]
fn test_replace_key_collision_last_write_wins() {
    let items = vec![
        ("first", value!({ "plan": "pro", "n": 1 })),
        ("second", value!({ "plan": "free", "n": 2 })),
        ("third", value!({ "plan": "pro", "n": 3 })),
    ];
    let out = replace_key(items, Selector::field("plan"), None).unwrap();
    assert_eq!(out.len(), 2);
    let (key, item) = out.get_index(0).unwrap();
    assert_eq!(key, "pro");
    assert_eq!(item.get("n"), Some(&Value::from(3)));
}

#[test]
fn test_replace_key_prefix_from_original_key() {
    let items = vec![("eu", value!({ "id": 4 })), ("us", value!({ "id": 4 }))];
    let out = replace_key(
        items,
        Selector::field("id"),
        Some(Prefix::with(|region| format!("{}-", region))),
    )
    .unwrap();
    assert_eq!(out.keys().collect::<Vec<_>>(), vec!["eu-4", "us-4"]);
}

#[test]
fn test_replace_key_missing_on_object() {
    let items = vec![(
        0,
        Value::opaque(Reflected(Account {
            handle: "ann".to_string(),
            plan: "pro".to_string(),
        })),
    )];
    let err = replace_key(items, Selector::field("email"), None).unwrap_err();
    assert_eq!(err, Error::missing_field("email"));
}

#[test]
fn test_replace_key_scalar_item_has_no_fields() {
    let items = vec![("a", Value::from(1))];
    let err = replace_key(items, Selector::field("id"), None).unwrap_err();
    assert!(matches!(err, Error::MissingField { .. }));
}
