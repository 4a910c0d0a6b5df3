//! Expanding flat, dotted settings into a nested tree.
//!
//! Run with: cargo run --example dotted_config

use scalarize::path::{rekey, replace_key, undot, Selector};
use scalarize::{to_literal, value, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let env = [
        ("app.name", "billing"),
        ("app.debug", "false"),
        ("db.primary.host", "10.0.0.1"),
        ("db.primary.port", "5432"),
        ("db.replicas.0", "10.0.0.2"),
        ("db.replicas.1", "10.0.0.3"),
    ];

    let tree = undot(env.iter().map(|(k, v)| (*k, Value::from(*v))));
    println!("Config:\n{}\n", to_literal(&[Value::Container(tree)])?);

    let scoped = rekey(env.iter().copied(), "BILLING_");
    for key in scoped.keys() {
        println!("{}", key);
    }

    let services = vec![
        (0, value!({ "name": "api", "port": 8080 })),
        (1, value!({ "name": "worker", "port": 9090 })),
    ];
    let by_name = replace_key(services, Selector::field("name"), Some("svc.".into()))?;
    let nested = undot(by_name);
    println!("\nServices:\n{}", to_literal(&[Value::Container(nested)])?);

    Ok(())
}
