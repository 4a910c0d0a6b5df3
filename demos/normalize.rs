//! Flattening domain objects into plain trees.
//!
//! Run with: cargo run --example normalize

use chrono::{TimeZone, Utc};
use num_bigint::BigInt;
use scalarize::{normalize_deep, normalize_shallow, to_literal, value, Object, Reflected, Value};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct Address {
    city: String,
    zip: String,
}

#[derive(Debug)]
struct Shipment {
    id: u64,
    to: Address,
    weight_grams: BigInt,
    sent: chrono::DateTime<Utc>,
}

impl Object for Shipment {
    fn to_json_value(&self) -> Option<Value> {
        Some(value!({
            "id": (self.id),
            "to": (Value::opaque(Reflected(Address {
                city: self.to.city.clone(),
                zip: self.to.zip.clone(),
            }))),
            "weight": (Value::opaque(self.weight_grams.clone())),
            "sent": (Value::opaque(self.sent))
        }))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let shipment = Shipment {
        id: 77,
        to: Address {
            city: "Lyon".to_string(),
            zip: "69001".to_string(),
        },
        weight_grams: BigInt::from(1_250),
        sent: Utc.with_ymd_and_hms(2024, 3, 9, 14, 0, 0).unwrap(),
    };
    let input = Value::opaque(shipment);

    // One level only: nested objects are still opaque
    let shallow = normalize_shallow(input.clone())?;
    println!("Shallow:");
    for (key, item) in shallow.as_container().into_iter().flatten() {
        println!("  {} is opaque: {}", key, item.is_opaque());
    }

    let plain = normalize_deep(input)?;
    println!("\nDeep:\n{}", to_literal(&[plain])?);

    Ok(())
}
