//! Rendering parameterized statements for logs.
//!
//! Run with: cargo run --example statement_debug

use scalarize::{interpolate, query_str, to_value, BoundStatement, Value};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct Filter {
    status: String,
    limit: u32,
}

/// A minimal statement builder that keeps its bindings alongside the SQL.
struct Select {
    table: &'static str,
    wheres: Vec<(&'static str, Value)>,
    sql: String,
    bindings: Vec<Value>,
}

impl Select {
    fn select_from(table: &'static str) -> Self {
        Select {
            table,
            wheres: Vec::new(),
            sql: String::new(),
            bindings: Vec::new(),
        }
    }

    fn filter(mut self, column: &'static str, value: Value) -> Self {
        self.wheres.push((column, value));
        self
    }

    fn build(mut self) -> Self {
        let clauses: Vec<String> = self
            .wheres
            .iter()
            .map(|(column, _)| format!("{} = ?", column))
            .collect();
        self.sql = format!("select * from {} where {}", self.table, clauses.join(" and "));
        self.bindings = self.wheres.iter().map(|(_, v)| v.clone()).collect();
        self
    }
}

impl BoundStatement for Select {
    fn sql(&self) -> &str {
        &self.sql
    }

    fn bindings(&self) -> &[Value] {
        &self.bindings
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = to_value(&Filter {
        status: "it's open".to_string(),
        limit: 20,
    })?;

    let select = Select::select_from("tickets")
        .filter("status", filter.get("status").cloned().unwrap_or_default())
        .filter("archived", Value::from(false))
        .filter("owner", Value::Null)
        .build();
    println!("{}", query_str(&select)?);

    // Leftover placeholders are kept
    println!("{}", interpolate("limit ? offset ?", &[Value::from(20)])?);

    Ok(())
}
