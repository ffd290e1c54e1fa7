//! Query demo
//!
//! Runs a few queries against an inline document and prints the results.
//! Run with `RUST_LOG=debug` to see evaluation logs.

use anyhow::Result;
use sqljson::{ComparisonOp, FilterExpression as F, ProjectionItem, QueryClause, ResultSet, SqlJson};

const DOCUMENT: &str = r#"{
  "items": [
    {"name": "Daniel", "age": 38, "weight": 161.5, "birthdate": "1982-11-30", "departments": ["IT", "HR"]},
    {"name": "John", "age": 41, "weight": 180, "birthdate": "1978-01-30", "departments": ["Sales"]},
    {"name": "Mary", "age": 29, "weight": 130.2, "birthdate": "1995-07-14", "departments": ["IT"]}
  ]
}"#;

fn print_result(title: &str, mut result: ResultSet) -> Result<()> {
    println!("== {title} ({} rows)", result.len());
    println!("   {}", result.column_names().join(" | "));
    while result.advance() {
        let mut cells = Vec::with_capacity(result.column_names().len());
        for index in 0..result.column_names().len() {
            cells.push(result.get_string(index)?.unwrap_or_else(|| "NULL".to_string()));
        }
        println!("   {}", cells.join(" | "));
    }
    println!();
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let sql_json = SqlJson::from_str(DOCUMENT)?;

    let adults = QueryClause::builder("items")
        .filter(F::compare(F::column("age"), ComparisonOp::GreaterEq, F::literal(30)))
        .select_all()
        .build();
    print_result(&adults.to_string(), sql_json.query(&adults)?)?;

    let it_staff = QueryClause::builder("items")
        .filter(F::in_list(F::literal("IT"), F::column("departments"), false))
        .select(ProjectionItem::aliased("name", "employee"))
        .select_column("birthdate")
        .build();
    print_result(&it_staff.to_string(), sql_json.query(&it_staff)?)?;

    let in_range = sql_json.query_json(
        r#"{
            "root_path": "items",
            "filter": {
                "kind": "between",
                "field": {"kind": "column", "name": "weight"},
                "low": {"kind": "literal", "value": {"type": "integer", "value": 160}},
                "high": {"kind": "literal", "value": {"type": "float", "value": 179.9}}
            },
            "projections": [{"kind": "whole_row"}]
        }"#,
    )?;
    print_result("weight BETWEEN 160 AND 179.9 (from JSON)", in_range)?;

    let invalid = QueryClause::builder("items")
        .filter(F::between(F::column("name"), F::literal(160), F::literal(179.9)))
        .select_all()
        .build();
    match sql_json.query(&invalid) {
        Ok(result) => println!("unexpected success with {} rows", result.len()),
        Err(error) => println!("== {invalid}\n   failed as expected: {error}"),
    }

    Ok(())
}
