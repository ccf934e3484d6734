//! Layered configuration merging.
//!
//! Later layers are merged into earlier ones:
//! - tables merge key by key, recursively
//! - arrays concatenate (target items first, then source items)
//! - an array meeting a scalar treats the scalar as a one-element array
//! - any other value in the source replaces the target value
//!
//! Keys missing from a layer keep the value of the layers before it.

use toml::{Table, Value};

/// Merge configuration layers in order.
#[must_use]
pub fn merge_doc_config(layers: impl IntoIterator<Item = Table>) -> Table {
    let mut merged = Table::new();
    for layer in layers {
        merge_tables(&mut merged, layer);
    }
    merged
}

fn merge_tables(target: &mut Table, source: Table) {
    for (key, value) in source {
        match target.get_mut(&key) {
            Some(existing) => merge_values(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}

fn merge_values(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Table(target), Value::Table(source)) => merge_tables(target, source),
        (Value::Array(target), Value::Array(source)) => target.extend(source),
        (Value::Array(target), source) => target.push(source),
        (target, Value::Array(source)) => {
            let previous = std::mem::replace(target, Value::Array(Vec::new()));
            let mut items = Vec::with_capacity(source.len() + 1);
            items.push(previous);
            items.extend(source);
            *target = Value::Array(items);
        }
        (target, source) => *target = source,
    }
}
