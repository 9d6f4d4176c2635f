//! Conversion of JSON command line arguments into runtime values.
//!
//! | JSON                   | Value                                  |
//! |------------------------|----------------------------------------|
//! | `null`, bool, string   | the same scalar                        |
//! | integral number        | `Int`                                  |
//! | other number           | `Float`                                |
//! | array                  | list keyed `0..n`                      |
//! | `{"$class": "Name"}`   | instance of `Name`                     |
//! | any other object       | array keyed by property name           |
//!
//! Property names in canonical decimal form (`0`, `42`, `-7`, but not `+5` or
//! `07`) become integer keys.

use anyhow::{Context, bail};
use doctype_types::{ArrayKey, Value};

const CLASS_KEY: &str = "$class";

pub(crate) fn parse(text: &str) -> anyhow::Result<Value> {
    let json: serde_json::Value =
        serde_json::from_str(text).with_context(|| format!("invalid JSON value `{text}`"))?;
    convert(&json)
}

fn convert(json: &serde_json::Value) -> anyhow::Result<Value> {
    let value = match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(x) = n.as_f64() {
                Value::Float(x)
            } else {
                bail!("number `{n}` is out of range");
            }
        }
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => {
            Value::list(items.iter().map(convert).collect::<anyhow::Result<Vec<_>>>()?)
        }
        serde_json::Value::Object(map) => {
            if let Some(class) = map.get(CLASS_KEY) {
                if map.len() != 1 {
                    bail!("an object with `{CLASS_KEY}` must have no other properties");
                }
                let Some(class) = class.as_str() else {
                    bail!("`{CLASS_KEY}` must be a string");
                };
                return Ok(Value::object(class));
            }
            let entries = map
                .iter()
                .map(|(key, item)| -> anyhow::Result<(ArrayKey, Value)> {
                    Ok((array_key(key), convert(item)?))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            Value::Array(entries)
        }
    };
    Ok(value)
}

fn array_key(key: &str) -> ArrayKey {
    match key.parse::<i64>() {
        Ok(i) if i.to_string() == key => ArrayKey::Int(i),
        _ => ArrayKey::String(key.to_string()),
    }
}
