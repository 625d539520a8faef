use anyhow::Context;
use anyhow::Result;
use serde_json::Value;
use std::io::BufRead;
use std::io::Read;
use thiserror::Error;
use version_sorter::KeyError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("expected a string, found {0}")]
    NotAString(&'static str),

    #[error("expected an object with a string \"{0}\" field")]
    MissingField(String),
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// One version per line, blank lines skipped.
pub fn read_lines<R: BufRead>(read: R) -> Result<Vec<String>> {
    let mut versions = Vec::new();
    for line in read.lines() {
        let line = line.context("failed to read input")?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            versions.push(line.to_string());
        }
    }
    Ok(versions)
}

pub fn read_json<R: Read>(read: R) -> Result<Vec<Value>> {
    serde_json::from_reader(read).context("input is not a JSON array")
}

/// The version string of a JSON item: the item itself, or one of its fields.
pub fn version_of<'a>(item: &'a Value, key: Option<&str>) -> Result<&'a str, ItemError> {
    match key {
        None => item.as_str().ok_or_else(|| ItemError::NotAString(json_type(item))),
        Some(key) => item.get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| ItemError::MissingField(key.to_string())),
    }
}

/// Version strings for every item, or the first item that has none.
pub fn versions_of<'a>(items: &'a [Value], key: Option<&str>) -> Result<Vec<&'a str>, KeyError<ItemError>> {
    items.iter()
        .enumerate()
        .map(|(index, item)| version_of(item, key).map_err(|source| KeyError { index, source }))
        .collect()
}
