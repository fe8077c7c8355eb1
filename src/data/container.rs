// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use ndarray::ArrayViewD;
use serde_json::{Map, Number, Value};

use super::NumericArray;

/// Newtype wrapper for per-run result data.
///
/// Created by the host before postprocessing, filled by one or more
/// postprocessor invocations and read back afterwards. Inserting an existing
/// key overwrites it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultContainer(pub HashMap<String, NumericArray>);

impl ResultContainer {
    /// Create a new empty container
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Store a field, returning the value it replaced
    pub fn insert(&mut self, name: impl Into<String>, value: NumericArray) -> Option<NumericArray> {
        self.0.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&NumericArray> {
        self.0.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get all field names
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &NumericArray)> {
        self.0.iter()
    }

    pub fn into_inner(self) -> HashMap<String, NumericArray> {
        self.0
    }

    /// Render as a JSON object of (nested) number lists, keys sorted.
    ///
    /// Non-finite values become `null`.
    pub fn to_json(&self) -> Value {
        let fields: Map<String, Value> = self
            .0
            .iter()
            .map(|(name, array)| (name.clone(), view_to_json(array.view())))
            .collect();
        Value::Object(fields)
    }
}

impl From<HashMap<String, NumericArray>> for ResultContainer {
    fn from(map: HashMap<String, NumericArray>) -> Self {
        Self(map)
    }
}

fn view_to_json(view: ArrayViewD<'_, f64>) -> Value {
    match view.ndim() {
        0 => view.iter().next().map(|x| number(*x)).unwrap_or(Value::Null),
        1 => Value::Array(view.iter().map(|x| number(*x)).collect()),
        _ => Value::Array(view.outer_iter().map(view_to_json).collect()),
    }
}

fn number(value: f64) -> Value {
    Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null)
}
