use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// The variable store: a single flat map from names to values.
///
/// There are no scopes and no declarations. The first assignment to a name
/// creates its binding and later assignments overwrite it, whatever the type
/// of the old value.
#[derive(Debug, Default)]
pub struct Store {
    bindings: HashMap<String, Value>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable by name.
    ///
    /// # Example
    /// ```
    /// use aslang::interpreter::{evaluator::store::Store, value::core::Value};
    ///
    /// let mut store = Store::new();
    /// store.set("x", Value::from(5));
    ///
    /// assert_eq!(store.get("x"), Some(&Value::from(5)));
    /// assert_eq!(store.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
        } else {
            self.bindings.insert(name.to_string(), value);
        }
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }
}
