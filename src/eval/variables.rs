//! The flat variable table shared by the parser and the demonstration run

use rustc_hash::FxHashMap;

/// Name → most recent integer value
///
/// One namespace, no shadowing. Iteration follows first-declaration order so
/// that listings are stable; reassigning a name keeps its original slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableTable {
    entries: Vec<(String, i64)>,
    index: FxHashMap<String, usize>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.index.get(name).map(|&slot| self.entries[slot].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Bind `name` to `value`, returning the previous value if there was one.
    pub fn set(&mut self, name: &str, value: i64) -> Option<i64> {
        match self.index.get(name) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), value));
                None
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, i64)> for VariableTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, i64)>>(iter: I) -> Self {
        let mut table = VariableTable::new();
        for (name, value) in iter {
            table.set(name, value);
        }
        table
    }
}
