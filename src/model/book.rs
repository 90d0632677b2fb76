use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{AbookError, AbookResult};

use super::record::Record;

/// The in-memory contact store: one `Record` per name.
///
/// Keys are exact, case-sensitive names and always equal the record's
/// own name. Iteration is in name order, which is what the birthday
/// report and the `all` listing use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record under its own name, replacing any existing
    /// record for that name. No merge.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().to_string(), record);
    }

    pub fn find(&self, name: &str) -> AbookResult<&Record> {
        self.records.get(name).ok_or_else(|| AbookError::ContactNotFound {
            name: name.to_string(),
        })
    }

    pub fn find_mut(&mut self, name: &str) -> AbookResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| AbookError::ContactNotFound {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Removes and returns the record for `name`.
    pub fn delete(&mut self, name: &str) -> AbookResult<Record> {
        self.records
            .remove(name)
            .ok_or_else(|| AbookError::ContactNotFound {
                name: name.to_string(),
            })
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
