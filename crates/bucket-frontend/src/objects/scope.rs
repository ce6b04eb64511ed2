use std::collections::HashMap;

use super::ObjectId;
use crate::ast::Name;

/// The names declared directly in a class body.
#[derive(Debug, Default)]
pub struct Scope {
    names: HashMap<Name, ObjectId>,
}

impl Scope {
    pub fn get(&self, name: &str) -> Option<ObjectId> {
        self.names.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ObjectId)> {
        self.names.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Add a name, returning the id it was bound to before if there was one.
    pub(super) fn insert(&mut self, name: Name, id: ObjectId) -> Option<ObjectId> {
        self.names.insert(name, id)
    }
}
