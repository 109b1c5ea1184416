//! Entity identifiers, attributes, and the object catalog.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Opaque entity identifier (e.g. `"a"`, `"k"`).
///
/// Backed by `Arc<str>` so that copying a [`crate::state::WorldState`] costs
/// a reference-count bump per entity rather than a string allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(Arc<str>);

impl ObjectId {
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(Arc::from(id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ObjectId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

/// Shape of an entity. Drives most of the support rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Brick,
    Plank,
    Ball,
    Pyramid,
    Box,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
    Blue,
    Green,
    Yellow,
    White,
}

/// Physical attributes of one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectDescription {
    pub form: Form,
    pub size: Size,
    pub color: Color,
}

impl ObjectDescription {
    #[must_use]
    pub const fn new(form: Form, size: Size, color: Color) -> Self {
        Self { form, size, color }
    }
}

/// Immutable entity id → attributes mapping.
///
/// Supplied by the upstream world description; the planner only reads it.
/// `BTreeMap` keeps iteration (and therefore serialization) deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    objects: BTreeMap<ObjectId, ObjectDescription>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used mostly by fixtures.
    #[must_use]
    pub fn with(mut self, id: &str, form: Form, size: Size, color: Color) -> Self {
        self.insert(ObjectId::new(id), ObjectDescription::new(form, size, color));
        self
    }

    pub fn insert(&mut self, id: ObjectId, description: ObjectDescription) {
        self.objects.insert(id, description);
    }

    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&ObjectDescription> {
        self.objects.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ObjectId, &ObjectDescription)> {
        self.objects.iter()
    }
}

impl FromIterator<(ObjectId, ObjectDescription)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (ObjectId, ObjectDescription)>>(iter: T) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}
