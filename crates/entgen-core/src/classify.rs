//! Partitioning of an entity's fields by kind.

use crate::{Entity, Field, FieldKind};
use std::collections::HashSet;

/// An entity's fields split into enum, scalar and relation buckets.
///
/// Each bucket keeps the entity's field order. Scalars that carry a
/// relation's key (named in some relation's `relationFromFields`) are left
/// out of `scalars`: the relation already represents them.
#[derive(Debug, Clone)]
pub struct ClassifiedFields<'a> {
    /// The entity these fields belong to
    pub entity: &'a Entity,

    pub enums: Vec<&'a Field>,

    pub scalars: Vec<&'a Field>,

    pub relations: Vec<&'a Field>,

    relation_keys: HashSet<&'a str>,
}

impl<'a> ClassifiedFields<'a> {
    /// Whether `name` is a key-carrying scalar of one of the relations
    pub fn is_relation_key(&self, name: &str) -> bool {
        self.relation_keys.contains(name)
    }

    /// Names of all key-carrying scalars
    pub fn relation_keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.relation_keys.iter().copied()
    }
}

/// Classify the fields of `entity`.
pub fn classify(entity: &Entity) -> ClassifiedFields<'_> {
    let mut enums = Vec::new();
    let mut scalars = Vec::new();
    let mut relations = Vec::new();

    for field in &entity.fields {
        match field.kind {
            FieldKind::Enum => enums.push(field),
            FieldKind::Scalar => scalars.push(field),
            FieldKind::Relation => relations.push(field),
        }
    }

    // A relation without from-fields has no key column on this side
    let relation_keys: HashSet<&str> = relations
        .iter()
        .copied()
        .flat_map(Field::from_fields)
        .map(String::as_str)
        .collect();

    scalars.retain(|field| !relation_keys.contains(field.name.as_str()));

    ClassifiedFields {
        entity,
        enums,
        scalars,
        relations,
        relation_keys,
    }
}

#[cfg(test)]
#[path = "classify/classify_tests.rs"]
mod classify_tests;
