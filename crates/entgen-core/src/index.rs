//! Read-only lookup structure over a [`Document`].

use crate::{ClassifiedFields, Document, Entity, Enum, classify};
use std::collections::HashMap;

/// Name-keyed view of a document, built once per generation run.
///
/// Borrows the document; nothing is copied. Names are assumed unique; a
/// duplicate name overwrites the earlier entry (last write wins).
#[derive(Debug)]
pub struct ModelIndex<'a> {
    enums: HashMap<&'a str, &'a Enum>,
    entities: HashMap<&'a str, &'a Entity>,
    classified: HashMap<&'a str, ClassifiedFields<'a>>,
}

impl<'a> ModelIndex<'a> {
    /// Build the index in one pass over the enum list and one over the entity list
    pub fn build(document: &'a Document) -> Self {
        let mut enums = HashMap::with_capacity(document.enums.len());
        for definition in &document.enums {
            enums.insert(definition.name.as_str(), definition);
        }

        let mut entities = HashMap::with_capacity(document.entities.len());
        let mut classified = HashMap::with_capacity(document.entities.len());
        for entity in &document.entities {
            entities.insert(entity.name.as_str(), entity);
            classified.insert(entity.name.as_str(), classify(entity));
        }

        Self {
            enums,
            entities,
            classified,
        }
    }

    pub fn enum_def(&self, name: &str) -> Option<&'a Enum> {
        self.enums.get(name).copied()
    }

    pub fn entity(&self, name: &str) -> Option<&'a Entity> {
        self.entities.get(name).copied()
    }

    pub fn classified(&self, name: &str) -> Option<&ClassifiedFields<'a>> {
        self.classified.get(name)
    }

    /// Number of distinct enum names
    pub fn enum_count(&self) -> usize {
        self.enums.len()
    }

    /// Number of distinct entity names
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::Field;

    fn document() -> Document {
        Document::new(
            vec![
                Enum::new("Role", ["USER", "ADMIN"]),
                Enum::new("Status", ["DRAFT", "PUBLISHED"]),
            ],
            vec![
                Entity::new(
                    "User",
                    vec![
                        Field::scalar("id", "String"),
                        Field::enumeration("role", "Role"),
                    ],
                ),
                Entity::new(
                    "Post",
                    vec![
                        Field::relation("author", "User", ["authorId"]),
                        Field::scalar("authorId", "String"),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn ModelIndex___build___indexes_enums_by_name() {
        let document = document();

        let index = ModelIndex::build(&document);

        assert_eq!(index.enum_count(), 2);
        let status = index.enum_def("Status").unwrap();
        assert_eq!(status.value_names().collect::<Vec<_>>(), ["DRAFT", "PUBLISHED"]);
        assert!(index.enum_def("Missing").is_none());
    }

    #[test]
    fn ModelIndex___build___indexes_entities_by_name() {
        let document = document();

        let index = ModelIndex::build(&document);

        assert_eq!(index.entity_count(), 2);
        assert!(std::ptr::eq(index.entity("Post").unwrap(), &document.entities[1]));
        assert!(index.entity("Comment").is_none());
    }

    #[test]
    fn ModelIndex___build___classifies_every_entity() {
        let document = document();

        let index = ModelIndex::build(&document);

        let post = index.classified("Post").unwrap();
        assert!(post.scalars.is_empty());
        assert_eq!(post.relations.len(), 1);
        assert!(post.is_relation_key("authorId"));
        assert_eq!(index.classified("User").unwrap().enums.len(), 1);
    }

    #[test]
    fn ModelIndex___duplicate_names___last_write_wins() {
        let document = Document::new(
            vec![Enum::new("Role", ["A"]), Enum::new("Role", ["B", "C"])],
            vec![
                Entity::new("User", vec![]),
                Entity::new("User", vec![Field::scalar("id", "String")]),
            ],
        );

        let index = ModelIndex::build(&document);

        assert_eq!(index.enum_count(), 1);
        assert_eq!(index.enum_def("Role").unwrap().values.len(), 2);
        assert_eq!(index.entity("User").unwrap().fields.len(), 1);
        assert!(std::ptr::eq(
            index.classified("User").unwrap().entity,
            &document.entities[1]
        ));
    }

    #[test]
    fn ModelIndex___empty_document___is_empty() {
        let document = Document::default();

        let index = ModelIndex::build(&document);

        assert_eq!(index.enum_count(), 0);
        assert_eq!(index.entity_count(), 0);
    }
}
