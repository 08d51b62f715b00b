#![allow(non_snake_case)]

use super::*;

fn names(fields: &[&Field]) -> Vec<String> {
    fields.iter().map(|f| f.name.clone()).collect()
}

fn post() -> Entity {
    Entity::new(
        "Post",
        vec![
            Field::scalar("id", "Int"),
            Field::scalar("title", "String"),
            Field::enumeration("status", "Status"),
            Field::relation("author", "User", ["authorId"]),
            Field::scalar("authorId", "Int"),
            Field::relation("tags", "Tag", Vec::<String>::new()),
            Field::enumeration("visibility", "Visibility"),
        ],
    )
}

#[test]
fn classify___partitions_by_kind_preserving_order() {
    let entity = post();

    let classified = classify(&entity);

    assert_eq!(names(&classified.enums), vec!["status", "visibility"]);
    assert_eq!(names(&classified.scalars), vec!["id", "title"]);
    assert_eq!(names(&classified.relations), vec!["author", "tags"]);
}

#[test]
fn classify___excludes_relation_key_scalars() {
    let entity = post();

    let classified = classify(&entity);

    assert!(classified.is_relation_key("authorId"));
    assert!(!classified.scalars.iter().any(|f| f.name == "authorId"));
}

#[test]
fn classify___relation_without_from_fields___excludes_nothing() {
    let entity = Entity::new(
        "User",
        vec![
            Field::scalar("id", "String"),
            Field::relation("posts", "Post", Vec::<String>::new()),
        ],
    );

    let classified = classify(&entity);

    assert_eq!(names(&classified.scalars), vec!["id"]);
    assert_eq!(classified.relation_keys().count(), 0);
}

#[test]
fn classify___composite_key___excludes_every_key_field() {
    let entity = Entity::new(
        "Membership",
        vec![
            Field::scalar("orgId", "String"),
            Field::scalar("orgRegion", "String"),
            Field::scalar("role", "String"),
            Field::relation("org", "Org", ["orgId", "orgRegion"]),
        ],
    );

    let classified = classify(&entity);

    assert_eq!(names(&classified.scalars), vec!["role"]);
    assert_eq!(classified.relation_keys().count(), 2);
}

#[test]
fn classify___keeps_back_reference_to_entity() {
    let entity = post();

    let classified = classify(&entity);

    assert!(std::ptr::eq(classified.entity, &entity));
}

#[test]
fn classify___empty_entity___yields_empty_buckets() {
    let entity = Entity::new("Empty", vec![]);

    let classified = classify(&entity);

    assert!(classified.enums.is_empty());
    assert!(classified.scalars.is_empty());
    assert!(classified.relations.is_empty());
}
