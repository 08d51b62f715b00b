#![allow(non_snake_case)]

use super::*;

const DMMF: &str = r#"{
  "datamodel": {
    "enums": [
      {
        "name": "Status",
        "values": [
          { "name": "DRAFT", "dbName": null },
          { "name": "PUBLISHED", "dbName": null }
        ],
        "dbName": null
      }
    ],
    "models": [
      {
        "name": "Post",
        "dbName": null,
        "fields": [
          {
            "name": "id",
            "kind": "scalar",
            "isList": false,
            "isRequired": true,
            "isUnique": false,
            "isId": true,
            "type": "Int",
            "hasDefaultValue": true,
            "default": { "name": "autoincrement", "args": [] }
          },
          {
            "name": "status",
            "kind": "enum",
            "isRequired": true,
            "type": "Status",
            "default": "DRAFT"
          },
          {
            "name": "published",
            "kind": "scalar",
            "isRequired": false,
            "type": "Boolean",
            "default": false
          },
          {
            "name": "author",
            "kind": "object",
            "isRequired": true,
            "type": "User",
            "relationName": "PostToUser",
            "relationFromFields": ["authorId"],
            "relationToFields": ["id"]
          },
          {
            "name": "authorId",
            "kind": "scalar",
            "isRequired": true,
            "type": "Int"
          }
        ]
      }
    ]
  },
  "schema": {},
  "mappings": {}
}"#;

#[test]
fn Document___from_json___parses_full_dmmf() {
    let document = Document::from_json(DMMF).unwrap();

    assert_eq!(document.enums.len(), 1);
    assert_eq!(document.entities.len(), 1);
    assert_eq!(document.entities[0].name, "Post");
    assert_eq!(document.entities[0].fields.len(), 5);
}

#[test]
fn Document___from_json___parses_bare_datamodel() {
    let json = r#"{
        "enums": [],
        "models": [{ "name": "User", "fields": [
            { "name": "name", "kind": "scalar", "type": "String", "isRequired": true }
        ]}]
    }"#;

    let document = Document::from_json(json).unwrap();

    assert_eq!(document.entities[0].name, "User");
    assert_eq!(document.entities[0].fields[0].ty, "String");
}

#[test]
fn Document___from_json___rejects_malformed_json() {
    let result = Document::from_json("{ \"models\": [");

    assert!(matches!(result, Err(GenerateError::Document(_))));
}

#[test]
fn Document___from_json___full_dmmf_with_bad_field_kind___is_rejected() {
    let json = r#"{"datamodel": {"enums": [], "models": [
        {"name": "User", "fields": [{"name": "id", "kind": "scalarr", "type": "String"}]}
    ]}}"#;

    let result = Document::from_json(json);

    assert!(matches!(result, Err(GenerateError::Document(_))));
}

#[test]
fn Document___from_json___full_dmmf_with_field_missing_type___is_rejected() {
    let json = r#"{"datamodel": {"enums": [], "models": [
        {"name": "User", "fields": [{"name": "id", "kind": "scalar"}]}
    ]}}"#;

    let result = Document::from_json(json);

    assert!(matches!(result, Err(GenerateError::Document(_))));
}

#[test]
fn Document___from_json___unrelated_object___is_rejected() {
    let result = Document::from_json(r#"{"name": "pkg", "version": "1"}"#);

    assert!(matches!(result, Err(GenerateError::Document(_))));
}

#[test]
fn Document___from_json___datamodel_without_models___is_rejected() {
    let result = Document::from_json(r#"{"datamodel": {"enums": []}}"#);

    assert!(matches!(result, Err(GenerateError::Document(_))));
}

#[test]
fn Document___from_json___empty_models_list___is_an_empty_document() {
    let document = Document::from_json(r#"{"models": []}"#).unwrap();

    assert!(document.entities.is_empty());
    assert!(document.enums.is_empty());
}

#[test]
fn Document___from_json___maps_object_kind_to_relation() {
    let document = Document::from_json(DMMF).unwrap();
    let author = &document.entities[0].fields[3];

    assert_eq!(author.kind, FieldKind::Relation);
    assert_eq!(author.from_fields(), ["authorId".to_string()]);
}

#[test]
fn Document___from_json___reads_defaults_by_shape() {
    let document = Document::from_json(DMMF).unwrap();
    let fields = &document.entities[0].fields;

    assert!(matches!(fields[0].default, Some(FieldDefault::Other(_))));
    assert_eq!(fields[1].default, Some(FieldDefault::String("DRAFT".into())));
    assert_eq!(fields[2].default, Some(FieldDefault::Bool(false)));
    assert_eq!(fields[4].default, None);
}

#[test]
fn Document___from_json___reads_numeric_default() {
    let json = r#"{ "models": [{ "name": "Item", "fields": [
        { "name": "rank", "kind": "scalar", "type": "Float", "default": 1.5 }
    ]}]}"#;

    let document = Document::from_json(json).unwrap();

    match &document.entities[0].fields[0].default {
        Some(FieldDefault::Number(n)) => assert_eq!(n.to_string(), "1.5"),
        other => panic!("expected numeric default, got {other:?}"),
    }
}

#[test]
fn Document___from_json___treats_unsupported_kind_as_scalar() {
    let json = r#"{ "models": [{ "name": "Place", "fields": [
        { "name": "area", "kind": "unsupported", "type": "polygon" }
    ]}]}"#;

    let document = Document::from_json(json).unwrap();

    assert_eq!(document.entities[0].fields[0].kind, FieldKind::Scalar);
}

#[test]
fn Document___from_json___defaults_missing_required_flag_to_true() {
    let json = r#"{ "models": [{ "name": "User", "fields": [
        { "name": "name", "kind": "scalar", "type": "String" }
    ]}]}"#;

    let document = Document::from_json(json).unwrap();

    assert!(document.entities[0].fields[0].is_required);
}

#[test]
fn Document___from_json___accepts_null_relation_from_fields() {
    let json = r#"{ "models": [{ "name": "User", "fields": [
        { "name": "posts", "kind": "object", "type": "Post", "relationFromFields": null }
    ]}]}"#;

    let document = Document::from_json(json).unwrap();

    assert!(document.entities[0].fields[0].from_fields().is_empty());
}

#[test]
fn Document___from_file___reports_missing_path() {
    let result = Document::from_file("does/not/exist.json");

    match result {
        Err(GenerateError::Io { path, .. }) => {
            assert_eq!(path, std::path::PathBuf::from("does/not/exist.json"))
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn Enum___value_names___preserves_order() {
    let status = Enum::new("Status", ["DRAFT", "REVIEW", "PUBLISHED"]);

    let names: Vec<_> = status.value_names().collect();

    assert_eq!(names, vec!["DRAFT", "REVIEW", "PUBLISHED"]);
}

#[test]
fn Field___relation___records_from_fields() {
    let field = Field::relation("author", "User", ["authorId"]);

    assert_eq!(field.kind, FieldKind::Relation);
    assert_eq!(field.ty, "User");
    assert_eq!(field.from_fields(), ["authorId".to_string()]);
}

#[test]
fn Field___scalar___is_required_without_default() {
    let field = Field::scalar("name", "String");

    assert!(field.is_required);
    assert!(field.default.is_none());
    assert!(field.from_fields().is_empty());
}

#[test]
fn Field___optional_and_with_default___adjust_field() {
    let field = Field::scalar("active", "Boolean")
        .optional()
        .with_default(true.into());

    assert!(!field.is_required);
    assert_eq!(field.default, Some(FieldDefault::Bool(true)));
}
