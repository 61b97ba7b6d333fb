use std::fs;

use protogen_schema::{Error, FieldType, NodeKind, ScalarKind, SchemaTree};

const SCHEMA: &str = r#"{
  "kind": "package",
  "path": "operations_research.sat",
  "children": [
    {
      "kind": "message",
      "name": "SatParameters",
      "children": [
        { "kind": "field", "name": "max_time_in_seconds", "ordinal": 36, "type": "double",
          "options": { "default": "inf" } },
        { "kind": "field", "name": "restart_algorithms", "ordinal": 61, "label": "repeated",
          "type": "RestartAlgorithm" },
        {
          "kind": "enum",
          "name": "RestartAlgorithm",
          "children": [
            { "kind": "enum_field", "name": "NO_RESTART", "ordinal": 0 },
            { "kind": "enum_field", "name": "LUBY_RESTART", "ordinal": 1 }
          ]
        }
      ]
    }
  ]
}"#;

#[test]
fn test_load_schema_from_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("schema.json");
    fs::write(&path, SCHEMA).expect("Failed to write schema");

    let tree = SchemaTree::from_file(&path).expect("Failed to load schema");
    let root = tree.root();
    assert_eq!(root.kind, NodeKind::Package { path: "operations_research.sat".into() });
    assert_eq!(root.node_count(), 7);

    let message = &root.children[0];
    let NodeKind::Field(seconds) = &message.children[0].kind else {
        panic!("expected a field, got {:?}", message.children[0].kind);
    };
    assert_eq!(seconds.ty, FieldType::Scalar(ScalarKind::Double));
    assert_eq!(seconds.default_value().as_deref(), Some("inf"));

    let NodeKind::Field(restarts) = &message.children[1].kind else {
        panic!("expected a field, got {:?}", message.children[1].kind);
    };
    assert_eq!(restarts.ty, FieldType::Named("RestartAlgorithm".into()));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = SchemaTree::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_unknown_kind_points_at_source() {
    let err = "{\n  \"kind\": \"service\",\n  \"name\": \"Solver\"\n}"
        .parse::<SchemaTree>()
        .unwrap_err();
    match *err {
        Error::Schema { span, .. } => assert!(span.is_some()),
        other => panic!("expected schema error, got {other:?}"),
    }
}
