use serde_json::json;
use vouch::{RegistryError, SchemaNode, TestRegistry, Valid};

#[test]
fn test_application_defined_vocabulary() {
    let registry = TestRegistry::with_builtins();
    registry
        .register(
            "username",
            Valid::string()
                .matches("^[a-z][a-z0-9_]*$")
                .unwrap()
                .length(3, Some(16))
                .seal("username"),
        )
        .unwrap();

    assert!(registry.validate("username", &json!("ada_92")).unwrap().is_success());
    assert!(registry.validate("username", &json!("9lives")).unwrap().is_failure());
    assert!(registry.names().contains(&"username".to_string()));
}

#[test]
fn test_named_tests_compose_with_schemas() {
    let registry = TestRegistry::with_builtins();
    registry
        .register("percent", Valid::number().ge(0).le(100).seal("percent"))
        .unwrap();

    let percent = registry.get("percent").unwrap();
    let chain = Valid::json(SchemaNode::mapping([
        ("done", SchemaNode::from(&percent)),
        ("label", SchemaNode::from(Valid::chain().named(&registry, "not_blank").unwrap())),
    ]));

    assert!(chain.check(&json!({"done": 40, "label": "build"})));

    let err = chain.verify(&json!({"done": 140, "label": ""})).unwrap_err();
    let report = err.failure.as_report().unwrap();
    assert_eq!(report.message_at(".done"), Some("must be less than or equal to 100"));
    assert_eq!(report.message_at(".label"), Some("can't be blank"));
}

#[test]
fn test_unknown_names() {
    let registry = TestRegistry::new();
    assert_eq!(
        registry.validate("missing", &json!(1)).unwrap_err(),
        RegistryError::NotFound("missing".to_string())
    );
    assert_eq!(
        Valid::chain().named(&registry, "missing").unwrap_err().to_string(),
        "test 'missing' not found"
    );
}

#[test]
fn test_builtins_cannot_be_overwritten() {
    let registry = TestRegistry::with_builtins();
    let err = registry
        .register("integer", Valid::nop().seal("integer"))
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateName("integer".to_string()));
    assert!(registry.validate("integer", &json!(1.5)).unwrap().is_failure());
}

#[test]
fn test_new_registry_is_empty() {
    assert!(TestRegistry::new().names().is_empty());
    assert!(!TestRegistry::with_builtins().names().is_empty());
}
