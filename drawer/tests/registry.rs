use drawer::{
    registry, Attributes, Component, DrawerConfig, Mount, Registry, RegistryError,
};

fn create(
    registry: &Registry,
    tag: &str,
    attrs: &Attributes,
) -> Result<Box<dyn Component>, RegistryError> {
    registry.create(tag, attrs, &DrawerConfig::default())
}

#[test]
fn test_builtin_tags() {
    let registry = Registry::builtin();
    assert_eq!(registry.tags(), vec!["app-drawer", "ext-button", "ext-table"]);
}

#[test]
fn test_create_by_tag() {
    let registry = Registry::builtin();

    let table = create(&registry, "ext-table", &Attributes::new()).unwrap();
    assert_eq!(table.tag(), "ext-table");

    let button = create(
        &registry,
        "ext-button",
        &Attributes::new().with("role", "delRow"),
    )
    .unwrap();
    assert_eq!(button.tag(), "ext-button");
}

#[test]
fn test_created_drawer_initializes_on_attach() {
    let mut drawer = create(&Registry::builtin(), "app-drawer", &Attributes::new()).unwrap();
    assert!(!drawer.is_attached());
    drawer.attach(Mount::new(0, 0));
    assert!(drawer.is_attached());
    // 4x4 grid with spacing 1 and 8-wide cells: 37 wide, 9 tall.
    let bounds = drawer.bounds();
    assert!(bounds.width >= 37);
    assert!(bounds.height >= 9);
}

#[test]
fn test_button_requires_valid_role() {
    let registry = Registry::builtin();

    assert_eq!(
        create(&registry, "ext-button", &Attributes::new()).err(),
        Some(RegistryError::MissingAttribute {
            tag: "ext-button",
            name: "role"
        })
    );
    assert_eq!(
        create(
            &registry,
            "ext-button",
            &Attributes::new().with("role", "upsideDown")
        )
        .err(),
        Some(RegistryError::InvalidRole("upsideDown".to_string()))
    );
}

#[test]
fn test_unknown_tag() {
    let registry = Registry::builtin();
    assert_eq!(
        create(&registry, "ext-chart", &Attributes::new()).err(),
        Some(RegistryError::UnknownTag("ext-chart".to_string()))
    );
}

#[test]
fn test_define_once() {
    let mut registry = Registry::new();
    assert!(!registry.is_defined("ext-table"));

    registry
        .define("ext-table", drawer::Table::create)
        .unwrap();
    assert!(registry.is_defined("ext-table"));

    assert_eq!(
        registry.define("ext-table", drawer::Table::create),
        Err(RegistryError::AlreadyDefined("ext-table".to_string()))
    );
}

#[test]
fn test_builtin_tags_cannot_be_redefined() {
    let mut registry = Registry::builtin();
    assert_eq!(
        registry.define("ext-button", drawer::Button::create),
        Err(RegistryError::AlreadyDefined("ext-button".to_string()))
    );
    assert_eq!(registry.tags().len(), 3);
}

#[test]
fn test_global_registry_is_shared() {
    let first = registry() as *const Registry;
    let second = registry() as *const Registry;
    assert_eq!(first, second);
    assert!(registry().is_defined("app-drawer"));
}
