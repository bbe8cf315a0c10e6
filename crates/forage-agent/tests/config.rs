use std::io::Write;

use forage_agent::{CategoryCatalog, CategoryEntry, FloatRange, ForageConfig, ForageError};
use forage_core::Category;

#[test]
fn defaults_validate() {
    let config = ForageConfig::default();
    config.validate().unwrap();
    assert!(config.agent.training_mode);
    assert!(config.agent.delivery_enabled);
    assert_eq!(config.agent.feed_amount, 0.1);
    assert_eq!(config.spawn.attempts, 100);
    assert_eq!(config.environment.area_diameter, 20.0);
}

#[test]
fn partial_yaml_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "version: \"1\"\nagent:\n  training_mode: false\nreward:\n  distance_scale: 0.01\ncategories:\n  - id: 0\n    name: beagle\n  - id: 2\n    name: pug\n"
    )
    .unwrap();

    let config = ForageConfig::load(file.path()).unwrap();
    assert_eq!(config.version.as_deref(), Some("1"));
    assert!(!config.agent.training_mode);
    assert_eq!(config.agent.move_force, 2.0);
    assert_eq!(config.reward.distance_scale, 0.01);
    assert_eq!(config.reward.alignment_scale, 0.001);
    assert_eq!(config.categories.len(), 2);
}

#[test]
fn missing_file_is_io_error_unless_defaulted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("forage.yaml");

    assert!(matches!(ForageConfig::load(&path), Err(ForageError::Io { .. })));
    assert_eq!(ForageConfig::load_or_default(&path).unwrap(), ForageConfig::default());
}

#[test]
fn malformed_yaml_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "agent: [not, a, map").unwrap();
    assert!(matches!(
        ForageConfig::load(file.path()),
        Err(ForageError::ConfigParse { .. })
    ));
}

#[test]
fn yaml_round_trip() {
    let mut config = ForageConfig::default();
    config.categories.push(CategoryEntry {
        id: 1,
        name: "husky".to_string(),
    });
    let yaml = config.to_yaml().unwrap();
    let back: ForageConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, config);
}

#[test]
fn rejects_invalid_values() {
    let mut config = ForageConfig::default();
    config.environment.area_diameter = 0.0;
    assert!(matches!(config.validate(), Err(ForageError::InvalidConfig(_))));

    let mut config = ForageConfig::default();
    config.agent.max_pitch_deg = 95.0;
    assert!(config.validate().is_err());

    let mut config = ForageConfig::default();
    config.spawn.attempts = 0;
    assert!(config.validate().is_err());

    let mut config = ForageConfig::default();
    config.spawn.radius = FloatRange::new(7.0, 2.0);
    assert!(config.validate().is_err());

    let mut config = ForageConfig::default();
    config.spawn.in_front_chance = 1.5;
    assert!(config.validate().is_err());
}

#[test]
fn rejects_bad_categories() {
    let entry = |id: i32, name: &str| CategoryEntry {
        id,
        name: name.to_string(),
    };

    let mut config = ForageConfig::default();
    config.categories = vec![entry(0, "a"), entry(0, "b")];
    assert!(config.validate().is_err());

    config.categories = vec![entry(-1, "a")];
    assert!(config.validate().is_err());
}

#[test]
fn catalog_looks_up_names_and_ids() {
    let catalog = CategoryCatalog::from_config(&[
        CategoryEntry {
            id: 2,
            name: "pug".to_string(),
        },
        CategoryEntry {
            id: 0,
            name: "beagle".to_string(),
        },
    ]);

    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.categories().collect::<Vec<_>>(),
        vec![Category(0), Category(2)]
    );
    assert_eq!(catalog.name(Category(2)), Some("pug"));
    assert_eq!(catalog.name(Category(1)), None);
    assert_eq!(catalog.by_name("Beagle"), Some(Category(0)));
    assert!(!catalog.contains(Category::INVALID));
}
