//! Tests for layered traversal settings.

use figment::Jail;

use super::config::{
    ItemOrder, Order, Strategy, TraversalSettings, Uniqueness, UniquenessConfig,
    DEFAULT_MAX_ITERATIONS,
};

#[test]
fn test_defaults() {
    let settings = TraversalSettings::default();
    assert_eq!(settings.order, Order::PreOrder);
    assert_eq!(settings.item_order, ItemOrder::Forward);
    assert_eq!(settings.strategy, Strategy::DepthFirst);
    assert_eq!(settings.uniqueness, UniquenessConfig::default());
    assert!(!settings.uniqueness.is_enabled());
    assert_eq!(settings.max_iterations, DEFAULT_MAX_ITERATIONS);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_from_toml_str() {
    let settings = TraversalSettings::from_toml_str(
        r#"
        order = "postorder"
        item_order = "backward"
        strategy = "breadthfirst"
        min_depth = 1
        labels = ["likes", "knows"]

        [uniqueness]
        edges = "path"
        "#,
    )
    .unwrap();

    assert_eq!(settings.order, Order::PostOrder);
    assert_eq!(settings.item_order, ItemOrder::Backward);
    assert_eq!(settings.strategy, Strategy::BreadthFirst);
    assert_eq!(settings.min_depth, Some(1));
    assert_eq!(settings.max_depth, None);
    assert_eq!(settings.labels, vec!["likes", "knows"]);
    assert_eq!(settings.uniqueness.vertices, Uniqueness::None);
    assert_eq!(settings.uniqueness.edges, Uniqueness::Path);
}

#[test]
fn test_unknown_enum_value_is_config_error() {
    let err = TraversalSettings::from_toml_str(r#"strategy = "sideways""#).unwrap_err();
    assert!(matches!(err, crate::Error::Config(_)));
}

#[test]
fn test_validate_rejects_zero_iterations() {
    let settings = TraversalSettings {
        max_iterations: 0,
        ..TraversalSettings::default()
    };
    assert!(settings.validate().is_err());
}

#[test]
fn test_validate_rejects_inverted_depths() {
    let settings = TraversalSettings {
        min_depth: Some(4),
        max_depth: Some(2),
        ..TraversalSettings::default()
    };
    assert!(settings.validate().is_err());

    let settings = TraversalSettings {
        min_depth: Some(2),
        max_depth: Some(2),
        ..TraversalSettings::default()
    };
    assert!(settings.validate().is_ok());
}

#[test]
fn test_to_toml_parses_back() {
    let settings = TraversalSettings {
        strategy: Strategy::BreadthFirst,
        max_depth: Some(5),
        uniqueness: UniquenessConfig::new(Uniqueness::Global, Uniqueness::None),
        ..TraversalSettings::default()
    };
    let rendered = settings.to_toml().unwrap();
    assert!(rendered.contains("breadthfirst"));
    assert_eq!(TraversalSettings::from_toml_str(&rendered).unwrap(), settings);
}

#[test]
fn test_load_merges_file_and_env() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "graphwalk.toml",
            r#"
            strategy = "breadthfirst"
            max_depth = 2
            "#,
        )?;
        jail.set_env("GRAPHWALK_MAX_DEPTH", 7);
        jail.set_env("GRAPHWALK_UNIQUENESS__VERTICES", "global");

        let settings = TraversalSettings::load().expect("settings load");
        assert_eq!(settings.strategy, Strategy::BreadthFirst);
        assert_eq!(settings.max_depth, Some(7));
        assert_eq!(settings.uniqueness.vertices, Uniqueness::Global);
        Ok(())
    });
}

#[test]
fn test_load_without_file_uses_defaults() {
    Jail::expect_with(|_jail| {
        let settings = TraversalSettings::load().expect("settings load");
        assert_eq!(settings, TraversalSettings::default());
        Ok(())
    });
}

#[test]
fn test_load_rejects_invalid_merged_settings() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "max_iterations = 0")?;
        assert!(TraversalSettings::load_from("custom.toml").is_err());
        Ok(())
    });
}
