use super::*;

#[test]
fn when_graders_repeat_it_should_keep_the_first_occurrence_only() {
    let config = GradingConfig::new("wk1", ["bob", "alice", "bob", "carol", "alice"], ["prof"]);

    assert_eq!(config.graders(), ["bob", "alice", "carol"]);
}

#[test]
fn when_names_are_blank_it_should_drop_them() {
    let config = GradingConfig::new("wk1", ["", " alice ", "  "], ["", "prof"]);

    assert_eq!(config.graders(), ["alice"]);
    assert_eq!(config.ignored(), ["prof"]);
}

#[test]
fn when_names_differ_only_in_case_it_should_keep_both() {
    let config = GradingConfig::new("", ["Alice", "alice"], Vec::<String>::new());

    assert_eq!(config.graders(), ["Alice", "alice"]);
}

#[test]
fn when_listing_config_is_default_it_should_report_placeholders() {
    let config = ListingConfig::default();

    assert!(config.uses_placeholders());
    assert_eq!(config.api_url, DEFAULT_API_URL);
}

#[test]
fn when_token_and_project_are_set_it_should_not_report_placeholders() {
    let config = ListingConfig {
        token: "ghp_abc".to_string(),
        project: "RiceComp215".to_string(),
        ..ListingConfig::default()
    };

    assert!(!config.uses_placeholders());
}
