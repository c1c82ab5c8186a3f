use super::*;

#[test]
fn parses_toml_tables() {
    let settings = LocatorSettings::from_toml_str(
        r#"
[hover]
member_name = false
calls = false

[evaluate]
functionDefinition = false
"#,
    )
    .unwrap();

    assert!(!settings.hover.member_name);
    assert!(!settings.hover.calls);
    assert!(settings.hover.names);
    assert!(!settings.evaluate.function_definition);
    assert!(settings.evaluate.class_definition);
}

#[test]
fn empty_file_gives_defaults() {
    assert_eq!(LocatorSettings::from_toml_str("").unwrap(), LocatorSettings::default());
}

#[test]
fn invalid_toml_is_an_error() {
    let error = LocatorSettings::from_toml_str("[hover]\ncalls = \"no\"\n").unwrap_err();
    assert!(matches!(error, SettingsError::Parse { path: None, .. }));
}

#[test]
fn finds_settings_in_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("pkg/sub");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(dir.path().join(SETTINGS_FILENAME), "[hover]\nliterals = false\n").unwrap();
    let source = nested.join("module.py");
    std::fs::write(&source, "x = 1\n").unwrap();

    assert_eq!(find_settings_file(&source), Some(dir.path().join(SETTINGS_FILENAME)));

    let settings = LocatorSettings::discover(&source).unwrap();
    assert!(!settings.hover.literals);
}

#[test]
fn discover_without_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("module.py");
    std::fs::write(&source, "x = 1\n").unwrap();
    // A settings file further up (outside the temp dir) would leak in, so
    // only assert when none is found.
    if find_settings_file(&source).is_none() {
        assert_eq!(LocatorSettings::discover(&source).unwrap(), LocatorSettings::default());
    }
}

#[test]
fn load_reports_path_on_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join(SETTINGS_FILENAME);
    let error = LocatorSettings::load(&missing).unwrap_err();
    assert!(matches!(error, SettingsError::Io { ref path, .. } if path == &missing));
    assert!(error.to_string().starts_with("failed to read"));

    std::fs::write(&missing, "[hover\n").unwrap();
    let error = LocatorSettings::load(&missing).unwrap_err();
    assert!(matches!(error, SettingsError::Parse { path: Some(ref path), .. } if path == &missing));
}
