use std::io::Write;

use certrec_config::{ConfigError, load_config};

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp config");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

const VALID: &str = r#"
new_programs = ["Training CMA", "New Course X"]

[categories]
Accounting = 2
IT = 5

[[rules]]
category = "Accounting"
keywords = ["cma", "tax"]

[[rules]]
category = "IT"
keywords = ["excel"]
"#;

#[test]
fn loads_valid_config_with_default_months() {
    let file = write_config(VALID);
    let config = load_config(file.path()).expect("load config");

    assert_eq!(config.new_programs.len(), 2);
    assert_eq!(config.category_id("IT").map(|id| id.get()), Some(5));
    assert_eq!(config.category_id("Forum"), None);
    // Rule order is preserved: Accounting outranks IT.
    assert_eq!(config.rules[0].category, "Accounting");
    assert_eq!(config.rules[1].category, "IT");
    // Month table falls back to the built-in Indonesian mapping.
    assert_eq!(config.months.get("desember").map(String::as_str), Some("December"));
    assert_eq!(config.months.len(), 12);
}

#[test]
fn month_override_keys_are_lowercased() {
    let content = format!(
        "{VALID}\n[months]\nJanuari = \"January\"\nDesember = \"December\"\n"
    );
    let file = write_config(&content);
    let config = load_config(file.path()).expect("load config");

    assert_eq!(config.months.len(), 2);
    assert!(config.months.contains_key("januari"));
    assert!(config.months.contains_key("desember"));
}

#[test]
fn ships_a_loadable_default_config() {
    let path = certrec_config::default_config_path();
    let config = load_config(&path).expect("load default config");

    assert_eq!(config.categories.len(), 14);
    assert_eq!(config.category_id("GenZ").map(|id| id.get()), Some(14));
    // Priority order from the rule file: Construction outranks everything.
    assert_eq!(config.rules.first().map(|rule| rule.category.as_str()), Some("Construction"));
    assert!(!config.new_programs.is_empty());
}

#[test]
fn rejects_rule_without_keywords() {
    let content = r#"
[categories]
IT = 5

[[rules]]
category = "IT"
keywords = []
"#;
    let file = write_config(content);
    match load_config(file.path()) {
        Err(ConfigError::Invalid { message }) => assert!(message.contains("IT")),
        other => panic!("expected invalid-config error, got {other:?}"),
    }
}

#[test]
fn rejects_empty_category_table() {
    let file = write_config("[categories]\n");
    assert!(matches!(
        load_config(file.path()),
        Err(ConfigError::Invalid { .. })
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(matches!(
        load_config(std::path::Path::new("/nonexistent/certrec.toml")),
        Err(ConfigError::Io { .. })
    ));
}
