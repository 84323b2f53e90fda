//! Tests for TOML configuration parsing.

use super::ConfigError;
use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [portal]
            username = "dealer"
            password = "secret"
            auction = "ADESA123"
            consignor = "C42"
            base_url = "https://portal.example"
            download_dir = "~/Downloads"

            [lookup]
            username = "watcher"
            password = "hunter2"
            endpoint = "https://lookup.example/api.php"

            [filter.purchaser]
            first_name = "^J"
            last_name = "Smith"

            [table.layout]
            col1 = "run_number"
            col3 = "vin"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.portal.username.as_deref(), Some("dealer"));
        assert_eq!(config.portal.password.as_deref(), Some("secret"));
        assert_eq!(config.portal.auction.as_deref(), Some("ADESA123"));
        assert_eq!(config.portal.consignor.as_deref(), Some("C42"));
        assert_eq!(
            config.portal.base_url.as_deref(),
            Some("https://portal.example")
        );
        assert_eq!(config.portal.download_dir.as_deref(), Some("~/Downloads"));
        assert_eq!(config.lookup.username.as_deref(), Some("watcher"));
        assert_eq!(config.lookup.password.as_deref(), Some("hunter2"));
        assert_eq!(config.lookup.password_sha256, None);
        assert_eq!(
            config.lookup.endpoint.as_deref(),
            Some("https://lookup.example/api.php")
        );
        assert_eq!(config.filter.purchaser.first_name.as_deref(), Some("^J"));
        assert_eq!(config.filter.purchaser.last_name.as_deref(), Some("Smith"));
        assert_eq!(config.table.layout.len(), 2);
        assert_eq!(config.table.layout["col1"], "run_number");
        assert_eq!(config.table.layout["col3"], "vin");
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.portal.username.is_none());
        assert!(config.lookup.endpoint.is_none());
        assert!(config.filter.purchaser.first_name.is_none());
        assert!(config.table.layout.is_empty());
    }

    #[test]
    fn pre_hashed_lookup_password() {
        let toml = r#"
            [lookup]
            password_sha256 = "abc123"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.lookup.password_sha256.as_deref(), Some("abc123"));
        assert!(config.lookup.password.is_none());
    }
}

mod rejection {
    use super::*;

    #[test]
    fn unknown_section_is_rejected() {
        let result = TomlConfig::parse("[notifications]\nurl = \"x\"\n");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = TomlConfig::parse("[portal]\nlogin = \"x\"\n");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn non_string_layout_value_is_rejected() {
        let result = TomlConfig::parse("[table.layout]\ncol1 = 5\n");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn invalid_syntax_is_rejected() {
        let result = TomlConfig::parse("[portal\n");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}

mod loading {
    use super::*;
    use std::path::Path;

    #[test]
    fn missing_file_reports_path() {
        let result = TomlConfig::load(Path::new("/nonexistent/runlist-match.toml"));

        match result {
            Err(ConfigError::FileRead { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/runlist-match.toml"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[portal]\nauction = \"A1\"\n").unwrap();

        let config = TomlConfig::load(&path).unwrap();

        assert_eq!(config.portal.auction.as_deref(), Some("A1"));
    }
}

mod template {
    use super::*;

    #[test]
    fn template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert_eq!(config.table.layout.len(), 5);
        assert_eq!(config.table.layout["col1"], "run_number");
        assert_eq!(config.table.layout["col5"], "seller");
    }

    #[test]
    fn template_leaves_credentials_blank() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert_eq!(config.portal.username.as_deref(), Some(""));
        assert_eq!(config.lookup.password.as_deref(), Some(""));
    }

    #[test]
    fn template_mentions_every_section() {
        let template = default_config_template();

        for section in ["[portal]", "[lookup]", "[filter.purchaser]", "[table.layout]"] {
            assert!(template.contains(section), "missing {section}");
        }
    }
}
