//! Configuration loader behavior
//!
//! Uses figment's Jail so file discovery and environment overrides run in
//! an isolated working directory.

use sapi_domain::error::Error;
use sapi_infrastructure::config::ConfigLoader;

const SAMPLE_CONFIG: &str = r#"
[logging]
level = "warn"

[servers.pantheon]
name = "Pantheon Solr"
backend = "solr"

[servers.pantheon.connector]
base_url = "http://localhost:8983"
core = "collection1"
timeout_secs = 10

[[servers.pantheon.indexes]]
id = "content"

[[servers.pantheon.indexes]]
id = "archive"
enabled = false
"#;

#[test]
fn test_load_sample_config() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("sapi.toml", SAMPLE_CONFIG)?;

        let config = ConfigLoader::new().load().expect("config loads");

        assert_eq!(config.logging.level, "warn");
        let server = &config.servers["pantheon"];
        assert_eq!(server.name, "Pantheon Solr");
        assert_eq!(server.backend, "solr");
        assert_eq!(server.connector.base_url, "http://localhost:8983");
        assert_eq!(server.connector.timeout_secs, 10);
        assert_eq!(server.indexes.len(), 2);
        // serde defaults fill unspecified index flags
        assert!(server.indexes[0].enabled);
        assert!(!server.indexes[0].read_only);
        assert!(!server.indexes[1].enabled);
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("sapi.toml", SAMPLE_CONFIG)?;
        jail.set_env("SAPI_LOGGING_LEVEL", "debug");

        let config = ConfigLoader::new().load().expect("config loads");

        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn test_defaults_without_config_file() {
    figment::Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().expect("defaults load");

        assert_eq!(config.logging.level, "info");
        assert!(config.servers.is_empty());
        Ok(())
    });
}

#[test]
fn test_invalid_log_level_is_rejected() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("sapi.toml", "[logging]\nlevel = \"loud\"\n")?;

        let err = ConfigLoader::new().load().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }), "got: {err}");
        Ok(())
    });
}

#[test]
fn test_solr_server_requires_base_url() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "sapi.toml",
            r#"
[servers.broken]
backend = "solr"

[servers.broken.connector]
core = "collection1"
"#,
        )?;

        let err = ConfigLoader::new().load().unwrap_err();
        assert!(err.to_string().contains("base_url"), "got: {err}");
        Ok(())
    });
}

#[test]
fn test_duplicate_index_ids_are_rejected() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "sapi.toml",
            r#"
[servers.pantheon]
backend = "solr"

[servers.pantheon.connector]
base_url = "http://localhost:8983"
core = "collection1"

[[servers.pantheon.indexes]]
id = "content"

[[servers.pantheon.indexes]]
id = "content"
"#,
        )?;

        let err = ConfigLoader::new().load().unwrap_err();
        assert!(err.to_string().contains("duplicate index id"), "got: {err}");
        Ok(())
    });
}

#[test]
fn test_null_backend_needs_no_connector() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("sapi.toml", "[servers.legacy]\nbackend = \"null\"\n")?;

        let config = ConfigLoader::new().load().expect("config loads");
        assert_eq!(config.servers["legacy"].backend, "null");
        Ok(())
    });
}
