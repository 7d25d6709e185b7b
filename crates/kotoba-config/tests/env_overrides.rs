use figment::Jail;
use kotoba_config::KotobaConfig;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("KOTOBA_DATABASE__URL", "libsql://vocab-myorg.turso.io");
        jail.set_env("KOTOBA_DATABASE__AUTH_TOKEN", "env-token");
        jail.set_env("KOTOBA_CLIENT__TIMEOUT_SECS", "30");

        let config = KotobaConfig::load().expect("config loads");
        assert!(config.database.is_remote());
        assert_eq!(config.database.auth_token, "env-token");
        assert_eq!(config.client.timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn env_delimiter_override() {
    Jail::expect_with(|jail| {
        jail.set_env("KOTOBA_PARSER__DELIMITER", ";");

        let config = KotobaConfig::load().expect("config loads");
        assert_eq!(config.parser.delimiter, ';');
        Ok(())
    });
}
