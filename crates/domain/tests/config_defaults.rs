use lp_domain::config::Config;

#[test]
fn default_crontab_path() {
    let config = Config::default();
    assert_eq!(config.scheduler.crontab_path, "data/crontab");
}

#[test]
fn default_tick_interval_is_one_second() {
    let config = Config::default();
    assert_eq!(config.scheduler.tick_interval_secs, 1);
}

#[test]
fn default_dispatch_is_live() {
    let config = Config::default();
    assert!(!config.dispatch.dry_run);
}

#[test]
fn explicit_scheduler_section_parses() {
    let toml_str = r#"
[scheduler]
crontab_path = "/var/lib/lightpath/crontab"
tick_interval_secs = 5
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.scheduler.crontab_path, "/var/lib/lightpath/crontab");
    assert_eq!(config.scheduler.tick_interval_secs, 5);
}

#[test]
fn partial_section_falls_back_to_defaults() {
    let toml_str = r#"
[scheduler]
tick_interval_secs = 30

[dispatch]
dry_run = true
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.scheduler.crontab_path, "data/crontab");
    assert_eq!(config.scheduler.tick_interval_secs, 30);
    assert!(config.dispatch.dry_run);
}

#[test]
fn empty_config_parses() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.scheduler.tick_interval_secs, 1);
}
