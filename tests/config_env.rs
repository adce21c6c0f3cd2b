//! Environment overrides live in their own test binary so the variables
//! cannot leak into other configuration tests.

use strevo::config::ConfigManager;

#[test]
fn test_env_overrides_defaults() {
    std::env::set_var("STREVO_EVOLUTION__TARGET", "fromenv");
    std::env::set_var("STREVO_SCHEDULER__TICK_INTERVAL_MS", "75");

    let config = ConfigManager::load(None).unwrap().get();

    std::env::remove_var("STREVO_EVOLUTION__TARGET");
    std::env::remove_var("STREVO_SCHEDULER__TICK_INTERVAL_MS");

    assert_eq!(config.evolution.target, "fromenv");
    assert_eq!(config.scheduler.tick_interval_ms, 75);
    assert_eq!(config.evolution.population_size, 100);
}
