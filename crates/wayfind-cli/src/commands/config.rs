//! Config command implementation.
//!
//! Manages CLI configuration.

use anyhow::Result;
use wayfind_ops::{Config, CONFIG_KEYS};

use super::Output;

/// Show current configuration.
pub fn show(config: &Config, out: Output) -> Result<()> {
    out.emit(config, || {
        println!("Wayfind Configuration");
        println!("{:-<40}", "");
        println!("Data Directory:  {}", config.data_dir.display());
        println!("Bind Address:    {}", config.bind);
        println!("Seed Demo:       {}", config.seed_demo);

        if let Some(config_path) = Config::config_file_path() {
            println!("\nConfig file: {}", config_path.display());
        }
    })
}

/// Set a configuration value and save it.
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    if !CONFIG_KEYS.contains(&key) {
        anyhow::bail!(
            "Unknown config key: {}. Valid keys: {}",
            key,
            CONFIG_KEYS.join(", ")
        );
    }

    config.set(key, value)?;
    config.save()?;
    println!("Set {} to: {}", key, value);
    Ok(())
}

/// Get a configuration value.
pub fn get(config: &Config, key: &str) -> Result<()> {
    match config.get(key) {
        Some(value) => {
            println!("{}", value);
            Ok(())
        }
        None => anyhow::bail!(
            "Unknown config key: {}. Valid keys: {}",
            key,
            CONFIG_KEYS.join(", ")
        ),
    }
}

/// Reset configuration to defaults.
pub fn reset() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults");
    Ok(())
}
