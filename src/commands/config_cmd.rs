use anyhow::Result;

use crate::config::Config;

pub fn show_config(config: &Config) -> Result<()> {
    let config_str = toml::to_string_pretty(config)?;

    println!("Current Configuration");
    println!("────────────────────────────────");
    println!();
    println!("{}", config_str);

    Ok(())
}
