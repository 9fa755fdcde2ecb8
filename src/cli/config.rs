//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::Result;
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "server.port")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    if args.path {
        let path = Config::config_path()?;
        println!("{}", path.display());
        return Ok(());
    }

    if args.reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;

    match (&args.key, &args.value) {
        // No arguments: show all config
        (None, None) => {
            print!("{}", render_config(&config));
        }

        // Key only: show that value
        (Some(key), None) => {
            if let Some(value) = config.get(key) {
                println!("{}", value);
            } else {
                eprintln!("Unknown config key: {}", key);
                eprintln!("\nAvailable keys:");
                for k in Config::available_keys() {
                    eprintln!("  {}", k);
                }
                std::process::exit(1);
            }
        }

        // Key and value: set the value
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save()?;
            println!("{} = {}", key, value);
        }

        // Value without key: not valid
        (None, Some(_)) => {
            eprintln!("Error: Must specify a key to set a value");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Render all configuration values in TOML layout
pub fn render_config(config: &Config) -> String {
    let mut output = String::new();

    output.push_str("[server]\n");
    output.push_str(&format!("host = \"{}\"\n", config.server.host));
    output.push_str(&format!("port = {}\n", config.server.port));
    output.push_str(&format!("cors = {}\n\n", config.server.cors));

    output.push_str("[source]\n");
    output.push_str(&format!("url = \"{}\"\n", config.source.url));
    if config.source.file.is_empty() {
        output.push_str("file = \"\" # archive is not cached\n\n");
    } else {
        output.push_str(&format!("file = \"{}\"\n\n", config.source.file));
    }

    output.push_str("[query]\n");
    output.push_str(&format!("default_max = {}\n", config.query.default_max));
    output.push_str(&format!("format = \"{}\"\n", config.query.format));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_config() {
        let output = render_config(&Config::default());

        assert!(output.contains("[server]\nhost = \"0.0.0.0\"\nport = 3141\n"));
        assert!(output.contains("# archive is not cached"));
        assert!(output.contains("default_max = 100"));
    }

    #[test]
    fn test_render_config_is_valid_toml() {
        let mut config = Config::default();
        config.source.file = "/var/cache/neargo/DE.zip".to_string();

        let parsed: Config = toml::from_str(&render_config(&config)).unwrap();

        assert_eq!(parsed.source.file, "/var/cache/neargo/DE.zip");
        assert_eq!(parsed.server.port, 3141);
    }
}
