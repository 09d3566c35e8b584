//! Configuration management

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub contact: Option<ContactConfig>,
}

fn default_port() -> u16 {
    8080
}

/// Transactional email relay settings (EmailJS).
///
/// The contact form is disabled server-side when this section is absent.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Get config directory (XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("PORTFOLIO_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home)
                .join("Library/Application Support/starlit-portfolio");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("starlit-portfolio");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/starlit-portfolio");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("starlit-portfolio");
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

/// Load configuration from defaults, the optional config file, and environment.
///
/// Precedence: PORTFOLIO_PORT > PORT > config file > default. Contact relay
/// settings come from the `[contact]` table or PORTFOLIO_CONTACT__* env vars.
pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        // Start with defaults
        .set_default("port", 8080)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (PORTFOLIO_PORT, PORTFOLIO_CONTACT__SERVICE_ID, etc.)
        .add_source(
            ::config::Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

    // Support PORT env vars with explicit precedence: PORTFOLIO_PORT > PORT > config > default
    // Handle manually to ensure consistent behavior across all environments
    if let Ok(port) = std::env::var("PORTFOLIO_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        // Legacy PORT fallback (Docker, PaaS defaults)
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    let config = builder.build()?;
    Ok(config.try_deserialize()?)
}
