//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# catalog-admin configuration

# Catalog service root (products live under <api_url>/products)
api_url = {api_url:?}

# Image attached to new products created from the form
placeholder_image = {image:?}

# Prefix shown before prices
currency_symbol = {currency:?}

# Theme: dark, light
theme = {theme:?}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {level:?}
# JSON file logging (in addition to the activity panel)
file_enabled = {file_enabled}
file_dir = {file_dir:?}
file_rotation = "{rotation}"  # hourly, daily, never
file_prefix = {file_prefix:?}
"#,
            api_url = self.api_url,
            image = self.placeholder_image,
            currency = self.currency_symbol,
            theme = self.theme,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display().to_string(),
            rotation = self.logging.file_rotation.as_str(),
            file_prefix = self.logging.file_prefix,
        )
    }
}
