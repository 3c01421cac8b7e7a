use dotenv::dotenv;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

use crate::data::map_config::MapConfig;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("environment variable '{0}' not found")]
    MissingEnv(String),
    #[error("unterminated placeholder in {0:?}")]
    Unterminated(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub map: MapConfig,
}

impl Settings {
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        dotenv().ok();

        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents, |name| env::var(name).ok())
    }

    pub fn from_yaml_str(
        contents: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_yaml::from_str(contents)?;

        let map = &mut settings.map;
        map.geocoder_url = expand_placeholders(&map.geocoder_url, &lookup)?;
        map.tile_url = expand_placeholders(&map.tile_url, &lookup)?;
        map.user_agent = expand_placeholders(&map.user_agent, &lookup)?;

        Ok(settings)
    }

    /// Reads `path` if it exists; a missing file means built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("{} not found, using default settings", path.display());
            return Ok(Self::default());
        }

        Self::from_yaml(path)
    }

    pub fn install(self) {
        if SETTINGS.set(self).is_err() {
            log::warn!("Settings already installed, keeping the first ones");
        }
    }

    pub fn current() -> &'static Settings {
        SETTINGS.get_or_init(Settings::default)
    }
}

/// Replaces every `${NAME}` in `value` with `lookup(NAME)`.
fn expand_placeholders(
    value: &str,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<String, SettingsError> {
    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        expanded.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find('}')
            .ok_or_else(|| SettingsError::Unterminated(value.to_string()))?;
        let name = &after[..end];
        let resolved = lookup(name).ok_or_else(|| SettingsError::MissingEnv(name.to_string()))?;
        expanded.push_str(&resolved);
        rest = &after[end + 1..];
    }
    expanded.push_str(rest);

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::map_config::OSM_TILE_URL;

    fn env(name: &str) -> Option<String> {
        match name {
            "THUNDERFOREST_API_KEY" => Some("abc123".to_string()),
            "CONTACT" => Some("hello@lovemaps.example".to_string()),
            _ => None,
        }
    }

    #[test]
    fn expands_embedded_placeholder() {
        let url = expand_placeholders(
            "https://tile.thunderforest.com/atlas/{z}/{x}/{y}.png?apikey=${THUNDERFOREST_API_KEY}",
            &env,
        )
        .unwrap();
        assert_eq!(
            url,
            "https://tile.thunderforest.com/atlas/{z}/{x}/{y}.png?apikey=abc123"
        );
    }

    #[test]
    fn leaves_tile_template_braces_alone() {
        assert_eq!(expand_placeholders(OSM_TILE_URL, &env).unwrap(), OSM_TILE_URL);
    }

    #[test]
    fn missing_variable_is_an_error() {
        assert!(matches!(
            expand_placeholders("${NOPE}", &env),
            Err(SettingsError::MissingEnv(name)) if name == "NOPE"
        ));
        assert!(matches!(
            expand_placeholders("key=${THUNDERFOREST_API_KEY", &env),
            Err(SettingsError::Unterminated(_))
        ));
    }

    #[test]
    fn yaml_overrides_and_defaults() {
        let yaml = r#"
map:
  debounce_ms: 250
  user_agent: "LoveMaps/1.0 (${CONTACT})"
  tile_url: "https://tile.thunderforest.com/atlas/{z}/{x}/{y}.png?apikey=${THUNDERFOREST_API_KEY}"
  default_position:
    latitude: -22.9068
    longitude: -43.1729
"#;
        let settings = Settings::from_yaml_str(yaml, env).unwrap();
        let map = settings.map;

        assert_eq!(map.debounce_ms, 250);
        assert_eq!(map.user_agent, "LoveMaps/1.0 (hello@lovemaps.example)");
        assert!(map.tile_url.ends_with("apikey=abc123"));
        assert_eq!(map.default_position.latitude, -22.9068);
        assert_eq!(map.result_limit, 5);
        assert_eq!(map.default_zoom, 13.0);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::load_or_default("does/not/exist/settings.yaml").unwrap();
        assert_eq!(settings.map, MapConfig::default());
    }
}
