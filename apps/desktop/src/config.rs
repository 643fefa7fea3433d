use std::{collections::HashMap, fs};

/// Default collection endpoint: the public mock directory, so the shell
/// works out of the box.
const DEFAULT_SERVER_URL: &str = "https://jsonplaceholder.typicode.com/users";

#[derive(Debug)]
pub struct Settings {
    pub server_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.into(),
        }
    }
}

/// Defaults, overlaid by `directory.toml` if present, overlaid by
/// environment. CLI flags are applied on top by the caller.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("directory.toml") {
        apply_file_overrides(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("DIRECTORY_SERVER_URL") {
        settings.server_url = v;
    }

    settings
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("server_url") {
            settings.server_url = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_overrides_replace_the_default_url() {
        let mut settings = Settings::default();
        apply_file_overrides(&mut settings, "server_url = \"http://127.0.0.1:9000/users\"");
        assert_eq!(settings.server_url, "http://127.0.0.1:9000/users");
    }

    #[test]
    fn bad_toml_leaves_settings_alone() {
        let mut settings = Settings::default();
        apply_file_overrides(&mut settings, "this is not toml = = =");
        assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut settings = Settings::default();
        apply_file_overrides(&mut settings, "theme = \"dark\"");
        assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
    }
}
