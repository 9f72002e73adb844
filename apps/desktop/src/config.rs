use std::{collections::HashMap, fs};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_filter: String,
    pub demo_user: String,
    pub demo_email: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".into(),
            demo_user: "Jane Doe".into(),
            demo_email: "jane.doe@example.com".into(),
        }
    }
}

/// Defaults, overridden by `helpdesk.toml`, overridden by `HELPDESK__*`
/// environment variables.
pub fn load_settings() -> Settings {
    let file = fs::read_to_string("helpdesk.toml").ok();
    settings_from(file.as_deref(), |key| std::env::var(key).ok())
}

fn settings_from(file: Option<&str>, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
            if let Some(v) = file_cfg.get("log_filter") {
                settings.log_filter = v.clone();
            }
            if let Some(v) = file_cfg.get("demo_user") {
                settings.demo_user = v.clone();
            }
            if let Some(v) = file_cfg.get("demo_email") {
                settings.demo_email = v.clone();
            }
        }
    }

    if let Some(v) = env("HELPDESK__LOG_FILTER") {
        settings.log_filter = v;
    }
    if let Some(v) = env("HELPDESK__DEMO_USER") {
        settings.demo_user = v;
    }
    if let Some(v) = env("HELPDESK__DEMO_EMAIL") {
        settings.demo_email = v;
    }

    settings
}
