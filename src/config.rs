use std::env;

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub home_url: String,
    pub login_url: String,
    pub app_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            api_base_url: "http://127.0.0.1:5000/api".to_string(),
            api_token: None,
            home_url: "/".to_string(),
            login_url: "/login".to_string(),
            app_name: "LifeLine Admin".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {e}");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            api_base_url: get("ADMIN_API_URL").unwrap_or(defaults.api_base_url),
            api_token: get("ADMIN_API_TOKEN"),
            home_url: get("HOME_URL").unwrap_or(defaults.home_url),
            login_url: get("LOGIN_URL").unwrap_or(defaults.login_url),
            app_name: get("APP_NAME").unwrap_or(defaults.app_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = AppConfig::from_lookup(|_| None);
        assert_eq!(cfg.bind_addr, "127.0.0.1:8080");
        assert_eq!(cfg.login_url, "/login");
        assert!(cfg.api_token.is_none());
    }

    #[test]
    fn reads_overrides_and_ignores_blank() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("ADMIN_API_URL", "https://api.example.org/v1"),
            ("ADMIN_API_TOKEN", "  "),
            ("LOGIN_URL", "/auth/login"),
        ]);
        let cfg = AppConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.api_base_url, "https://api.example.org/v1");
        assert_eq!(cfg.login_url, "/auth/login");
        assert!(cfg.api_token.is_none());
        assert_eq!(cfg.home_url, "/");
    }
}
