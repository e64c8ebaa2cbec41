/// Used when the bundle is built without `GYM_API_URL`: the API is expected
/// on the same origin that serves the client.
pub const DEFAULT_API_URL: &str = "/api";

/// Where the gym API lives. Built once at start-up and handed to the
/// resource client; nothing else in the front end knows the address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Config {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_build_env() -> Self {
        Config::new(option_env!("GYM_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::from_build_env()
    }
}
