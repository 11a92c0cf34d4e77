use std::time::Duration;

use url::Url;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid project url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid request timeout {0:?}, expected a whole number of seconds")]
    InvalidTimeout(String),
}

/// Where the hosted identity service lives and how long to wait for it.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub url: Url,
    pub anon_key: String,
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(url: &str, anon_key: impl Into<String>) -> Result<Self, ConfigError> {
        let anon_key = anon_key.into();
        if anon_key.trim().is_empty() {
            return Err(ConfigError::Missing(ANON_KEY_VAR));
        }

        Ok(Self {
            url: Url::parse(url)?,
            anon_key,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Reads the values baked in at compile time. A browser bundle has no
    /// process environment to read at runtime. `option_env!` only takes
    /// literals, hence the repeated names.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            option_env!("SUPABASE_URL"),
            option_env!("SUPABASE_ANON_KEY"),
            option_env!("AUTH_REQUEST_TIMEOUT_SECS"),
        )
    }

    pub fn from_vars(
        url: Option<&str>,
        anon_key: Option<&str>,
        timeout_secs: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let url = url.ok_or(ConfigError::Missing(URL_VAR))?;
        let anon_key = anon_key.ok_or(ConfigError::Missing(ANON_KEY_VAR))?;
        let config = Self::new(url, anon_key)?;

        match timeout_secs {
            None => Ok(config),
            Some(secs) => {
                let secs: u64 = secs
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidTimeout(secs.to_owned()))?;
                if secs == 0 {
                    return Err(ConfigError::InvalidTimeout(secs.to_string()));
                }
                Ok(config.with_request_timeout(Duration::from_secs(secs)))
            }
        }
    }

    /// Absolute URL of an auth API endpoint, e.g. `auth_endpoint("token")`.
    pub fn auth_endpoint(&self, path: &str) -> Url {
        let mut url = self.url.clone();
        let base = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{}/auth/v1/{}", base, path));
        url.set_query(None);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn defaults_timeout() {
        let config =
            ClientConfig::from_vars(Some("https://xyz.supabase.co"), Some("anon"), None).unwrap();
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn reads_timeout() {
        let config =
            ClientConfig::from_vars(Some("https://xyz.supabase.co"), Some("anon"), Some("3"))
                .unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test_case(None, Some("anon"), None, ConfigError::Missing(URL_VAR); "missing_url")]
    #[test_case(Some("https://xyz.supabase.co"), None, None, ConfigError::Missing(ANON_KEY_VAR); "missing_key")]
    #[test_case(Some("https://xyz.supabase.co"), Some("  "), None, ConfigError::Missing(ANON_KEY_VAR); "blank_key")]
    #[test_case(Some("not a url"), Some("anon"), None, ConfigError::InvalidUrl(url::ParseError::RelativeUrlWithoutBase); "bad_url")]
    #[test_case(Some("https://xyz.supabase.co"), Some("anon"), Some("soon"), ConfigError::InvalidTimeout("soon".to_owned()); "bad_timeout")]
    #[test_case(Some("https://xyz.supabase.co"), Some("anon"), Some("0"), ConfigError::InvalidTimeout("0".to_owned()); "zero_timeout")]
    fn rejects(url: Option<&str>, key: Option<&str>, timeout: Option<&str>, expected: ConfigError) {
        assert_eq!(ClientConfig::from_vars(url, key, timeout), Err(expected));
    }

    #[test_case("https://xyz.supabase.co", "https://xyz.supabase.co/auth/v1/token"; "bare_host")]
    #[test_case("https://xyz.supabase.co/", "https://xyz.supabase.co/auth/v1/token"; "trailing_slash")]
    #[test_case("http://localhost:54321/proxy/", "http://localhost:54321/proxy/auth/v1/token"; "path_prefix")]
    fn auth_endpoint(base: &str, expected: &str) {
        let config = ClientConfig::new(base, "anon").unwrap();
        assert_eq!(config.auth_endpoint("token").as_str(), expected);
    }
}
