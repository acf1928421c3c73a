use std::env;
use std::fmt;

/// Secret used by [`JwtConfig::from_env`] when `JWT_SECRET` is unset.
pub const DEVELOPMENT_SECRET: &str = "cloudpad-development-secret-change-me";

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds. `None` issues tokens without an `exp`
    /// claim, which then stay valid for as long as the secret does.
    pub expiry: Option<i64>,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiry", &self.expiry)
            .finish()
    }
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                tracing::warn!("JWT_SECRET is not set, falling back to the development secret");
                DEVELOPMENT_SECRET.to_string()
            });

        let expiry = lookup("JWT_EXPIRY_SECONDS")
            .and_then(|s| s.parse::<i64>().ok())
            .filter(|secs| *secs > 0);

        Self { secret, expiry }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_have_no_expiry() {
        let config = JwtConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.secret, DEVELOPMENT_SECRET);
        assert_eq!(config.expiry, None);
    }

    #[test]
    fn test_reads_secret_and_expiry() {
        let config = JwtConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s3cr3t"),
            ("JWT_EXPIRY_SECONDS", "3600"),
        ]));
        assert_eq!(config.secret, "s3cr3t");
        assert_eq!(config.expiry, Some(3600));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = JwtConfig::from_lookup(lookup_from(&[("JWT_SECRET", "s3cr3t")]));
        assert!(!format!("{:?}", config).contains("s3cr3t"));
    }

    #[test]
    fn test_non_positive_expiry_is_ignored() {
        let config = JwtConfig::from_lookup(lookup_from(&[("JWT_EXPIRY_SECONDS", "0")]));
        assert_eq!(config.expiry, None);
    }
}
