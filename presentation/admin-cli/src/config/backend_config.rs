use std::env;

/// Where the product catalog lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Local,
}

impl Backend {
    /// Environment variables:
    /// - STOREFRONT_BACKEND: "postgres" or "local"
    ///   (default: "postgres" when DATABASE_URL is set, else "local")
    pub fn from_env() -> anyhow::Result<Self> {
        Self::resolve(
            env::var("STOREFRONT_BACKEND").ok().as_deref(),
            env::var("DATABASE_URL").is_ok(),
        )
    }

    pub fn resolve(requested: Option<&str>, has_database_url: bool) -> anyhow::Result<Self> {
        match requested.map(|b| b.trim().to_ascii_lowercase()).as_deref() {
            Some("postgres") => Ok(Backend::Postgres),
            Some("local") => Ok(Backend::Local),
            Some(other) => anyhow::bail!("unknown STOREFRONT_BACKEND '{}'", other),
            None if has_database_url => Ok(Backend::Postgres),
            None => Ok(Backend::Local),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_postgres_when_database_url_is_set() {
        assert_eq!(Backend::resolve(None, true).unwrap(), Backend::Postgres);
        assert_eq!(Backend::resolve(None, false).unwrap(), Backend::Local);
    }

    #[test]
    fn should_honour_explicit_choice() {
        assert_eq!(Backend::resolve(Some("Local"), true).unwrap(), Backend::Local);
        assert_eq!(
            Backend::resolve(Some(" postgres "), false).unwrap(),
            Backend::Postgres
        );
    }

    #[test]
    fn should_reject_unknown_backend() {
        assert!(Backend::resolve(Some("mongo"), false).is_err());
    }
}
