use std::env;

use storage::client::DEFAULT_BUCKET;

/// Configuration for hosted image storage.
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    pub bucket: String,
}

impl SupabaseConfig {
    /// Returns `None` unless both SUPABASE_URL and SUPABASE_ANON_KEY are set.
    pub fn from_env() -> Option<Self> {
        let url = env::var("SUPABASE_URL").ok().filter(|v| !v.trim().is_empty())?;
        let anon_key = env::var("SUPABASE_ANON_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())?;
        let bucket = env::var("SUPABASE_BUCKET").unwrap_or_else(|_| DEFAULT_BUCKET.to_string());

        Some(Self {
            url,
            anon_key,
            bucket,
        })
    }
}
