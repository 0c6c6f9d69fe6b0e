use super::{
    backend_config::Backend, contact_config::ContactConfig, local_config::LocalConfig,
    store_config::StoreConfig, supabase_config::SupabaseConfig,
};

pub struct AppConfig {
    pub backend: Backend,
    pub local: LocalConfig,
    pub supabase: Option<SupabaseConfig>,
    pub store: StoreConfig,
    pub contact: ContactConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            backend: Backend::from_env()?,
            local: LocalConfig::from_env(),
            supabase: SupabaseConfig::from_env(),
            store: StoreConfig::from_env(),
            contact: ContactConfig::from_env(),
        })
    }
}
