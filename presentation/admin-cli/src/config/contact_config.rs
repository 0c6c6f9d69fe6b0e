use std::env;

/// Where customers are sent to place orders.
#[derive(Debug, Clone)]
pub struct ContactConfig {
    pub whatsapp_number: String,
    pub shop_name: String,
}

impl ContactConfig {
    /// Environment variables:
    /// - CONTACT_WHATSAPP_NUMBER (default: "+2347031272217")
    /// - SHOP_NAME (default: "Hammies Yarnistry")
    pub fn from_env() -> Self {
        Self {
            whatsapp_number: env::var("CONTACT_WHATSAPP_NUMBER")
                .unwrap_or_else(|_| "+2347031272217".to_string()),
            shop_name: env::var("SHOP_NAME").unwrap_or_else(|_| "Hammies Yarnistry".to_string()),
        }
    }
}
