use std::env;

use business::domain::admin::gate::AdminGate;

/// Loads the admin gate.
///
/// Environment variables:
/// - ADMIN_PASSWORD_SHA256: base64 SHA-256 digest of the password (preferred)
/// - ADMIN_PASSWORD: plain password, hashed on load
pub fn admin_gate_from_env() -> anyhow::Result<AdminGate> {
    if let Ok(digest) = env::var("ADMIN_PASSWORD_SHA256") {
        return Ok(AdminGate::from_base64_digest(&digest)?);
    }
    match env::var("ADMIN_PASSWORD") {
        Ok(password) if !password.is_empty() => Ok(AdminGate::from_password(&password)),
        _ => anyhow::bail!("set ADMIN_PASSWORD_SHA256 or ADMIN_PASSWORD to use admin commands"),
    }
}
