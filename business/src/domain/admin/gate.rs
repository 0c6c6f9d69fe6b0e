//! Admin mode toggle.
//!
//! This only decides whether admin controls are offered. It is not an
//! access-control boundary: anyone holding the data-store credentials can
//! write to the catalog regardless of this gate.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};

use super::errors::AdminError;

/// Holds the SHA-256 digest of the admin password, never the password itself.
#[derive(Clone)]
pub struct AdminGate {
    digest: [u8; 32],
}

impl AdminGate {
    pub fn from_password(password: &str) -> Self {
        Self {
            digest: Sha256::digest(password.as_bytes()).into(),
        }
    }

    /// Accepts the base64 encoding of a SHA-256 digest.
    pub fn from_base64_digest(encoded: &str) -> Result<Self, AdminError> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|_| AdminError::InvalidDigest)?;
        let digest: [u8; 32] = bytes
            .try_into()
            .map_err(|_| AdminError::InvalidDigest)?;
        Ok(Self { digest })
    }

    pub fn digest_base64(&self) -> String {
        STANDARD.encode(self.digest)
    }

    pub fn verify(&self, attempt: &str) -> bool {
        let candidate: [u8; 32] = Sha256::digest(attempt.as_bytes()).into();
        // Fold over every byte so timing does not depend on the first mismatch.
        candidate
            .iter()
            .zip(self.digest.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate").finish_non_exhaustive()
    }
}

/// Whether admin controls are currently unlocked for this session.
#[derive(Debug)]
pub struct AdminSession {
    gate: AdminGate,
    unlocked: bool,
}

impl AdminSession {
    pub fn new(gate: AdminGate) -> Self {
        Self {
            gate,
            unlocked: false,
        }
    }

    pub fn unlock(&mut self, attempt: &str) -> Result<(), AdminError> {
        if self.gate.verify(attempt) {
            self.unlocked = true;
            Ok(())
        } else {
            Err(AdminError::IncorrectPassword)
        }
    }

    pub fn lock(&mut self) {
        self.unlocked = false;
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn require_unlocked(&self) -> Result<(), AdminError> {
        if self.unlocked {
            Ok(())
        } else {
            Err(AdminError::Locked)
        }
    }
}
