//! DTOs for provider sign-in.
//!
//! DESIGN
//! ======
//! `AuthResult` mirrors the payload a real token exchange would return,
//! so the mocked call and a future network client share one contract.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Outcome of a provider sign-in attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResult {
    /// Whether the provider accepted the sign-in.
    pub success: bool,
    /// Credential for authenticated views; non-empty when `success` is set.
    pub token: String,
}
