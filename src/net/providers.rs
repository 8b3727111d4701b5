//! Provider identities and the sign-in call.
//!
//! Client-side (hydrate): simulated exchange latency before resolving.
//! Server-side (SSR) and native tests: resolves immediately.
//!
//! ERROR HANDLING
//! ==============
//! `attempt_login` never touches storage; a failed attempt surfaces as
//! `LoginError` and the caller decides what to show.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "providers_test.rs"]
mod providers_test;

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use super::types::AuthResult;

/// Exchange latency simulated by the mocked providers.
pub const MOCK_LOGIN_DELAY: Duration = Duration::from_millis(1500);

/// A streaming service the user can sign in with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    Spotify,
    AppleMusic,
}

impl Provider {
    /// Both providers, in on-screen order.
    pub const ALL: [Self; 2] = [Self::Spotify, Self::AppleMusic];

    /// Human-readable service name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Spotify => "Spotify",
            Self::AppleMusic => "Apple Music",
        }
    }

    /// Canned credential returned by the mocked exchange.
    #[must_use]
    pub fn mock_token(self) -> &'static str {
        match self {
            Self::Spotify => "mock-spotify-jwt-token",
            Self::AppleMusic => "mock-apple-music-jwt-token",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A sign-in attempt that did not produce a credential.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Failed to login with {0}. Please try again.")]
pub struct LoginError(pub Provider);

/// Sign in with `provider`.
///
/// Mocked: waits a fixed latency in the browser, then resolves with the
/// provider's canned credential. A real OAuth exchange can replace the
/// body; callers only see the `AuthResult` contract.
pub async fn attempt_login(provider: Provider) -> Result<AuthResult, LoginError> {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(MOCK_LOGIN_DELAY).await;

    Ok(AuthResult {
        success: true,
        token: provider.mock_token().to_owned(),
    })
}
