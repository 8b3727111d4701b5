//! Sign-in attempt state for the login panel.
//!
//! DESIGN
//! ======
//! Two independent pending flags rather than one enum: the panel
//! disables both actions whenever either flag is set, while only the
//! pending provider's button shows its spinner.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::providers::{LoginError, Provider};

/// Pending/error state for the two provider sign-in actions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginAttemptState {
    pub spotify_pending: bool,
    pub apple_pending: bool,
    /// Message from the most recent failed attempt, if any.
    pub error: Option<String>,
}

impl LoginAttemptState {
    /// True while any provider attempt is in flight.
    #[must_use]
    pub fn any_pending(&self) -> bool {
        self.spotify_pending || self.apple_pending
    }

    /// True while `provider`'s attempt is in flight.
    #[must_use]
    pub fn is_pending(&self, provider: Provider) -> bool {
        match provider {
            Provider::Spotify => self.spotify_pending,
            Provider::AppleMusic => self.apple_pending,
        }
    }

    /// Start an attempt for `provider`.
    ///
    /// Refuses (returns `false`) while any attempt is already in flight,
    /// so callers bypassing the disabled buttons cannot start a second
    /// one. Otherwise clears a stale error and raises the pending flag.
    pub fn begin(&mut self, provider: Provider) -> bool {
        if self.any_pending() {
            return false;
        }
        self.error = None;
        self.set_pending(provider, true);
        true
    }

    /// Clear `provider`'s pending flag once its attempt settles.
    pub fn finish(&mut self, provider: Provider) {
        self.set_pending(provider, false);
    }

    /// Record a failed attempt: surface its message, clear the flag.
    pub fn fail(&mut self, provider: Provider, error: &LoginError) {
        self.error = Some(error.to_string());
        self.finish(provider);
    }

    fn set_pending(&mut self, provider: Provider, pending: bool) {
        match provider {
            Provider::Spotify => self.spotify_pending = pending,
            Provider::AppleMusic => self.apple_pending = pending,
        }
    }
}
