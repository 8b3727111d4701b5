//! Reusable UI components for the sign-in flow.

pub mod provider_button;
