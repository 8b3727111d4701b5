//! Provider-facing side of the client: sign-in calls and their DTOs.

pub mod providers;
pub mod types;
