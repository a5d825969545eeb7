//! octoscope-github: GitHub profile lookup and the render-ready profile card.

pub mod client;
pub mod error;
pub mod profile;

pub use client::GitHubClient;
pub use error::LookupError;
pub use profile::{Detail, Profile, ProfileCard};
