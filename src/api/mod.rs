//! Platform API client module

mod client;
mod models;
mod traits;

pub use client::HttpClient;
pub use models::{MaintenanceStatus, PlatformStats};
pub use traits::{get_json, Method, RemoteMutationClient};

#[cfg(test)]
pub use traits::MockRemoteMutationClient;
