//! GitHub users endpoint: wire types and HTTP client.

mod client;
mod error;
mod types;

pub use client::UsersClient;
pub use error::FetchError;
pub use types::GithubUser;
