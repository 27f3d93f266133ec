// Client-side functionality for the login screen
//
// This module provides the outbound half of the form: one POST to the
// authentication endpoint, with the response mapped to a login outcome the
// UI layer can render directly.

pub mod auth_client;
pub mod errors;
pub mod types;

// Re-export core types for easy access
pub use types::{AuthSession, LoginRequest, LoginResponse};

// Re-export error types
pub use errors::{ClientError, ClientResult};

// Re-export main client
pub use auth_client::AuthClient;
