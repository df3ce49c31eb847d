//! Login authentication strategy.

pub mod local;
pub mod validator;

pub use local::{AuthOutcome, AuthRejection, LocalAuthenticator};
pub use validator::CredentialValidator;
