//! Local auth session: registration, login, and logout against the
//! persisted user list.

pub mod session;

pub use session::AuthSession;

use crate::errors::StoreError;

pub type AuthResult<T> = Result<T, AuthError>;

/// Typed outcome of a failed credential operation.
///
/// `InvalidCredentials` deliberately covers both an unknown email and a
/// wrong password; callers cannot tell the two apart.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("This email is already registered")]
    EmailTaken,
    #[error(transparent)]
    Storage(#[from] StoreError),
}
