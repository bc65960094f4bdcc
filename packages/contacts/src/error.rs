use thiserror::Error;

/// Why the sign-up form was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignUpError {
    #[error("Email and password are required.")]
    MissingFields,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Password must be at least {0} characters.")]
    PasswordTooShort(usize),
    #[error("Email already exists. Please choose a different email.")]
    EmailTaken,
}

/// Why sign-in failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignInError {
    #[error("Invalid email or password. Please try again.")]
    InvalidCredentials,
}
