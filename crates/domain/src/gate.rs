use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GateError {
    #[error("Current password is incorrect")]
    WrongCurrentSecret,

    #[error("New password and confirmation do not match")]
    ConfirmationMismatch,
}

/// Password gate in front of printing
///
/// An empty secret means no gate. Comparison is plain string equality:
/// no hashing, no lockout, no attempt counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessGate {
    Open,
    Locked(String),
}

impl AccessGate {
    pub fn from_secret(secret: &str) -> Self {
        if secret.is_empty() {
            Self::Open
        } else {
            Self::Locked(secret.to_string())
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked(_))
    }

    /// Verify a candidate password; always passes when open
    pub fn check(&self, candidate: &str) -> bool {
        match self {
            Self::Open => true,
            Self::Locked(secret) => secret == candidate,
        }
    }

    /// Validate a password change and return the new secret
    ///
    /// `current` is only consulted when a secret is set. An empty new secret
    /// is accepted and turns the gate off.
    pub fn change_secret(
        &self,
        current: &str,
        new_secret: &str,
        confirmation: &str,
    ) -> Result<String, GateError> {
        if !self.check(current) {
            return Err(GateError::WrongCurrentSecret);
        }
        if new_secret != confirmation {
            return Err(GateError::ConfirmationMismatch);
        }
        Ok(new_secret.to_string())
    }
}
