//! User-visible notices shown in the status line.

use std::fmt;


/// A one-shot message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Info(String),
    Error(String),
}


impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self::Info(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Notice for a completed clipboard export.
    pub fn table_copied() -> Self {
        Self::info("Table copied to clipboard!")
    }

    /// Notice for a rejected clipboard export, carrying the underlying error.
    pub fn copy_failed(err: impl fmt::Display) -> Self {
        Self::Error(format!("Failed to copy table: {err}"))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Info(m) | Self::Error(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}


impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_messages() {
        assert_eq!(Notification::table_copied().message(), "Table copied to clipboard!");
        assert!(!Notification::table_copied().is_error());

        let failed = Notification::copy_failed("permission denied");
        assert_eq!(failed.message(), "Failed to copy table: permission denied");
        assert!(failed.is_error());
    }
}
