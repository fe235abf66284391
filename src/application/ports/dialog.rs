//! Dialog port interface

use async_trait::async_trait;
use thiserror::Error;

/// Dialog errors
#[derive(Debug, Clone, Error)]
pub enum DialogError {
    #[error("Failed to present dialog: {0}")]
    PresentFailed(String),
}

/// Port for the host's modal dialog surface: yes/no confirmation plus
/// info and error reporting.
#[async_trait]
pub trait Dialog: Send + Sync {
    /// Present a yes/no question; returns the user's choice
    async fn confirm(&self, title: &str, message: &str) -> Result<bool, DialogError>;

    /// Present an informational message
    async fn info(&self, title: &str, message: &str) -> Result<(), DialogError>;

    /// Present an error message
    async fn error(&self, title: &str, message: &str) -> Result<(), DialogError>;
}

/// Blanket implementation for boxed dialog types
#[async_trait]
impl Dialog for Box<dyn Dialog> {
    async fn confirm(&self, title: &str, message: &str) -> Result<bool, DialogError> {
        self.as_ref().confirm(title, message).await
    }

    async fn info(&self, title: &str, message: &str) -> Result<(), DialogError> {
        self.as_ref().info(title, message).await
    }

    async fn error(&self, title: &str, message: &str) -> Result<(), DialogError> {
        self.as_ref().error(title, message).await
    }
}
