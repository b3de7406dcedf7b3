use crate::shared::Result;

/// OutputPresenter port for presenting the final run summary
pub trait OutputPresenter {
    /// Presents the rendered summary to the output destination
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
