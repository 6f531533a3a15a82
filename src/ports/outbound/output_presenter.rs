use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination where rendered content is
/// written verbatim.
pub trait OutputPresenter {
    /// Presents the content to the output destination
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
