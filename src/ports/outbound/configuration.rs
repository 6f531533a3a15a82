use crate::shared::Result;
use std::path::PathBuf;

/// Configuration port for files following a `key<separator>value` grammar
///
/// Implementors describe where their file may live and how to absorb each
/// parsed pair. The shared scanning algorithm lives in
/// `adapters::outbound::filesystem::read_configuration`.
pub trait Configuration {
    /// Character separating the key from the value.
    fn separator(&self) -> char;

    /// Candidate file locations. Order matters: the first existing one wins.
    fn locations(&self) -> Vec<PathBuf>;

    /// Called when none of the locations exist.
    ///
    /// # Returns
    /// `true` if the implementor handled the situation and is left in a
    /// consistent default state, `false` if reading should fail.
    fn on_locations_not_found(&mut self) -> bool;

    /// Receives one parsed pair. Key and value are already trimmed.
    fn set_value(&mut self, key: &str, value: &str);

    /// Validation run once every line has been consumed.
    ///
    /// # Errors
    /// The returned error is expected to be logged already and is propagated
    /// unchanged.
    fn after_parse_check(&mut self) -> Result<()>;
}
