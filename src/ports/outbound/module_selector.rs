/// ModuleSelector port deciding whether an extension was explicitly enabled
///
/// Recommended extensions are always dumped; this port covers the ones a
/// user opted into.
pub trait ModuleSelector {
    /// Returns true if the module with the given identifier should be enabled
    fn is_enabled(&self, identifier: &str) -> bool;
}
