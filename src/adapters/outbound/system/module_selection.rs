use crate::adapters::outbound::filesystem::ProductMarkerSelector;
use crate::ports::outbound::ModuleSelector;

pub const ADDITIONAL_MODULES_ENV: &str = "ADDITIONAL_MODULES";

/// EnvModuleSelector adapter enabling the modules listed in `ADDITIONAL_MODULES`
#[derive(Debug, Default, Clone)]
pub struct EnvModuleSelector {
    modules: Vec<String>,
}

impl EnvModuleSelector {
    /// Parses a comma separated list of module identifiers
    pub fn new(list: &str) -> Self {
        let modules = list
            .split(',')
            .map(str::trim)
            .filter(|module| !module.is_empty())
            .map(str::to_string)
            .collect();
        Self { modules }
    }

    pub fn from_env() -> Self {
        Self::new(&std::env::var(ADDITIONAL_MODULES_ENV).unwrap_or_default())
    }

    pub fn modules(&self) -> &[String] {
        &self.modules
    }
}

impl ModuleSelector for EnvModuleSelector {
    fn is_enabled(&self, identifier: &str) -> bool {
        self.modules.iter().any(|module| module == identifier)
    }
}

/// Enables a module if either selector does
pub struct AnyModuleSelector<A, B> {
    first: A,
    second: B,
}

impl<A: ModuleSelector, B: ModuleSelector> AnyModuleSelector<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: ModuleSelector, B: ModuleSelector> ModuleSelector for AnyModuleSelector<A, B> {
    fn is_enabled(&self, identifier: &str) -> bool {
        self.first.is_enabled(identifier) || self.second.is_enabled(identifier)
    }
}

/// Selector used by the CLI: `ADDITIONAL_MODULES` plus the locally installed
/// module descriptors
pub type DefaultModuleSelector = AnyModuleSelector<EnvModuleSelector, ProductMarkerSelector>;

impl DefaultModuleSelector {
    pub fn from_system() -> Self {
        Self::new(EnvModuleSelector::from_env(), ProductMarkerSelector::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_env_list_is_split_on_commas() {
        let selector = EnvModuleSelector::new("sle-module-containers, sle-module-python3,,");
        assert_eq!(
            selector.modules(),
            ["sle-module-containers".to_string(), "sle-module-python3".to_string()]
        );
        assert!(selector.is_enabled("sle-module-python3"));
        assert!(!selector.is_enabled("sle-module"));
        assert!(!selector.is_enabled(""));
    }

    #[test]
    fn test_empty_env_enables_nothing() {
        let selector = EnvModuleSelector::new("");
        assert!(selector.modules().is_empty());
        assert!(!selector.is_enabled(""));
    }

    #[test]
    fn test_combined_selector() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("sle-module-web-scripting.prod"), "").unwrap();

        let selector = AnyModuleSelector::new(
            EnvModuleSelector::new("sle-module-containers"),
            ProductMarkerSelector::with_dir(temp_dir.path().to_path_buf()),
        );

        assert!(selector.is_enabled("sle-module-containers"));
        assert!(selector.is_enabled("sle-module-web-scripting"));
        assert!(!selector.is_enabled("sle-module-legacy"));
    }
}
