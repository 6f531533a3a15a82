use crate::adapters::outbound::formatters::{
    ModuleListFormatter, ProductListFormatter, ZypperRepoFormatter,
};
use crate::adapters::outbound::system::DefaultModuleSelector;
use crate::application::dto::OutputFormat;
use crate::ports::outbound::{ModuleSelector, ProductFormatter};
use crate::shared::Result;

/// Factory for creating product formatters
///
/// Maps an [`OutputFormat`] to the adapter rendering it.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for the given output format
    ///
    /// The zypper formatter enables the modules listed in `ADDITIONAL_MODULES`
    /// and the ones installed under `/etc/products.d`.
    ///
    /// # Examples
    /// ```
    /// use container_suseconnect::application::dto::OutputFormat;
    /// use container_suseconnect::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::ModuleList).unwrap();
    /// assert_eq!(formatter.format(&[]), "All available modules:\n\n");
    /// ```
    pub fn create(format: OutputFormat) -> Result<Box<dyn ProductFormatter>> {
        Self::create_with_modules(format, DefaultModuleSelector::from_system())
    }

    /// Creates a formatter, deciding on extension modules with `modules`
    pub fn create_with_modules<M>(
        format: OutputFormat,
        modules: M,
    ) -> Result<Box<dyn ProductFormatter>>
    where
        M: ModuleSelector + 'static,
    {
        let formatter: Box<dyn ProductFormatter> = match format {
            OutputFormat::ProductList => Box::new(ProductListFormatter::new()?),
            OutputFormat::ModuleList => Box::new(ModuleListFormatter::new()),
            OutputFormat::ZypperRepos => Box::new(ZypperRepoFormatter::new(modules)),
        };
        Ok(formatter)
    }
}
