/// Rendering of the resolved products
///
/// Shared by the CLI (inbound adapter), which picks it from the subcommand,
/// and the formatter factory, which maps it onto a formatter adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human readable product listing (default action)
    ProductList,
    /// Human readable module listing
    ModuleList,
    /// zypper repository definitions
    ZypperRepos,
}
