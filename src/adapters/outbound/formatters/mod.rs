/// Formatter adapters for the different renderings of a product tree
mod module_list_formatter;
mod product_list_formatter;
mod zypper_repo_formatter;

pub use module_list_formatter::ModuleListFormatter;
pub use product_list_formatter::ProductListFormatter;
pub use zypper_repo_formatter::ZypperRepoFormatter;
