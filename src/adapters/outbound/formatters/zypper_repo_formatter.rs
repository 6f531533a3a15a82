use crate::ports::outbound::{ModuleSelector, ProductFormatter};
use crate::registration::domain::{Product, Repository};

/// Header written before the repositories of every top-level product
const DUMP_HEADER: &str = "# generated by container-suseconnect\n\n";

/// ZypperRepoFormatter adapter rendering zypper repository definitions
///
/// Repositories of a top-level product are always rendered. Extensions are
/// rendered when they are recommended or enabled by the module selector,
/// and their own extensions are visited either way.
pub struct ZypperRepoFormatter<M: ModuleSelector> {
    modules: M,
}

impl<M: ModuleSelector> ZypperRepoFormatter<M> {
    pub fn new(modules: M) -> Self {
        Self { modules }
    }

    fn render_product(&self, output: &mut String, product: &Product, dump_always: bool) {
        let eligible =
            dump_always || product.recommended || self.modules.is_enabled(&product.identifier);

        if eligible {
            for repository in &product.repositories {
                render_repository(output, repository);
            }
        }

        for extension in &product.extensions {
            self.render_product(output, extension, false);
        }
    }
}

fn flag(value: bool) -> u8 {
    u8::from(value)
}

fn render_repository(output: &mut String, repository: &Repository) {
    output.push_str(&format!("[{}]\n", repository.name));
    output.push_str(&format!("name={}\n", repository.description));
    output.push_str(&format!("baseurl={}\n", repository.url));
    output.push_str(&format!("autorefresh={}\n", flag(repository.autorefresh)));
    output.push_str(&format!("enabled={}\n", flag(repository.enabled)));
    output.push('\n');
}

impl<M: ModuleSelector> ProductFormatter for ZypperRepoFormatter<M> {
    fn format(&self, products: &[Product]) -> String {
        let mut output = String::new();
        for product in products {
            output.push_str(DUMP_HEADER);
            self.render_product(&mut output, product, true);
        }
        output
    }
}
