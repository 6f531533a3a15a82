use crate::ports::outbound::ProductFormatter;
use crate::registration::domain::Product;

const MODULE_TYPE: &str = "module";

/// ModuleListFormatter adapter listing the modules of the product trees
#[derive(Debug, Default, Clone, Copy)]
pub struct ModuleListFormatter;

impl ModuleListFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_modules(output: &mut String, products: &[Product]) {
        for product in products {
            if product.product_type == MODULE_TYPE {
                output.push_str(&format!("Name: {}\n", product.name));
                output.push_str(&format!("Identifier: {}\n", product.identifier));
                output.push_str(&format!("Recommended: {}\n", product.recommended));
                output.push('\n');
            }

            Self::render_modules(output, &product.extensions);
        }
    }
}

impl ProductFormatter for ModuleListFormatter {
    fn format(&self, products: &[Product]) -> String {
        let mut output = String::from("All available modules:\n\n");
        Self::render_modules(&mut output, products);
        output
    }
}
