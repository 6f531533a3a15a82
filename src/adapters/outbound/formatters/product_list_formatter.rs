use crate::ports::outbound::ProductFormatter;
use crate::registration::domain::Product;
use crate::shared::Result;
use regex::Regex;

/// "Based on" value of top-level products
const ROOT_BASE_PRODUCT: &str = "none";

/// ProductListFormatter adapter rendering a human readable product listing
pub struct ProductListFormatter {
    html_tags: Regex,
}

impl ProductListFormatter {
    /// # Errors
    /// Returns an error if the HTML stripping expression cannot be compiled
    pub fn new() -> Result<Self> {
        Ok(Self {
            html_tags: Regex::new(r"<[^>]*>\s*")?,
        })
    }

    fn strip_html(&self, text: &str) -> String {
        self.html_tags.replace_all(text, "").trim().to_string()
    }

    fn render_products(&self, output: &mut String, products: &[Product], based_on: &str) {
        for product in products {
            output.push_str(&format!("Name: {}\n", product.name));
            output.push_str(&format!("Type: {}\n", product.product_type));
            output.push_str(&format!("Identifier: {}\n", product.identifier));
            output.push_str(&format!("Based on: {}\n", based_on));
            output.push_str(&format!("Recommended: {}\n", product.recommended));
            output.push_str(&format!(
                "Description: {}\n",
                self.strip_html(&product.description)
            ));
            output.push_str("Repositories:\n");
            for (index, repository) in product.repositories.iter().enumerate() {
                let state = if repository.enabled {
                    "enabled"
                } else {
                    "disabled"
                };
                output.push_str(&format!(
                    "{}. {}: {} ({})\n",
                    index + 1,
                    repository.name,
                    repository.url,
                    state
                ));
            }
            output.push('\n');

            self.render_products(output, &product.extensions, &product.identifier);
        }
    }
}

impl ProductFormatter for ProductListFormatter {
    fn format(&self, products: &[Product]) -> String {
        let mut output = String::from("All available products:\n\n");
        self.render_products(&mut output, products, ROOT_BASE_PRODUCT);
        output
    }
}
