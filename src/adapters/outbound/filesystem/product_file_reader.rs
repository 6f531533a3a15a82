use crate::ports::outbound::InstalledProductReader;
use crate::registration::domain::InstalledProduct;
use crate::shared::error::{logged_error, SuseConnectError};
use crate::shared::Result;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Location of the installed base product on SUSE systems
pub const BASE_PRODUCT_LOCATION: &str = "/etc/products.d/baseproduct";

/// ProductFileReader adapter reading the base product descriptor
///
/// Only the direct children of the root element are considered, so nested
/// elements that happen to be called `name` (e.g. inside `<register>`) do
/// not leak into the result.
pub struct ProductFileReader {
    path: PathBuf,
}

impl ProductFileReader {
    pub fn new() -> Self {
        Self::with_path(PathBuf::from(BASE_PRODUCT_LOCATION))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for ProductFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl InstalledProductReader for ProductFileReader {
    fn read_installed_product(&self) -> Result<InstalledProduct> {
        if !self.path.exists() {
            return Err(logged_error(SuseConnectError::InstalledProduct(
                "No base product detected".to_string(),
            )));
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            logged_error(SuseConnectError::InstalledProduct(format!(
                "Can't open base product file: {}",
                e
            )))
        })?;

        parse_installed_product(&content)
    }
}

#[derive(Clone, Copy)]
enum Field {
    Name,
    Version,
    Arch,
    Vendor,
}

impl Field {
    fn from_element(name: &[u8]) -> Option<Self> {
        match name {
            b"name" => Some(Field::Name),
            b"version" => Some(Field::Version),
            b"arch" => Some(Field::Arch),
            b"vendor" => Some(Field::Vendor),
            _ => None,
        }
    }
}

fn parse_error(details: impl fmt::Display) -> anyhow::Error {
    logged_error(SuseConnectError::InstalledProduct(format!(
        "Can't parse base product file: {}",
        details
    )))
}

/// Parses the XML product descriptor
///
/// # Errors
/// Returns an error if the document is not well-formed or has no root element
pub fn parse_installed_product(xml: &str) -> Result<InstalledProduct> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;
    let mut current: Option<Field> = None;
    let mut product = InstalledProduct::default();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                depth += 1;
                seen_root = true;
                current = if depth == 2 {
                    Field::from_element(e.local_name().as_ref())
                } else {
                    None
                };
            }
            Ok(Event::Empty(_)) => {
                seen_root = true;
            }
            Ok(Event::Text(e)) => {
                if let Some(field) = current {
                    let text = e.unescape().map_err(parse_error)?;
                    let value = text.trim().to_string();
                    match field {
                        Field::Name => product.identifier = value,
                        Field::Version => product.version = value,
                        Field::Arch => product.arch = value,
                        Field::Vendor => product.vendor = Some(value),
                    }
                }
            }
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
                current = None;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(parse_error(e)),
            _ => {}
        }
        buf.clear();
    }

    if !seen_root || depth != 0 {
        return Err(parse_error("unexpected end of file"));
    }

    Ok(product)
}
