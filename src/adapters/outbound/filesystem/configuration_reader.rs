use crate::ports::outbound::Configuration;
use crate::shared::error::{logged_error, SuseConnectError};
use crate::shared::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Returns the first of the given locations that exists on the system
fn first_existing_location(locations: &[PathBuf]) -> Option<&Path> {
    locations
        .iter()
        .map(PathBuf::as_path)
        .find(|path| path.exists())
}

/// Reads the configuration from the first existing candidate location and
/// feeds every pair into `config`.
///
/// # Errors
/// Returns an error if:
/// - No candidate exists and the configuration cannot fall back to defaults
/// - The file exists but cannot be opened
/// - A line cannot be parsed, or the final validation fails
pub fn read_configuration(config: &mut dyn Configuration) -> Result<()> {
    let locations = config.locations();

    let Some(path) = first_existing_location(&locations) else {
        if config.on_locations_not_found() {
            return Ok(());
        }
        return Err(logged_error(SuseConnectError::CredentialsNotFound {
            locations: locations.clone(),
        }));
    };

    let file = File::open(path).map_err(|e| {
        logged_error(SuseConnectError::ConfigOpen {
            path: path.to_path_buf(),
            details: e.to_string(),
        })
    })?;

    parse_configuration(config, BufReader::new(file))
}

/// Parses `key<separator>value` lines from `reader` into `config`.
///
/// Lines starting with `#` or `-` are comments, empty lines are skipped.
/// Only the first separator splits a line; key and value are trimmed.
///
/// # Errors
/// Returns an error naming the offending line when it holds no separator,
/// a scan error when the input cannot be read, or the validation error of
/// [`Configuration::after_parse_check`]
pub fn parse_configuration<R: BufRead>(config: &mut dyn Configuration, reader: R) -> Result<()> {
    let separator = config.separator();

    for line in reader.lines() {
        let line = line.map_err(|e| logged_error(SuseConnectError::ConfigScan(e.to_string())))?;

        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }

        let Some((key, value)) = line.split_once(separator) else {
            return Err(logged_error(SuseConnectError::ConfigParse { line: line.clone() }));
        };

        config.set_value(key.trim(), value.trim());
    }

    config.after_parse_check()
}
