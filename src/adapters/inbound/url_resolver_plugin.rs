use crate::application::dto::ResolvedUrl;
use crate::ports::inbound::UrlResolutionPort;
use crate::ports::outbound::OutputPresenter;
use crate::shared::error::{logged_error, SuseConnectError};
use crate::shared::Result;
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};

/// Header naming the repository path zypper wants resolved
const PATH_HEADER: &str = "path";

/// Headers of a zypper plugin frame
///
/// zypper speaks a STOMP-like protocol: a command line followed by
/// `key:value` header lines, terminated by a NUL byte. URL resolver
/// requests carry no body and a single command, so only the headers are
/// kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginRequest {
    pub headers: HashMap<String, String>,
}

impl PluginRequest {
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }
}

fn parse_error(details: impl std::fmt::Display) -> anyhow::Error {
    logged_error(SuseConnectError::UrlResolver(format!(
        "could not parse input: {}",
        details
    )))
}

/// Reads one frame, up to the first NUL byte or the end of input
///
/// # Errors
/// Returns an error if the input cannot be read or is not UTF-8
pub fn read_request<R: Read>(input: R) -> Result<PluginRequest> {
    let mut reader = BufReader::new(input);
    let mut frame = Vec::new();
    reader.read_until(0, &mut frame).map_err(parse_error)?;
    if frame.last() == Some(&0) {
        frame.pop();
    }

    let text = String::from_utf8(frame).map_err(parse_error)?;
    let headers = text
        .lines()
        .skip(1)
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

    Ok(PluginRequest { headers })
}

/// Renders the `RESOLVEDURL` frame for zypper, NUL byte included
///
/// # Errors
/// Returns an error if the URL cannot be built
pub fn render_response(resolved: &ResolvedUrl) -> Result<String> {
    let mut output = String::from("RESOLVEDURL\n");
    output.push_str(&format!("X-Instance-Data:{}\n\n", resolved.instance_data));
    output.push_str(&resolved.url()?);
    output.push('\0');
    Ok(output)
}

/// UrlResolverPlugin - Inbound adapter serving zypper's URL resolver plugin
/// protocol on top of the [`UrlResolutionPort`]
pub struct UrlResolverPlugin<P, O> {
    port: P,
    presenter: O,
}

impl<P: UrlResolutionPort, O: OutputPresenter> UrlResolverPlugin<P, O> {
    pub fn new(port: P, presenter: O) -> Self {
        Self { port, presenter }
    }

    /// Answers a single request read from `input`
    pub fn run<R: Read>(&self, input: R) -> Result<()> {
        let request = read_request(input)?;
        let path = request.header(PATH_HEADER).unwrap_or_default();

        let resolved = self.port.resolve_url(path)?;
        self.presenter.present(&render_response(&resolved)?)
    }
}
