//! Network constants and the URL builder for the Agile REST API.

/// Protocol used when none is configured.
pub const DEFAULT_PROTOCOL: &str = "https";

/// Path prefix used when Jira is served from the root of its host.
pub const DEFAULT_PATH_PREFIX: &str = "/";

/// Only supported Agile API version. Baked into every URL.
pub const API_VERSION: &str = "1.0";

/// Base path of the Agile API below the path prefix.
pub const AGILE_BASE_PATH: &str = "rest/agile/";

/// Compose `protocol://host[:port]{path_prefix}rest/agile/1.0{path}`.
///
/// The prefix is used exactly as configured. The result is percent-decoded,
/// so escapes already present in `path` come back as literal characters.
pub fn build_url(
    protocol: &str,
    host: &str,
    port: Option<u16>,
    path_prefix: &str,
    path: &str,
) -> String {
    let scheme = protocol.trim_end_matches(':');
    let authority = match port {
        Some(p) => format!("{}:{}", host, p),
        None => host.to_string(),
    };
    let raw = format!(
        "{}://{}{}{}{}{}",
        scheme, authority, path_prefix, AGILE_BASE_PATH, API_VERSION, path
    );

    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    }
}
