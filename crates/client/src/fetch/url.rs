//! Creation URL canonicalization and identity extraction.

use creations_core::Error;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Identity fields carried by a creation details URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationUrl {
    /// Canonicalized URL.
    pub url: Url,
    /// 36-character hex-and-hyphen creation token.
    pub creation_id: String,
    /// Human-readable identifier following the token.
    pub slug: String,
}

fn details_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/details/([0-9a-fA-F-]{36})/([^/]+)").expect("valid details path regex"))
}

/// Canonicalize a URL string.
///
/// Normalization steps:
/// 1. Trim leading/trailing whitespace
/// 2. Default scheme to https:// if missing
/// 3. Lowercase the host
/// 4. Remove fragment (#...)
/// 5. Keep query string intact
pub fn canonicalize(input: &str) -> Result<Url, Error> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(Error::InvalidUrl("empty URL".to_string()));
    }

    let url_str = if trimmed.contains("://") { trimmed.to_string() } else { format!("https://{trimmed}") };

    let mut parsed = Url::parse(&url_str).map_err(|e| Error::InvalidUrl(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => return Err(Error::InvalidUrl(format!("unsupported scheme: {scheme}"))),
    }

    if let Some(host) = parsed.host_str() {
        let lowered = host.to_lowercase();
        parsed
            .set_host(Some(lowered.as_str()))
            .map_err(|e| Error::InvalidUrl(e.to_string()))?;
    }

    parsed.set_fragment(None);

    Ok(parsed)
}

/// Parse a creation details URL into its identity fields.
///
/// The host must match `allowed_host` exactly — any other domain is the one
/// hard failure of the pipeline, raised before extraction is ever attempted.
/// The path must carry a `/details/<36-char token>/<slug>` segment.
pub fn parse_creation_url(input: &str, allowed_host: &str) -> Result<CreationUrl, Error> {
    let url = canonicalize(input)?;

    match url.host_str() {
        Some(host) if host == allowed_host => {}
        Some(host) => return Err(Error::UnexpectedDomain(host.to_string())),
        None => return Err(Error::InvalidUrl("URL has no host".to_string())),
    }

    let captures = details_re()
        .captures(url.path())
        .ok_or_else(|| Error::InvalidUrl(format!("no /details/<id>/<slug> segment in {}", url.path())))?;

    let creation_id = captures[1].to_string();
    let slug = captures[2].to_string();

    Ok(CreationUrl { url, creation_id, slug })
}
