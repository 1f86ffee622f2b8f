//! Typed endpoint methods.
//!
//! Each method builds [`Params`] from its arguments and dispatches through
//! the endpoint table; the impls are split by API area.

mod bundles;
mod domains;
mod links;
mod metrics;
mod search;
mod user;

use crate::error::{BitlyError, Result};
use crate::query::Params;

/// Parameters naming one short link by URL or hash.
///
/// At least one must be non-empty; otherwise the call is rejected before
/// anything is sent.
fn identify(operation: &str, short_url: Option<&str>, hash: Option<&str>) -> Result<Params> {
    let short_url = short_url.filter(|s| !s.is_empty());
    let hash = hash.filter(|s| !s.is_empty());

    if short_url.is_none() && hash.is_none() {
        return Err(BitlyError::Usage(format!(
            "{operation} requires a short_url or a hash"
        )));
    }

    Ok(Params::new()
        .with_opt("shortUrl", short_url)
        .with_opt("hash", hash))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_requires_one() {
        assert!(matches!(
            identify("expand", None, None),
            Err(BitlyError::Usage(_))
        ));
        assert!(matches!(
            identify("expand", Some(""), Some("")),
            Err(BitlyError::Usage(_))
        ));
    }

    #[test]
    fn test_identify_keeps_supplied() {
        let params = identify("info", None, Some("ze6poY")).unwrap();
        assert!(!params.contains_key("shortUrl"));
        assert_eq!(params.get("hash").and_then(|v| v.as_str()), Some("ze6poY"));
    }
}
