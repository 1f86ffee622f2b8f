//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the `bitly` binary.

use clap::{Parser, Subcommand, ValueEnum};

use crate::query::Params;
use crate::Unit;

/// bit.ly API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "bitly", about = "bit.ly API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of human-readable text.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Shorten a long URL.
    Shorten {
        /// The URL to shorten.
        url: String,

        /// Branded short domain to use.
        #[arg(long)]
        domain: Option<String>,
    },

    /// Expand a short link (URL or hash) to its long URL.
    Expand {
        /// Short URL (e.g., http://bit.ly/ze6poY) or bare hash.
        link: String,
    },

    /// Show title and creator information for a short link.
    Info {
        /// Short URL or bare hash.
        link: String,
    },

    /// Show clicks on a bitlink.
    Clicks {
        /// The bitlink.
        link: String,

        /// Time bucket.
        #[arg(long, value_enum, default_value = "day")]
        unit: UnitArg,

        /// Number of buckets (-1 for all time).
        #[arg(long, default_value = "-1", allow_hyphen_values = true)]
        units: i64,

        /// Maximum number of rows.
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show the authenticated user's profile.
    UserInfo,

    /// List links from the user's history.
    History {
        /// Number of links per page.
        #[arg(long)]
        limit: Option<u32>,

        /// Number of links to skip.
        #[arg(long)]
        offset: Option<u32>,
    },

    /// Print the URL that starts the OAuth2 web flow.
    AuthUrl {
        /// Where the service redirects after the user grants access.
        redirect_uri: String,

        /// Opaque value echoed back on the redirect.
        #[arg(long)]
        state: Option<String>,
    },

    /// Exchange an OAuth2 authorization code for an access token.
    Exchange {
        /// The code from the redirect.
        code: String,

        /// The redirect URI used to obtain the code.
        redirect_uri: String,
    },

    /// Call any endpoint with raw parameters.
    Call {
        /// Endpoint path (e.g., v3/user/info).
        endpoint: String,

        /// Parameters as key=value; repeat a key to send a list.
        #[arg(value_parser = parse_param)]
        params: Vec<(String, String)>,

        /// Send as a form-encoded POST instead of GET.
        #[arg(long)]
        post: bool,

        /// Print the raw body instead of decoding the JSON envelope.
        #[arg(long)]
        raw: bool,
    },
}

/// Metric time buckets accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitArg {
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

impl From<UnitArg> for Unit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Minute => Unit::Minute,
            UnitArg::Hour => Unit::Hour,
            UnitArg::Day => Unit::Day,
            UnitArg::Week => Unit::Week,
            UnitArg::Month => Unit::Month,
        }
    }
}

/// Parse a `key=value` argument.
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}

/// Build request parameters, collecting repeated keys into lists.
pub fn params_from_pairs(pairs: &[(String, String)]) -> Params {
    let mut params = Params::new();
    for (key, value) in pairs {
        params.append(key.as_str(), value.as_str());
    }
    params
}

/// Split a short-link argument into `(short_url, hash)`.
///
/// Anything containing `/` is treated as a URL, otherwise as a hash.
pub fn split_link(link: &str) -> (Option<&str>, Option<&str>) {
    if link.contains('/') {
        (Some(link), None)
    } else {
        (None, Some(link))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("url=http://a.b/?c=d").unwrap(),
            ("url".to_string(), "http://a.b/?c=d".to_string())
        );
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=x").is_err());
    }

    #[test]
    fn test_split_link() {
        assert_eq!(split_link("http://bit.ly/x"), (Some("http://bit.ly/x"), None));
        assert_eq!(split_link("ze6poY"), (None, Some("ze6poY")));
    }
}
