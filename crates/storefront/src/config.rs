//! Environment-based configuration.
//!
//! - `STOREFRONT_ADDR`: listen address (default `0.0.0.0:8080`)
//! - `STOREFRONT_TOKENS`: comma-separated `token=user` or `token=user:admin`
//!   pairs, e.g. `secret1=alice,secret2=root:admin`
//!
//! Token issuance lives elsewhere; this service only consumes a static
//! bearer table. Malformed entries fail startup rather than being skipped,
//! so a typo cannot silently drop an account.

use crate::model::Caller;
use std::collections::HashMap;
use std::net::SocketAddr;
use thiserror::Error;

/// Errors raised while reading the environment at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid listen address {addr:?}: {source}")]
    InvalidAddr {
        addr: String,
        source: std::net::AddrParseError,
    },

    /// Entry that is not `token=user` or `token=user:admin`.
    #[error("malformed token entry {entry:?}")]
    MalformedToken { entry: String },

    /// Two entries share a bearer token. The mapping would be ambiguous,
    /// so the whole table is refused.
    #[error("duplicate bearer token in {0}")]
    DuplicateToken(&'static str),
}

/// Runtime configuration assembled from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds.
    pub addr: SocketAddr,
    /// Bearer token table: token -> authenticated caller.
    pub tokens: HashMap<String, Caller>,
}

impl Config {
    /// Reads `STOREFRONT_ADDR` and `STOREFRONT_TOKENS`.
    ///
    /// A missing address falls back to the default; a missing token table
    /// yields an empty one, which serves only the unauthenticated routes.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = match std::env::var("STOREFRONT_ADDR") {
            Ok(raw) => parse_addr(&raw)?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], 8080)),
        };
        let tokens = match std::env::var("STOREFRONT_TOKENS") {
            Ok(raw) => parse_tokens(&raw)?,
            Err(_) => HashMap::new(),
        };
        Ok(Self { addr, tokens })
    }
}

fn parse_addr(raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.parse().map_err(|source| ConfigError::InvalidAddr {
        addr: raw.to_string(),
        source,
    })
}

/// Parses the bearer table.
///
/// Each comma-separated entry is `token=user` for a customer or
/// `token=user:admin` for staff. An empty value parses to an empty table.
fn parse_tokens(raw: &str) -> Result<HashMap<String, Caller>, ConfigError> {
    let mut tokens = HashMap::new();
    if raw.trim().is_empty() {
        return Ok(tokens);
    }
    for entry in raw.split(',') {
        let malformed = || ConfigError::MalformedToken {
            entry: entry.to_string(),
        };
        let (token, principal) = entry.trim().split_once('=').ok_or_else(malformed)?;
        if token.is_empty() {
            return Err(malformed());
        }
        let caller = match principal.split_once(':') {
            None if !principal.is_empty() => Caller::customer(principal),
            Some((user, "admin")) if !user.is_empty() => Caller::admin(user),
            _ => return Err(malformed()),
        };
        if tokens.insert(token.to_string(), caller).is_some() {
            return Err(ConfigError::DuplicateToken("STOREFRONT_TOKENS"));
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_customer_and_admin_entries() {
        let tokens = parse_tokens("secret1=alice,secret2=root:admin").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens["secret1"], Caller::customer("alice"));
        assert_eq!(tokens["secret2"], Caller::admin("root"));
    }

    #[test]
    fn tolerates_whitespace_around_entries() {
        let tokens = parse_tokens(" secret1=alice , secret2=bob ").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens["secret2"], Caller::customer("bob"));
    }

    #[test]
    fn empty_table_is_allowed() {
        assert!(parse_tokens("").unwrap().is_empty());
        assert!(parse_tokens("   ").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_entries() {
        for raw in [
            "no-equals-sign",
            "=alice",
            "secret1=",
            "secret1=alice:owner",
            "secret1=:admin",
            "secret1=alice,",
        ] {
            assert!(
                matches!(parse_tokens(raw), Err(ConfigError::MalformedToken { .. })),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_duplicate_tokens() {
        let err = parse_tokens("secret=alice,secret=bob").unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateToken(_)));
    }

    #[test]
    fn parses_listen_addresses() {
        assert_eq!(
            parse_addr("127.0.0.1:9000").unwrap(),
            SocketAddr::from(([127, 0, 0, 1], 9000))
        );
        assert!(matches!(
            parse_addr("not-an-address"),
            Err(ConfigError::InvalidAddr { .. })
        ));
    }
}
