//! Anonymous session grant for the document store.
//!
//! The store requires no user account: one anonymous sign-in per client
//! yields a bearer token that authorizes event fetches. Token refresh and
//! account upgrade are the store's concern, not Lifemap's.

use serde::{Deserialize, Serialize};

/// Credentials returned by the anonymous sign-in endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSession {
    /// Server-assigned id of the anonymous session.
    pub session_id: String,
    /// Bearer token presented on every fetch.
    pub token: String,
}

impl StoreSession {
    /// Whether the grant carries a usable token.
    pub fn is_usable(&self) -> bool {
        !self.token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_deserializes_from_store_response() {
        let session: Result<StoreSession, _> = serde_json::from_value(serde_json::json!({
            "session_id": "anon-91",
            "token": "tok-abc",
        }));
        assert_eq!(
            session.ok(),
            Some(StoreSession {
                session_id: String::from("anon-91"),
                token: String::from("tok-abc"),
            })
        );
    }

    #[test]
    fn empty_token_is_not_usable() {
        let session = StoreSession {
            session_id: String::from("anon-1"),
            token: String::new(),
        };
        assert!(!session.is_usable());
    }
}
