//! Session store
//!
//! Owns the auth token and its persisted copy. The UI never touches storage
//! directly; it goes through [`SessionStore`].

use std::fmt;

/// Opaque credential issued by the auth endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Keep tokens out of logs.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

/// Synchronous key-value persistence for the token.
///
/// Writes must be complete when the call returns so that the next
/// [`SessionStore::initialize`] (i.e. a page reload) observes them.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> bool;
    fn clear(&self) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    credential: Option<Token>,
}

impl Session {
    pub fn credential(&self) -> Option<&Token> {
        self.credential.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
}

impl<S: TokenStore> SessionStore<S> {
    /// Restores the session persisted by a previous run, if any.
    pub fn initialize(storage: S) -> Self {
        let credential = storage.load().filter(|t| !t.is_empty()).map(Token);
        Self {
            storage,
            session: Session { credential },
        }
    }

    pub fn login(&mut self, token: Token) {
        if !self.storage.save(token.as_str()) {
            leptos::logging::warn!("[Session] could not persist token; session is memory-only");
        }
        self.session.credential = Some(token);
    }

    pub fn logout(&mut self) {
        if !self.storage.clear() {
            leptos::logging::warn!("[Session] could not remove persisted token");
        }
        self.session.credential = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn token(&self) -> Option<&Token> {
        self.session.credential()
    }
}

// =========================================================
// Test storage
// =========================================================

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory storage. Clones share the same map, so building a second
    /// store from a clone behaves like a page reload.
    #[derive(Clone, Default)]
    pub struct MemoryTokenStore {
        pub map: Rc<RefCell<HashMap<String, String>>>,
    }

    const KEY: &str = crickboard_shared::STORAGE_TOKEN_KEY;

    impl TokenStore for MemoryTokenStore {
        fn load(&self) -> Option<String> {
            self.map.borrow().get(KEY).cloned()
        }

        fn save(&self, token: &str) -> bool {
            self.map.borrow_mut().insert(KEY.to_string(), token.to_string());
            true
        }

        fn clear(&self) -> bool {
            self.map.borrow_mut().remove(KEY);
            true
        }
    }

    #[test]
    fn test_starts_unauthenticated() {
        let store = SessionStore::initialize(MemoryTokenStore::default());
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_login_then_authenticated() {
        let mut store = SessionStore::initialize(MemoryTokenStore::default());
        store.login(Token::new("abc.def"));
        assert!(store.is_authenticated());
        assert_eq!(store.token().map(Token::as_str), Some("abc.def"));
    }

    #[test]
    fn test_logout_then_unauthenticated() {
        let mut store = SessionStore::initialize(MemoryTokenStore::default());
        store.login(Token::new("abc"));
        store.logout();
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_login_survives_reload() {
        let storage = MemoryTokenStore::default();
        let mut store = SessionStore::initialize(storage.clone());
        store.login(Token::new("persisted"));
        drop(store);

        let reloaded = SessionStore::initialize(storage);
        assert!(reloaded.is_authenticated());
        assert_eq!(reloaded.token(), Some(&Token::new("persisted")));
    }

    #[test]
    fn test_logout_survives_reload() {
        let storage = MemoryTokenStore::default();
        let mut store = SessionStore::initialize(storage.clone());
        store.login(Token::new("persisted"));
        store.logout();

        let reloaded = SessionStore::initialize(storage.clone());
        assert!(!reloaded.is_authenticated());
        assert!(storage.map.borrow().is_empty());
    }

    #[test]
    fn test_empty_persisted_value_is_no_session() {
        let storage = MemoryTokenStore::default();
        storage.save("");
        assert!(!SessionStore::initialize(storage).is_authenticated());
    }

    #[test]
    fn test_persisted_token_restored_verbatim() {
        let storage = MemoryTokenStore::default();
        let raw = "eyJhbGciOiJIUzI1NiJ9.eyJpZCI6MX0.sig";
        storage.map.borrow_mut().insert(KEY.to_string(), raw.to_string());

        let store = SessionStore::initialize(storage.clone());
        assert_eq!(store.token().map(Token::as_str), Some(raw));

        let mut store = store;
        store.login(Token::new("next"));
        assert_eq!(storage.map.borrow().get(KEY).map(String::as_str), Some("next"));
    }

    #[test]
    fn test_token_debug_is_redacted() {
        assert_eq!(format!("{:?}", Token::new("secret")), "Token(***)");
        assert_eq!(Token::new("t").bearer(), "Bearer t");
    }
}
