//! Integration tests for the full session stack: service → repository →
//! codec → store, wired the way a process entry point would wire it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use nameplate::prelude::*;

// =========================================================================
// Mock collaborators
// =========================================================================

/// Hands out ids from a fixed list, in order. Lets tests name the ids
/// they expect instead of fishing them out of responses.
struct FixedIds {
    ids: Vec<&'static str>,
    next: AtomicU64,
}

impl FixedIds {
    fn of(ids: Vec<&'static str>) -> Self {
        Self {
            ids,
            next: AtomicU64::new(0),
        }
    }
}

impl SessionIdProvider for FixedIds {
    fn fresh(&self) -> SessionId {
        let i = self.next.fetch_add(1, Ordering::SeqCst) as usize;
        SessionId::new(self.ids[i])
    }
}

/// Wraps a store and counts every call that reaches it, so tests can
/// prove an operation never touched the backend.
#[derive(Clone)]
struct CountingStore {
    inner: MemoryStore,
    accesses: Arc<AtomicU64>,
}

impl CountingStore {
    fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            accesses: Arc::new(AtomicU64::new(0)),
        }
    }

    fn accesses(&self) -> u64 {
        self.accesses.load(Ordering::SeqCst)
    }
}

impl SessionStore for CountingStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.accesses.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key).await
    }

    async fn set(
        &self,
        key: &str,
        value: &[u8],
        ttl: Duration,
    ) -> Result<(), StoreError> {
        self.accesses.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value, ttl).await
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.accesses.fetch_add(1, Ordering::SeqCst);
        self.inner.exists(key).await
    }

    async fn compare_and_swap(
        &self,
        key: &str,
        expected: &[u8],
        new: &[u8],
        ttl: Duration,
    ) -> Result<bool, StoreError> {
        self.accesses.fetch_add(1, Ordering::SeqCst);
        self.inner.compare_and_swap(key, expected, new, ttl).await
    }
}

// =========================================================================
// Helpers
// =========================================================================

fn init_tracing() {
    // Opt-in logging for debugging test failures: RUST_LOG=trace.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// A service over a fresh in-memory store, with the store handle kept
/// for direct inspection.
fn service_and_store(
    ids: Vec<&'static str>,
) -> (
    NameSessionService<MemoryStore, FixedIds, JsonCodec>,
    MemoryStore,
) {
    init_tracing();
    let store = MemoryStore::new();
    let service =
        ServiceBuilder::new(store.clone()).build_with_ids(FixedIds::of(ids));
    (service, store)
}

/// Writes a raw record straight into the store, bypassing the service —
/// the "given stored value" setup used by several scenarios.
async fn seed(store: &MemoryStore, key: &str, name: &str, logged_in: bool) {
    let value = format!(
        r#"{{"playerName":"{name}","isLoggedIn":{logged_in}}}"#
    );
    store
        .set(key, value.as_bytes(), Duration::from_secs(60))
        .await
        .unwrap();
}

// =========================================================================
// End-to-end scenarios
// =========================================================================

#[tokio::test]
async fn test_create_then_checkout_reports_logged_out() {
    // create("cat") → checkout(S) → logged_out with the stored name.
    let (service, _) = service_and_store(vec!["S"]);

    let session = service.create("cat").await.unwrap();
    assert_eq!(session.session_id, SessionId::new("S"));
    assert_eq!(session.player_name, "cat");
    assert!(!session.is_logged_in);

    let checkout = service.checkout("S").await.unwrap();
    assert_eq!(checkout.session_id, SessionId::new("S"));
    assert_eq!(checkout.player_name, "cat");
    assert_eq!(checkout.code, CheckoutCode::LoggedOut);
}

#[tokio::test]
async fn test_checkout_nonexistent_session_is_unavailable() {
    let (service, _) = service_and_store(vec![]);

    let checkout = service.checkout("nonexistent_session").await.unwrap();

    assert_eq!(checkout.session_id, SessionId::new("nonexistent_session"));
    assert_eq!(checkout.player_name, "");
    assert_eq!(checkout.code, CheckoutCode::Unavailable);
}

#[tokio::test]
async fn test_login_promotes_stored_logged_out_session() {
    // Given a stored logged-out record at S, login(S) succeeds and
    // checkout(S) then reports logged_in.
    let (service, store) = service_and_store(vec![]);
    seed(&store, "S", "cat", false).await;

    service.login("S").await.expect("login should succeed");

    let checkout = service.checkout("S").await.unwrap();
    assert_eq!(checkout.code, CheckoutCode::LoggedIn);
    assert_eq!(checkout.player_name, "cat");
}

#[tokio::test]
async fn test_login_already_logged_in_conflicts_and_preserves_value() {
    let (service, store) = service_and_store(vec![]);
    seed(&store, "S", "cat", true).await;

    let err = service.login("S").await.unwrap_err();

    assert!(matches!(err, SessionError::Conflict(_)));
    assert!(err.to_string().contains("S"), "message references the id");
    // Stored value unchanged.
    let raw = store.get("S").await.unwrap().unwrap();
    assert_eq!(raw, br#"{"playerName":"cat","isLoggedIn":true}"#);
}

#[tokio::test]
async fn test_login_missing_session_is_not_found() {
    let (service, _) = service_and_store(vec![]);

    let err = service.login("missing_session").await.unwrap_err();

    assert!(matches!(err, SessionError::NotFound(_)));
    assert!(err.to_string().contains("missing_session"));
}

#[tokio::test]
async fn test_validation_errors_never_touch_the_store() {
    // create(""), checkout("") and login("") must all short-circuit with
    // InvalidArgument before any store access.
    init_tracing();
    let store = CountingStore::new();
    let service = ServiceBuilder::new(store.clone()).build();

    assert!(matches!(
        service.create("").await,
        Err(SessionError::InvalidArgument("playerName"))
    ));
    assert!(matches!(
        service.checkout("").await,
        Err(SessionError::InvalidArgument("sessionID"))
    ));
    assert!(matches!(
        service.login("").await,
        Err(SessionError::InvalidArgument("sessionID"))
    ));

    assert_eq!(store.accesses(), 0, "no store access on validation errors");
}

// =========================================================================
// Lifecycle and TTL
// =========================================================================

#[tokio::test]
async fn test_full_lifecycle_create_checkout_login_checkout() {
    let (service, _) = service_and_store(vec!["S"]);

    // 1. Player picks a name, gets a session.
    let session = service.create("cat").await.unwrap();

    // 2. The session reads back logged out.
    let checkout = service.checkout(session.session_id.as_str()).await.unwrap();
    assert_eq!(checkout.code, CheckoutCode::LoggedOut);

    // 3. Player logs in — once.
    service.login(session.session_id.as_str()).await.unwrap();

    // 4. The flag is visible and one-way.
    let checkout = service.checkout(session.session_id.as_str()).await.unwrap();
    assert_eq!(checkout.code, CheckoutCode::LoggedIn);
    assert!(matches!(
        service.login(session.session_id.as_str()).await,
        Err(SessionError::Conflict(_))
    ));
}

#[tokio::test]
async fn test_expired_session_behaves_like_nonexistent() {
    // A zero-TTL config expires sessions the moment they're written:
    // checkout says unavailable, login says not found.
    init_tracing();
    let store = MemoryStore::new();
    let service = ServiceBuilder::new(store)
        .session_config(SessionConfig {
            session_ttl: Duration::ZERO,
        })
        .build_with_ids(FixedIds::of(vec!["S"]));

    service.create("cat").await.unwrap();

    let checkout = service.checkout("S").await.unwrap();
    assert_eq!(checkout.code, CheckoutCode::Unavailable);
    assert!(matches!(
        service.login("S").await,
        Err(SessionError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_login_refreshes_ttl_window() {
    // A successful login rewrites the record, which resets the TTL to
    // the full window — a session about to expire gets a new lease.
    init_tracing();
    let store = MemoryStore::new();
    let service = ServiceBuilder::new(store.clone())
        .session_config(SessionConfig {
            session_ttl: Duration::from_millis(400),
        })
        .build_with_ids(FixedIds::of(vec!["S"]));

    service.create("cat").await.unwrap();
    tokio::time::sleep(Duration::from_millis(250)).await;
    service.login("S").await.unwrap();
    tokio::time::sleep(Duration::from_millis(300)).await;

    // 550ms after create, but only 300ms after the login's rewrite.
    let checkout = service.checkout("S").await.unwrap();
    assert_eq!(checkout.code, CheckoutCode::LoggedIn);
}

// =========================================================================
// Concurrency
// =========================================================================

#[tokio::test]
async fn test_concurrent_logins_on_same_session_one_winner() {
    let (service, _) = service_and_store(vec!["S"]);
    service.create("cat").await.unwrap();
    let service = Arc::new(service);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move { service.login("S").await }));
    }

    let mut wins = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => wins += 1,
            Err(SessionError::Conflict(_)) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(wins, 1, "exactly one concurrent login may succeed");
}

#[tokio::test]
async fn test_concurrent_creates_never_collide() {
    init_tracing();
    let store = MemoryStore::new();
    let service = Arc::new(ServiceBuilder::new(store.clone()).build());

    let mut handles = Vec::new();
    for i in 0..16 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            service.create(&format!("player-{i}")).await
        }));
    }

    let mut ids = std::collections::HashSet::new();
    for handle in handles {
        let session = handle.await.unwrap().unwrap();
        assert!(ids.insert(session.session_id), "duplicate session id");
    }

    assert_eq!(store.len().await, 16);
}

// =========================================================================
// Stored record contract
// =========================================================================

#[tokio::test]
async fn test_store_holds_exact_wire_layout() {
    // What lands in the store is a compatibility contract with every
    // record written before this code shipped.
    let (service, store) = service_and_store(vec!["S"]);

    service.create("cat").await.unwrap();

    let raw = store.get("S").await.unwrap().unwrap();
    assert_eq!(raw, br#"{"playerName":"cat","isLoggedIn":false}"#);

    service.login("S").await.unwrap();

    let raw = store.get("S").await.unwrap().unwrap();
    assert_eq!(raw, br#"{"playerName":"cat","isLoggedIn":true}"#);
}

#[tokio::test]
async fn test_corrupt_stored_value_surfaces_as_store_error() {
    let (service, store) = service_and_store(vec![]);
    store
        .set("S", b"{broken", Duration::from_secs(60))
        .await
        .unwrap();

    let err = service.checkout("S").await.unwrap_err();

    assert!(matches!(err, SessionError::Store(StoreError::Corrupt(_))));
}
