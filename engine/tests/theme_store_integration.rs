use claims::*;
use engine::storage::{KeyValueStore, MemoryStore, SELECTED_THEME_KEY, StorageError};
use engine::taskpool::TaskPool;
use engine::{ThemeRegistry, ThemeSnapshot, ThemeStore, TransitionTimings};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

mod helpers {
    use super::*;

    /// Records every write so tests can assert which keys were ever applied.
    #[derive(Default)]
    pub struct RecordingStore {
        pub inner: MemoryStore,
        pub writes: Mutex<Vec<String>>,
    }

    impl RecordingStore {
        pub fn writes(&self) -> Vec<String> {
            self.writes.lock().unwrap().clone()
        }
    }

    impl KeyValueStore for RecordingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.writes.lock().unwrap().push(value.to_string());
            self.inner.set(key, value)
        }
    }

    /// Reads succeed but every write fails.
    pub struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }
    }

    pub fn create_store(storage: Arc<dyn KeyValueStore>) -> ThemeStore {
        ThemeStore::new(
            ThemeRegistry::builtin().unwrap(),
            storage,
            TransitionTimings::default(),
            TaskPool::new(4),
        )
    }

    pub async fn advance_ms(ms: u64) {
        sleep(Duration::from_millis(ms)).await;
    }
}

use helpers::*;

#[tokio::test(start_paused = true)]
async fn test_switch_runs_both_phases() {
    let storage = Arc::new(RecordingStore::default());
    let store = create_store(storage.clone());

    store.switch_theme("theme2");
    // Raised immediately, key not yet applied
    assert!(store.is_transitioning());
    assert_eq!(store.active_key(), "theme1");

    advance_ms(100).await;
    assert!(store.is_transitioning());
    assert_eq!(store.active_theme().name, "Minimalist");

    advance_ms(100).await; // t = 200ms
    assert!(store.is_transitioning());
    assert_eq!(store.active_theme().name, "Professional Dark");
    assert_eq!(storage.writes(), vec!["theme2".to_string()]);

    advance_ms(200).await; // t = 400ms
    assert!(store.is_transitioning());

    advance_ms(100).await; // t = 500ms
    assert!(!store.is_transitioning());
    assert_eq!(store.active_key(), "theme2");
}

#[tokio::test(start_paused = true)]
async fn test_every_key_applies_after_both_phases() {
    let registry = ThemeRegistry::builtin().unwrap();
    let keys: Vec<String> = registry.keys().map(str::to_string).collect();

    for key in keys {
        let store = create_store(Arc::new(MemoryStore::new()));
        store.switch_theme(&key);
        advance_ms(500).await;

        assert_eq!(store.active_theme().name, registry.get(&key).unwrap().name);
        assert!(!store.is_transitioning());
    }
}

#[tokio::test(start_paused = true)]
async fn test_invalid_key_is_a_noop() {
    let storage = Arc::new(RecordingStore::default());
    let store = create_store(storage.clone());
    let before = store.snapshot();

    store.switch_theme("does-not-exist");
    advance_ms(500).await;

    assert_eq!(store.snapshot(), before);
    assert!(storage.writes().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_switch_to_current_key_is_a_noop() {
    let storage = Arc::new(RecordingStore::default());
    let store = create_store(storage.clone());
    let rx = store.subscribe();

    store.switch_theme("theme1");
    advance_ms(500).await;

    assert!(!rx.has_changed().unwrap());
    assert!(!store.is_transitioning());
    assert!(storage.writes().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_rapid_double_switch_applies_only_newest_key() {
    // Without per-request cancellation the first request's timer would apply
    // theme2 at 150ms; the newer request must win outright.
    let storage = Arc::new(RecordingStore::default());
    let store = create_store(storage.clone());

    store.switch_theme("theme2");
    advance_ms(100).await;
    store.switch_theme("theme3");

    advance_ms(100).await; // t = 200ms, first request would have applied
    assert_eq!(store.active_key(), "theme1");
    assert!(store.is_transitioning());

    advance_ms(100).await; // t = 300ms, second applied at 250ms
    assert_eq!(store.active_key(), "theme3");
    assert!(store.is_transitioning());

    advance_ms(300).await; // t = 600ms, second settled at 550ms
    assert!(!store.is_transitioning());
    assert_eq!(storage.writes(), vec!["theme3".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_revert_during_pending_switch_keeps_current_key() {
    let storage = Arc::new(RecordingStore::default());
    let store = create_store(storage.clone());

    store.switch_theme("theme2");
    advance_ms(50).await;
    store.switch_theme("theme1");
    assert!(!store.is_transitioning());

    advance_ms(1000).await;
    assert_eq!(store.active_key(), "theme1");
    assert!(!store.is_transitioning());
    assert!(storage.writes().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_reselecting_applied_key_ends_transition() {
    let storage = Arc::new(RecordingStore::default());
    let store = create_store(storage.clone());

    store.switch_theme("theme3");
    advance_ms(200).await; // applied, settling until 450ms
    store.switch_theme("theme3");

    assert!(!store.is_transitioning());
    advance_ms(500).await;
    assert_eq!(store.active_key(), "theme3");
    assert!(!store.is_transitioning());
    assert_eq!(storage.writes(), vec!["theme3".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_switch_after_apply_keeps_transition_open() {
    let store = create_store(Arc::new(MemoryStore::new()));

    store.switch_theme("theme2");
    advance_ms(200).await; // theme2 applied, settling until 450ms
    store.switch_theme("theme3");

    advance_ms(300).await; // t = 500ms, first settle was cancelled
    assert!(store.is_transitioning());
    assert_eq!(store.active_key(), "theme3");

    advance_ms(200).await; // t = 700ms, second settles at 650ms
    assert!(!store.is_transitioning());
}

#[tokio::test(start_paused = true)]
async fn test_subscribers_observe_each_phase() {
    let store = create_store(Arc::new(MemoryStore::new()));
    let mut rx = store.subscribe();

    store.switch_theme("theme3");
    assert_ok!(rx.changed().await);
    assert_eq!(
        *rx.borrow_and_update(),
        ThemeSnapshot {
            active_key: "theme1".to_string(),
            is_transitioning: true,
        }
    );

    assert_ok!(rx.changed().await);
    assert_eq!(rx.borrow_and_update().active_key, "theme3");

    assert_ok!(rx.changed().await);
    assert!(!rx.borrow_and_update().is_transitioning);
}

#[tokio::test(start_paused = true)]
async fn test_selection_survives_restart() {
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let store = create_store(storage.clone());

    store.switch_theme("theme2");
    advance_ms(500).await;
    assert_some_eq!(storage.get(SELECTED_THEME_KEY).unwrap(), "theme2");

    let restarted = create_store(storage);
    assert_eq!(restarted.active_key(), "theme2");
}

#[tokio::test(start_paused = true)]
async fn test_write_failure_disables_persistence_but_switch_completes() {
    let store = create_store(Arc::new(ReadOnlyStore));
    assert!(store.persistence_enabled());

    store.switch_theme("theme3");
    advance_ms(500).await;

    assert_eq!(store.active_key(), "theme3");
    assert!(!store.is_transitioning());
    assert!(!store.persistence_enabled());
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_pool_stops_pending_switch() {
    let taskpool = TaskPool::new(2);
    let store = ThemeStore::new(
        ThemeRegistry::builtin().unwrap(),
        Arc::new(MemoryStore::new()),
        TransitionTimings::from_millis(10, 20),
        taskpool.clone(),
    );

    store.switch_theme("theme2");
    taskpool.cancel_all();
    advance_ms(100).await;

    assert_eq!(store.active_key(), "theme1");
}
