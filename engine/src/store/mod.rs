//! Active theme state and the two-phase switch transition.
//!
//! [`ThemeStore`] is a cheap cloneable handle. It is created once at startup and
//! handed to every consumer; there is no global instance. State changes are
//! published on a [`watch`] channel so views can redraw when the active key or
//! the transitioning flag changes.
//!
//! A switch runs in two phases on the task pool:
//!
//! 1. `is_transitioning` is raised immediately.
//! 2. After `apply_delay` the active key is swapped and persisted.
//! 3. After a further `settle_delay` the flag is cleared.
//!
//! Each switch owns a [`CancellationToken`]. Starting a new switch cancels the
//! previous one, so a superseded request can never apply its key late.

use crate::storage::{KeyValueStore, SELECTED_THEME_KEY};
use crate::taskpool::TaskPool;
use crate::theme::{Theme, ThemeRegistry};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

pub const DEFAULT_APPLY_DELAY: Duration = Duration::from_millis(150);
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Delays of the switch phases. `settle_delay` is measured from the apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTimings {
    pub apply_delay: Duration,
    pub settle_delay: Duration,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            apply_delay: DEFAULT_APPLY_DELAY,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

impl TransitionTimings {
    pub fn from_millis(apply_ms: u64, settle_ms: u64) -> Self {
        Self {
            apply_delay: Duration::from_millis(apply_ms),
            settle_delay: Duration::from_millis(settle_ms),
        }
    }
}

/// Observable store state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub active_key: String,
    pub is_transitioning: bool,
}

struct Inner {
    registry: ThemeRegistry,
    storage: Arc<dyn KeyValueStore>,
    timings: TransitionTimings,
    taskpool: TaskPool,
    state: watch::Sender<ThemeSnapshot>,
    // Token of the switch currently in flight. Held while mutating `state` from
    // a phase so cancellation and apply cannot interleave.
    in_flight: Mutex<Option<CancellationToken>>,
    persistence_enabled: AtomicBool,
}

#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<Inner>,
}

impl ThemeStore {
    /// Build the store and resolve the initial key from `storage`.
    ///
    /// A persisted key is used only if the registry knows it. A storage read
    /// failure falls back to the default theme and disables persistence for the
    /// lifetime of this store.
    pub fn new(
        registry: ThemeRegistry,
        storage: Arc<dyn KeyValueStore>,
        timings: TransitionTimings,
        taskpool: TaskPool,
    ) -> Self {
        let mut persistence_enabled = true;

        let active_key = match storage.get(SELECTED_THEME_KEY) {
            Ok(Some(key)) if registry.contains(&key) => {
                log::info!("Restored persisted theme '{key}'");
                key
            }
            Ok(Some(key)) => {
                log::debug!("Persisted theme '{key}' is not in the registry, using default");
                registry.default_key().to_string()
            }
            Ok(None) => registry.default_key().to_string(),
            Err(e) => {
                log::warn!("Theme persistence unavailable, continuing without it: {e}");
                persistence_enabled = false;
                registry.default_key().to_string()
            }
        };

        let (state, _) = watch::channel(ThemeSnapshot {
            active_key,
            is_transitioning: false,
        });

        Self {
            inner: Arc::new(Inner {
                registry,
                storage,
                timings,
                taskpool,
                state,
                in_flight: Mutex::new(None),
                persistence_enabled: AtomicBool::new(persistence_enabled),
            }),
        }
    }

    /// The active theme. Falls back to the registry default if the active key
    /// does not resolve.
    pub fn active_theme(&self) -> Arc<Theme> {
        let key = self.active_key();
        self.inner
            .registry
            .get(&key)
            .unwrap_or_else(|| self.inner.registry.default_theme())
    }

    pub fn active_key(&self) -> String {
        self.inner.state.borrow().active_key.clone()
    }

    pub fn is_transitioning(&self) -> bool {
        self.inner.state.borrow().is_transitioning
    }

    pub fn snapshot(&self) -> ThemeSnapshot {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemeSnapshot> {
        self.inner.state.subscribe()
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.inner.registry
    }

    /// `(key, display name)` pairs in registry order.
    pub fn available_themes(&self) -> Vec<(String, String)> {
        self.inner
            .registry
            .iter()
            .map(|(key, theme)| (key.to_string(), theme.name.clone()))
            .collect()
    }

    pub fn persistence_enabled(&self) -> bool {
        self.inner.persistence_enabled.load(Ordering::Acquire)
    }

    pub fn timings(&self) -> TransitionTimings {
        self.inner.timings
    }

    /// Request a switch to `key`.
    ///
    /// Unknown keys are ignored without touching any state. The currently
    /// active key cancels an in-flight switch and ends its transition, and is a
    /// no-op when nothing is pending. Otherwise any in-flight switch is
    /// cancelled and a new transition starts.
    pub fn switch_theme(&self, key: &str) {
        if !self.inner.registry.contains(key) {
            log::debug!("Ignoring switch to unknown theme '{key}'");
            return;
        }

        let Ok(mut in_flight) = self.inner.in_flight.lock() else {
            log::error!("Theme store lock poisoned, ignoring switch to '{key}'");
            return;
        };

        if self.inner.state.borrow().active_key == key {
            // Reverting to the active theme still supersedes a pending switch
            if let Some(previous) = in_flight.take() {
                log::debug!("Theme '{key}' is already active, cancelling pending switch");
                previous.cancel();
                self.inner
                    .state
                    .send_modify(|state| state.is_transitioning = false);
            } else {
                log::debug!("Theme '{key}' is already active");
            }
            return;
        }

        let token = CancellationToken::new();
        if let Some(previous) = in_flight.replace(token.clone()) {
            log::debug!("Superseding in-flight theme switch");
            previous.cancel();
        }

        self.inner.state.send_modify(|state| state.is_transitioning = true);
        drop(in_flight);

        log::info!("Switching theme to '{key}'");

        let inner = Arc::clone(&self.inner);
        let key = key.to_string();
        let phase_token = token.clone();
        self.inner.taskpool.execute_with_token(
            async move {
                tokio::time::sleep(inner.timings.apply_delay).await;
                if !inner.apply(&key, &phase_token) {
                    return;
                }
                tokio::time::sleep(inner.timings.settle_delay).await;
                inner.settle(&phase_token);
            },
            token,
        );
    }

    /// Cancel any in-flight switch. The active key stays as it currently is
    /// and the transition ends.
    pub fn cancel_pending(&self) {
        let Ok(mut in_flight) = self.inner.in_flight.lock() else {
            return;
        };
        if let Some(token) = in_flight.take() {
            token.cancel();
            self.inner
                .state
                .send_modify(|state| state.is_transitioning = false);
        }
    }
}

impl Inner {
    /// Swap the active key. Returns false if the switch was superseded.
    fn apply(&self, key: &str, token: &CancellationToken) -> bool {
        {
            let Ok(_in_flight) = self.in_flight.lock() else {
                return false;
            };
            if token.is_cancelled() {
                return false;
            }
            self.state
                .send_modify(|state| state.active_key = key.to_string());
        }

        log::info!("Theme '{key}' applied");
        self.persist(key);
        true
    }

    fn settle(&self, token: &CancellationToken) {
        let Ok(mut in_flight) = self.in_flight.lock() else {
            return;
        };
        if token.is_cancelled() {
            return;
        }
        self.state
            .send_modify(|state| state.is_transitioning = false);
        in_flight.take();
    }

    fn persist(&self, key: &str) {
        if !self.persistence_enabled.load(Ordering::Acquire) {
            return;
        }

        if let Err(e) = self.storage.set(SELECTED_THEME_KEY, key) {
            log::warn!("Failed to persist theme '{key}', disabling persistence: {e}");
            self.persistence_enabled.store(false, Ordering::Release);
        }
    }
}
