use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use ingredients::ProcessedIngredient;
use recipe::RecipeRecord;
use serde::{Deserialize, Serialize};

use crate::error::RecommendationError;
use crate::session::{RecommendationSession, SNAPSHOT_SCHEMA_VERSION, SessionSnapshot};

/// Persistence contract of the excluded storage collaborator: opaque string
/// values under string keys. Implementations decide where the bytes live.
pub trait KeyValueStore: Send + Sync {
    fn save(&self, key: &str, value: &str) -> anyhow::Result<()>;
    fn load(&self, key: &str) -> anyhow::Result<Option<String>>;
}

/// In-memory backend for tests and single-process hosts.
#[derive(Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }
}

/// Per-user session registry with per-key serialization.
///
/// Requests for the same session key run one at a time, so a rapid
/// double-tap on refresh cannot lose seen-id updates; requests for
/// different keys only contend on the brief registry lookup. Sessions
/// hydrate from the backend on first touch and persist a versioned JSON
/// snapshot after every access.
pub struct SessionStore<S: KeyValueStore> {
    backend: S,
    catalog: Vec<RecipeRecord>,
    sessions: Mutex<HashMap<String, Arc<Mutex<RecommendationSession>>>>,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: S, catalog: Vec<RecipeRecord>) -> Self {
        SessionStore {
            backend,
            catalog,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Run `f` against the session for `key` under its lock, persisting a
    /// snapshot afterwards.
    pub fn with_session<T>(
        &self,
        key: &str,
        f: impl FnOnce(&mut RecommendationSession) -> T,
    ) -> Result<T, RecommendationError> {
        let entry = {
            let mut sessions = self
                .sessions
                .lock()
                .map_err(|_| RecommendationError::SessionLockPoisoned(key.to_string()))?;
            match sessions.get(key) {
                Some(entry) => Arc::clone(entry),
                None => {
                    let session = self.hydrate(key)?;
                    let entry = Arc::new(Mutex::new(session));
                    sessions.insert(key.to_string(), Arc::clone(&entry));
                    entry
                }
            }
        };

        let mut session = entry
            .lock()
            .map_err(|_| RecommendationError::SessionLockPoisoned(key.to_string()))?;
        let result = f(&mut session);

        let snapshot = session.snapshot().to_json()?;
        self.backend.save(key, &snapshot)?;
        Ok(result)
    }

    fn hydrate(&self, key: &str) -> Result<RecommendationSession, RecommendationError> {
        match self.backend.load(key)? {
            Some(json) => {
                let snapshot = SessionSnapshot::from_json(&json)?;
                RecommendationSession::restore(self.catalog.clone(), snapshot)
            }
            None => Ok(RecommendationSession::new(self.catalog.clone())),
        }
    }

    /// Persist the user's processed ingredient list so it survives app
    /// restarts, under its own sub-key next to the session snapshot.
    pub fn save_ingredients(
        &self,
        key: &str,
        items: &[ProcessedIngredient],
    ) -> Result<(), RecommendationError> {
        let snapshot = IngredientListSnapshot {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            items: items.to_vec(),
        };
        let json = serde_json::to_string(&snapshot)?;
        self.backend.save(&ingredient_key(key), &json)?;
        Ok(())
    }

    /// Load a previously saved ingredient list; empty when nothing is stored.
    pub fn load_ingredients(
        &self,
        key: &str,
    ) -> Result<Vec<ProcessedIngredient>, RecommendationError> {
        match self.backend.load(&ingredient_key(key))? {
            Some(json) => {
                let snapshot: IngredientListSnapshot = serde_json::from_str(&json)?;
                if snapshot.schema_version != SNAPSHOT_SCHEMA_VERSION {
                    return Err(RecommendationError::UnsupportedSnapshotVersion(
                        snapshot.schema_version,
                    ));
                }
                Ok(snapshot.items)
            }
            None => Ok(Vec::new()),
        }
    }
}

/// Versioned envelope around the persisted ingredient list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientListSnapshot {
    pub schema_version: u32,
    pub items: Vec<ProcessedIngredient>,
}

fn ingredient_key(key: &str) -> String {
    format!("{}::ingredients", key)
}
