//! Bounded in-memory store for interview and quiz sessions.
//!
//! Sessions are ephemeral: the least recently touched one is evicted once the store
//! is full, and nothing survives a restart.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::errors::AppError;

pub struct SessionStore<T> {
    kind: &'static str,
    sessions: Mutex<LruCache<Uuid, T>>,
}

impl<T> SessionStore<T> {
    /// `kind` names the session type in not-found messages ("Interview", "Quiz").
    pub fn new(kind: &'static str, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            kind,
            sessions: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn insert(&self, id: Uuid, session: T) {
        if let Some((evicted, _)) = self.sessions.lock().push(id, session) {
            if evicted != id {
                tracing::debug!("{} session {evicted} evicted", self.kind);
            }
        }
    }

    /// Runs `f` against the session while holding the lock. `f` must not block.
    pub fn with<R>(&self, id: Uuid, f: impl FnOnce(&mut T) -> R) -> Result<R, AppError> {
        let mut sessions = self.sessions.lock();
        let session = sessions.get_mut(&id).ok_or_else(|| self.not_found(id))?;
        Ok(f(session))
    }

    pub fn remove(&self, id: Uuid) -> Result<T, AppError> {
        self.sessions.lock().pop(&id).ok_or_else(|| self.not_found(id))
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    fn not_found(&self, id: Uuid) -> AppError {
        AppError::NotFound(format!("{} session {id} not found", self.kind))
    }
}
