//! Motion preference resolution and persistence.
//!
//! The preference is read once at startup: a persisted value wins, then the
//! platform's reduced-motion signal, then `NoPreference`. After that the
//! in-memory value is authoritative; storage failures are logged and dropped.

use crate::constants::MOTION_STORAGE_KEY;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MotionPreference {
    #[default]
    NoPreference,
    Reduce,
}

impl MotionPreference {
    pub fn as_str(self) -> &'static str {
        match self {
            MotionPreference::NoPreference => "no-preference",
            MotionPreference::Reduce => "reduce",
        }
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            MotionPreference::NoPreference => MotionPreference::Reduce,
            MotionPreference::Reduce => MotionPreference::NoPreference,
        }
    }

    #[inline]
    pub fn is_reduced(self) -> bool {
        self == MotionPreference::Reduce
    }
}

impl fmt::Display for MotionPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown motion preference {0:?}")]
pub struct ParsePreferenceError(pub String);

impl FromStr for MotionPreference {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "no-preference" => Ok(MotionPreference::NoPreference),
            "reduce" => Ok(MotionPreference::Reduce),
            other => Err(ParsePreferenceError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Durable key/value storage for the persisted preference.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Platform-level reduced-motion query. `None` means the signal could not be
/// obtained and is treated like "not reduced".
pub trait ReducedMotionSignal {
    fn prefers_reduced_motion(&self) -> Option<bool>;
}

impl<F> ReducedMotionSignal for F
where
    F: Fn() -> Option<bool>,
{
    fn prefers_reduced_motion(&self) -> Option<bool> {
        self()
    }
}

/// Process-local storage. Used when the browser denies access to
/// `localStorage`, and by host tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Resolve the startup preference from storage, then the platform signal.
pub fn resolve_preference<S, P>(storage: &S, signal: &P) -> MotionPreference
where
    S: PreferenceStorage + ?Sized,
    P: ReducedMotionSignal + ?Sized,
{
    match storage.read(MOTION_STORAGE_KEY) {
        Ok(Some(raw)) => match raw.parse::<MotionPreference>() {
            Ok(pref) => return pref,
            Err(e) => log::warn!("[motion] ignoring persisted value: {}", e),
        },
        Ok(None) => {}
        Err(e) => log::warn!("[storage] {}", e),
    }
    match signal.prefers_reduced_motion() {
        Some(true) => MotionPreference::Reduce,
        Some(false) => MotionPreference::NoPreference,
        None => {
            log::debug!("[motion] reduced-motion signal unavailable");
            MotionPreference::NoPreference
        }
    }
}

/// Owns the current preference and writes every change through to storage.
pub struct MotionPreferenceStore<S: PreferenceStorage> {
    storage: S,
    current: MotionPreference,
}

impl<S: PreferenceStorage> MotionPreferenceStore<S> {
    pub fn load<P: ReducedMotionSignal + ?Sized>(storage: S, signal: &P) -> Self {
        let current = resolve_preference(&storage, signal);
        log::info!("[motion] initial preference: {}", current);
        Self { storage, current }
    }

    #[inline]
    pub fn get(&self) -> MotionPreference {
        self.current
    }

    /// Flip the preference and persist it. A failed write leaves the new value
    /// in effect for the rest of the session.
    pub fn toggle(&mut self) -> MotionPreference {
        self.current = self.current.toggled();
        if let Err(e) = self.storage.write(MOTION_STORAGE_KEY, self.current.as_str()) {
            log::warn!("[storage] {}", e);
        }
        log::info!("[motion] preference toggled to {}", self.current);
        self.current
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
