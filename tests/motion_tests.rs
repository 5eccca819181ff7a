// Host-side tests for motion preference resolution and persistence.

use site_core::constants::MOTION_STORAGE_KEY;
use site_core::{
    resolve_preference, MemoryStorage, MotionPreference, MotionPreferenceStore, PreferenceStorage,
    StorageError,
};
use std::cell::Cell;

/// Storage whose reads and writes can be made to fail.
#[derive(Default)]
struct FlakyStorage {
    inner: MemoryStorage,
    fail_reads: bool,
    fail_writes: bool,
    writes: Cell<usize>,
}

impl PreferenceStorage for FlakyStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Read("SecurityError".into()));
        }
        self.inner.read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        if self.fail_writes {
            return Err(StorageError::Write("QuotaExceededError".into()));
        }
        self.inner.write(key, value)
    }
}

fn no_signal() -> Option<bool> {
    None
}

#[test]
fn preference_parses_only_known_literals() {
    assert_eq!("reduce".parse(), Ok(MotionPreference::Reduce));
    assert_eq!("no-preference".parse(), Ok(MotionPreference::NoPreference));
    assert!("fast".parse::<MotionPreference>().is_err());
    assert!("".parse::<MotionPreference>().is_err());
    assert_eq!(MotionPreference::Reduce.to_string(), "reduce");
}

#[test]
fn persisted_value_wins_over_platform_signal() {
    let storage = MemoryStorage::with_value(MOTION_STORAGE_KEY, "no-preference");
    let pref = resolve_preference(&storage, &|| Some(true));
    assert_eq!(pref, MotionPreference::NoPreference);
}

#[test]
fn platform_signal_used_when_nothing_persisted() {
    let store = MotionPreferenceStore::load(MemoryStorage::default(), &|| Some(true));
    assert_eq!(store.get(), MotionPreference::Reduce);

    let store = MotionPreferenceStore::load(MemoryStorage::default(), &|| Some(false));
    assert_eq!(store.get(), MotionPreference::NoPreference);
}

#[test]
fn defaults_to_no_preference_without_any_source() {
    let store = MotionPreferenceStore::load(MemoryStorage::default(), &no_signal);
    assert_eq!(store.get(), MotionPreference::NoPreference);
}

#[test]
fn garbage_persisted_value_falls_through_to_signal() {
    let storage = MemoryStorage::with_value(MOTION_STORAGE_KEY, "sometimes");
    let store = MotionPreferenceStore::load(storage, &|| Some(true));
    assert_eq!(store.get(), MotionPreference::Reduce);
}

#[test]
fn read_failure_is_treated_as_unset() {
    let storage = FlakyStorage {
        fail_reads: true,
        ..Default::default()
    };
    let store = MotionPreferenceStore::load(storage, &|| Some(true));
    assert_eq!(store.get(), MotionPreference::Reduce);

    let storage = FlakyStorage {
        fail_reads: true,
        ..Default::default()
    };
    let store = MotionPreferenceStore::load(storage, &no_signal);
    assert_eq!(store.get(), MotionPreference::NoPreference);
}

#[test]
fn toggle_persists_every_change() {
    let mut store = MotionPreferenceStore::load(MemoryStorage::default(), &no_signal);
    assert_eq!(store.toggle(), MotionPreference::Reduce);
    assert_eq!(store.storage().get(MOTION_STORAGE_KEY), Some("reduce"));
    assert_eq!(store.toggle(), MotionPreference::NoPreference);
    assert_eq!(store.storage().get(MOTION_STORAGE_KEY), Some("no-preference"));
}

#[test]
fn toggle_sequences_alternate_and_even_counts_return_home() {
    for initial_reduced in [false, true] {
        let mut store = MotionPreferenceStore::load(MemoryStorage::default(), &|| {
            Some(initial_reduced)
        });
        let initial = store.get();
        let mut last = initial;
        for n in 1..=9 {
            let next = store.toggle();
            assert_ne!(next, last, "toggle must flip the value");
            assert_eq!(next, store.get());
            let expected = if n % 2 == 0 { initial } else { initial.toggled() };
            assert_eq!(next, expected);
            last = next;
        }
    }
}

#[test]
fn write_failure_keeps_in_memory_value() {
    let storage = FlakyStorage {
        fail_writes: true,
        ..Default::default()
    };
    let mut store = MotionPreferenceStore::load(storage, &no_signal);
    assert_eq!(store.toggle(), MotionPreference::Reduce);
    assert_eq!(store.get(), MotionPreference::Reduce);
    assert_eq!(store.storage().writes.get(), 1);
    assert_eq!(store.storage().inner.get(MOTION_STORAGE_KEY), None);
}
