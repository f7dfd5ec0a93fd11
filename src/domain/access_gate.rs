//! Private preview gate.
//!
//! The whole site renders only after a visitor has entered the shared
//! password once; the unlock is remembered in client storage. The password
//! ships inside the client bundle, so this keeps unfinished content away from
//! casual visitors and nothing more. It is not authentication.

use std::time::Duration;

use tracing::{info, warn};

use crate::util::persistence::ClientStorage;

pub const SITE_PASSWORD: &str = "japanimport";
pub const STORAGE_KEY: &str = "japworld_unlocked";
pub const UNLOCKED_MARKER: &str = "true";

/// How long the rejected-password shake stays on screen.
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateStatus {
    /// Storage has not been read yet. Render nothing.
    #[default]
    Unknown,
    Locked,
    Unlocked,
}

/// Identifies one shake so a late timer cannot cut a newer shake short.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShakeTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Unlocked,
    Rejected(ShakeTicket),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccessGate {
    status: GateStatus,
    candidate: String,
    error: bool,
    shaking: bool,
    shake_generation: u64,
}

impl AccessGate {
    pub fn status(&self) -> GateStatus {
        self.status
    }

    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    /// True once the visitor may see gated content.
    pub fn may_render_content(&self) -> bool {
        self.status == GateStatus::Unlocked
    }

    /// Reads the persisted flag. Only the first call consults storage.
    pub fn resolve(&mut self, storage: &dyn ClientStorage) -> GateStatus {
        if self.status != GateStatus::Unknown {
            return self.status;
        }

        let stored = storage.get_item(STORAGE_KEY);
        self.status = if stored.as_deref() == Some(UNLOCKED_MARKER) {
            GateStatus::Unlocked
        } else {
            GateStatus::Locked
        };
        info!(status = ?self.status, "access gate resolved");
        self.status
    }

    /// Updates the typed password. Any edit clears a previous error.
    pub fn set_candidate(&mut self, value: impl Into<String>) {
        self.candidate = value.into();
        self.error = false;
    }

    /// Checks the typed password against the site password.
    ///
    /// A match unlocks immediately and persists the flag; a failed write is
    /// logged and the session stays unlocked anyway. A mismatch clears the
    /// input, raises the error and starts a shake that the caller ends with
    /// [`AccessGate::finish_shake`] after [`SHAKE_DURATION`].
    pub fn submit(&mut self, storage: &mut dyn ClientStorage) -> SubmitOutcome {
        if self.candidate == SITE_PASSWORD {
            if let Err(err) = storage.set_item(STORAGE_KEY, UNLOCKED_MARKER) {
                warn!("failed to persist unlock flag: {err}");
            }
            self.status = GateStatus::Unlocked;
            self.error = false;
            self.shaking = false;
            info!("access gate unlocked");
            return SubmitOutcome::Unlocked;
        }

        self.status = GateStatus::Locked;
        self.error = true;
        self.candidate.clear();
        self.shaking = true;
        self.shake_generation += 1;
        info!("access gate rejected a password attempt");
        SubmitOutcome::Rejected(ShakeTicket(self.shake_generation))
    }

    pub fn finish_shake(&mut self, ticket: ShakeTicket) {
        if ticket.0 == self.shake_generation {
            self.shaking = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::util::persistence::{MemoryStorage, PersistSaveError};

    struct ReadOnlyStorage;

    impl ClientStorage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> Option<String> {
            None
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), PersistSaveError> {
            Err(PersistSaveError::StorageUnavailable)
        }
    }

    fn resolved(storage: &MemoryStorage) -> AccessGate {
        let mut gate = AccessGate::default();
        gate.resolve(storage);
        gate
    }

    #[test]
    fn starts_unknown_and_renders_nothing() {
        let gate = AccessGate::default();

        assert_eq!(gate.status(), GateStatus::Unknown);
        assert!(!gate.may_render_content());
    }

    #[test]
    fn empty_storage_resolves_locked() {
        let gate = resolved(&MemoryStorage::default());

        assert_eq!(gate.status(), GateStatus::Locked);
    }

    #[test]
    fn stored_marker_resolves_unlocked() {
        let mut storage = MemoryStorage::default();
        storage.set_item(STORAGE_KEY, "true").unwrap();

        let gate = resolved(&storage);

        assert_eq!(gate.status(), GateStatus::Unlocked);
        assert!(gate.may_render_content());
    }

    #[test]
    fn other_stored_values_stay_locked() {
        for value in ["false", "TRUE", "1", ""] {
            let mut storage = MemoryStorage::default();
            storage.set_item(STORAGE_KEY, value).unwrap();

            assert_eq!(resolved(&storage).status(), GateStatus::Locked, "{value:?}");
        }
    }

    #[test]
    fn correct_password_unlocks_and_persists() {
        let mut storage = MemoryStorage::default();
        let mut gate = resolved(&storage);

        gate.set_candidate(SITE_PASSWORD);
        let outcome = gate.submit(&mut storage);

        assert_eq!(outcome, SubmitOutcome::Unlocked);
        assert_eq!(gate.status(), GateStatus::Unlocked);
        assert_eq!(storage.get_item(STORAGE_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn wrong_password_sets_error_and_clears_input() {
        let mut storage = MemoryStorage::default();
        let mut gate = resolved(&storage);

        gate.set_candidate("japan");
        let outcome = gate.submit(&mut storage);

        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
        assert_eq!(gate.status(), GateStatus::Locked);
        assert!(gate.has_error());
        assert!(gate.is_shaking());
        assert_eq!(gate.candidate(), "");
        assert_eq!(storage.get_item(STORAGE_KEY), None);
    }

    #[test]
    fn comparison_is_exact() {
        let mut storage = MemoryStorage::default();
        let mut gate = resolved(&storage);

        for attempt in ["JapanImport", " japanimport", "japanimport "] {
            gate.set_candidate(attempt);
            assert!(matches!(gate.submit(&mut storage), SubmitOutcome::Rejected(_)));
        }
        assert_eq!(gate.status(), GateStatus::Locked);
    }

    #[test]
    fn typing_clears_the_error() {
        let mut storage = MemoryStorage::default();
        let mut gate = resolved(&storage);
        gate.set_candidate("nope");
        gate.submit(&mut storage);

        gate.set_candidate("j");

        assert!(!gate.has_error());
        assert_eq!(gate.candidate(), "j");
    }

    #[test]
    fn shake_ends_only_for_the_latest_ticket() {
        let mut storage = MemoryStorage::default();
        let mut gate = resolved(&storage);

        let SubmitOutcome::Rejected(first) = gate.submit(&mut storage) else {
            panic!("empty password should be rejected");
        };
        let SubmitOutcome::Rejected(second) = gate.submit(&mut storage) else {
            panic!("empty password should be rejected");
        };

        gate.finish_shake(first);
        assert!(gate.is_shaking());

        gate.finish_shake(second);
        assert!(!gate.is_shaking());
        assert!(gate.has_error());
    }

    #[test]
    fn reload_after_unlock_skips_the_prompt() {
        let mut storage = MemoryStorage::default();
        let mut first_visit = resolved(&storage);
        first_visit.set_candidate(SITE_PASSWORD);
        first_visit.submit(&mut storage);

        let second_visit = resolved(&storage);

        assert_eq!(second_visit.status(), GateStatus::Unlocked);
    }

    #[test]
    fn storage_is_read_only_once() {
        let mut storage = MemoryStorage::default();
        let mut gate = resolved(&storage);
        storage.set_item(STORAGE_KEY, "true").unwrap();

        assert_eq!(gate.resolve(&storage), GateStatus::Locked);
    }

    #[test]
    fn failed_write_still_unlocks_the_session() {
        let mut storage = ReadOnlyStorage;
        let mut gate = AccessGate::default();
        gate.resolve(&storage);

        gate.set_candidate(SITE_PASSWORD);

        assert_eq!(gate.submit(&mut storage), SubmitOutcome::Unlocked);
        assert!(gate.may_render_content());
    }
}
