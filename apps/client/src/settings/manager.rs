//! Settings view-state manager — owns the one `SettingsDocument` for the
//! active session and mediates every read and write to it. All remote
//! failures are converted to notifications here; nothing propagates further.

use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use crate::actions::{self, ActionState};
use crate::api::JobBoardApi;
use crate::errors::ClientError;
use crate::notify::Notifier;
use crate::session::{Role, Session};
use crate::settings::fields::{apply_field_change, Category, FieldError, FieldValue};
use crate::settings::merge::merge_over_defaults;
use crate::settings::models::{defaults_for, SettingsDocument};
use crate::settings::password::ChangedFlag;
use crate::settings::validation::{
    validate_deletion, validate_password_change, AccountDeletionRequest, PasswordChangeRequest,
};

pub struct SettingsManager {
    api: Arc<dyn JobBoardApi>,
    notifier: Notifier,
    session: Arc<Session>,
    doc: Mutex<SettingsDocument>,
    save_state: Mutex<ActionState>,
    password_state: Mutex<ActionState>,
    delete_state: Mutex<ActionState>,
    password_changed: ChangedFlag,
}

impl SettingsManager {
    /// Creates the manager seeded with the role-specific defaults. The
    /// document shows defaults until `load` completes.
    pub fn new(api: Arc<dyn JobBoardApi>, notifier: Notifier, session: Arc<Session>) -> Self {
        let doc = defaults_for(session.role());
        Self {
            api,
            notifier,
            session,
            doc: Mutex::new(doc),
            save_state: Mutex::new(ActionState::Idle),
            password_state: Mutex::new(ActionState::Idle),
            delete_state: Mutex::new(ActionState::Idle),
            password_changed: ChangedFlag::new(),
        }
    }

    /// A snapshot of the current document.
    pub fn document(&self) -> SettingsDocument {
        self.doc.lock().expect("settings doc poisoned").clone()
    }

    /// Fetches saved settings and merges them key-level over the role
    /// defaults. Load failure is never fatal: the defaults stay in place and
    /// the user gets a warning.
    pub async fn load(&self) {
        match self.api.get_settings().await {
            Ok(partial) => {
                let merged = merge_over_defaults(&defaults_for(self.session.role()), &partial);
                *self.doc.lock().expect("settings doc poisoned") = merged;
                debug!("Settings loaded and merged over defaults");
            }
            Err(e) => {
                warn!("Settings load failed, keeping defaults: {e}");
                self.notifier
                    .warning("Could not load your saved settings. Showing defaults.");
            }
        }
    }

    /// Applies one field change. Pure and synchronous; out-of-contract
    /// inputs are rejected and the document is left untouched.
    pub fn set_field(
        &self,
        category: Category,
        key: &str,
        value: FieldValue,
    ) -> Result<(), FieldError> {
        let mut doc = self.doc.lock().expect("settings doc poisoned");
        let next = apply_field_change(&doc, category, key, value)?;
        *doc = next;
        Ok(())
    }

    /// Persists the full document. A second trigger while a save is pending
    /// is ignored — exactly one network call per user action. Returns true
    /// only if the save completed successfully.
    pub async fn save(&self) -> bool {
        if !actions::try_begin(&self.save_state) {
            debug!("Save already in flight; ignoring");
            return false;
        }

        let doc = self.document();
        match self.api.update_settings(&doc).await {
            Ok(user) => {
                if let Some(profile) = user {
                    self.session.apply_profile(profile);
                }
                actions::finish(&self.save_state, ActionState::Succeeded);
                self.notifier.success("Settings saved");
                true
            }
            Err(e) => {
                let (kind, message) = e.user_notice();
                actions::finish(&self.save_state, ActionState::Failed(message.clone()));
                self.notifier.notify(kind, message);
                false
            }
        }
    }

    /// Replaces the document with the role defaults. Local-only until the
    /// next save; does nothing without explicit confirmation.
    pub fn reset_to_defaults(&self, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        *self.doc.lock().expect("settings doc poisoned") = defaults_for(self.session.role());
        self.notifier.info("Settings reset to defaults");
        true
    }

    /// Changes the account password. Validation failures abort before any
    /// network call; a server rejection surfaces its message verbatim; on
    /// success a transient changed indicator is set for five seconds.
    pub async fn change_password(&self, request: &PasswordChangeRequest) -> bool {
        if let Err(e) = validate_password_change(request) {
            let (kind, message) = e.user_notice();
            self.notifier.notify(kind, message);
            return false;
        }

        if !actions::try_begin(&self.password_state) {
            debug!("Password change already in flight; ignoring");
            return false;
        }

        match self
            .api
            .change_password(&request.current_password, &request.new_password)
            .await
        {
            Ok(()) => {
                actions::finish(&self.password_state, ActionState::Succeeded);
                self.password_changed.mark_changed();
                self.notifier.success("Password updated");
                true
            }
            Err(e) => {
                let (kind, message) = e.user_notice();
                actions::finish(&self.password_state, ActionState::Failed(message.clone()));
                self.notifier.notify(kind, message);
                false
            }
        }
    }

    /// Deletes the account via the role-specific endpoint. The local gate
    /// requires the exact confirmation phrase and a password. On success the
    /// session is ended; on failure the error is returned so the deletion
    /// modal can stay open for retry.
    pub async fn delete_account(
        &self,
        request: &AccountDeletionRequest,
    ) -> Result<(), ClientError> {
        validate_deletion(request)?;

        if !actions::try_begin(&self.delete_state) {
            debug!("Account deletion already in flight; ignoring");
            return Err(ClientError::Validation(
                "Deletion already in progress".to_string(),
            ));
        }

        let result = match self.session.role() {
            Role::Candidate => self.api.delete_candidate_account(&request.password).await,
            Role::Employer => self.api.delete_employer_account(&request.password).await,
        };

        match result {
            Ok(()) => {
                info!("Account deleted; ending session");
                actions::finish(&self.delete_state, ActionState::Succeeded);
                self.session.logout();
                Ok(())
            }
            Err(e) => {
                let (kind, message) = e.user_notice();
                actions::finish(&self.delete_state, ActionState::Failed(message.clone()));
                self.notifier.notify(kind, message);
                Err(e)
            }
        }
    }

    pub fn password_changed(&self) -> bool {
        self.password_changed.is_changed()
    }

    pub fn save_state(&self) -> ActionState {
        actions::current(&self.save_state)
    }

    pub fn password_state(&self) -> ActionState {
        actions::current(&self.password_state)
    }

    pub fn delete_state(&self) -> ActionState {
        actions::current(&self.delete_state)
    }
}
