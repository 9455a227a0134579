#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// The role the backend assigned to this account. Determines which default
/// notification template the settings document is seeded from and which
/// account-deletion endpoint is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Candidate,
    Employer,
}

impl Role {
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "candidate" => Some(Role::Candidate),
            "employer" => Some(Role::Employer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Employer => "employer",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub headline: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Auth context for the single active session. The profile is replaced when
/// the server echoes updated fields back from a settings save; `logout` is
/// invoked after a successful account deletion.
pub struct Session {
    role: Role,
    profile: Mutex<UserProfile>,
    logged_in: AtomicBool,
}

impl Session {
    pub fn new(role: Role, profile: UserProfile) -> Self {
        Self {
            role,
            profile: Mutex::new(profile),
            logged_in: AtomicBool::new(true),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn profile(&self) -> UserProfile {
        self.profile.lock().expect("profile lock poisoned").clone()
    }

    /// Applies profile fields the server echoed back after a save.
    pub fn apply_profile(&self, profile: UserProfile) {
        *self.profile.lock().expect("profile lock poisoned") = profile;
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in.load(Ordering::SeqCst)
    }

    pub fn logout(&self) {
        info!("Session ended for {} account", self.role.as_str());
        self.logged_in.store(false, Ordering::SeqCst);
    }
}
