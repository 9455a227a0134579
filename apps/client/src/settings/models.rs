#![allow(dead_code)]

//! Settings document — the five fixed categories and their role-specific
//! defaults. Enumerated fields are Rust enums, so an out-of-range value can
//! never be written; the notification key set is seeded from the role
//! template and never grows or shrinks afterward.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::session::Role;

/// The only timezone the backend currently accepts.
pub const FIXED_TIMEZONE: &str = "America/Regina";
/// The only currency the backend currently accepts.
pub const FIXED_CURRENCY: &str = "CAD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileVisibility {
    Public,
    Connections,
    Private,
}

impl ProfileVisibility {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "public" => Some(Self::Public),
            "connections" => Some(Self::Connections),
            "private" => Some(Self::Private),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

impl FontSize {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Fr,
    Es,
    De,
    Pt,
    Zh,
}

impl Language {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            "es" => Some(Self::Es),
            "de" => Some(Self::De),
            "pt" => Some(Self::Pt),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }
}

/// Canadian provinces and territories, two-letter postal codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Province {
    Ab,
    Bc,
    Mb,
    Nb,
    Nl,
    Ns,
    Nt,
    Nu,
    On,
    Pe,
    Qc,
    Sk,
    Yt,
}

impl Province {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "AB" => Some(Self::Ab),
            "BC" => Some(Self::Bc),
            "MB" => Some(Self::Mb),
            "NB" => Some(Self::Nb),
            "NL" => Some(Self::Nl),
            "NS" => Some(Self::Ns),
            "NT" => Some(Self::Nt),
            "NU" => Some(Self::Nu),
            "ON" => Some(Self::On),
            "PE" => Some(Self::Pe),
            "QC" => Some(Self::Qc),
            "SK" => Some(Self::Sk),
            "YT" => Some(Self::Yt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailFrequency {
    Immediate,
    Daily,
    Weekly,
    Never,
}

impl EmailFrequency {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "immediate" => Some(Self::Immediate),
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub profile_visibility: ProfileVisibility,
    pub show_email: bool,
    pub show_phone: bool,
    pub searchable: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            profile_visibility: ProfileVisibility::Public,
            show_email: false,
            show_phone: false,
            searchable: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppearanceSettings {
    pub theme: Theme,
    pub font_size: FontSize,
    pub reduce_motion: bool,
    pub high_contrast: bool,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            font_size: FontSize::Medium,
            reduce_motion: false,
            high_contrast: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalSettings {
    pub language: Language,
    pub timezone: String,
    pub currency: String,
    pub province: Province,
}

impl Default for RegionalSettings {
    fn default() -> Self {
        Self {
            language: Language::En,
            timezone: FIXED_TIMEZONE.to_string(),
            currency: FIXED_CURRENCY.to_string(),
            province: Province::Sk,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSettings {
    pub two_factor: bool,
    pub login_alerts: bool,
    pub email_frequency: EmailFrequency,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            two_factor: false,
            login_alerts: true,
            email_frequency: EmailFrequency::Daily,
        }
    }
}

/// The complete settings document held by one UI session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsDocument {
    pub notifications: BTreeMap<String, bool>,
    pub privacy: PrivacySettings,
    pub appearance: AppearanceSettings,
    pub regional: RegionalSettings,
    pub account: AccountSettings,
}

/// Notification toggles shown to candidates.
pub const CANDIDATE_NOTIFICATION_KEYS: &[(&str, bool)] = &[
    ("application_updates", true),
    ("job_alerts", true),
    ("new_messages", true),
    ("newsletter", false),
    ("profile_views", true),
];

/// Notification toggles shown to employers.
pub const EMPLOYER_NOTIFICATION_KEYS: &[(&str, bool)] = &[
    ("candidate_messages", true),
    ("job_expiry", true),
    ("new_applications", true),
    ("newsletter", false),
    ("weekly_summary", true),
];

/// Builds the role-specific default document. Exhaustive over `Role`, so
/// adding a role is a compile-time-checked change.
pub fn defaults_for(role: Role) -> SettingsDocument {
    let template = match role {
        Role::Candidate => CANDIDATE_NOTIFICATION_KEYS,
        Role::Employer => EMPLOYER_NOTIFICATION_KEYS,
    };
    SettingsDocument {
        notifications: template
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect(),
        privacy: PrivacySettings::default(),
        appearance: AppearanceSettings::default(),
        regional: RegionalSettings::default(),
        account: AccountSettings::default(),
    }
}
