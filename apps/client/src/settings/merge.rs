#![allow(dead_code)]

//! Merge of a server-returned partial settings payload over the role
//! defaults. The merge is key-level: a category the server omits keeps its
//! full default, and within a returned category only the keys present
//! override. Server notification keys outside the role template are dropped,
//! keeping the document's key set equal to the template's.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::settings::models::{
    EmailFrequency, FontSize, Language, ProfileVisibility, Province, SettingsDocument, Theme,
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialPrivacy {
    pub profile_visibility: Option<ProfileVisibility>,
    pub show_email: Option<bool>,
    pub show_phone: Option<bool>,
    pub searchable: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialAppearance {
    pub theme: Option<Theme>,
    pub font_size: Option<FontSize>,
    pub reduce_motion: Option<bool>,
    pub high_contrast: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialRegional {
    pub language: Option<Language>,
    pub timezone: Option<String>,
    pub currency: Option<String>,
    pub province: Option<Province>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialAccount {
    pub two_factor: Option<bool>,
    pub login_alerts: Option<bool>,
    pub email_frequency: Option<EmailFrequency>,
}

/// What `GET /api/settings` may return: every category, and every key within
/// a category, is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialSettings {
    pub notifications: Option<BTreeMap<String, bool>>,
    pub privacy: Option<PartialPrivacy>,
    pub appearance: Option<PartialAppearance>,
    pub regional: Option<PartialRegional>,
    pub account: Option<PartialAccount>,
}

fn take<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

/// Merges the partial payload over a defaults document, returning the
/// complete result.
pub fn merge_over_defaults(defaults: &SettingsDocument, partial: &PartialSettings) -> SettingsDocument {
    let mut doc = defaults.clone();

    if let Some(notifications) = &partial.notifications {
        for (key, value) in notifications {
            if let Some(slot) = doc.notifications.get_mut(key) {
                *slot = *value;
            }
        }
    }

    if let Some(privacy) = &partial.privacy {
        take(&mut doc.privacy.profile_visibility, privacy.profile_visibility);
        take(&mut doc.privacy.show_email, privacy.show_email);
        take(&mut doc.privacy.show_phone, privacy.show_phone);
        take(&mut doc.privacy.searchable, privacy.searchable);
    }

    if let Some(appearance) = &partial.appearance {
        take(&mut doc.appearance.theme, appearance.theme);
        take(&mut doc.appearance.font_size, appearance.font_size);
        take(&mut doc.appearance.reduce_motion, appearance.reduce_motion);
        take(&mut doc.appearance.high_contrast, appearance.high_contrast);
    }

    if let Some(regional) = &partial.regional {
        take(&mut doc.regional.language, regional.language);
        take(&mut doc.regional.timezone, regional.timezone.clone());
        take(&mut doc.regional.currency, regional.currency.clone());
        take(&mut doc.regional.province, regional.province);
    }

    if let Some(account) = &partial.account {
        take(&mut doc.account.two_factor, account.two_factor);
        take(&mut doc.account.login_alerts, account.login_alerts);
        take(&mut doc.account.email_frequency, account.email_frequency);
    }

    doc
}
