#![allow(dead_code)]

//! Pure field transitions over the settings document. `apply_field_change`
//! is total over the documented category/key contract: an in-contract input
//! always succeeds, and anything else is rejected without mutating the
//! document — a write can never expand the document shape.

use thiserror::Error;

use crate::settings::models::{
    EmailFrequency, FontSize, Language, ProfileVisibility, Province, SettingsDocument, Theme,
    FIXED_CURRENCY, FIXED_TIMEZONE,
};

/// The five fixed top-level settings categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Notifications,
    Privacy,
    Appearance,
    Regional,
    Account,
}

impl Category {
    pub fn parse(s: &str) -> Option<Category> {
        match s {
            "notifications" => Some(Category::Notifications),
            "privacy" => Some(Category::Privacy),
            "appearance" => Some(Category::Appearance),
            "regional" => Some(Category::Regional),
            "account" => Some(Category::Account),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Notifications => "notifications",
            Category::Privacy => "privacy",
            Category::Appearance => "appearance",
            Category::Regional => "regional",
            Category::Account => "account",
        }
    }
}

/// A single field's new value, as delivered by a UI control.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Choice(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown key '{key}' in category '{category}'")]
    UnknownKey { category: &'static str, key: String },

    #[error("field '{key}' expects a {expected} value")]
    TypeMismatch { key: String, expected: &'static str },

    #[error("'{value}' is not a valid choice for '{key}'")]
    InvalidChoice { key: String, value: String },
}

fn expect_bool(key: &str, value: FieldValue) -> Result<bool, FieldError> {
    match value {
        FieldValue::Bool(b) => Ok(b),
        FieldValue::Choice(_) => Err(FieldError::TypeMismatch {
            key: key.to_string(),
            expected: "boolean",
        }),
    }
}

fn expect_choice(key: &str, value: FieldValue) -> Result<String, FieldError> {
    match value {
        FieldValue::Choice(s) => Ok(s),
        FieldValue::Bool(_) => Err(FieldError::TypeMismatch {
            key: key.to_string(),
            expected: "choice",
        }),
    }
}

fn parse_choice<T>(
    key: &str,
    value: FieldValue,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, FieldError> {
    let raw = expect_choice(key, value)?;
    parse(&raw).ok_or(FieldError::InvalidChoice {
        key: key.to_string(),
        value: raw,
    })
}

/// Applies one field change, returning the updated document. The input
/// document is never modified, so a rejected change leaves the caller's
/// state exactly as it was.
pub fn apply_field_change(
    doc: &SettingsDocument,
    category: Category,
    key: &str,
    value: FieldValue,
) -> Result<SettingsDocument, FieldError> {
    let mut next = doc.clone();
    match category {
        Category::Notifications => match next.notifications.get_mut(key) {
            // Only keys already present in the role template are writable.
            Some(slot) => *slot = expect_bool(key, value)?,
            None => {
                return Err(FieldError::UnknownKey {
                    category: category.as_str(),
                    key: key.to_string(),
                })
            }
        },
        Category::Privacy => match key {
            "profile_visibility" => {
                next.privacy.profile_visibility =
                    parse_choice(key, value, ProfileVisibility::parse)?
            }
            "show_email" => next.privacy.show_email = expect_bool(key, value)?,
            "show_phone" => next.privacy.show_phone = expect_bool(key, value)?,
            "searchable" => next.privacy.searchable = expect_bool(key, value)?,
            _ => {
                return Err(FieldError::UnknownKey {
                    category: category.as_str(),
                    key: key.to_string(),
                })
            }
        },
        Category::Appearance => match key {
            "theme" => next.appearance.theme = parse_choice(key, value, Theme::parse)?,
            "font_size" => next.appearance.font_size = parse_choice(key, value, FontSize::parse)?,
            "reduce_motion" => next.appearance.reduce_motion = expect_bool(key, value)?,
            "high_contrast" => next.appearance.high_contrast = expect_bool(key, value)?,
            _ => {
                return Err(FieldError::UnknownKey {
                    category: category.as_str(),
                    key: key.to_string(),
                })
            }
        },
        Category::Regional => match key {
            "language" => next.regional.language = parse_choice(key, value, Language::parse)?,
            "province" => next.regional.province = parse_choice(key, value, Province::parse)?,
            // Timezone and currency each have a single valid value for now.
            "timezone" => {
                let raw = expect_choice(key, value)?;
                if raw != FIXED_TIMEZONE {
                    return Err(FieldError::InvalidChoice {
                        key: key.to_string(),
                        value: raw,
                    });
                }
                next.regional.timezone = raw;
            }
            "currency" => {
                let raw = expect_choice(key, value)?;
                if raw != FIXED_CURRENCY {
                    return Err(FieldError::InvalidChoice {
                        key: key.to_string(),
                        value: raw,
                    });
                }
                next.regional.currency = raw;
            }
            _ => {
                return Err(FieldError::UnknownKey {
                    category: category.as_str(),
                    key: key.to_string(),
                })
            }
        },
        Category::Account => match key {
            "two_factor" => next.account.two_factor = expect_bool(key, value)?,
            "login_alerts" => next.account.login_alerts = expect_bool(key, value)?,
            "email_frequency" => {
                next.account.email_frequency = parse_choice(key, value, EmailFrequency::parse)?
            }
            _ => {
                return Err(FieldError::UnknownKey {
                    category: category.as_str(),
                    key: key.to_string(),
                })
            }
        },
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;
    use crate::settings::models::defaults_for;

    #[test]
    fn test_theme_dark_then_light_is_identity() {
        let initial = defaults_for(Role::Candidate);
        let dark = apply_field_change(
            &initial,
            Category::Appearance,
            "theme",
            FieldValue::Choice("dark".to_string()),
        )
        .expect("dark is a valid theme");
        assert_eq!(dark.appearance.theme, Theme::Dark);

        let back = apply_field_change(
            &dark,
            Category::Appearance,
            "theme",
            FieldValue::Choice("light".to_string()),
        )
        .expect("light is a valid theme");
        assert_eq!(back, initial);
    }

    #[test]
    fn test_unknown_notification_key_rejected() {
        let doc = defaults_for(Role::Candidate);
        // An employer-only key must not be writable on a candidate document.
        let err = apply_field_change(
            &doc,
            Category::Notifications,
            "new_applications",
            FieldValue::Bool(false),
        )
        .unwrap_err();
        assert!(matches!(err, FieldError::UnknownKey { .. }));
    }

    #[test]
    fn test_notification_toggle_preserves_key_set() {
        let doc = defaults_for(Role::Employer);
        let next = apply_field_change(
            &doc,
            Category::Notifications,
            "newsletter",
            FieldValue::Bool(true),
        )
        .expect("newsletter is in the employer template");
        let before: Vec<_> = doc.notifications.keys().collect();
        let after: Vec<_> = next.notifications.keys().collect();
        assert_eq!(before, after);
        assert_eq!(next.notifications["newsletter"], true);
    }

    #[test]
    fn test_invalid_enum_choice_rejected() {
        let doc = defaults_for(Role::Candidate);
        let err = apply_field_change(
            &doc,
            Category::Appearance,
            "theme",
            FieldValue::Choice("sepia".to_string()),
        )
        .unwrap_err();
        assert_eq!(
            err,
            FieldError::InvalidChoice {
                key: "theme".to_string(),
                value: "sepia".to_string(),
            }
        );
    }

    #[test]
    fn test_type_mismatch_rejected() {
        let doc = defaults_for(Role::Candidate);
        let err = apply_field_change(
            &doc,
            Category::Privacy,
            "show_email",
            FieldValue::Choice("yes".to_string()),
        )
        .unwrap_err();
        assert!(matches!(err, FieldError::TypeMismatch { .. }));
    }

    #[test]
    fn test_timezone_only_accepts_fixed_value() {
        let doc = defaults_for(Role::Candidate);
        assert!(apply_field_change(
            &doc,
            Category::Regional,
            "timezone",
            FieldValue::Choice("Europe/Berlin".to_string()),
        )
        .is_err());
        assert!(apply_field_change(
            &doc,
            Category::Regional,
            "timezone",
            FieldValue::Choice(FIXED_TIMEZONE.to_string()),
        )
        .is_ok());
    }

    #[test]
    fn test_province_change_applies() {
        let doc = defaults_for(Role::Candidate);
        let next = apply_field_change(
            &doc,
            Category::Regional,
            "province",
            FieldValue::Choice("BC".to_string()),
        )
        .expect("BC is a valid province");
        assert_eq!(next.regional.province, Province::Bc);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("privacy"), Some(Category::Privacy));
        assert_eq!(Category::parse("profile"), None);
    }
}
