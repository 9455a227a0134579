#![allow(dead_code)]

//! Local-only convenience: serializes the in-memory profile and settings
//! snapshot to a JSON file. Not part of the remote contract.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::session::UserProfile;
use crate::settings::models::SettingsDocument;

#[derive(Debug, Serialize)]
pub struct ProfileSnapshot<'a> {
    pub exported_at: DateTime<Utc>,
    pub profile: &'a UserProfile,
    pub settings: &'a SettingsDocument,
}

/// Writes the snapshot as pretty-printed JSON to `path`.
pub fn export_snapshot(
    profile: &UserProfile,
    settings: &SettingsDocument,
    path: &Path,
) -> Result<()> {
    let snapshot = ProfileSnapshot {
        exported_at: Utc::now(),
        profile,
        settings,
    };
    let json = serde_json::to_string_pretty(&snapshot).context("serializing profile snapshot")?;
    fs::write(path, json).with_context(|| format!("writing snapshot to {}", path.display()))?;
    info!("Exported profile snapshot to {}", path.display());
    Ok(())
}
