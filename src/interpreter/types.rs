//! Interpreter Types
//!
//! Session state held by the interpreter and the host facts it reports.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::fs::{NodeId, Vfs};
use super::history::CommandHistory;

/// Best-effort geolocation metadata pushed in by the host once its lookup
/// resolves. Every field is optional; the lookup service decides what it
/// fills in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationData {
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, alias = "country_name")]
    pub country: Option<String>,
}

impl LocationData {
    /// `city, region, country (ip)` from whichever fields are present, or
    /// `None` when nothing usable was delivered.
    pub fn describe(&self) -> Option<String> {
        let place: Vec<&str> = [&self.city, &self.region, &self.country]
            .into_iter()
            .filter_map(|f| f.as_deref())
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect();
        let ip = self.ip.as_deref().map(str::trim).filter(|ip| !ip.is_empty());

        match (place.is_empty(), ip) {
            (true, None) => None,
            (true, Some(ip)) => Some(ip.to_string()),
            (false, None) => Some(place.join(", ")),
            (false, Some(ip)) => Some(format!("{} ({})", place.join(", "), ip)),
        }
    }
}

/// Read-only facts about the host environment, supplied by whoever embeds
/// the interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostEnvironment {
    pub user_agent: String,
    pub language: String,
    pub platform: String,
    /// Width and height of the whole screen.
    pub screen: Option<(u16, u16)>,
    /// Width and height of the visible area.
    pub viewport: Option<(u16, u16)>,
    pub online: bool,
    pub cookies_enabled: bool,
}

impl Default for HostEnvironment {
    fn default() -> Self {
        Self {
            user_agent: "Unknown".to_string(),
            language: "Unknown".to_string(),
            platform: "Unknown".to_string(),
            screen: None,
            viewport: None,
            online: false,
            cookies_enabled: false,
        }
    }
}

/// Mutable state of one interactive session.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Always a folder of the shared file system.
    pub cwd: NodeId,
    pub history: CommandHistory,
    pub location: Option<LocationData>,
    pub environment: HostEnvironment,
    pub started_at: DateTime<Local>,
    /// Prompt label.
    pub user: String,
}

impl SessionState {
    pub fn new(user: &str, history_limit: usize, started_at: DateTime<Local>) -> Self {
        Self {
            cwd: Vfs::ROOT,
            history: CommandHistory::new(history_limit),
            location: None,
            environment: HostEnvironment::default(),
            started_at,
            user: user.to_string(),
        }
    }
}
