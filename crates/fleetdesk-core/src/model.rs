//! Record types held by the `FleetDesk` store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Operational state of a managed computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Online,
    #[default]
    Offline,
    Warning,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Online, Self::Offline, Self::Warning];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::UnknownStatus(s.to_string()))
    }
}

/// A managed machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Computer {
    pub id: u64,
    pub name: String,
    pub processor: String,
    pub ram: String,
    pub storage: String,
    pub ip_address: String,
    pub remote_enabled: bool,
    pub remote_password: Option<String>,
    pub status: Status,
}

impl Computer {
    pub(crate) fn from_new(id: u64, new: NewComputer) -> Self {
        Self {
            id,
            name: new.name,
            processor: new.processor,
            ram: new.ram,
            storage: new.storage,
            ip_address: new.ip_address,
            remote_enabled: new.remote_enabled,
            remote_password: new.remote_password,
            status: new.status,
        }
    }

    /// Overwrite every field present in `update`. The id is never touched.
    pub fn apply(&mut self, update: UpdateComputer) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(processor) = update.processor {
            self.processor = processor;
        }
        if let Some(ram) = update.ram {
            self.ram = ram;
        }
        if let Some(storage) = update.storage {
            self.storage = storage;
        }
        if let Some(ip_address) = update.ip_address {
            self.ip_address = ip_address;
        }
        if let Some(remote_enabled) = update.remote_enabled {
            self.remote_enabled = remote_enabled;
        }
        if let Some(remote_password) = update.remote_password {
            self.remote_password = remote_password;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }

    /// Search predicate: case-insensitive on the descriptive fields,
    /// literal on the IP address.
    ///
    /// `lower_query` must already be lowercased; `query` is the raw input.
    pub(crate) fn matches_query(&self, query: &str, lower_query: &str) -> bool {
        [&self.name, &self.processor, &self.ram, &self.storage]
            .into_iter()
            .any(|field| field.to_lowercase().contains(lower_query))
            || self.ip_address.contains(query)
    }
}

/// Fields of a computer before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComputer {
    pub name: String,
    pub processor: String,
    pub ram: String,
    pub storage: String,
    pub ip_address: String,
    #[serde(default)]
    pub remote_enabled: bool,
    #[serde(default)]
    pub remote_password: Option<String>,
    #[serde(default)]
    pub status: Status,
}

/// Partial update of a computer. `None` means "not supplied".
///
/// `remote_password` is doubly optional: `Some(None)` clears the password,
/// `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateComputer {
    pub name: Option<String>,
    pub processor: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub ip_address: Option<String>,
    pub remote_enabled: Option<bool>,
    pub remote_password: Option<Option<String>>,
    pub status: Option<Status>,
}

impl UpdateComputer {
    pub fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// An application account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

/// Per-status counts over the whole computer collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total: usize,
    pub online: usize,
    pub offline: usize,
    pub warning: usize,
}

impl Stats {
    pub fn from_computers<'a>(computers: impl IntoIterator<Item = &'a Computer>) -> Self {
        let mut stats = Self::default();
        for computer in computers {
            stats.total += 1;
            match computer.status {
                Status::Online => stats.online += 1,
                Status::Offline => stats.offline += 1,
                Status::Warning => stats.warning += 1,
            }
        }
        stats
    }
}
