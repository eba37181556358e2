//! In-memory record store for computers and users.
//!
//! Records live in ordered maps keyed by id. Ids come from a per-collection
//! counter that starts at 1 and only moves forward, so key order is also
//! insertion order and a deleted id is never handed out again.

mod seed;


use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::model::{Computer, NewComputer, NewUser, Stats, Status, UpdateComputer, User};

pub use seed::sample_computers;

struct Collections {
    computers: BTreeMap<u64, Computer>,
    users: BTreeMap<u64, User>,
    next_computer_id: u64,
    next_user_id: u64,
}

impl Default for Collections {
    fn default() -> Self {
        Self {
            computers: BTreeMap::new(),
            users: BTreeMap::new(),
            next_computer_id: 1,
            next_user_id: 1,
        }
    }
}

/// Thread-safe handle to the record store. Clones share the same records.
#[derive(Clone, Default)]
pub struct RecordStore {
    inner: Arc<RwLock<Collections>>,
}

impl RecordStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with [`sample_computers`].
    pub async fn with_sample_data() -> Self {
        let store = Self::new();
        let samples = sample_computers();
        let count = samples.len();
        for computer in samples {
            store.create(computer).await;
        }
        info!(count, "Seeded sample computers");
        store
    }

    // =========================================================================
    // Computer operations
    // =========================================================================

    /// All computers in insertion order.
    pub async fn get_all(&self) -> Vec<Computer> {
        self.inner.read().await.computers.values().cloned().collect()
    }

    pub async fn get(&self, id: u64) -> Option<Computer> {
        self.inner.read().await.computers.get(&id).cloned()
    }

    /// Assign the next id and store the computer.
    pub async fn create(&self, new: NewComputer) -> Computer {
        let mut inner = self.inner.write().await;
        let id = inner.next_computer_id;
        inner.next_computer_id += 1;

        let computer = Computer::from_new(id, new);
        inner.computers.insert(id, computer.clone());
        info!(id, name = %computer.name, "Computer created");
        computer
    }

    /// Apply a partial update. Returns `None` when no computer has `id`.
    pub async fn update(&self, id: u64, update: UpdateComputer) -> Option<Computer> {
        let mut inner = self.inner.write().await;
        let computer = inner.computers.get_mut(&id)?;
        computer.apply(update);
        info!(id, "Computer updated");
        Some(computer.clone())
    }

    /// Remove a computer. Returns whether one was actually removed.
    pub async fn delete(&self, id: u64) -> bool {
        let removed = self.inner.write().await.computers.remove(&id).is_some();
        if removed {
            info!(id, "Computer deleted");
        } else {
            debug!(id, "Delete of unknown computer");
        }
        removed
    }

    /// Computers whose name, processor, ram or storage contain `query`
    /// ignoring case, or whose IP address contains it literally.
    pub async fn search(&self, query: &str) -> Vec<Computer> {
        let lower_query = query.to_lowercase();
        self.inner
            .read()
            .await
            .computers
            .values()
            .filter(|computer| computer.matches_query(query, &lower_query))
            .cloned()
            .collect()
    }

    pub async fn filter_by_status(&self, status: Status) -> Vec<Computer> {
        self.inner
            .read()
            .await
            .computers
            .values()
            .filter(|computer| computer.status == status)
            .cloned()
            .collect()
    }

    /// Status counts computed from the current collection.
    pub async fn stats(&self) -> Stats {
        Stats::from_computers(self.inner.read().await.computers.values())
    }

    // =========================================================================
    // User operations
    // =========================================================================

    pub async fn get_user(&self, id: u64) -> Option<User> {
        self.inner.read().await.users.get(&id).cloned()
    }

    /// First user with exactly this username.
    pub async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.inner
            .read()
            .await
            .users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    /// Store a user under the next id. Usernames are not checked for
    /// uniqueness.
    pub async fn create_user(&self, new: NewUser) -> User {
        let mut inner = self.inner.write().await;
        let id = inner.next_user_id;
        inner.next_user_id += 1;

        let user = User {
            id,
            username: new.username,
            password: new.password,
        };
        inner.users.insert(id, user.clone());
        info!(id, username = %user.username, "User created");
        user
    }
}
