//! Dashboard controller: fetches the five collections together and keeps
//! the newest complete snapshot.
//!
//! Every refresh draws a ticket from a generation counter. A refresh that
//! finishes after a newer one has already been installed is discarded, so
//! a slow request started before a mutation can never overwrite the state
//! fetched after it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::livingapps::{ApiError, LivingAppsClient};
use crate::models::dashboard::Snapshot;
use crate::models::entities::{Course, Instructor, Participant, Registration, Room};

#[derive(Default)]
struct Installed {
    generation: u64,
    snapshot: Option<Arc<Snapshot>>,
}

pub struct DashboardController {
    client: LivingAppsClient,
    issued: AtomicU64,
    installed: RwLock<Installed>,
}

impl DashboardController {
    pub fn new(client: LivingAppsClient) -> Self {
        DashboardController {
            client,
            issued: AtomicU64::new(0),
            installed: RwLock::new(Installed::default()),
        }
    }

    pub fn client(&self) -> &LivingAppsClient {
        &self.client
    }

    /// All five lists, concurrently. One failing collection fails the whole
    /// fetch; there is no partial snapshot.
    pub async fn fetch_all(&self) -> Result<Snapshot, ApiError> {
        let c = &self.client;
        let (instructors, rooms, participants, courses, registrations) = tokio::try_join!(
            c.list::<Instructor>(),
            c.list::<Room>(),
            c.list::<Participant>(),
            c.list::<Course>(),
            c.list::<Registration>(),
        )?;
        Ok(Snapshot { instructors, rooms, participants, courses, registrations })
    }

    /// Re-fetch everything and return the newest installed snapshot, which
    /// is this refresh's own result unless a later one overtook it.
    pub async fn refresh(&self) -> Result<Arc<Snapshot>, ApiError> {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let snapshot = match self.fetch_all().await {
            Ok(s) => Arc::new(s),
            Err(e) => {
                log::warn!("Refresh #{ticket} failed: {e}");
                return Err(e);
            }
        };

        let mut installed = self.installed.write().await;
        if ticket > installed.generation {
            installed.generation = ticket;
            installed.snapshot = Some(Arc::clone(&snapshot));
            log::debug!(
                "Installed snapshot #{ticket} ({} courses, {} registrations)",
                snapshot.courses.len(),
                snapshot.registrations.len()
            );
            return Ok(snapshot);
        }

        log::debug!(
            "Discarding stale snapshot #{ticket}, #{} already installed",
            installed.generation
        );
        Ok(installed.snapshot.clone().unwrap_or(snapshot))
    }

    /// Generation of the installed snapshot, 0 before the first refresh.
    pub async fn generation(&self) -> u64 {
        self.installed.read().await.generation
    }

    pub async fn current(&self) -> Option<Arc<Snapshot>> {
        self.installed.read().await.snapshot.clone()
    }
}
