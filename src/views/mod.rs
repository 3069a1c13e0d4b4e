// Views module - HTTP hosting for detail-view sessions
mod error;
mod handlers;
mod types;

pub use error::ViewError;
pub use handlers::{
    command_handler, create_view_handler, delete_view_handler, get_view_handler, navigate_handler,
};
pub use types::{CommandRequest, CreatedView, OpenRequest};

use crate::detail::DetailView;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

struct RegisteredView {
    view: DetailView,
    last_used: u64,
}

#[derive(Default)]
struct Registry {
    views: HashMap<Uuid, RegisteredView>,
    clock: u64,
}

impl Registry {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }
}

/// Live detail views keyed by session id. Holds at most `max_views`; when
/// full, the least recently used view is unmounted to make room.
#[derive(Clone)]
pub struct ViewRegistry {
    inner: Arc<RwLock<Registry>>,
    max_views: usize,
}

fn parse_view_id(view_id: &str) -> Result<Uuid, ViewError> {
    Uuid::parse_str(view_id).map_err(|_| ViewError::InvalidId(view_id.to_string()))
}

impl ViewRegistry {
    pub fn new(max_views: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Registry::default())),
            max_views: max_views.max(1),
        }
    }

    pub fn max_views(&self) -> usize {
        self.max_views
    }

    pub async fn insert(&self, view: DetailView) -> Uuid {
        let view_id = Uuid::new_v4();

        let evicted = {
            let mut registry = self.inner.write().await;
            let mut evicted = Vec::new();
            while registry.views.len() >= self.max_views {
                let Some(oldest) = registry
                    .views
                    .iter()
                    .min_by_key(|(_, entry)| entry.last_used)
                    .map(|(id, _)| *id)
                else {
                    break;
                };
                if let Some(entry) = registry.views.remove(&oldest) {
                    info!("Evicting idle detail view {}", oldest);
                    evicted.push(entry.view);
                }
            }

            let last_used = registry.tick();
            registry
                .views
                .insert(view_id, RegisteredView { view, last_used });
            evicted
        };

        for view in evicted {
            view.unmount().await;
        }

        view_id
    }

    pub async fn get(&self, view_id: &str) -> Result<DetailView, ViewError> {
        let view_id = parse_view_id(view_id)?;
        let mut registry = self.inner.write().await;
        let last_used = registry.tick();
        let entry = registry
            .views
            .get_mut(&view_id)
            .ok_or(ViewError::NotFound)?;
        entry.last_used = last_used;
        Ok(entry.view.clone())
    }

    pub async fn remove(&self, view_id: &str) -> Result<DetailView, ViewError> {
        let view_id = parse_view_id(view_id)?;
        self.inner
            .write()
            .await
            .views
            .remove(&view_id)
            .map(|entry| entry.view)
            .ok_or(ViewError::NotFound)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.views.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.views.is_empty()
    }
}
