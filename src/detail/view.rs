use super::{DetailController, DetailSnapshot, FetchTicket, RenderedView, ViewCommand, render};
use crate::{
    content::{ContentId, DynContentSource, fetch_detail},
    gallery::KeyboardHub,
    locale::Locale,
    presentation::AssetHost,
};
use std::sync::Arc;
use tokio::{sync::Mutex, task::JoinHandle};
use tracing::debug;

/// Async handle around a [`DetailController`]. Fetches run without holding
/// the lock; their results go through the controller's generation check, so
/// the most recently started fetch always wins.
#[derive(Clone)]
pub struct DetailView {
    controller: Arc<Mutex<DetailController>>,
    source: DynContentSource,
    in_flight: Arc<Mutex<Vec<JoinHandle<bool>>>>,
}

impl DetailView {
    pub fn new(source: DynContentSource, host: AssetHost, keyboard: KeyboardHub) -> Self {
        Self {
            controller: Arc::new(Mutex::new(DetailController::new(host, keyboard))),
            source,
            in_flight: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fetches `(id, locale)` and installs the result unless a newer fetch
    /// started meanwhile. Returns whether the result was installed.
    pub async fn load(&self, id: Option<&str>, locale: Locale) -> bool {
        let ticket = {
            let mut controller = self.controller.lock().await;
            controller.begin_fetch(ContentId::from_param(id), locale)
        };
        self.run(ticket).await
    }

    pub async fn retry(&self) -> bool {
        let ticket = self.controller.lock().await.begin_retry();
        self.run(ticket).await
    }

    async fn run(&self, ticket: Option<FetchTicket>) -> bool {
        let Some(ticket) = ticket else {
            return false;
        };

        let host = self.controller.lock().await.host().clone();
        let request = ticket.request().clone();
        let outcome = fetch_detail(
            self.source.as_ref(),
            request.id.as_ref(),
            request.locale,
            &host,
        )
        .await;

        self.controller.lock().await.complete_fetch(ticket, outcome)
    }

    /// Route-change entry point: starts the fetch in the background.
    pub async fn navigate(&self, id: Option<String>, locale: Locale) {
        let view = self.clone();
        let handle = tokio::spawn(async move { view.load(id.as_deref(), locale).await });
        self.track(handle).await;
    }

    pub async fn retry_in_background(&self) {
        let view = self.clone();
        let handle = tokio::spawn(async move { view.retry().await });
        self.track(handle).await;
    }

    async fn track(&self, handle: JoinHandle<bool>) {
        let mut in_flight = self.in_flight.lock().await;
        in_flight.retain(|h| !h.is_finished());
        in_flight.push(handle);
    }

    /// Waits for every background fetch started so far.
    pub async fn settle(&self) {
        let handles: Vec<_> = self.in_flight.lock().await.drain(..).collect();
        for handle in handles {
            if let Err(e) = handle.await
                && !e.is_cancelled()
            {
                tracing::error!("Background fetch task failed: {}", e);
            }
        }
    }

    pub async fn command(&self, command: ViewCommand) {
        match command {
            ViewCommand::Retry => self.retry_in_background().await,
            other => self.controller.lock().await.dispatch(other),
        }
    }

    /// Tears the view down: pending fetches are aborted and ignored, the
    /// keyboard listener is released and later commands do nothing.
    pub async fn unmount(&self) {
        self.controller.lock().await.teardown();

        let handles: Vec<_> = self.in_flight.lock().await.drain(..).collect();
        debug!("Aborting {} in-flight fetches", handles.len());
        for handle in handles {
            handle.abort();
        }
    }

    pub async fn snapshot(&self) -> DetailSnapshot {
        self.controller.lock().await.snapshot()
    }

    pub async fn render(&self) -> RenderedView {
        render(&*self.controller.lock().await)
    }

    pub async fn has_keyboard_listener(&self) -> bool {
        self.controller.lock().await.has_keyboard_listener()
    }
}
