use super::{DetailSnapshot, GallerySnapshot, ViewCommand, ViewStatus};
use crate::{
    content::{ContentError, ContentId, ContentRecord, FetchOutcome},
    gallery::{GalleryState, KeyboardHub, KeyboardListener},
    locale::Locale,
    presentation::{AssetHost, LoadTracker},
};
use tracing::{debug, info};

/// The `(id, locale)` pair a fetch was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub id: Option<ContentId>,
    pub locale: Locale,
}

/// Handed out when a fetch starts; only the ticket of the newest fetch may
/// install its result.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    request: DetailRequest,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self) -> &DetailRequest {
        &self.request
    }
}

fn blank_record() -> ContentRecord {
    ContentRecord {
        id: ContentId::new(""),
        title: String::new(),
        description: None,
        short_description: None,
        primary_image: None,
        additional_photos: Vec::new(),
        created_at: None,
        published_at: None,
        gallery_images: Vec::new(),
    }
}

/// State owned by one detail view. All transitions are synchronous; the
/// network part lives in [`super::DetailView`].
pub struct DetailController {
    host: AssetHost,
    keyboard: KeyboardHub,
    generation: u64,
    request: Option<DetailRequest>,
    record: ContentRecord,
    record_locale: Locale,
    status: ViewStatus,
    error: Option<ContentError>,
    gallery: GalleryState,
    loads: LoadTracker,
    listener: Option<KeyboardListener>,
    torn_down: bool,
}

impl DetailController {
    pub fn new(host: AssetHost, keyboard: KeyboardHub) -> Self {
        Self {
            host,
            keyboard,
            generation: 0,
            request: None,
            record: blank_record(),
            record_locale: Locale::default(),
            status: ViewStatus::Idle,
            error: None,
            gallery: GalleryState::default(),
            loads: LoadTracker::default(),
            listener: None,
            torn_down: false,
        }
    }

    pub fn host(&self) -> &AssetHost {
        &self.host
    }

    pub fn record(&self) -> &ContentRecord {
        &self.record
    }

    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    pub fn loads(&self) -> &LoadTracker {
        &self.loads
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn error(&self) -> Option<&ContentError> {
        self.error.as_ref()
    }

    pub fn request(&self) -> Option<&DetailRequest> {
        self.request.as_ref()
    }

    /// Locale of the record on screen, which lags the request while a fetch
    /// for another locale is in flight.
    pub fn locale(&self) -> Locale {
        self.record_locale
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn has_keyboard_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Starts a new fetch generation. Any ticket issued earlier goes stale.
    pub fn begin_fetch(&mut self, id: Option<ContentId>, locale: Locale) -> Option<FetchTicket> {
        if self.torn_down {
            return None;
        }

        self.generation += 1;
        let request = DetailRequest { id, locale };
        self.request = Some(request.clone());
        self.status = ViewStatus::Loading;
        self.error = None;

        debug!(
            "Fetch generation {} started for {:?} ({})",
            self.generation, request.id, locale
        );

        Some(FetchTicket {
            generation: self.generation,
            request,
        })
    }

    /// Re-issues the last request, if there was one.
    pub fn begin_retry(&mut self) -> Option<FetchTicket> {
        let request = self.request.clone()?;
        self.begin_fetch(request.id, request.locale)
    }

    /// Installs a completed fetch. Returns false, leaving state untouched, when
    /// the ticket has been superseded or the view is gone.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, outcome: FetchOutcome) -> bool {
        if self.torn_down || ticket.generation != self.generation {
            debug!(
                "Discarding stale fetch generation {} (current {})",
                ticket.generation, self.generation
            );
            return false;
        }

        self.status = match &outcome.error {
            Some(err) => ViewStatus::Failed(err.kind()),
            None => ViewStatus::Ready,
        };
        self.error = outcome.error;
        self.record = outcome.record;
        self.record_locale = ticket.request.locale;
        self.gallery = GalleryState::new(self.record.gallery_images.clone());
        self.loads = LoadTracker::new(self.gallery.len());
        self.sync_keyboard();

        info!(
            "Installed content {} with {} gallery images ({:?})",
            self.record.id,
            self.gallery.len(),
            self.status
        );
        true
    }

    fn sync_keyboard(&mut self) {
        if self.gallery.is_open() && !self.torn_down {
            if self.listener.is_none() {
                self.listener = Some(self.keyboard.attach());
            }
        } else {
            self.listener = None;
        }
    }

    pub fn open_lightbox_at(&mut self, index: usize) {
        self.dispatch(ViewCommand::OpenAt { index });
    }

    pub fn close_lightbox(&mut self) {
        self.dispatch(ViewCommand::Close);
    }

    pub fn next_image(&mut self) {
        self.dispatch(ViewCommand::Next);
    }

    pub fn prev_image(&mut self) {
        self.dispatch(ViewCommand::Prev);
    }

    pub fn select_image(&mut self, index: usize) {
        self.dispatch(ViewCommand::Select { index });
    }

    /// Applies a user command. `Retry` is not a gallery transition and is
    /// ignored here; use [`DetailController::begin_retry`].
    pub fn dispatch(&mut self, command: ViewCommand) {
        if self.torn_down {
            return;
        }

        match command {
            ViewCommand::OpenAt { index } => {
                self.gallery.open_at(index);
            }
            ViewCommand::Close => self.gallery.close(),
            ViewCommand::Next => self.gallery.next(),
            ViewCommand::Prev => self.gallery.prev(),
            ViewCommand::Select { index } => self.gallery.select_index(index),
            ViewCommand::Key { key } => {
                // Without a live listener the page never sees the key.
                if self.listener.is_some() {
                    self.gallery.handle_key(key);
                }
            }
            ViewCommand::ImageLoaded { index } => self.loads.track_loaded(index),
            ViewCommand::ImageFailed { index } => {
                debug!("Image {} failed to load, showing placeholder", index);
                self.loads.mark_failed(index);
            }
            ViewCommand::Retry => {}
        }

        self.sync_keyboard();
    }

    /// Unmount: stale every in-flight fetch and drop the keyboard listener.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.generation += 1;
        self.gallery.close();
        self.listener = None;
        info!("Detail view torn down");
    }

    pub fn snapshot(&self) -> DetailSnapshot {
        DetailSnapshot {
            record: self.record.clone(),
            gallery: GallerySnapshot {
                images: self.gallery.images().to_vec(),
                lightbox_open: self.gallery.is_open(),
                current_index: self.gallery.current_index(),
                loaded: self.loads.cells().to_vec(),
            },
            status: self.status,
            error: self.error.as_ref().map(ContentError::kind),
            can_retry: self
                .error
                .as_ref()
                .is_some_and(ContentError::is_retryable),
        }
    }
}
