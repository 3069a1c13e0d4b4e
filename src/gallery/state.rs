use super::Key;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Lightbox {
    Closed,
    Open,
}

/// Everything that can move the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxEvent {
    OpenAt(usize),
    Close,
    Next,
    Prev,
    Select(usize),
    Key(Key),
}

/// Which image is current and whether the full-screen viewer is up.
///
/// Navigation wraps in both directions. Every transition on an empty gallery
/// or with an out-of-range index is a no-op, so `current_index` is always a
/// valid index while `images` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    images: Vec<String>,
    lightbox: Lightbox,
    current_index: usize,
}

impl GalleryState {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            lightbox: Lightbox::Closed,
            current_index: 0,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn lightbox(&self) -> Lightbox {
        self.lightbox
    }

    pub fn is_open(&self) -> bool {
        self.lightbox == Lightbox::Open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current_index).map(String::as_str)
    }

    /// Opens the viewer on `index`. Returns false when the guard rejects it.
    pub fn open_at(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.current_index = index;
        self.lightbox = Lightbox::Open;
        true
    }

    pub fn close(&mut self) {
        self.lightbox = Lightbox::Closed;
    }

    pub fn next(&mut self) {
        if !self.is_open() || self.images.is_empty() {
            return;
        }
        self.current_index = (self.current_index + 1) % self.images.len();
    }

    pub fn prev(&mut self) {
        if !self.is_open() || self.images.is_empty() {
            return;
        }
        let len = self.images.len();
        self.current_index = (self.current_index + len - 1) % len;
    }

    pub fn select_index(&mut self, index: usize) {
        if self.is_open() && index < self.images.len() {
            self.current_index = index;
        }
    }

    /// Keys only act while the viewer is open.
    pub fn handle_key(&mut self, key: Key) {
        if !self.is_open() {
            return;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            Key::Other => {}
        }
    }

    pub fn apply(&mut self, event: LightboxEvent) {
        match event {
            LightboxEvent::OpenAt(index) => {
                self.open_at(index);
            }
            LightboxEvent::Close => self.close(),
            LightboxEvent::Next => self.next(),
            LightboxEvent::Prev => self.prev(),
            LightboxEvent::Select(index) => self.select_index(index),
            LightboxEvent::Key(key) => self.handle_key(key),
        }
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
