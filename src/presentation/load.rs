use serde::Serialize;

/// Render state of one gallery cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    /// Still waiting on the asset; draw a skeleton.
    Skeleton,
    Loaded,
    /// The asset failed to load; draw the inline placeholder glyph.
    Placeholder,
}

/// Per-image load bookkeeping for skeleton placeholders.
///
/// A failed image stays a placeholder for the rest of the view; there is no
/// automatic retry.
#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    cells: Vec<CellState>,
}

impl LoadTracker {
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![CellState::Skeleton; len],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Marks an image as loaded. Out-of-range indices and already failed
    /// cells are left alone.
    pub fn track_loaded(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index)
            && *cell == CellState::Skeleton
        {
            *cell = CellState::Loaded;
        }
    }

    pub fn mark_failed(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = CellState::Placeholder;
        }
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.cell(index) == CellState::Loaded
    }

    pub fn cell(&self, index: usize) -> CellState {
        self.cells
            .get(index)
            .copied()
            .unwrap_or(CellState::Placeholder)
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }
}
