use crate::domain::location::Location;

/// In-memory session history: a stack of locations and a cursor into it.
///
/// `push` discards any entries ahead of the cursor, the way a browser drops
/// forward history when a new page is visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    entries: Vec<Location>,
    cursor: usize,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(Location::root())
    }
}

impl NavigationState {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Replace the whole history with a single entry.
    pub fn reset(&mut self, initial: Location) {
        self.entries = vec![initial];
        self.cursor = 0;
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.cursor]
    }

    pub fn push(&mut self, location: Location) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(location);
        self.cursor = self.entries.len() - 1;
    }

    pub fn back(&mut self) -> Option<&Location> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&Location> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Index of the current entry
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
