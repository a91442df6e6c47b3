//! Incremental pagination cursor.
//!
//! Tracks the current page and whether a fetch is outstanding or the
//! listing has run dry. `Fresh` and `Exhausted` are only left through
//! [`Cursor::begin_reset`].

/// Lifecycle of the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Nothing fetched yet.
    Fresh,
    /// No fetch outstanding; more pages may exist.
    Idle,
    /// A fetch for the current page is outstanding.
    Loading,
    /// The last fetch returned no records.
    Exhausted,
}

/// Pagination position plus loading/exhaustion flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    page: u32,
    state: CursorState,
    /// Set while an `advance` fetch is outstanding, so a failure can step back.
    advancing: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor {
    /// A fresh cursor at page 1 with nothing loaded yet.
    pub fn new() -> Self {
        Self {
            page: 1,
            state: CursorState::Fresh,
            advancing: false,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn has_more(&self) -> bool {
        self.state != CursorState::Exhausted
    }

    pub fn is_loading(&self) -> bool {
        self.state == CursorState::Loading
    }

    /// Rewind to page 1 and mark a fetch as outstanding.
    pub fn begin_reset(&mut self) -> u32 {
        self.page = 1;
        self.state = CursorState::Loading;
        self.advancing = false;
        self.page
    }

    /// Move to the next page if the first page has loaded, more may exist
    /// and nothing is in flight.
    ///
    /// Returns the page to fetch, or `None` when the request is ignored.
    pub fn advance(&mut self) -> Option<u32> {
        if self.state != CursorState::Idle {
            return None;
        }
        self.page += 1;
        self.state = CursorState::Loading;
        self.advancing = true;
        Some(self.page)
    }

    /// Record the size of the response for the outstanding fetch.
    pub fn complete(&mut self, count: usize) {
        if self.state != CursorState::Loading {
            return;
        }
        self.state = if count > 0 {
            CursorState::Idle
        } else {
            CursorState::Exhausted
        };
        self.advancing = false;
    }

    /// The outstanding fetch failed. A failed advance steps back a page so
    /// the next advance asks for the same page again; a failed reset leaves
    /// nothing loaded.
    pub fn fail(&mut self) {
        if self.state != CursorState::Loading {
            return;
        }
        if self.advancing {
            self.page -= 1;
            self.state = CursorState::Idle;
        } else {
            self.state = CursorState::Fresh;
        }
        self.advancing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> Cursor {
        let mut cursor = Cursor::new();
        cursor.begin_reset();
        cursor.complete(6);
        cursor
    }

    #[test]
    fn new_cursor_is_fresh_on_first_page() {
        let cursor = Cursor::new();
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.state(), CursorState::Fresh);
        assert!(cursor.has_more());
        assert!(!cursor.is_loading());
    }

    #[test]
    fn advance_before_first_load_is_ignored() {
        let mut cursor = Cursor::new();
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.state(), CursorState::Fresh);
    }

    #[test]
    fn advance_moves_to_next_page_and_loads() {
        let mut cursor = loaded();
        assert_eq!(cursor.advance(), Some(2));
        assert!(cursor.is_loading());
        // A second trigger while loading is ignored.
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.page(), 2);
    }

    #[test]
    fn empty_response_exhausts() {
        let mut cursor = loaded();
        assert_eq!(cursor.state(), CursorState::Idle);
        cursor.advance();
        cursor.complete(0);
        assert_eq!(cursor.state(), CursorState::Exhausted);
        assert!(!cursor.has_more());
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn reset_leaves_exhausted() {
        let mut cursor = loaded();
        cursor.advance();
        cursor.complete(0);
        assert_eq!(cursor.begin_reset(), 1);
        assert!(cursor.is_loading());
        cursor.complete(3);
        assert!(cursor.has_more());
    }

    #[test]
    fn failed_advance_steps_back() {
        let mut cursor = loaded();
        cursor.advance();
        cursor.fail();
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.state(), CursorState::Idle);
        assert_eq!(cursor.advance(), Some(2));
    }

    #[test]
    fn failed_reset_leaves_nothing_loaded() {
        let mut cursor = Cursor::new();
        cursor.begin_reset();
        cursor.fail();
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.state(), CursorState::Fresh);
        assert_eq!(cursor.advance(), None);
        assert!(cursor.has_more());
    }

    #[test]
    fn complete_without_fetch_is_ignored() {
        let mut cursor = Cursor::new();
        cursor.complete(0);
        assert_eq!(cursor.state(), CursorState::Fresh);
    }
}
