//! Favorite Toggle
//!
//! Optimistic favorite state for one unit. The indicator flips at once,
//! then follows the server's answer; a failed request puts it back.

/// Favorite indicator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteToggle {
    /// Last value the server confirmed
    pub confirmed: bool,
    /// Value on screen
    pub shown: bool,
    /// A toggle request is in flight
    pub pending: bool,
}

impl FavoriteToggle {
    pub fn new(confirmed: bool) -> Self {
        Self { confirmed, shown: confirmed, pending: false }
    }

    /// Flip optimistically. Returns false (and changes nothing) while a
    /// request is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        self.shown = !self.shown;
        true
    }

    /// Server answered; its value wins over the optimistic guess
    pub fn confirm(&mut self, server_value: bool) {
        self.confirmed = server_value;
        self.shown = server_value;
        self.pending = false;
    }

    /// Request failed; restore the pre-toggle value
    pub fn rollback(&mut self) {
        self.shown = self.confirmed;
        self.pending = false;
    }

    /// Adopt a value confirmed elsewhere (another card for the same unit)
    pub fn sync(&mut self, confirmed: bool) {
        if !self.pending {
            *self = Self::new(confirmed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_flips_shown_only() {
        let mut t = FavoriteToggle::new(false);
        assert!(t.begin());
        assert!(t.shown);
        assert!(!t.confirmed);
        assert!(t.pending);
    }

    #[test]
    fn test_server_value_wins_over_optimistic_guess() {
        let mut t = FavoriteToggle::new(false);
        t.begin();
        // server says the unit is still not a favorite
        t.confirm(false);
        assert_eq!(t, FavoriteToggle::new(false));

        t.begin();
        t.confirm(true);
        assert!(t.shown && t.confirmed && !t.pending);
    }

    #[test]
    fn test_failure_rolls_back() {
        let mut t = FavoriteToggle::new(true);
        t.begin();
        assert!(!t.shown);
        t.rollback();
        assert!(t.shown);
        assert!(!t.pending);
    }

    #[test]
    fn test_double_click_while_pending_is_ignored() {
        let mut t = FavoriteToggle::new(false);
        assert!(t.begin());
        assert!(!t.begin());
        assert!(t.shown);
    }

    #[test]
    fn test_sync_waits_for_pending_request() {
        let mut t = FavoriteToggle::new(false);
        t.begin();
        t.sync(false);
        assert!(t.pending);
        t.confirm(true);
        t.sync(false);
        assert!(!t.shown);
    }
}
