//! Parameters and results of bulk slot resets.

/// Courts affected by a slot reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetSelector {
    /// Every court whose status is active.
    AllActive,
    /// One active court, matched by name ignoring case.
    CourtName(String),
    /// Every active court of one sport.
    Sport(i32),
}

/// Counts reported by a slot reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetSummary {
    pub courts_reset: u64,
    pub bookings_cancelled: u64,
}

/// How much data an environment wipe removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WipeScope {
    /// Truncate bookings and free every slot.
    Bookings,
    /// Additionally truncate customers.
    BookingsAndCustomers,
}
