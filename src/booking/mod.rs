pub mod mechanic;
pub mod slot;
pub mod summary;

pub use mechanic::{Mechanic, Roster};
pub use slot::TimeSlot;
pub use summary::{
    has_price_drift, summarize, BookingContext, BookingRequest, BookingSummary, SummaryLine,
    EMERGENCY_FEE_LABEL,
};
