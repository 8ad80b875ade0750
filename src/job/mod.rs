//! Generation-job records and the tracking state machine.

/// Job, slide-status, and artifact models.
pub mod model;
/// The persist-every-transition job tracker.
pub mod tracker;
