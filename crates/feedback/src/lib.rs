//! Employee feedback entries (rated 1 to 5).

pub mod feedback;

pub use feedback::{Feedback, FeedbackId, MAX_RATING, MIN_RATING, NewFeedback, newest_first};
