pub mod two_queue;

pub use two_queue::{Segment, TwoQueueCache};
