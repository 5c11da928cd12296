pub mod segment_list;
pub mod slot_arena;

pub use segment_list::{Linked, SegmentIter, SegmentList};
pub use slot_arena::{SlotArena, SlotId};
