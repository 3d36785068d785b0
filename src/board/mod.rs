//! Board Ordering Core
//!
//! The pure half of the board: partitioning the lead collection by column,
//! computing reorders, and adapting raw drag gestures into move descriptors.
//! Everything here is side-effect free; persistence lives in the controller.

mod partition;
mod reorder;
mod drag;

pub use partition::{column_leads, column_size, renumber};
pub use reorder::{compute_reorder, MoveDescriptor, ReorderOutcome};
pub use drag::{parse_drop_event, DropDestination, DropEvent};
