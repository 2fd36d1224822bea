//! Client-side mirror of a Bedrock player's containers.
//!
//! Slot actions are applied locally the moment they are sent and rolled back as a whole if any of
//! them turns out to be invalid. The server later confirms them with new stack ids, or corrects
//! the containers with snapshots.

pub mod action_builder;
pub mod block;
pub mod container;
pub mod crafting;
mod error;
pub mod registry;
pub mod screen;
pub mod sync;
pub mod transaction;

pub use action_builder::{ActionBuilder, LogicalSlot};
pub use block::{default_block_manager, ContainerBlockManager, ContainerKind};
pub use container::Container;
pub use error::InventoryError;
pub use registry::{ContainerKey, Containers, OpenedWindow, WindowBinding};
pub use screen::{PacketSender, ScreenManager};
pub use transaction::{AllowDrops, DropHandler, DropResult, ItemStackRequestHandler};
