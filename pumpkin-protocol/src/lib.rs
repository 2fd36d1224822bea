//! Decoded Bedrock packets the inventory layer consumes and produces.
//!
//! Encoding and decoding of the wire format happens in the transport; this crate only holds the
//! decoded structures and the ids the transport needs to route them.

pub mod client;
pub mod container;
pub mod item;
pub mod packet_id;
pub mod server;
pub mod stack_request;

pub use container::{
    ContainerName, WINDOW_ID_ARMOUR, WINDOW_ID_INVENTORY, WINDOW_ID_OFF_HAND, WINDOW_ID_UI,
};
pub use item::NetworkItemStack;
pub use packet_id::{ClientPacketID, ServerPacketID};
