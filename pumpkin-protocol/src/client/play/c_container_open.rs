use pumpkin_core::math::position::WorldPosition;
use pumpkin_macros::client_packet;
use serde::Deserialize;

/// Sent when the server opened a container for the player, either bound to the block at
/// `position` or to the entity `entity_unique_id`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[client_packet(0x2e)]
pub struct CContainerOpen {
    pub window_id: u8,
    pub container_type: u8,
    pub position: WorldPosition,
    pub entity_unique_id: i64,
}
