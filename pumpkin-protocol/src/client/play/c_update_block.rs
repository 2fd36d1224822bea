use pumpkin_core::math::position::WorldPosition;
use pumpkin_macros::client_packet;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[client_packet(0x15)]
pub struct CUpdateBlock {
    pub position: WorldPosition,
    pub new_block_runtime_id: u32,
    pub flags: u32,
    pub layer: u32,
}
