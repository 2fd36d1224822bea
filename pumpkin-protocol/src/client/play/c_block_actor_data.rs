use std::collections::HashMap;

use pumpkin_core::math::position::WorldPosition;
use pumpkin_macros::client_packet;
use serde::Deserialize;

/// Side data of the block entity at `position`, e.g. the pairing of a double chest.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[client_packet(0x38)]
pub struct CBlockActorData {
    pub position: WorldPosition,
    pub nbt_data: HashMap<String, fastnbt::Value>,
}
