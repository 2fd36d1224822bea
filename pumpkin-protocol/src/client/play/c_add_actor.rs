use pumpkin_macros::client_packet;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[client_packet(0x0d)]
pub struct CAddActor {
    pub entity_unique_id: i64,
    pub entity_runtime_id: u64,
    /// e.g. minecraft:villager_v2
    pub entity_type: String,
}
