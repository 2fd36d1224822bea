use pumpkin_macros::client_packet;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[client_packet(0x0e)]
pub struct CRemoveActor {
    pub entity_unique_id: i64,
}
