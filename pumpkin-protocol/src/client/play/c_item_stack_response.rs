use pumpkin_macros::client_packet;
use serde::Deserialize;

use crate::stack_request::ItemStackResponse;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[client_packet(0x94)]
pub struct CItemStackResponse {
    pub responses: Vec<ItemStackResponse>,
}
