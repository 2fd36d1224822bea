use pumpkin_macros::server_packet;
use serde::Serialize;

use crate::stack_request::ItemStackRequest;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[server_packet(0x93)]
pub struct SItemStackRequest {
    pub requests: Vec<ItemStackRequest>,
}

impl SItemStackRequest {
    pub fn new(requests: Vec<ItemStackRequest>) -> Self {
        Self { requests }
    }
}
