use serde::{Deserialize, Serialize};

use crate::container::ContainerName;

/// Points at one slot of a container, together with the stack network id the client expects to
/// be in it. Negative ids refer to the result of an earlier, not yet acknowledged request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackRequestSlotInfo {
    pub container_id: u8,
    pub slot: u8,
    pub stack_network_id: i32,
}

impl StackRequestSlotInfo {
    pub fn new(container: ContainerName, slot: u8, stack_network_id: i32) -> Self {
        Self {
            container_id: container.id(),
            slot,
            stack_network_id,
        }
    }

    pub fn container(&self) -> Option<ContainerName> {
        ContainerName::from_id(self.container_id)
    }
}

/// A single slot action of an item stack request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StackRequestAction {
    Take {
        count: u8,
        source: StackRequestSlotInfo,
        destination: StackRequestSlotInfo,
    },
    Place {
        count: u8,
        source: StackRequestSlotInfo,
        destination: StackRequestSlotInfo,
    },
    Swap {
        source: StackRequestSlotInfo,
        destination: StackRequestSlotInfo,
    },
    Drop {
        count: u8,
        source: StackRequestSlotInfo,
        randomly: bool,
    },
    Destroy {
        count: u8,
        source: StackRequestSlotInfo,
    },
    Consume {
        count: u8,
        source: StackRequestSlotInfo,
    },
    Create {
        results_slot: u8,
    },
    MineBlock {
        hotbar_slot: i32,
        predicted_durability: i32,
        stack_network_id: i32,
    },
    AutoCraftRecipe {
        recipe_network_id: u32,
        times_crafted: u8,
    },
    CraftCreative {
        creative_item_network_id: u32,
    },
    CraftResultsDeprecated {
        result_items: Vec<crate::NetworkItemStack>,
        times_crafted: u8,
    },
    /// An action type this client does not know, kept so requests stay forward compatible.
    Unknown(u8),
}

impl StackRequestAction {
    /// Name of the action kind, used when reporting why a request was rejected.
    pub fn kind(&self) -> &'static str {
        match self {
            StackRequestAction::Take { .. } => "Take",
            StackRequestAction::Place { .. } => "Place",
            StackRequestAction::Swap { .. } => "Swap",
            StackRequestAction::Drop { .. } => "Drop",
            StackRequestAction::Destroy { .. } => "Destroy",
            StackRequestAction::Consume { .. } => "Consume",
            StackRequestAction::Create { .. } => "Create",
            StackRequestAction::MineBlock { .. } => "MineBlock",
            StackRequestAction::AutoCraftRecipe { .. } => "AutoCraftRecipe",
            StackRequestAction::CraftCreative { .. } => "CraftCreative",
            StackRequestAction::CraftResultsDeprecated { .. } => "CraftResultsDeprecated",
            StackRequestAction::Unknown(_) => "Unknown",
        }
    }
}

/// A batch of actions the server applies all at once or not at all.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemStackRequest {
    pub request_id: i32,
    pub actions: Vec<StackRequestAction>,
    pub filter_strings: Vec<String>,
}

pub const ITEM_STACK_RESPONSE_OK: u8 = 0;
pub const ITEM_STACK_RESPONSE_ERROR: u8 = 1;

/// The server's verdict on one [`ItemStackRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemStackResponse {
    pub status: u8,
    pub request_id: i32,
    pub container_info: Vec<StackResponseContainerInfo>,
}

impl ItemStackResponse {
    pub fn is_ok(&self) -> bool {
        self.status == ITEM_STACK_RESPONSE_OK
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StackResponseContainerInfo {
    pub container_id: u8,
    pub slot_info: Vec<StackResponseSlotInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StackResponseSlotInfo {
    pub slot: u8,
    pub hotbar_slot: u8,
    pub count: u8,
    pub stack_network_id: i32,
    pub custom_name: String,
    pub durability_correction: i32,
}
