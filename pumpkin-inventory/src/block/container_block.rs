use pumpkin_world::BlockEntityData;

use super::{ContainerDescriptor, ContainerKind};

pub trait BlockMetadata {
    const NAMESPACE: &'static str;
    const ID: &'static str;
    fn name(&self) -> String {
        format!("{}:{}", Self::NAMESPACE, Self::ID)
    }
}

/// A block that presents a container when the player interacts with it.
pub trait ContainerBlock: Send + Sync {
    fn kind(&self) -> ContainerKind;

    /// The container opening this block yields. `data` is the side data of the block entity at
    /// the opened position, if the server sent any.
    fn descriptor(&self, data: Option<&BlockEntityData>) -> ContainerDescriptor;

    /// Whether the block smelts items and collects experience doing so.
    fn is_smelter(&self) -> bool {
        false
    }
}
