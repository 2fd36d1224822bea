use std::collections::HashMap;
use std::sync::Arc;

use pumpkin_world::block::Block;

use super::container_block::{BlockMetadata, ContainerBlock};

/// Maps block names to the container behaviour they have.
#[derive(Default)]
pub struct ContainerBlockManager {
    blocks: HashMap<String, Arc<dyn ContainerBlock>>,
}

impl ContainerBlockManager {
    pub fn register<T: ContainerBlock + BlockMetadata + 'static>(&mut self, block: T) {
        self.blocks.insert(block.name(), Arc::new(block));
    }

    /// Registers `block` under an explicit name, for block families sharing one implementation.
    pub fn register_as(&mut self, name: impl Into<String>, block: Arc<dyn ContainerBlock>) {
        self.blocks.insert(name.into(), block);
    }

    #[must_use]
    pub fn get_container_block(&self, block: &Block) -> Option<&Arc<dyn ContainerBlock>> {
        self.blocks.get(block.name.as_str())
    }

    pub fn is_smelter(&self, block: &Block) -> bool {
        self.get_container_block(block)
            .is_some_and(|container| container.is_smelter())
    }
}
