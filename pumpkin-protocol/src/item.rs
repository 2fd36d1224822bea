use pumpkin_world::item::ItemStack;
use serde::{Deserialize, Serialize};

/// An item stack as it is sent over the network, together with the stack network id the server
/// tracks it by.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetworkItemStack {
    pub network_id: i32,
    pub metadata: u32,
    pub count: u16,
    pub stack_network_id: i32,
    pub block_runtime_id: i32,
    pub nbt: Option<fastnbt::Value>,
}

impl NetworkItemStack {
    pub fn is_empty(&self) -> bool {
        self.network_id == 0 || self.count == 0
    }

    /// The durability damage carried in the `Damage` tag of the item's NBT.
    fn damage(&self) -> u16 {
        let Some(fastnbt::Value::Compound(compound)) = &self.nbt else {
            return 0;
        };
        match compound.get("Damage") {
            Some(fastnbt::Value::Int(damage)) => (*damage).clamp(0, i32::from(u16::MAX)) as u16,
            Some(fastnbt::Value::Short(damage)) => (*damage).max(0) as u16,
            _ => 0,
        }
    }
}

impl From<&NetworkItemStack> for ItemStack {
    fn from(stack: &NetworkItemStack) -> Self {
        if stack.is_empty() {
            return ItemStack::empty();
        }
        ItemStack {
            item_id: stack.network_id,
            metadata: stack.metadata.min(u32::from(u16::MAX)) as u16,
            item_count: stack.count.min(u16::from(u8::MAX)) as u8,
            damage: stack.damage(),
            nbt: stack.nbt.clone(),
            stack_id: stack.stack_network_id,
        }
    }
}

impl From<&ItemStack> for NetworkItemStack {
    fn from(stack: &ItemStack) -> Self {
        if stack.is_empty() {
            return Self::default();
        }
        Self {
            network_id: stack.item_id,
            metadata: u32::from(stack.metadata),
            count: u16::from(stack.item_count),
            stack_network_id: stack.stack_id,
            block_runtime_id: 0,
            nbt: stack.nbt.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn converts_to_slot_model() {
        let mut tag = HashMap::new();
        tag.insert("Damage".to_string(), fastnbt::Value::Int(12));
        let network = NetworkItemStack {
            network_id: 257,
            metadata: 0,
            count: 1,
            stack_network_id: 41,
            block_runtime_id: 0,
            nbt: Some(fastnbt::Value::Compound(tag)),
        };
        let stack = ItemStack::from(&network);
        assert_eq!(stack.item_id, 257);
        assert_eq!(stack.count(), 1);
        assert_eq!(stack.damage, 12);
        assert_eq!(stack.stack_id, 41);
    }

    #[test]
    fn block_items_keep_negative_ids() {
        let network = NetworkItemStack {
            network_id: -203,
            count: 5,
            stack_network_id: 7,
            ..Default::default()
        };
        let stack = ItemStack::from(&network);
        assert_eq!((stack.item_id, stack.count()), (-203, 5));
        assert!(!stack.is_empty());
        assert_eq!(NetworkItemStack::from(&stack), network);
    }

    #[test]
    fn empty_network_stack_is_empty_slot() {
        let network = NetworkItemStack {
            network_id: 5,
            count: 0,
            stack_network_id: 9,
            ..Default::default()
        };
        assert_eq!(ItemStack::from(&network), ItemStack::empty());
    }
}
