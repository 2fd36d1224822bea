use pumpkin_world::item::ItemStack;

pub const INVENTORY_SIZE: usize = 36;
pub const HOTBAR_SIZE: usize = 9;
pub const OFF_HAND_SIZE: usize = 1;
pub const ARMOUR_SIZE: usize = 4;
pub const ENDER_CHEST_SIZE: usize = 27;
/// Cursor, crafting grids and output slots.
pub const UI_SIZE: usize = 53;

/// UI slot holding the item on the cursor.
pub const CURSOR_SLOT: u8 = 0;
/// UI slot created craft results are put in.
pub const CREATED_OUTPUT_SLOT: u8 = 50;

/// A fixed-size, ordered sequence of slots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Container {
    slots: Vec<ItemStack>,
}

impl Container {
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![ItemStack::empty(); size],
        }
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn item(&self, slot: usize) -> Option<&ItemStack> {
        self.slots.get(slot)
    }

    /// Replaces the content of `slot`, returning what was in it before. Out of range slots are
    /// left alone and yield `None`.
    pub fn set_item(&mut self, slot: usize, stack: ItemStack) -> Option<ItemStack> {
        self.slots
            .get_mut(slot)
            .map(|current| std::mem::replace(current, stack))
    }

    pub fn slots(&self) -> &[ItemStack] {
        &self.slots
    }

    /// First slot holding a stack `stack` can be added to, skipping slots `skip` rejects.
    pub fn first_stackable(
        &self,
        stack: &ItemStack,
        skip: impl Fn(usize) -> bool,
    ) -> Option<usize> {
        self.slots.iter().enumerate().find_map(|(i, item)| {
            (!skip(i)
                && !item.is_empty()
                && item.comparable(stack)
                && item.count() < item.max_count())
            .then_some(i)
        })
    }

    /// First empty slot, skipping slots `skip` rejects.
    pub fn first_empty(&self, skip: impl Fn(usize) -> bool) -> Option<usize> {
        self.slots
            .iter()
            .enumerate()
            .find_map(|(i, item)| (!skip(i) && item.is_empty()).then_some(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_read() {
        let mut container = Container::new(3);
        assert_eq!(container.size(), 3);
        assert_eq!(container.set_item(1, ItemStack::new(5, 10)), Some(ItemStack::empty()));
        assert_eq!(container.item(1).unwrap().count(), 10);
        assert!(container.set_item(3, ItemStack::new(5, 1)).is_none());
        assert!(container.item(3).is_none());
    }

    #[test]
    fn first_stackable_skips_full_and_marked() {
        let mut container = Container::new(4);
        container.set_item(0, ItemStack::new(5, 64));
        container.set_item(1, ItemStack::new(5, 10));
        container.set_item(2, ItemStack::new(6, 10));
        container.set_item(3, ItemStack::new(5, 1));
        let stack = ItemStack::new(5, 1);

        assert_eq!(container.first_stackable(&stack, |_| false), Some(1));
        assert_eq!(container.first_stackable(&stack, |i| i == 1), Some(3));
        assert_eq!(container.first_empty(|_| false), None);
        container.set_item(2, ItemStack::empty());
        assert_eq!(container.first_empty(|_| false), Some(2));
        assert_eq!(container.first_empty(|i| i == 2), None);
    }
}
