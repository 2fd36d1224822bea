mod item_registry;

pub use item_registry::{get_item, get_item_by_id, get_item_name, Item, ITEMS};

/// Max stack size used for items the registry does not know about.
pub const DEFAULT_MAX_STACK: u8 = 64;

/// An item occupying a container slot as the client believes it to be.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ItemStack {
    // The numerical network ID, not the minecraft:item name. Block items have negative IDs.
    pub item_id: i32,
    pub metadata: u16,
    pub item_count: u8,
    pub damage: u16,
    pub nbt: Option<fastnbt::Value>,
    /// The stack network id the server assigned to this stack. Negative values are client-side
    /// placeholders for stacks the server has not confirmed yet, empty stacks carry 0.
    pub stack_id: i32,
}

impl ItemStack {
    pub fn new(item_id: i32, item_count: u8) -> Self {
        Self {
            item_id,
            item_count,
            ..Default::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_stack_id(mut self, stack_id: i32) -> Self {
        self.stack_id = stack_id;
        self
    }

    pub fn with_metadata(mut self, metadata: u16) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0 || self.item_id == 0
    }

    pub fn count(&self) -> u8 {
        if self.item_id == 0 {
            0
        } else {
            self.item_count
        }
    }

    pub fn max_count(&self) -> u8 {
        get_item_by_id(self.item_id)
            .map(|item| item.max_stack)
            .unwrap_or(DEFAULT_MAX_STACK)
    }

    /// Whether both stacks are the same item with the same auxiliary data, ignoring the count and
    /// the stack network id.
    pub fn comparable(&self, other: &Self) -> bool {
        self.item_id == other.item_id
            && self.metadata == other.metadata
            && self.damage == other.damage
            && self.nbt == other.nbt
    }

    /// Returns a copy of this stack with `delta` added to the count. The count never drops below
    /// zero and never grows past the max stack size, unless this stack held nothing and is
    /// adopting a remainder.
    pub fn grow(&self, delta: i32) -> Self {
        let mut count = i32::from(self.item_count).saturating_add(delta);
        if delta > 0 && self.item_count > 0 {
            count = count.min(i32::from(self.max_count()));
        }
        Self {
            item_count: count.clamp(0, i32::from(u8::MAX)) as u8,
            ..self.clone()
        }
    }
}
