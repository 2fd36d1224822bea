use pumpkin_core::math::position::WorldPosition;
use pumpkin_protocol::ContainerName;
use pumpkin_world::WorldView;

use crate::block::{ContainerBlockManager, ContainerKind};
use crate::container::{
    Container, ARMOUR_SIZE, ENDER_CHEST_SIZE, INVENTORY_SIZE, OFF_HAND_SIZE, UI_SIZE,
};

/// Entity type whose window is the villager trading screen.
pub const MERCHANT_ENTITY_TYPE: &str = "minecraft:villager_v2";
const MERCHANT_WINDOW_SIZE: usize = 3;

/// Stable identity of a container, used to key all speculative bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKey {
    Inventory,
    OffHand,
    Armour,
    EnderChest,
    Ui,
    OpenedWindow,
}

/// What an opened window is attached to in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowBinding {
    Block(WorldPosition),
    Entity(i64),
}

/// The external container currently presented to the player.
#[derive(Debug, Clone)]
pub struct OpenedWindow {
    pub window_id: u8,
    pub container_type: u8,
    pub binding: WindowBinding,
    pub kind: ContainerKind,
    pub container: Container,
}

/// All containers the client mirrors: the fixed ones every player has, plus at most one opened
/// window.
#[derive(Debug, Clone)]
pub struct Containers {
    inventory: Container,
    off_hand: Container,
    armour: Container,
    ender_chest: Container,
    ui: Container,
    opened: Option<OpenedWindow>,
}

impl Default for Containers {
    fn default() -> Self {
        Self {
            inventory: Container::new(INVENTORY_SIZE),
            off_hand: Container::new(OFF_HAND_SIZE),
            armour: Container::new(ARMOUR_SIZE),
            ender_chest: Container::new(ENDER_CHEST_SIZE),
            ui: Container::new(UI_SIZE),
            opened: None,
        }
    }
}

impl Containers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: ContainerKey) -> Option<&Container> {
        match key {
            ContainerKey::Inventory => Some(&self.inventory),
            ContainerKey::OffHand => Some(&self.off_hand),
            ContainerKey::Armour => Some(&self.armour),
            ContainerKey::EnderChest => Some(&self.ender_chest),
            ContainerKey::Ui => Some(&self.ui),
            ContainerKey::OpenedWindow => self.opened.as_ref().map(|window| &window.container),
        }
    }

    pub fn get_mut(&mut self, key: ContainerKey) -> Option<&mut Container> {
        match key {
            ContainerKey::Inventory => Some(&mut self.inventory),
            ContainerKey::OffHand => Some(&mut self.off_hand),
            ContainerKey::Armour => Some(&mut self.armour),
            ContainerKey::EnderChest => Some(&mut self.ender_chest),
            ContainerKey::Ui => Some(&mut self.ui),
            ContainerKey::OpenedWindow => {
                self.opened.as_mut().map(|window| &mut window.container)
            }
        }
    }

    pub fn inventory(&self) -> &Container {
        &self.inventory
    }

    pub fn opened_window(&self) -> Option<&OpenedWindow> {
        self.opened.as_ref()
    }

    pub fn opened_kind(&self) -> Option<ContainerKind> {
        self.opened.as_ref().map(|window| window.kind)
    }

    /// Installs the window the server just opened, sized after the block or entity it is bound
    /// to. A window on something without known container behaviour is not installed, and any
    /// previously opened window is dropped either way.
    pub fn open_window(
        &mut self,
        window_id: u8,
        container_type: u8,
        binding: WindowBinding,
        world: &dyn WorldView,
        blocks: &ContainerBlockManager,
    ) -> Option<&OpenedWindow> {
        self.opened = None;
        let descriptor = match binding {
            WindowBinding::Entity(unique_id) => (world.entity_type(unique_id).as_deref()
                == Some(MERCHANT_ENTITY_TYPE))
            .then_some((ContainerKind::Merchant, MERCHANT_WINDOW_SIZE)),
            WindowBinding::Block(pos) => world
                .block_at(pos)
                .and_then(|block| blocks.get_container_block(block))
                .map(|container| {
                    let data = world.block_entity_data_at(pos);
                    let descriptor = container.descriptor(data.as_ref());
                    (descriptor.kind, descriptor.size)
                }),
        };
        let Some((kind, size)) = descriptor else {
            log::debug!("Window {window_id} opened on {binding:?} without known container");
            return None;
        };

        Some(self.opened.insert(OpenedWindow {
            window_id,
            container_type,
            binding,
            kind,
            container: Container::new(size),
        }))
    }

    /// Forgets the opened window. Does nothing if none is open. An ender chest window leaves its
    /// last contents in the fixed ender chest container, speculative edits included.
    pub fn close_window(&mut self) -> Option<OpenedWindow> {
        let window = self.opened.take()?;
        if window.kind == ContainerKind::EnderChest {
            for (slot, stack) in window.container.slots().iter().enumerate() {
                self.ender_chest.set_item(slot, stack.clone());
            }
        }
        Some(window)
    }

    /// The kind of container currently standing where the opened window is bound, looked up in
    /// the world again so a window whose block was replaced no longer resolves.
    fn bound_kind(
        &self,
        world: &dyn WorldView,
        blocks: &ContainerBlockManager,
    ) -> Option<ContainerKind> {
        match self.opened.as_ref()?.binding {
            WindowBinding::Block(pos) => {
                let block = world.block_at(pos)?;
                Some(blocks.get_container_block(block)?.kind())
            }
            WindowBinding::Entity(unique_id) => (world.entity_type(unique_id).as_deref()
                == Some(MERCHANT_ENTITY_TYPE))
            .then_some(ContainerKind::Merchant),
        }
    }

    fn bound_is_smelter(&self, world: &dyn WorldView, blocks: &ContainerBlockManager) -> bool {
        match self.opened.as_ref().map(|window| window.binding) {
            Some(WindowBinding::Block(pos)) => {
                world.block_at(pos).is_some_and(|block| blocks.is_smelter(block))
            }
            _ => false,
        }
    }

    /// Maps a wire container id and slot to the container holding it. Ids that only exist while
    /// a specific window is open resolve to nothing otherwise.
    pub fn resolve(
        &self,
        container_id: u8,
        slot: u8,
        world: &dyn WorldView,
        blocks: &ContainerBlockManager,
    ) -> Option<(ContainerKey, u8)> {
        use ContainerName as N;

        let name = ContainerName::from_id(container_id)?;
        let key = match name {
            N::Cursor | N::CraftingInput | N::CreatedOutput => ContainerKey::Ui,
            N::HotBar | N::Inventory | N::CombinedHotBarAndInventory => ContainerKey::Inventory,
            N::OffHand => return Some((ContainerKey::OffHand, 0)),
            N::Armor => ContainerKey::Armour,
            N::FurnaceIngredient
            | N::FurnaceFuel
            | N::FurnaceResult
            | N::BlastFurnaceIngredient
            | N::SmokerIngredient => {
                if !self.bound_is_smelter(world, blocks) {
                    return None;
                }
                ContainerKey::OpenedWindow
            }
            _ => {
                let kind = self.bound_kind(world, blocks)?;
                let (needed, key) = match name {
                    N::LevelEntity => match kind {
                        ContainerKind::Chest | ContainerKind::EnderChest => {
                            (kind, ContainerKey::OpenedWindow)
                        }
                        _ => return None,
                    },
                    N::Barrel => (ContainerKind::Barrel, ContainerKey::OpenedWindow),
                    N::ShulkerBox => (ContainerKind::ShulkerBox, ContainerKey::OpenedWindow),
                    N::AnvilInput | N::AnvilMaterial => (ContainerKind::Anvil, ContainerKey::Ui),
                    N::SmithingTableInput
                    | N::SmithingTableMaterial
                    | N::SmithingTableTemplate => (ContainerKind::SmithingTable, ContainerKey::Ui),
                    N::LoomInput | N::LoomDye | N::LoomMaterial => {
                        (ContainerKind::Loom, ContainerKey::Ui)
                    }
                    N::StonecutterInput => (ContainerKind::Stonecutter, ContainerKey::Ui),
                    N::GrindstoneInput | N::GrindstoneAdditional => {
                        (ContainerKind::Grindstone, ContainerKey::Ui)
                    }
                    N::EnchantingInput | N::EnchantingMaterial => {
                        (ContainerKind::EnchantingTable, ContainerKey::Ui)
                    }
                    N::BeaconPayment => (ContainerKind::Beacon, ContainerKey::Ui),
                    N::TradeIngredientOne
                    | N::TradeIngredientTwo
                    | N::TradeTwoIngredientOne
                    | N::TradeTwoIngredientTwo => (ContainerKind::Merchant, ContainerKey::Ui),
                    _ => return None,
                };
                if kind != needed {
                    return None;
                }
                key
            }
        };
        Some((key, slot))
    }
}
