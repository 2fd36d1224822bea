use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// Window id of the player inventory.
pub const WINDOW_ID_INVENTORY: u8 = 0;
pub const WINDOW_ID_OFF_HAND: u8 = 119;
pub const WINDOW_ID_ARMOUR: u8 = 120;
/// Window id of the UI inventory (cursor, crafting grid, created output).
pub const WINDOW_ID_UI: u8 = 124;

/// The container a stack request slot lives in, as numbered on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(u8)]
pub enum ContainerName {
    AnvilInput = 0,
    AnvilMaterial,
    AnvilResultPreview,
    SmithingTableInput,
    SmithingTableMaterial,
    SmithingTableResultPreview,
    Armor,
    LevelEntity,
    BeaconPayment,
    BrewingStandInput,
    BrewingStandResult,
    BrewingStandFuel,
    CombinedHotBarAndInventory,
    CraftingInput,
    CraftingOutputPreview,
    RecipeConstruction,
    RecipeNature,
    RecipeItems,
    RecipeSearch,
    RecipeSearchBar,
    RecipeEquipment,
    RecipeBook,
    EnchantingInput,
    EnchantingMaterial,
    FurnaceFuel,
    FurnaceIngredient,
    FurnaceResult,
    HorseEquip,
    HotBar,
    Inventory,
    ShulkerBox,
    TradeIngredientOne,
    TradeIngredientTwo,
    TradeResultPreview,
    OffHand,
    CompoundCreatorInput,
    CompoundCreatorOutputPreview,
    ElementConstructorOutputPreview,
    MaterialReducerInput,
    MaterialReducerOutput,
    LabTableInput,
    LoomInput,
    LoomDye,
    LoomMaterial,
    LoomResultPreview,
    BlastFurnaceIngredient,
    SmokerIngredient,
    TradeTwoIngredientOne,
    TradeTwoIngredientTwo,
    TradeTwoResultPreview,
    GrindstoneInput,
    GrindstoneAdditional,
    GrindstoneResultPreview,
    StonecutterInput,
    StonecutterResultPreview,
    CartographyInput,
    CartographyAdditional,
    CartographyResultPreview,
    Barrel,
    Cursor,
    CreatedOutput,
    SmithingTableTemplate,
    Crafter,
}

impl ContainerName {
    pub fn from_id(id: u8) -> Option<Self> {
        Self::from_u8(id)
    }

    pub const fn id(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_ids() {
        assert_eq!(ContainerName::from_id(12), Some(ContainerName::CombinedHotBarAndInventory));
        assert_eq!(ContainerName::from_id(7), Some(ContainerName::LevelEntity));
        assert_eq!(ContainerName::Barrel.id(), 58);
        assert_eq!(ContainerName::Cursor.id(), 59);
        assert_eq!(ContainerName::CreatedOutput.id(), 60);
        assert_eq!(ContainerName::SmithingTableTemplate.id(), 61);
        assert_eq!(ContainerName::from_id(200), None);
    }
}
