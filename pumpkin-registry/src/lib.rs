//! Static game data the bot needs to build inventory requests: crafting recipes and item tags.
//!
//! Both registries are embedded into the binary and parsed lazily on first access.

mod recipe;
mod tags;

pub use recipe::{
    get_recipe_by_network_id, recipe_network_id, CraftingType, IngredientSlot, IngredientType,
    Recipe, RecipeResult, RecipeType, RECIPES,
};
pub use tags::{get_tag_values, resolve_item_tag, TagType, ITEM_TAGS};
