mod read;

pub use read::{
    ingredients::IngredientSlot, ingredients::IngredientType, CraftingType, Recipe, RecipeResult,
    RecipeType,
};
use std::sync::LazyLock;

const RECIPES_JSON: &str = include_str!("../../../assets/recipes.json");

pub static RECIPES: LazyLock<Vec<Recipe>> = LazyLock::new(|| {
    serde_json::from_str(RECIPES_JSON).expect("Could not parse recipes.json registry.")
});

/// The network id the server assigns to the recipe at `index` of [`RECIPES`]. Network ids start
/// at 1, 0 means "no recipe".
pub fn recipe_network_id(index: usize) -> u32 {
    index as u32 + 1
}

pub fn get_recipe_by_network_id(network_id: u32) -> Option<&'static Recipe> {
    let index = network_id.checked_sub(1)?;
    RECIPES.get(index as usize)
}
