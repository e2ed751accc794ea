//! Rendering testuale delle liste

use crate::api::{Collection, Recipe};
use std::fmt::Write;

/// `name: ingredients - instructions`
pub fn recipe_line(recipe: &Recipe) -> String {
    format!(
        "{}: {} - {}",
        recipe.name, recipe.ingredients, recipe.instructions
    )
}

pub fn render_recipes(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return "Recipes: (none)\n".to_string();
    }

    let mut out = String::from("Recipes:\n");
    for recipe in recipes {
        let _ = writeln!(out, "  [{}] {}", recipe.id, recipe_line(recipe));
    }
    out
}

pub fn render_collections(collections: &[Collection]) -> String {
    if collections.is_empty() {
        return "Collections: (none)\n".to_string();
    }

    let mut out = String::from("Collections:\n");
    for collection in collections {
        let _ = writeln!(out, "  [{}] {}", collection.id, collection.name);
        for recipe in &collection.recipes {
            let _ = writeln!(out, "      - {}", recipe_line(recipe));
        }
    }
    out
}
