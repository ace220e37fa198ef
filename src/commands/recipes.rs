use std::io::{self, Write};

use anyhow::{Result, bail};
use tracing::{info, warn};

use crate::cli::{IngredientIdArgs, RecipeIdArgs, RecipeListArgs, RecipesCommand, SetAmountArgs};
use crate::model::Recipe;
use crate::scaling::{IngredientUpdate, ScalingSession};
use crate::store::{
    delete_recipe, list_recipes, open_store, require_recipe, toggle_favorite,
    update_recipe_ingredients,
};
use crate::util::print_json_pretty;

pub fn run(command: RecipesCommand) -> Result<()> {
    match command {
        RecipesCommand::List(args) => list(args),
        RecipesCommand::Show(args) => show(args),
        RecipesCommand::Favorite(args) => favorite(args),
        RecipesCommand::Delete(args) => delete(args),
        RecipesCommand::Reset(args) => reset(args),
        RecipesCommand::Check(args) => check(args),
        RecipesCommand::SetAmount(args) => set_amount(args),
    }
}

fn list(args: RecipeListArgs) -> Result<()> {
    let connection = open_store(&args.store.resolved_db_path())?;
    let recipes = list_recipes(&connection, args.favorites)?;

    info!(count = recipes.len(), favorites_only = args.favorites, "recipes listed");

    let mut output = io::BufWriter::new(io::stdout().lock());
    for recipe in &recipes {
        writeln!(
            output,
            "{}\t{}{}\t{} ingredients\t{}",
            recipe.id,
            if recipe.is_favorite { "* " } else { "" },
            recipe.title,
            recipe.ingredients_json.len(),
            recipe.created_at,
        )?;
    }
    output.flush()?;
    Ok(())
}

fn show(args: RecipeIdArgs) -> Result<()> {
    let connection = open_store(&args.store.resolved_db_path())?;
    let recipe = require_recipe(&connection, &args.id)?;
    print_json_pretty(&recipe)
}

fn favorite(args: RecipeIdArgs) -> Result<()> {
    let connection = open_store(&args.store.resolved_db_path())?;
    let is_favorite = toggle_favorite(&connection, &args.id)?;
    info!(recipe_id = %args.id, is_favorite, "favorite toggled");
    Ok(())
}

fn delete(args: RecipeIdArgs) -> Result<()> {
    let connection = open_store(&args.store.resolved_db_path())?;
    if delete_recipe(&connection, &args.id)? {
        info!(recipe_id = %args.id, "recipe deleted");
    } else {
        warn!(recipe_id = %args.id, "recipe not found, nothing deleted");
    }
    Ok(())
}

fn reset(args: RecipeIdArgs) -> Result<()> {
    let connection = open_store(&args.store.resolved_db_path())?;
    let recipe = require_recipe(&connection, &args.id)?;

    let mut session = ScalingSession::from_recipe(&recipe);
    if session.original_ingredients().is_empty() {
        warn!(recipe_id = %args.id, "recipe has no original ingredient list");
    }
    session.reset();

    let updated = update_recipe_ingredients(&connection, &args.id, session.ingredients())?;
    info!(
        recipe_id = %args.id,
        ingredients = updated.ingredients_json.len(),
        "recipe ingredients restored"
    );
    print_json_pretty(&updated)
}

fn check(args: IngredientIdArgs) -> Result<()> {
    let connection = open_store(&args.store.resolved_db_path())?;
    let recipe = require_recipe(&connection, &args.id)?;

    let mut session = ScalingSession::from_recipe(&recipe);
    if !session.toggle_check(&args.ingredient_id) {
        bail!(
            "ingredient {} not found in recipe {}",
            args.ingredient_id,
            args.id
        );
    }

    let updated = update_recipe_ingredients(&connection, &args.id, session.ingredients())?;
    info!(
        recipe_id = %args.id,
        ingredient_id = %args.ingredient_id,
        is_checked = ingredient_flag(&updated, &args.ingredient_id),
        "ingredient check toggled"
    );
    Ok(())
}

fn set_amount(args: SetAmountArgs) -> Result<()> {
    if !args.amount.is_finite() || args.amount < 0.0 {
        bail!("amount must be a non-negative number, got {}", args.amount);
    }

    let connection = open_store(&args.store.resolved_db_path())?;
    let recipe = require_recipe(&connection, &args.id)?;

    let mut session = ScalingSession::from_recipe(&recipe);
    let update = IngredientUpdate {
        amount: Some(args.amount),
        ..IngredientUpdate::default()
    };
    if !session.update_ingredient(&args.ingredient_id, update) {
        bail!(
            "ingredient {} not found in recipe {}",
            args.ingredient_id,
            args.id
        );
    }

    let updated = update_recipe_ingredients(&connection, &args.id, session.ingredients())?;
    info!(
        recipe_id = %args.id,
        ingredient_id = %args.ingredient_id,
        amount = args.amount,
        percentages = updated.baking_percentages.as_ref().map_or(0, |map| map.len()),
        "ingredient amount updated"
    );
    print_json_pretty(&updated)
}

fn ingredient_flag(recipe: &Recipe, ingredient_id: &str) -> bool {
    recipe
        .ingredients_json
        .iter()
        .find(|ingredient| ingredient.id == ingredient_id)
        .is_some_and(|ingredient| ingredient.is_checked)
}
