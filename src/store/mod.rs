use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info};
use uuid::Uuid;

use crate::model::{Ingredient, Recipe};
use crate::scaling::calculate_bakers_percentages;
use crate::util::{ensure_directory, now_utc_string};

const STORE_SCHEMA_VERSION: &str = "1";

mod db_setup;
mod recipes;

pub use db_setup::open_store;
pub use recipes::{
    create_recipe, delete_recipe, list_recipes, recipe_counts, require_recipe, toggle_favorite,
    update_recipe_ingredients,
};
