use super::*;

const RECIPE_COLUMNS: &str = "id, title, ingredients_json, original_ingredients_json, \
     baking_percentages, notes, is_favorite, created_at, updated_at";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecipeCounts {
    pub total: i64,
    pub favorites: i64,
}

struct RecipeRow {
    id: String,
    title: String,
    ingredients_json: String,
    original_ingredients_json: Option<String>,
    baking_percentages: Option<String>,
    notes: Option<String>,
    is_favorite: bool,
    created_at: String,
    updated_at: String,
}

impl RecipeRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            ingredients_json: row.get(2)?,
            original_ingredients_json: row.get(3)?,
            baking_percentages: row.get(4)?,
            notes: row.get(5)?,
            is_favorite: row.get(6)?,
            created_at: row.get(7)?,
            updated_at: row.get(8)?,
        })
    }

    fn into_recipe(self) -> Result<Recipe> {
        let ingredients_json: Vec<Ingredient> = serde_json::from_str(&self.ingredients_json)
            .with_context(|| format!("failed to decode ingredients of recipe {}", self.id))?;
        let original_ingredients_json: Option<Vec<Ingredient>> = self
            .original_ingredients_json
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .with_context(|| format!("failed to decode original ingredients of recipe {}", self.id))?;
        let baking_percentages: Option<BTreeMap<String, f64>> = self
            .baking_percentages
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .with_context(|| format!("failed to decode percentages of recipe {}", self.id))?;

        Ok(Recipe {
            id: self.id,
            title: self.title,
            ingredients_json,
            original_ingredients_json,
            baking_percentages,
            notes: self.notes,
            is_favorite: self.is_favorite,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

pub fn create_recipe(
    connection: &Connection,
    title: &str,
    ingredients: &[Ingredient],
    notes: Option<&str>,
) -> Result<Recipe> {
    let now = now_utc_string();
    let percentages = calculate_bakers_percentages(ingredients);
    let recipe = Recipe {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        ingredients_json: ingredients.to_vec(),
        original_ingredients_json: Some(ingredients.to_vec()),
        baking_percentages: (!percentages.is_empty()).then_some(percentages),
        notes: notes.map(str::to_string),
        is_favorite: false,
        created_at: now.clone(),
        updated_at: now,
    };

    connection
        .execute(
            "INSERT INTO recipes(
               id, title, ingredients_json, original_ingredients_json,
               baking_percentages, notes, is_favorite, created_at, updated_at
             ) VALUES(?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                recipe.id,
                recipe.title,
                serde_json::to_string(&recipe.ingredients_json)?,
                serde_json::to_string(&recipe.original_ingredients_json)?,
                recipe
                    .baking_percentages
                    .as_ref()
                    .map(serde_json::to_string)
                    .transpose()?,
                recipe.notes,
                recipe.is_favorite,
                recipe.created_at,
                recipe.updated_at,
            ],
        )
        .with_context(|| format!("failed to insert recipe {}", recipe.id))?;

    info!(
        recipe_id = %recipe.id,
        title = %recipe.title,
        ingredients = recipe.ingredients_json.len(),
        "recipe created"
    );
    Ok(recipe)
}

pub fn fetch_recipe(connection: &Connection, recipe_id: &str) -> Result<Option<Recipe>> {
    let row = connection
        .query_row(
            &format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = ?1"),
            params![recipe_id],
            RecipeRow::from_row,
        )
        .optional()
        .with_context(|| format!("failed to load recipe {recipe_id}"))?;

    row.map(RecipeRow::into_recipe).transpose()
}

pub fn require_recipe(connection: &Connection, recipe_id: &str) -> Result<Recipe> {
    match fetch_recipe(connection, recipe_id)? {
        Some(recipe) => Ok(recipe),
        None => bail!("recipe not found: {recipe_id}"),
    }
}

pub fn list_recipes(connection: &Connection, favorites_only: bool) -> Result<Vec<Recipe>> {
    let mut statement = connection.prepare(&format!(
        "SELECT {RECIPE_COLUMNS} FROM recipes
         WHERE ?1 = 0 OR is_favorite = 1
         ORDER BY created_at DESC, rowid DESC"
    ))?;

    let mut rows = statement.query(params![favorites_only])?;
    let mut recipes = Vec::new();

    while let Some(row) = rows.next()? {
        recipes.push(RecipeRow::from_row(row)?.into_recipe()?);
    }

    debug!(count = recipes.len(), favorites_only, "listed recipes");
    Ok(recipes)
}

pub fn update_recipe_ingredients(
    connection: &Connection,
    recipe_id: &str,
    ingredients: &[Ingredient],
) -> Result<Recipe> {
    let percentages = calculate_bakers_percentages(ingredients);
    let percentages_json = if percentages.is_empty() {
        None
    } else {
        Some(serde_json::to_string(&percentages)?)
    };

    let updated = connection
        .execute(
            "UPDATE recipes
             SET ingredients_json = ?2, baking_percentages = ?3, updated_at = ?4
             WHERE id = ?1",
            params![
                recipe_id,
                serde_json::to_string(ingredients)?,
                percentages_json,
                now_utc_string(),
            ],
        )
        .with_context(|| format!("failed to update recipe {recipe_id}"))?;

    if updated == 0 {
        bail!("recipe not found: {recipe_id}");
    }

    debug!(recipe_id, ingredients = ingredients.len(), "recipe ingredients updated");
    require_recipe(connection, recipe_id)
}

pub fn toggle_favorite(connection: &Connection, recipe_id: &str) -> Result<bool> {
    let updated = connection
        .execute(
            "UPDATE recipes
             SET is_favorite = 1 - is_favorite, updated_at = ?2
             WHERE id = ?1",
            params![recipe_id, now_utc_string()],
        )
        .with_context(|| format!("failed to toggle favorite on recipe {recipe_id}"))?;

    if updated == 0 {
        bail!("recipe not found: {recipe_id}");
    }

    let is_favorite = connection.query_row(
        "SELECT is_favorite FROM recipes WHERE id = ?1",
        params![recipe_id],
        |row| row.get(0),
    )?;
    Ok(is_favorite)
}

pub fn delete_recipe(connection: &Connection, recipe_id: &str) -> Result<bool> {
    let deleted = connection
        .execute("DELETE FROM recipes WHERE id = ?1", params![recipe_id])
        .with_context(|| format!("failed to delete recipe {recipe_id}"))?;
    Ok(deleted > 0)
}

pub fn recipe_counts(connection: &Connection) -> Result<RecipeCounts> {
    let (total, favorites) = connection.query_row(
        "SELECT COUNT(*), COALESCE(SUM(is_favorite), 0) FROM recipes",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    Ok(RecipeCounts { total, favorites })
}
