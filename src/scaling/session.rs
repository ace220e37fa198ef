use super::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientUpdate {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub unit: Option<String>,
    pub is_base: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionView {
    pub calculated_amounts: BTreeMap<String, f64>,
    pub base_amount: f64,
    pub target_amount: f64,
    pub bakers_percentages: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScalingSession {
    ingredients: Vec<Ingredient>,
    original_ingredients: Vec<Ingredient>,
    scaling: ScalingState,
    rounding: RoundingSettings,
}

impl ScalingSession {
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        Self {
            original_ingredients: ingredients.clone(),
            ingredients,
            ..Self::default()
        }
    }

    pub fn from_recipe(recipe: &Recipe) -> Self {
        let mut session = Self::default();
        session.set_ingredients(recipe.ingredients_json.clone());
        session.set_original_ingredients(
            recipe
                .original_ingredients_json
                .clone()
                .unwrap_or_else(|| recipe.ingredients_json.clone()),
        );
        session
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn original_ingredients(&self) -> &[Ingredient] {
        &self.original_ingredients
    }

    pub fn scaling_state(&self) -> &ScalingState {
        &self.scaling
    }

    pub fn rounding(&self) -> RoundingSettings {
        self.rounding
    }

    pub fn set_ingredients(&mut self, ingredients: Vec<Ingredient>) {
        self.ingredients = ingredients;
    }

    pub fn set_original_ingredients(&mut self, ingredients: Vec<Ingredient>) {
        self.original_ingredients = ingredients;
    }

    pub fn set_base_ingredient(&mut self, ingredient_id: Option<String>) {
        self.scaling = std::mem::take(&mut self.scaling).with_base(ingredient_id);
    }

    pub fn set_scaling_ratio(&mut self, ratio: f64) {
        self.scaling = std::mem::take(&mut self.scaling).with_ratio(ratio);
    }

    pub fn toggle_lock(&mut self, ingredient_id: &str) {
        self.scaling = std::mem::take(&mut self.scaling).with_lock_toggled(ingredient_id);
        let locked = self.scaling.is_locked(ingredient_id);
        if let Some(ingredient) = self.find_mut(ingredient_id) {
            ingredient.is_locked = locked;
        }
    }

    pub fn toggle_check(&mut self, ingredient_id: &str) -> bool {
        match self.find_mut(ingredient_id) {
            Some(ingredient) => {
                ingredient.is_checked = !ingredient.is_checked;
                true
            }
            None => false,
        }
    }

    pub fn update_ingredient(&mut self, ingredient_id: &str, update: IngredientUpdate) -> bool {
        let Some(ingredient) = self.find_mut(ingredient_id) else {
            return false;
        };

        if let Some(name) = update.name {
            ingredient.name = name;
        }
        if let Some(amount) = update.amount {
            ingredient.amount = amount;
        }
        if let Some(unit) = update.unit {
            ingredient.unit = unit;
        }
        if let Some(is_base) = update.is_base {
            ingredient.is_base = is_base;
        }
        true
    }

    pub fn set_rounding(&mut self, mode: RoundingMode, decimal_places: u32) {
        self.rounding = RoundingSettings {
            mode,
            decimal_places: if decimal_places == 0 { 1 } else { decimal_places },
        };
    }

    pub fn reset(&mut self) {
        self.scaling = ScalingState::default();
        for ingredient in &mut self.ingredients {
            ingredient.is_locked = false;
        }
        if !self.original_ingredients.is_empty() {
            self.ingredients = self.original_ingredients.clone();
        }
    }

    pub fn compute(&self) -> SessionView {
        let result = calculate_scaling(&self.ingredients, &self.scaling);
        let calculated_amounts = result
            .calculated_amounts
            .into_iter()
            .map(|(id, amount)| (id, self.rounding.apply(amount)))
            .collect();

        SessionView {
            calculated_amounts,
            base_amount: result.base_amount,
            target_amount: result.target_amount,
            bakers_percentages: calculate_bakers_percentages(&self.ingredients),
        }
    }

    fn find_mut(&mut self, ingredient_id: &str) -> Option<&mut Ingredient> {
        self.ingredients
            .iter_mut()
            .find(|ingredient| ingredient.id == ingredient_id)
    }
}
