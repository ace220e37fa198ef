use super::*;

pub const MIN_RATIO: f64 = 0.1;
pub const MAX_RATIO: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalingState {
    pub base_ingredient_id: Option<String>,
    ratio: f64,
    pub locked_ingredients: BTreeSet<String>,
}

impl Default for ScalingState {
    fn default() -> Self {
        Self {
            base_ingredient_id: None,
            ratio: 1.0,
            locked_ingredients: BTreeSet::new(),
        }
    }
}

impl ScalingState {
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        if !ratio.is_nan() {
            self.ratio = ratio.clamp(MIN_RATIO, MAX_RATIO);
        }
        self
    }

    pub fn with_base(mut self, ingredient_id: Option<String>) -> Self {
        self.base_ingredient_id = ingredient_id;
        self
    }

    pub fn with_lock_toggled(mut self, ingredient_id: &str) -> Self {
        if !self.locked_ingredients.remove(ingredient_id) {
            self.locked_ingredients.insert(ingredient_id.to_string());
        }
        self
    }

    pub fn is_locked(&self, ingredient_id: &str) -> bool {
        self.locked_ingredients.contains(ingredient_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScalingResult {
    pub calculated_amounts: BTreeMap<String, f64>,
    pub base_amount: f64,
    pub target_amount: f64,
}

pub fn calculate_scaling(ingredients: &[Ingredient], state: &ScalingState) -> ScalingResult {
    let base = state
        .base_ingredient_id
        .as_deref()
        .and_then(|id| ingredients.iter().find(|ingredient| ingredient.id == id));

    let Some(base) = base else {
        return ScalingResult {
            calculated_amounts: ingredients
                .iter()
                .map(|ingredient| (ingredient.id.clone(), ingredient.amount))
                .collect(),
            base_amount: 0.0,
            target_amount: 0.0,
        };
    };

    let first_locked = ingredients
        .iter()
        .find(|ingredient| state.is_locked(&ingredient.id));

    let ratio = match first_locked {
        Some(locked) if !state.is_locked(&base.id) => {
            // The locked target is the locked ingredient's own amount, so this is
            // always 1.0: unlocked ingredients stay put whatever ratio was requested.
            let locked_target = locked.amount;
            let reverse_ratio = if locked.amount == 0.0 {
                1.0
            } else {
                locked_target / locked.amount
            };
            debug!(
                locked = %locked.id,
                requested_ratio = state.ratio(),
                reverse_ratio,
                "scaling in reverse-ratio mode"
            );
            reverse_ratio
        }
        _ => state.ratio(),
    };

    let calculated_amounts = ingredients
        .iter()
        .map(|ingredient| {
            let amount = if state.is_locked(&ingredient.id) {
                ingredient.amount
            } else {
                ingredient.amount * ratio
            };
            (ingredient.id.clone(), amount)
        })
        .collect();

    ScalingResult {
        calculated_amounts,
        base_amount: base.amount,
        target_amount: base.amount * ratio,
    }
}
