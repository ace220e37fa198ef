use super::*;

fn gram_multiplier(unit: &str) -> f64 {
    match unit.to_lowercase().as_str() {
        "g" => 1.0,
        "kg" => 1000.0,
        "ml" | "cc" => 1.0,
        "l" => 1000.0,
        "個" | "つ" => 50.0,
        "tsp" | "小さじ" => 5.0,
        "tbsp" | "大さじ" => 15.0,
        _ => 1.0,
    }
}

pub fn convert_to_grams(amount: f64, unit: &str) -> f64 {
    amount * gram_multiplier(unit)
}

pub fn calculate_bakers_percentages(ingredients: &[Ingredient]) -> BTreeMap<String, f64> {
    let flour_total = ingredients
        .iter()
        .filter(|ingredient| ingredient.is_base)
        .map(|ingredient| convert_to_grams(ingredient.amount, &ingredient.unit))
        .sum::<f64>();

    if flour_total == 0.0 {
        return BTreeMap::new();
    }

    ingredients
        .iter()
        .map(|ingredient| {
            let grams = convert_to_grams(ingredient.amount, &ingredient.unit);
            let percentage = round_amount(grams / flour_total * 100.0, RoundingMode::Decimal, 2);
            (ingredient.id.clone(), percentage)
        })
        .collect()
}
