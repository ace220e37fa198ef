use super::*;

const DEFAULT_SPECIFIC_GRAVITY: f64 = 1.0;

fn is_weight_unit(unit: &str) -> bool {
    matches!(unit.to_lowercase().as_str(), "g" | "kg")
}

fn is_volume_unit(unit: &str) -> bool {
    matches!(unit.to_lowercase().as_str(), "ml" | "l" | "cc")
}

pub fn convert_unit(amount: f64, from: &str, to: &str, specific_gravity: Option<f64>) -> f64 {
    if from == to {
        return amount;
    }

    let gravity = specific_gravity
        .filter(|value| *value > 0.0)
        .unwrap_or(DEFAULT_SPECIFIC_GRAVITY);

    if is_weight_unit(from) && is_volume_unit(to) {
        return amount / gravity;
    }
    if is_volume_unit(from) && is_weight_unit(to) {
        return amount * gravity;
    }

    debug!(from, to, "unit pair not convertible, returning amount unchanged");
    amount
}
