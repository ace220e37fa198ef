use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundingSettings {
    pub mode: RoundingMode,
    pub decimal_places: u32,
}

impl Default for RoundingSettings {
    fn default() -> Self {
        Self {
            mode: RoundingMode::Decimal,
            decimal_places: 1,
        }
    }
}

impl RoundingSettings {
    pub fn apply(self, amount: f64) -> f64 {
        round_amount(amount, self.mode, self.decimal_places)
    }
}

pub fn round_amount(amount: f64, mode: RoundingMode, decimal_places: u32) -> f64 {
    match mode {
        RoundingMode::Integer => amount.round(),
        RoundingMode::Decimal => {
            let multiplier = 10_f64.powi(decimal_places.min(15) as i32);
            (amount * multiplier).round() / multiplier
        }
    }
}
