use std::borrow::Cow;

use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub amount: f64,
    pub unit: String,
}

impl Quantity {
    fn new(amount: f64, unit: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityGrammar {
    SpoonFraction,
    SpoonDecimal,
    CupFraction,
    MixedFraction,
    Fraction,
    Decimal,
    IntegerWithUnit,
    Integer,
}

static SPOON_FRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(大さじ|小さじ|tbsp|tsp)\s*(?:([0-9]+)\s*(?:と|and|\s)\s*)?([0-9]+)\s*/\s*([0-9]+)")
        .expect("valid spoon fraction regex")
});
static SPOON_DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(大さじ|小さじ|tbsp|tsp)\s*([0-9]+(?:\.[0-9]+)?)").expect("valid spoon regex")
});
static CUP_FRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:カップ|cups?)\s*(?:([0-9]+)\s*(?:と|and|\s)\s*)?([0-9]+)\s*/\s*([0-9]+)")
        .expect("valid cup fraction regex")
});
static MIXED_FRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s*(?:と|and|\s)\s*([0-9]+)\s*/\s*([0-9]+)").expect("valid mixed fraction regex")
});
static FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*/\s*([0-9]+)").expect("valid fraction regex"));
static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]+").expect("valid decimal regex"));
static INTEGER_WITH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*(kg|g|ml|l|cc|個|本|枚|丁|束|把|袋|パック|缶|切れ)(?:[^a-z]|$)")
        .expect("valid integer unit regex")
});
static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid integer regex"));

impl QuantityGrammar {
    pub const CASCADE: [QuantityGrammar; 8] = [
        Self::SpoonFraction,
        Self::SpoonDecimal,
        Self::CupFraction,
        Self::MixedFraction,
        Self::Fraction,
        Self::Decimal,
        Self::IntegerWithUnit,
        Self::Integer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SpoonFraction => "spoon_fraction",
            Self::SpoonDecimal => "spoon_decimal",
            Self::CupFraction => "cup_fraction",
            Self::MixedFraction => "mixed_fraction",
            Self::Fraction => "fraction",
            Self::Decimal => "decimal",
            Self::IntegerWithUnit => "integer_with_unit",
            Self::Integer => "integer",
        }
    }

    pub fn apply(self, text: &str) -> Option<Quantity> {
        match self {
            Self::SpoonFraction => {
                let captures = SPOON_FRACTION.captures(text)?;
                let amount = mixed_amount(
                    captures.get(2).map(|value| value.as_str()),
                    &captures[3],
                    &captures[4],
                )?;
                Some(Quantity::new(amount, spoon_unit(&captures[1])))
            }
            Self::SpoonDecimal => {
                let captures = SPOON_DECIMAL.captures(text)?;
                let amount = captures[2].parse::<f64>().ok()?;
                Some(Quantity::new(amount, spoon_unit(&captures[1])))
            }
            Self::CupFraction => {
                let captures = CUP_FRACTION.captures(text)?;
                let amount = mixed_amount(
                    captures.get(1).map(|value| value.as_str()),
                    &captures[2],
                    &captures[3],
                )?;
                Some(Quantity::new(amount, "カップ"))
            }
            Self::MixedFraction => {
                let captures = MIXED_FRACTION.captures(text)?;
                let amount = mixed_amount(Some(&captures[1]), &captures[2], &captures[3])?;
                Some(Quantity::new(amount, extract_unit(text)))
            }
            Self::Fraction => {
                let captures = FRACTION.captures(text)?;
                let amount = mixed_amount(None, &captures[1], &captures[2])?;
                Some(Quantity::new(amount, extract_unit(text)))
            }
            Self::Decimal => {
                let amount = DECIMAL.find(text)?.as_str().parse::<f64>().ok()?;
                Some(Quantity::new(amount, extract_unit(text)))
            }
            Self::IntegerWithUnit => {
                let captures = INTEGER_WITH_UNIT.captures(text)?;
                let amount = captures[1].parse::<f64>().ok()?;
                Some(Quantity::new(amount, normalize_unit_token(&captures[2])))
            }
            Self::Integer => {
                let amount = INTEGER.find(text)?.as_str().parse::<f64>().ok()?;
                Some(Quantity::new(amount, extract_unit(text)))
            }
        }
    }
}

fn mixed_amount(whole: Option<&str>, numerator: &str, denominator: &str) -> Option<f64> {
    let denominator = denominator.parse::<f64>().ok()?;
    if denominator == 0.0 {
        return None;
    }

    let numerator = numerator.parse::<f64>().ok()?;
    let whole = match whole {
        Some(value) => value.parse::<f64>().ok()?,
        None => 0.0,
    };

    Some(whole + numerator / denominator)
}

pub fn match_quantity(text: &str) -> Option<(QuantityGrammar, Quantity)> {
    let text = ascii_numerals(text);
    QuantityGrammar::CASCADE.iter().find_map(|grammar| {
        grammar.apply(&text).map(|quantity| {
            trace!(grammar = grammar.as_str(), amount = quantity.amount, unit = %quantity.unit, "quantity matched");
            (*grammar, quantity)
        })
    })
}

pub(super) fn ascii_numerals(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_full_width_numeral) {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.chars()
            .map(|character| match character {
                '０'..='９' => char::from(b'0' + (u32::from(character) - u32::from('０')) as u8),
                '．' => '.',
                '／' => '/',
                other => other,
            })
            .collect(),
    )
}

fn is_full_width_numeral(character: char) -> bool {
    matches!(character, '０'..='９' | '．' | '／')
}

pub fn extract_complex_amount(text: &str) -> Option<Quantity> {
    match_quantity(text).map(|(_, quantity)| quantity)
}
