use crate::model::Ingredient;

use super::*;

static TRAILING_CONNECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\d\s*(?:大さじ|小さじ|カップ|kg|g|ml|l|cc|個|本|枚|丁|束|把|袋|パック|缶|切れ|つ)?)\s*(?:と|and\b)",
    )
    .expect("valid trailing connector regex")
});
static LEADING_CONNECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:と|\band)\s*(大さじ|小さじ|カップ|\d)").expect("valid leading connector regex")
});
static UNIT_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"大さじ|小さじ|カップ|キログラム|グラム|ミリリットル|リットル")
        .expect("valid unit word regex")
});
static COUNTED_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d)\s*(?:個|本|枚|丁|束|把|袋|パック|缶|切れ|つ)").expect("valid counted unit regex")
});
static ASCII_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(^|[^a-z])(?:kg|g|ml|l|cc|tbsp|tsp|cups?)([^a-z]|$)")
        .expect("valid ascii unit regex")
});
static NUMERALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d./．／]+").expect("valid numeral regex"));
static BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[()（）\[\]【】「」〔〕]").expect("valid bracket regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static TIMER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*(\d+)\s*分").expect("valid timer regex"));

pub fn extract_ingredient_name(text: &str) -> String {
    let name = TRAILING_CONNECTOR.replace_all(text, "${1} ");
    let name = LEADING_CONNECTOR.replace_all(&name, " ${1}");
    let name = UNIT_WORDS.replace_all(&name, " ");
    let name = COUNTED_UNIT.replace_all(&name, "${1}");

    // Adjacent tokens share their separator, so one pass can leave the second behind.
    let mut name = name.into_owned();
    loop {
        let stripped = ASCII_UNIT.replace_all(&name, "${1}${2}");
        if stripped == name {
            break;
        }
        name = stripped.into_owned();
    }

    let name = NUMERALS.replace_all(&name, " ");
    let name = BRACKETS.replace_all(&name, "");
    WHITESPACE.replace_all(&name, " ").trim().to_string()
}

pub fn parse_ingredient_line(
    text: &str,
    y_position: f64,
    threshold: u32,
) -> Option<ParsedIngredient> {
    let score = calculate_ingredient_score(text);
    if score < threshold {
        return None;
    }

    let quantity = extract_complex_amount(text)?;
    let name = extract_ingredient_name(text);
    if name.is_empty() {
        return None;
    }

    Some(ParsedIngredient {
        id: new_ingredient_id(),
        name,
        amount: quantity.amount,
        unit: quantity.unit,
        y_position,
        confidence: f64::from(score) / 100.0,
    })
}

pub(super) fn new_ingredient_id() -> String {
    format!("ing-{}", Uuid::new_v4().simple())
}

pub fn extract_timer(text: &str) -> Option<ParsedTimer> {
    let captures = TIMER.captures(text)?;
    let step = captures[1].trim();
    if step.is_empty() {
        return None;
    }

    let minutes = captures[2].parse::<u32>().ok()?;
    Some(ParsedTimer {
        step: step.to_string(),
        minutes,
        y_position: 0.0,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseMarker {
    markers: Vec<String>,
}

impl Default for BaseMarker {
    fn default() -> Self {
        Self {
            markers: vec!["粉".to_string()],
        }
    }
}

impl BaseMarker {
    pub fn new(markers: Vec<String>) -> Self {
        Self {
            markers: markers
                .into_iter()
                .map(|marker| marker.trim().to_string())
                .filter(|marker| !marker.is_empty())
                .collect(),
        }
    }

    pub fn is_base(&self, name: &str) -> bool {
        self.markers.iter().any(|marker| name.contains(marker.as_str()))
    }

    pub fn promote(&self, parsed: &ParsedIngredient) -> Ingredient {
        Ingredient {
            id: parsed.id.clone(),
            name: parsed.name.clone(),
            amount: parsed.amount,
            unit: parsed.unit.clone(),
            y_position: Some(parsed.y_position),
            is_base: self.is_base(&parsed.name),
            is_locked: false,
            is_checked: false,
        }
    }
}
