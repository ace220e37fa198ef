use super::*;

pub(super) const DEFAULT_UNIT: &str = "g";

pub(super) const PIECE_UNITS: [&str; 10] = [
    "個", "本", "枚", "丁", "束", "把", "袋", "パック", "缶", "切れ",
];

struct UnitRule {
    pattern: Regex,
    unit: &'static str,
}

// Checked in order; the first rule that matches anywhere in the text wins.
static UNIT_RULES: LazyLock<Vec<UnitRule>> = LazyLock::new(|| {
    let mut rules = vec![
        (r"(?i)大さじ|(?:\d|\b)tbsp(?:[^a-z]|$)", "大さじ"),
        (r"(?i)小さじ|(?:\d|\b)tsp(?:[^a-z]|$)", "小さじ"),
        (r"(?i)カップ|(?:\d|\b)cups?(?:[^a-z]|$)", "カップ"),
        (r"(?i)キログラム|(?:\d|\b)kg(?:[^a-z]|$)", "kg"),
        (r"(?i)グラム|(?:\d|\b)g(?:[^a-z]|$)", "g"),
        (r"(?i)ミリリットル|(?:\d|\b)(?:ml|cc)(?:[^a-z]|$)", "ml"),
        (r"(?i)リットル|(?:\d|\b)l(?:[^a-z]|$)", "L"),
    ]
    .into_iter()
    .map(|(pattern, unit)| UnitRule {
        pattern: Regex::new(pattern).expect("valid unit regex"),
        unit,
    })
    .collect::<Vec<UnitRule>>();

    for unit in PIECE_UNITS {
        rules.push(UnitRule {
            pattern: Regex::new(&format!(r"\d\s*{unit}")).expect("valid piece unit regex"),
            unit,
        });
    }
    rules.push(UnitRule {
        pattern: Regex::new(r"\d\s*つ").expect("valid counter regex"),
        unit: "個",
    });

    rules
});

pub fn extract_unit(text: &str) -> String {
    UNIT_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(text))
        .map(|rule| rule.unit)
        .unwrap_or(DEFAULT_UNIT)
        .to_string()
}

pub(super) fn normalize_unit_token(token: &str) -> String {
    match token.to_ascii_lowercase().as_str() {
        "kg" => "kg".to_string(),
        "g" => "g".to_string(),
        "ml" | "cc" => "ml".to_string(),
        "l" => "L".to_string(),
        _ => token.to_string(),
    }
}

pub(super) fn spoon_unit(token: &str) -> &'static str {
    if token.contains('大') || token.eq_ignore_ascii_case("tbsp") {
        "大さじ"
    } else {
        "小さじ"
    }
}
