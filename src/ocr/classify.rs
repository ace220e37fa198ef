use super::*;

pub(super) const DEFAULT_INGREDIENT_THRESHOLD: u32 = 40;

const END_OF_INGREDIENT_MARKERS: [&str; 6] = ["作り方", "手順", "工程", "ステップ", "STEP", "下準備"];

static EXCLUSION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^材料",
        r"\d+\s*人分",
        r"\d+\s*(?:個|枚|本|台|切れ|斤)分",
        r"約\s*\d+",
        r"(?i)\d+\s*(?:cm|mm)",
        r"\d+\s*[xX×]\s*\d+",
        r"作り方|手順|工程|下準備|ステップ|ポイント",
        r"(?i)^step\s*\d*",
        r"オーブン|ボウル|天板|クッキングシート|オーブンシート|ラップ|泡立て器|ゴムべら|ゴムベラ|めん棒|麺棒|鍋|フライパン|ホームベーカリー|型",
        r"^\d+\s*(?:分|秒|時間|度|℃|°C)(?:\s|$)",
        r"^\d+\s*[.)．）]\s*\D",
        r"^[(（]\d+[)）]",
        r"^[①-⑳]",
        r"^(?:混ぜ|焼|こね|捏ね|加え|入れ|溶か|冷ま|丸め|伸ば|のば|包ん|休ませ|寝かせ)",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("valid exclusion regex"))
    .collect()
});

static UNIT_PRESENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\d\s*(?:kg|g|ml|l|cc|個|本|枚|丁|束|把|袋|パック|缶|切れ)(?:[^a-z]|$)|大さじ|小さじ|カップ|\btbsp\b|\btsp\b|\bcups?\b",
    )
    .expect("valid unit presence regex")
});

static INGREDIENT_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"材料\s*[（(]\s*\d").expect("valid ingredient header regex"));

pub fn is_header_or_description(text: &str) -> bool {
    let trimmed = text.trim();
    EXCLUSION_PATTERNS
        .iter()
        .any(|pattern| pattern.is_match(trimmed))
}

pub fn calculate_ingredient_score(text: &str) -> u32 {
    if is_header_or_description(text) {
        return 0;
    }

    let trimmed = text.trim();
    let mut score = 0_i32;

    match find_ingredient_keyword(trimmed) {
        Some(keyword) => {
            score += 50;
            if extract_ingredient_name(trimmed)
                .to_lowercase()
                .contains(keyword)
            {
                score += 10;
            }
        }
        None => {
            if contains_short_ingredient_word(trimmed) {
                score += 30;
            }
        }
    }

    if ascii_numerals(trimmed)
        .chars()
        .any(|character| character.is_ascii_digit())
    {
        score += 20;
    }
    if UNIT_PRESENCE.is_match(trimmed) {
        score += 15;
    }

    let length = trimmed.chars().count();
    if length <= 2 {
        score -= 20;
    } else if length > 30 {
        score -= 10;
    }

    score.clamp(0, 100) as u32
}

pub fn is_ingredient_line(text: &str, threshold: u32) -> bool {
    calculate_ingredient_score(text) >= threshold
}

pub fn is_ingredient_header(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.starts_with(HEADER_WORD) || INGREDIENT_HEADER.is_match(trimmed)
}

pub fn is_end_of_ingredients(text: &str) -> bool {
    let normalized = text.trim().to_ascii_uppercase();
    END_OF_INGREDIENT_MARKERS
        .iter()
        .any(|marker| normalized.starts_with(marker))
}
