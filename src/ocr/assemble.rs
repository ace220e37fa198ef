use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    pub line_tolerance: f64,
    pub ingredient_threshold: u32,
    pub section_threshold: u32,
    pub section_confidence_bonus: f64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            line_tolerance: DEFAULT_LINE_TOLERANCE,
            ingredient_threshold: DEFAULT_INGREDIENT_THRESHOLD,
            section_threshold: 30,
            section_confidence_bonus: 0.10,
        }
    }
}

pub fn parse_ocr_result(fragments: &[TextFragment]) -> OcrParseResult {
    parse_ocr_result_with(fragments, &ParserConfig::default())
}

pub fn parse_ocr_result_with(fragments: &[TextFragment], config: &ParserConfig) -> OcrParseResult {
    let mut result = OcrParseResult::default();
    let mut in_section = false;
    let mut line_count = 0_usize;

    for line in group_lines(fragments, config.line_tolerance) {
        line_count += 1;
        let text = line.text();
        let y_position = line.y_position();
        debug!(
            line = line_count,
            y = y_position,
            fragments = line.fragments().len(),
            text = %text,
            "grouped line"
        );

        if is_ingredient_header(&text) {
            in_section = true;
            debug!(line = line_count, "ingredient section started");
            continue;
        }
        if is_end_of_ingredients(&text) {
            in_section = false;
            debug!(line = line_count, "ingredient section ended");
            continue;
        }

        let threshold = if in_section {
            config.section_threshold
        } else {
            config.ingredient_threshold
        };

        match parse_ingredient_line(&text, y_position, threshold) {
            Some(mut ingredient) => {
                if in_section {
                    ingredient.confidence =
                        (ingredient.confidence + config.section_confidence_bonus).min(1.0);
                }
                debug!(
                    name = %ingredient.name,
                    amount = ingredient.amount,
                    unit = %ingredient.unit,
                    confidence = ingredient.confidence,
                    "ingredient recognized"
                );
                result.ingredients.push(ingredient);
                continue;
            }
            None if is_ingredient_line(&text, threshold) => {
                debug!(line = line_count, "ingredient-like line without quantity or name");
                continue;
            }
            None => {}
        }

        if is_header_or_description(&text) {
            continue;
        }

        if let Some(mut timer) = extract_timer(&text) {
            timer.y_position = y_position;
            debug!(step = %timer.step, minutes = timer.minutes, "timer recognized");
            result.timers.push(timer);
        }
    }

    info!(
        fragments = fragments.len(),
        lines = line_count,
        ingredients = result.ingredients.len(),
        timers = result.timers.len(),
        "parsed OCR result"
    );

    result
}
