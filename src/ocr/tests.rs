use super::*;

fn fragment(text: &str, x: f64, y: f64) -> TextFragment {
    TextFragment::new(text, x, y, 30.0, 20.0)
}

fn quantity(text: &str) -> (f64, String) {
    let quantity = extract_complex_amount(text).expect("quantity recognized");
    (quantity.amount, quantity.unit)
}

#[test]
fn group_lines_clusters_by_vertical_tolerance() {
    let fragments = vec![
        fragment("強力粉", 10.0, 100.0),
        fragment("250g", 80.0, 102.0),
        fragment("水", 10.0, 150.0),
        fragment("150ml", 50.0, 148.0),
    ];

    let lines = group_lines(&fragments, 15.0).collect::<Vec<Line<'_>>>();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text(), "強力粉 250g");
    assert_eq!(lines[1].text(), "水 150ml");
}

#[test]
fn group_lines_orders_fragments_left_to_right() {
    let fragments = vec![fragment("250g", 80.0, 100.0), fragment("強力粉", 10.0, 100.0)];

    let lines = group_lines(&fragments, DEFAULT_LINE_TOLERANCE).collect::<Vec<Line<'_>>>();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text(), "強力粉 250g");
    assert_eq!(lines[0].y_position(), 100.0);
}

#[test]
fn group_lines_anchors_on_first_fragment_of_each_line() {
    // 112 joins the 100 line, 124 is measured against the 100 anchor and starts a new one.
    let fragments = vec![
        fragment("a", 0.0, 100.0),
        fragment("b", 10.0, 112.0),
        fragment("c", 20.0, 124.0),
    ];

    let lines = group_lines(&fragments, 15.0).collect::<Vec<Line<'_>>>();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].fragments().len(), 2);
    assert_eq!(lines[1].text(), "c");
}

#[test]
fn group_lines_handles_empty_input() {
    assert_eq!(group_lines(&[], DEFAULT_LINE_TOLERANCE).count(), 0);
}

#[test]
fn group_lines_keeps_every_fragment_sorted_by_x() {
    let fragments = mock_fragments();
    let lines = group_lines(&fragments, DEFAULT_LINE_TOLERANCE).collect::<Vec<Line<'_>>>();

    let total = lines.iter().map(|line| line.fragments().len()).sum::<usize>();
    assert_eq!(total, fragments.len());
    for line in &lines {
        assert!(
            line.fragments()
                .windows(2)
                .all(|pair| pair[0].bounding_box.x <= pair[1].bounding_box.x)
        );
    }
}

#[test]
fn extract_complex_amount_reads_integer_with_unit() {
    assert_eq!(quantity("強力粉 250g"), (250.0, "g".to_string()));
    assert_eq!(quantity("水 150 ml"), (150.0, "ml".to_string()));
    assert_eq!(quantity("卵 2個"), (2.0, "個".to_string()));
}

#[test]
fn extract_complex_amount_reads_decimals_and_fractions() {
    assert_eq!(quantity("バター 12.5g"), (12.5, "g".to_string()));
    assert_eq!(quantity("砂糖 1/2カップ"), (0.5, "カップ".to_string()));
    assert_eq!(quantity("砂糖 1と1/2カップ"), (1.5, "カップ".to_string()));
    assert_eq!(quantity("牛乳 2と3/4"), (2.75, "g".to_string()));
}

#[test]
fn extract_complex_amount_reads_spoon_notation() {
    assert_eq!(quantity("砂糖 大さじ1と1/2"), (1.5, "大さじ".to_string()));
    assert_eq!(quantity("塩 小さじ1/2"), (0.5, "小さじ".to_string()));
    assert_eq!(quantity("醤油 大さじ2"), (2.0, "大さじ".to_string()));
    assert_eq!(quantity("塩 小さじ1"), (1.0, "小さじ".to_string()));
    assert_eq!(quantity("oil tbsp 2"), (2.0, "大さじ".to_string()));
}

#[test]
fn extract_complex_amount_reads_full_width_numerals() {
    assert_eq!(quantity("強力粉 ２５０g"), (250.0, "g".to_string()));
    assert_eq!(quantity("バター １２．５g"), (12.5, "g".to_string()));
    assert_eq!(quantity("塩 小さじ１／２"), (0.5, "小さじ".to_string()));
    assert_eq!(quantity("卵 ２個 (100g)"), (2.0, "個".to_string()));
}

#[test]
fn full_width_quantity_lines_are_parsed() {
    assert_eq!(calculate_ingredient_score("強力粉 ２５０g"), 95);

    let parsed = parse_ingredient_line("強力粉 ２５０g", 0.0, 40).expect("ingredient");
    assert_eq!(parsed.name, "強力粉");
    assert_eq!(parsed.amount, 250.0);
    assert_eq!(parsed.unit, "g");
}

#[test]
fn extract_complex_amount_reads_cup_before_fraction() {
    assert_eq!(quantity("牛乳 カップ1と1/2"), (1.5, "カップ".to_string()));
}

#[test]
fn match_quantity_reports_the_winning_grammar() {
    let (grammar, _) = match_quantity("強力粉 250g").expect("matched");
    assert_eq!(grammar, QuantityGrammar::IntegerWithUnit);

    let (grammar, _) = match_quantity("砂糖 大さじ1と1/2").expect("matched");
    assert_eq!(grammar, QuantityGrammar::SpoonFraction);

    let (grammar, _) = match_quantity("強力粉 250").expect("matched");
    assert_eq!(grammar, QuantityGrammar::Integer);
}

#[test]
fn zero_denominator_falls_through_to_lower_grammars() {
    let (grammar, quantity) = match_quantity("砂糖 1/0").expect("matched");
    assert_eq!(grammar, QuantityGrammar::Integer);
    assert_eq!(quantity.amount, 1.0);
}

#[test]
fn extract_complex_amount_returns_none_without_digits() {
    assert!(extract_complex_amount("適量").is_none());
    assert!(extract_complex_amount("塩 少々").is_none());
}

#[test]
fn extract_unit_recognizes_common_units() {
    assert_eq!(extract_unit("250g"), "g");
    assert_eq!(extract_unit("250グラム"), "g");
    assert_eq!(extract_unit("1kg"), "kg");
    assert_eq!(extract_unit("200ml"), "ml");
    assert_eq!(extract_unit("200cc"), "ml");
    assert_eq!(extract_unit("1 l"), "L");
    assert_eq!(extract_unit("大さじ2"), "大さじ");
    assert_eq!(extract_unit("小さじ1"), "小さじ");
    assert_eq!(extract_unit("1カップ"), "カップ");
    assert_eq!(extract_unit("卵2個"), "個");
    assert_eq!(extract_unit("ねぎ1本"), "本");
    assert_eq!(extract_unit("のり2枚"), "枚");
    assert_eq!(extract_unit("卵 2つ"), "個");
}

#[test]
fn extract_unit_defaults_to_grams() {
    assert_eq!(extract_unit("強力粉 250"), "g");
    assert_eq!(extract_unit("2 large eggs"), "g");
}

#[test]
fn extract_ingredient_name_strips_quantities_and_units() {
    assert_eq!(extract_ingredient_name("強力粉 250g"), "強力粉");
    assert_eq!(extract_ingredient_name("水 200ml"), "水");
    assert_eq!(extract_ingredient_name("塩 小さじ1"), "塩");
    assert_eq!(extract_ingredient_name("砂糖 大さじ1と1/2"), "砂糖");
    assert_eq!(extract_ingredient_name("卵 2個"), "卵");
    assert_eq!(extract_ingredient_name("ドライイースト 3 g"), "ドライイースト");
}

#[test]
fn extract_ingredient_name_drops_connectors_next_to_quantities() {
    assert_eq!(extract_ingredient_name("砂糖 大さじ2と小さじ1"), "砂糖");
    assert_eq!(extract_ingredient_name("卵 1個と卵黄1個"), "卵 卵黄");
    assert_eq!(extract_ingredient_name("塩 5g と 胡椒"), "塩 胡椒");
    assert_eq!(extract_ingredient_name("塩と小さじ1"), "塩");
    assert_eq!(extract_ingredient_name("salt 5g and pepper"), "salt pepper");
}

#[test]
fn extract_ingredient_name_keeps_connector_inside_words() {
    assert_eq!(extract_ingredient_name("とうもろこし 1本"), "とうもろこし");
    assert_eq!(extract_ingredient_name("salt and pepper"), "salt and pepper");
}

#[test]
fn extract_ingredient_name_removes_brackets() {
    assert_eq!(extract_ingredient_name("バター（無塩）50g"), "バター無塩");
}

#[test]
fn extract_ingredient_name_keeps_words_containing_unit_letters() {
    assert_eq!(extract_ingredient_name("egg 2"), "egg");
    assert_eq!(extract_ingredient_name("flour 1 cup"), "flour");
}

#[test]
fn extracted_names_never_carry_digits_or_units() {
    let lines = [
        "強力粉 250g",
        "水 150 ml",
        "バター 12.5g",
        "砂糖 1と1/2カップ",
        "塩 小さじ1/2",
        "牛乳 200cc",
        "卵 2個",
        "薄力粉 1kg",
    ];

    for line in lines {
        assert!(extract_complex_amount(line).is_some(), "{line}");
        let name = extract_ingredient_name(line);
        assert!(!name.chars().any(|c| c.is_ascii_digit()), "{line} -> {name}");
        for unit in ["g", "kg", "ml", "cc", "大さじ", "小さじ", "カップ", "個"] {
            assert!(
                name.split_whitespace().all(|token| token != unit),
                "{line} -> {name}"
            );
            assert!(!name.contains("さじ") && !name.contains("カップ"), "{line} -> {name}");
        }
    }
}

#[test]
fn is_header_or_description_detects_structure_and_equipment() {
    assert!(is_header_or_description("材料"));
    assert!(is_header_or_description("材料（4人分）"));
    assert!(is_header_or_description("作り方"));
    assert!(is_header_or_description("手順"));
    assert!(is_header_or_description("STEP 2"));
    assert!(is_header_or_description("オーブン180度"));
    assert!(is_header_or_description("ボウルに入れる"));
    assert!(is_header_or_description("18cm 丸型"));
    assert!(is_header_or_description("1. 粉をふるう"));
    assert!(is_header_or_description("混ぜ合わせる"));
    assert!(is_header_or_description("180℃"));
}

#[test]
fn is_header_or_description_accepts_ingredient_lines() {
    assert!(!is_header_or_description("強力粉 250g"));
    assert!(!is_header_or_description("水 150ml"));
    assert!(!is_header_or_description("牛乳 1.5 カップ"));
    assert!(!is_header_or_description("発酵 60分"));
}

#[test]
fn calculate_ingredient_score_rewards_keywords_and_quantities() {
    assert!(calculate_ingredient_score("強力粉 250g") >= 50);
    assert!(calculate_ingredient_score("強力粉 250g") > calculate_ingredient_score("強力粉"));
    assert_eq!(calculate_ingredient_score("強力粉 250g"), 95);
    assert_eq!(calculate_ingredient_score("強力粉"), 60);
}

#[test]
fn calculate_ingredient_score_vetoes_headers() {
    assert_eq!(calculate_ingredient_score("材料（4人分）"), 0);
    assert_eq!(calculate_ingredient_score("作り方"), 0);
    assert_eq!(calculate_ingredient_score("オーブンを180度に予熱"), 0);
}

#[test]
fn calculate_ingredient_score_penalizes_short_and_long_lines() {
    assert_eq!(calculate_ingredient_score("塩"), 10);
    assert_eq!(calculate_ingredient_score("塩 5g"), 65);
    assert!(calculate_ingredient_score("塩 5g") > calculate_ingredient_score("塩"));

    let long_line = "強力粉はパン用のものを使うと膨らみがよくなりますので250gをおすすめします";
    assert_eq!(calculate_ingredient_score(long_line), 85);
}

#[test]
fn calculate_ingredient_score_stays_within_bounds() {
    for text in ["", "  ", "砂糖 グラニュー糖 20g", "x", "発酵 60分"] {
        assert!(calculate_ingredient_score(text) <= 100, "{text}");
    }
    assert_eq!(calculate_ingredient_score(""), 0);
}

#[test]
fn is_ingredient_line_respects_threshold() {
    assert!(is_ingredient_line("強力粉 250g", 40));
    assert!(is_ingredient_line("水 150ml", 40));
    assert!(is_ingredient_line("塩 小さじ1", 40));
    assert!(!is_ingredient_line("材料（4人分）", 40));
    assert!(!is_ingredient_line("作り方", 40));
    assert!(!is_ingredient_line("オーブンを180度に予熱", 40));

    for text in ["強力粉 250g", "塩", "発酵 60分", "水 150ml"] {
        let score = calculate_ingredient_score(text);
        assert!(!is_ingredient_line(text, score + 1), "{text}");
        assert!(is_ingredient_line(text, score), "{text}");
    }
}

#[test]
fn is_ingredient_header_detects_section_start() {
    assert!(is_ingredient_header("材料"));
    assert!(is_ingredient_header("材料（4人分）"));
    assert!(is_ingredient_header("材料(2個分)"));
    assert!(!is_ingredient_header("作り方"));
    assert!(!is_ingredient_header("強力粉 250g"));
}

#[test]
fn is_end_of_ingredients_detects_section_end() {
    assert!(is_end_of_ingredients("作り方"));
    assert!(is_end_of_ingredients("手順"));
    assert!(is_end_of_ingredients("STEP1"));
    assert!(is_end_of_ingredients("Step 2"));
    assert!(is_end_of_ingredients("下準備"));
    assert!(!is_end_of_ingredients("強力粉 250g"));
}

#[test]
fn parse_ingredient_line_builds_candidate() {
    let parsed = parse_ingredient_line("強力粉 250g", 100.0, 40).expect("ingredient");

    assert_eq!(parsed.name, "強力粉");
    assert_eq!(parsed.amount, 250.0);
    assert_eq!(parsed.unit, "g");
    assert_eq!(parsed.y_position, 100.0);
    assert!((parsed.confidence - 0.95).abs() < 1e-9);
    assert!(parsed.id.starts_with("ing-"));
}

#[test]
fn parse_ingredient_line_rejects_non_ingredients() {
    assert!(parse_ingredient_line("作り方", 100.0, 40).is_none());
    assert!(parse_ingredient_line("強力粉 適量", 100.0, 40).is_none());
    assert!(parse_ingredient_line("250g", 100.0, 0).is_none());
}

#[test]
fn parse_ingredient_line_generates_unique_ids() {
    let first = parse_ingredient_line("強力粉 250g", 0.0, 40).expect("ingredient");
    let second = parse_ingredient_line("強力粉 250g", 0.0, 40).expect("ingredient");
    assert_ne!(first.id, second.id);
}

#[test]
fn extract_timer_reads_minutes_and_label() {
    let timer = extract_timer("一次発酵 60分").expect("timer");
    assert_eq!(timer.step, "一次発酵");
    assert_eq!(timer.minutes, 60);

    assert!(extract_timer("60分").is_none());
    assert!(extract_timer("強力粉 250g").is_none());
}

#[test]
fn parse_ocr_result_reads_canonical_fixture() {
    let result = parse_ocr_result(&mock_fragments());

    let triples = result
        .ingredients
        .iter()
        .map(|ingredient| {
            (
                ingredient.name.as_str(),
                ingredient.amount,
                ingredient.unit.as_str(),
            )
        })
        .collect::<Vec<(&str, f64, &str)>>();

    assert_eq!(
        triples,
        vec![
            ("強力粉", 250.0, "g"),
            ("水", 150.0, "ml"),
            ("塩", 5.0, "g"),
            ("ドライイースト", 3.0, "g"),
            ("砂糖", 20.0, "g"),
            ("バター", 30.0, "g"),
        ]
    );
    assert!(result.timers.is_empty());
}

#[test]
fn parse_ocr_result_is_deterministic_apart_from_ids() {
    let fragments = mock_fragments();
    let first = parse_ocr_result(&fragments);
    let second = parse_ocr_result(&fragments);

    assert_eq!(first.ingredients.len(), second.ingredients.len());
    for (left, right) in first.ingredients.iter().zip(&second.ingredients) {
        assert_eq!(left.name, right.name);
        assert_eq!(left.amount, right.amount);
        assert_eq!(left.unit, right.unit);
        assert_eq!(left.confidence, right.confidence);
        assert_ne!(left.id, right.id);
    }
}

#[test]
fn parse_ocr_result_tracks_ingredient_section() {
    let fragments = vec![
        fragment("材料", 10.0, 50.0),
        fragment("強力粉", 10.0, 100.0),
        fragment("250g", 80.0, 100.0),
        fragment("水", 10.0, 150.0),
        fragment("150ml", 50.0, 150.0),
        fragment("作り方", 10.0, 200.0),
        fragment("一次発酵", 10.0, 250.0),
        fragment("60分", 80.0, 250.0),
    ];

    let result = parse_ocr_result(&fragments);

    assert_eq!(result.ingredients.len(), 2);
    assert_eq!(result.ingredients[0].name, "強力粉");
    // 0.95 score plus the in-section bonus is capped at 1.0.
    assert_eq!(result.ingredients[0].confidence, 1.0);
    assert!((result.ingredients[1].confidence - 0.75).abs() < 1e-9);

    assert_eq!(result.timers.len(), 1);
    assert_eq!(result.timers[0].step, "一次発酵");
    assert_eq!(result.timers[0].minutes, 60);
    assert_eq!(result.timers[0].y_position, 250.0);
}

#[test]
fn parse_ocr_result_strips_connector_from_section_line() {
    let fragments = vec![
        fragment("材料", 10.0, 0.0),
        fragment("砂糖 大さじ2と小さじ1", 10.0, 50.0),
    ];

    let result = parse_ocr_result(&fragments);
    assert_eq!(result.ingredients.len(), 1);
    assert_eq!(result.ingredients[0].name, "砂糖");
    assert_eq!(result.ingredients[0].amount, 2.0);
    assert_eq!(result.ingredients[0].unit, "大さじ");
}

#[test]
fn parse_ocr_result_skips_ingredient_lines_without_quantity() {
    let fragments = vec![
        fragment("強力粉 適量", 10.0, 0.0),
        fragment("一次発酵 60分", 10.0, 50.0),
    ];

    assert!(is_ingredient_line("強力粉 適量", DEFAULT_INGREDIENT_THRESHOLD));
    let result = parse_ocr_result(&fragments);
    assert!(result.ingredients.is_empty());
    assert_eq!(result.timers.len(), 1);
    assert_eq!(result.timers[0].step, "一次発酵");
}

#[test]
fn parse_ocr_result_lowers_threshold_inside_section() {
    // No keyword and no unit: only the digit bonus applies.
    let weak_line = "ピスタチオ 20";
    let score = calculate_ingredient_score(weak_line);
    assert_eq!(score, 20);

    let config = ParserConfig {
        section_threshold: 20,
        ..ParserConfig::default()
    };
    let inside = vec![fragment("材料", 10.0, 0.0), fragment(weak_line, 10.0, 50.0)];
    let outside = vec![fragment(weak_line, 10.0, 50.0)];

    assert_eq!(parse_ocr_result_with(&inside, &config).ingredients.len(), 1);
    assert!(parse_ocr_result_with(&outside, &config).ingredients.is_empty());
}

#[test]
fn parse_ocr_result_handles_empty_input() {
    let result = parse_ocr_result(&[]);
    assert!(result.ingredients.is_empty());
    assert!(result.timers.is_empty());
}

#[test]
fn base_marker_promotes_flour_to_base() {
    let marker = BaseMarker::default();
    let parsed = parse_ingredient_line("強力粉 250g", 100.0, 40).expect("ingredient");
    let ingredient = marker.promote(&parsed);

    assert!(ingredient.is_base);
    assert_eq!(ingredient.y_position, Some(100.0));
    assert!(!marker.is_base("水"));
    assert!(!BaseMarker::new(Vec::new()).is_base("強力粉"));
    assert!(BaseMarker::new(vec!["flour".to_string()]).is_base("bread flour"));
}
