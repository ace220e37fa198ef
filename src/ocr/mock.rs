use super::*;

pub fn mock_fragments() -> Vec<TextFragment> {
    let rows: [(&str, f64, f64, f64, f64); 18] = [
        ("強力粉", 10.0, 100.0, 60.0, 0.95),
        ("250", 200.0, 105.0, 30.0, 0.98),
        ("g", 235.0, 105.0, 15.0, 0.99),
        ("水", 10.0, 130.0, 30.0, 0.94),
        ("150", 200.0, 135.0, 30.0, 0.97),
        ("ml", 235.0, 135.0, 20.0, 0.99),
        ("塩", 10.0, 160.0, 20.0, 0.92),
        ("5", 200.0, 165.0, 15.0, 0.96),
        ("g", 220.0, 165.0, 15.0, 0.99),
        ("ドライイースト", 10.0, 190.0, 80.0, 0.91),
        ("3", 200.0, 195.0, 15.0, 0.97),
        ("g", 220.0, 195.0, 15.0, 0.99),
        ("砂糖", 10.0, 220.0, 40.0, 0.93),
        ("20", 200.0, 225.0, 20.0, 0.96),
        ("g", 225.0, 225.0, 15.0, 0.99),
        ("バター", 10.0, 250.0, 50.0, 0.94),
        ("30", 200.0, 255.0, 20.0, 0.97),
        ("g", 225.0, 255.0, 15.0, 0.99),
    ];

    rows.iter()
        .map(|(text, x, y, width, confidence)| {
            TextFragment::new(text, *x, *y, *width, 20.0).with_confidence(*confidence)
        })
        .collect()
}
