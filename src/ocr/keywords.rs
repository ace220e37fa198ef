use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum KeywordCategory {
    Flour,
    Liquid,
    Fat,
    Sugar,
    Seasoning,
    Leavening,
    Egg,
    Nuts,
    Chocolate,
    Flavoring,
    Fruit,
    Vegetable,
    Protein,
    Other,
}

impl KeywordCategory {
    pub(super) const ALL: [KeywordCategory; 14] = [
        Self::Flour,
        Self::Liquid,
        Self::Fat,
        Self::Sugar,
        Self::Seasoning,
        Self::Leavening,
        Self::Egg,
        Self::Nuts,
        Self::Chocolate,
        Self::Flavoring,
        Self::Fruit,
        Self::Vegetable,
        Self::Protein,
        Self::Other,
    ];

    pub(super) fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Flour => &[
                "強力粉",
                "薄力粉",
                "中力粉",
                "全粒粉",
                "ライ麦粉",
                "米粉",
                "小麦粉",
                "コーンスターチ",
                "片栗粉",
                "そば粉",
                "きな粉",
                "アーモンドプードル",
                "flour",
            ],
            Self::Liquid => &[
                "牛乳",
                "ミルク",
                "豆乳",
                "生クリーム",
                "ヨーグルト",
                "ぬるま湯",
                "お湯",
                "熱湯",
                "冷水",
                "water",
                "milk",
                "cream",
            ],
            Self::Fat => &[
                "バター",
                "無塩バター",
                "マーガリン",
                "ショートニング",
                "オリーブオイル",
                "サラダ油",
                "ごま油",
                "米油",
                "ラード",
                "butter",
                "oil",
            ],
            Self::Sugar => &[
                "砂糖",
                "グラニュー糖",
                "上白糖",
                "黒糖",
                "きび砂糖",
                "三温糖",
                "粉糖",
                "はちみつ",
                "ハチミツ",
                "蜂蜜",
                "メープルシロップ",
                "モラセス",
                "sugar",
                "honey",
            ],
            Self::Seasoning => &[
                "食塩",
                "天然塩",
                "醤油",
                "しょうゆ",
                "味噌",
                "みそ",
                "みりん",
                "料理酒",
                "こしょう",
                "胡椒",
                "salt",
            ],
            Self::Leavening => &[
                "イースト",
                "ドライイースト",
                "インスタントドライイースト",
                "天然酵母",
                "ベーキングパウダー",
                "重曹",
                "BP",
                "yeast",
                "baking powder",
            ],
            Self::Egg => &["全卵", "卵黄", "卵白", "たまご", "溶き卵", "egg"],
            Self::Nuts => &[
                "アーモンド",
                "ナッツ",
                "くるみ",
                "クルミ",
                "ヘーゼルナッツ",
                "ピーナッツ",
                "ごま",
                "almond",
                "walnut",
            ],
            Self::Chocolate => &[
                "チョコ",
                "チョコレート",
                "チョコチップ",
                "ココア",
                "chocolate",
                "cocoa",
            ],
            Self::Flavoring => &[
                "バニラ",
                "バニラエッセンス",
                "エッセンス",
                "シナモン",
                "抹茶",
                "ラム酒",
                "vanilla",
                "cinnamon",
            ],
            Self::Fruit => &[
                "レーズン",
                "レモン",
                "オレンジ",
                "りんご",
                "リンゴ",
                "バナナ",
                "いちご",
                "ブルーベリー",
                "クランベリー",
                "lemon",
                "banana",
            ],
            Self::Vegetable => &[
                "玉ねぎ",
                "たまねぎ",
                "にんじん",
                "かぼちゃ",
                "じゃがいも",
                "さつまいも",
                "ほうれん草",
                "コーン",
                "onion",
            ],
            Self::Protein => &[
                "ベーコン",
                "ハム",
                "ソーセージ",
                "チーズ",
                "クリームチーズ",
                "ツナ",
                "cheese",
                "bacon",
            ],
            Self::Other => &[
                "スキムミルク",
                "脱脂粉乳",
                "モルト",
                "モルトエキス",
                "ゼラチン",
                "寒天",
                "gelatin",
            ],
        }
    }
}

pub(super) const SHORT_INGREDIENT_WORDS: [&str; 8] = ["水", "塩", "卵", "酒", "酢", "油", "粉", "糖"];

pub(super) const HEADER_WORD: &str = "材料";

static INGREDIENT_KEYWORDS: LazyLock<Vec<String>> = LazyLock::new(|| {
    let mut keywords = KeywordCategory::ALL
        .iter()
        .flat_map(|category| category.keywords().iter())
        .filter(|keyword| keyword.chars().count() >= 2)
        .map(|keyword| keyword.to_lowercase())
        .collect::<Vec<String>>();
    keywords.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    keywords.dedup();
    keywords
});

pub(super) fn find_ingredient_keyword(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    INGREDIENT_KEYWORDS
        .iter()
        .find(|keyword| lowered.contains(keyword.as_str()))
        .map(String::as_str)
}

pub(super) fn contains_short_ingredient_word(text: &str) -> bool {
    !text.contains(HEADER_WORD) && SHORT_INGREDIENT_WORDS.iter().any(|word| text.contains(word))
}
