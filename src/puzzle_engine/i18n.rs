//! Fixed phrase tables for Turkish and English.
//!
//! Generators pull their prompts and glyph names from here; the report and
//! display layers read the category labels and hints. Anything that carries
//! generated numbers is formatted by the generator itself.

use crate::puzzle_engine::models::{Color, Language, PuzzleCategory, PuzzleType, Shape, TriangleRule};

pub struct Phrases {
    pub triangle_question: &'static str,
    pub matrix_question: &'static str,
    pub balance_question: &'static str,
    pub cube_question: &'static str,
    pub symbol_question: &'static str,
    pub odd_question: &'static str,
    pub word_question: &'static str,
    pub geo_question: &'static str,
    pub rule_label: &'static str,
    pub units: &'static str,
    pub midpoint_formula: &'static str,
    pub distance_formula: &'static str,
    pub numerical_label: &'static str,
    pub visual_label: &'static str,
    pub logic_label: &'static str,
    pub numerical_hint: &'static str,
    pub visual_hint: &'static str,
    pub logic_hint: &'static str,
    pub congratulations: &'static str,
    pub explanation_unavailable: &'static str,
}

static TR: Phrases = Phrases {
    triangle_question: "Soru işareti yerine hangi sayı gelmelidir?",
    matrix_question: "Diziyi tamamlayan şekil hangisidir?",
    balance_question: "Soru işareti yerine hangisi gelmelidir?",
    cube_question: "Açık hali verilen küpün kapalı hali hangisi olabilir?",
    symbol_question: "İşlemlerin sonucuna göre soru işareti yerine kaç gelmelidir?",
    odd_question: "Farklı olanı bulunuz.",
    word_question: "Problemi çözünüz",
    geo_question: "Geometri problemini çözünüz",
    rule_label: "Kural",
    units: "br",
    midpoint_formula: "Orta Nokta Formülü",
    distance_formula: "Uzaklık Formülü",
    numerical_label: "Sayısal",
    visual_label: "Görsel",
    logic_label: "Sözel/Mantık",
    numerical_hint: "Sayısal Mantık: Temel aritmetik pratikleri yapın.",
    visual_hint: "Görsel Zeka: Şekil döndürme sorularına çalışın.",
    logic_hint: "Sözel Mantık: Denklem kurma becerisini geliştirin.",
    congratulations: "Tebrikler! Zorluk seviyesini artırmayı deneyin.",
    explanation_unavailable: "Yapay zeka açıklaması şu anda kullanılamıyor.",
};

static EN: Phrases = Phrases {
    triangle_question: "Which number replaces the question mark?",
    matrix_question: "Which shape completes the sequence?",
    balance_question: "What replaces the question mark?",
    cube_question: "Which cube can be formed from the net?",
    symbol_question: "What is the result?",
    odd_question: "Find the odd one out.",
    word_question: "Solve the problem",
    geo_question: "Solve the geometry problem",
    rule_label: "Rule",
    units: "units",
    midpoint_formula: "Midpoint Formula",
    distance_formula: "Distance Formula",
    numerical_label: "Numerical",
    visual_label: "Visual",
    logic_label: "Verbal/Logic",
    numerical_hint: "Numerical reasoning: practise basic arithmetic.",
    visual_hint: "Visual reasoning: work on shape rotation questions.",
    logic_hint: "Verbal logic: practise setting up equations.",
    congratulations: "Congratulations! Try a higher difficulty level.",
    explanation_unavailable: "The AI explanation is unavailable right now.",
};

impl Phrases {
    /// Prompt shown above the puzzle.
    pub fn question_for(&self, puzzle_type: PuzzleType) -> &'static str {
        match puzzle_type {
            PuzzleType::TriangleMath   => self.triangle_question,
            PuzzleType::MatrixLogic    => self.matrix_question,
            PuzzleType::BalanceScale   => self.balance_question,
            PuzzleType::CubeFolding    => self.cube_question,
            PuzzleType::SymbolEquation => self.symbol_question,
            PuzzleType::OddOneOut      => self.odd_question,
            PuzzleType::WordProblem    => self.word_question,
            PuzzleType::AnalyticGeo    => self.geo_question,
        }
    }
}

pub fn phrases(language: Language) -> &'static Phrases {
    match language {
        Language::Tr => &TR,
        Language::En => &EN,
    }
}

pub fn shape_name(language: Language, shape: Shape) -> &'static str {
    match (language, shape) {
        (Language::Tr, Shape::Square)   => "kare",
        (Language::Tr, Shape::Circle)   => "daire",
        (Language::Tr, Shape::Triangle) => "üçgen",
        (Language::Tr, Shape::Star)     => "yıldız",
        (Language::En, Shape::Square)   => "square",
        (Language::En, Shape::Circle)   => "circle",
        (Language::En, Shape::Triangle) => "triangle",
        (Language::En, Shape::Star)     => "star",
    }
}

pub fn color_name(language: Language, color: Color) -> &'static str {
    match (language, color) {
        (Language::Tr, Color::Red)    => "kırmızı",
        (Language::Tr, Color::Blue)   => "mavi",
        (Language::Tr, Color::Green)  => "yeşil",
        (Language::Tr, Color::Yellow) => "sarı",
        (Language::En, Color::Red)    => "red",
        (Language::En, Color::Blue)   => "blue",
        (Language::En, Color::Green)  => "green",
        (Language::En, Color::Yellow) => "yellow",
    }
}

pub fn triangle_rule_text(language: Language, rule: TriangleRule) -> &'static str {
    match (language, rule) {
        (Language::En, TriangleRule::SumMinusRight)          => "(Top + Left) - Right = Center",
        (Language::En, TriangleRule::SumAll)                 => "Top + Left + Right = Center",
        (Language::En, TriangleRule::ProductPlusRight)       => "(Top x Left) + Right = Center",
        (Language::En, TriangleRule::AbsDiffTimesLeft)       => "|Top - Right| x Left = Center",
        (Language::En, TriangleRule::DoubledSum)             => "(Top + Left + Right) x 2 = Center",
        (Language::En, TriangleRule::ProductMinusDoubleLeft) => "(Top x Right) - (Left x 2) = Center",
        (Language::Tr, TriangleRule::SumMinusRight)          => "(Üst + Sol) - Sağ = Orta",
        (Language::Tr, TriangleRule::SumAll)                 => "Üst + Sol + Sağ = Orta",
        (Language::Tr, TriangleRule::ProductPlusRight)       => "(Üst x Sol) + Sağ = Orta",
        (Language::Tr, TriangleRule::AbsDiffTimesLeft)       => "|Üst - Sağ| x Sol = Orta",
        (Language::Tr, TriangleRule::DoubledSum)             => "(Üst + Sol + Sağ) x 2 = Orta",
        (Language::Tr, TriangleRule::ProductMinusDoubleLeft) => "(Üst x Sağ) - (Sol x 2) = Orta",
    }
}

/// Direction text for a matrix step of +1, -1 or +2 quarter turns.
pub fn rotation_text(language: Language, step: i8) -> &'static str {
    match (language, step) {
        (Language::En, 1)  => "90° clockwise",
        (Language::En, -1) => "90° counter-clockwise",
        (Language::Tr, 1)  => "saat yönünde 90°",
        (Language::Tr, -1) => "saat tersi yönünde 90°",
        _                  => "180°",
    }
}

pub fn category_label(language: Language, category: PuzzleCategory) -> &'static str {
    let p = phrases(language);
    match category {
        PuzzleCategory::Numerical => p.numerical_label,
        PuzzleCategory::Visual    => p.visual_label,
        PuzzleCategory::Logic     => p.logic_label,
    }
}

/// The one remediation hint shown when a category falls below the threshold.
pub fn remediation_hint(language: Language, category: PuzzleCategory) -> &'static str {
    let p = phrases(language);
    match category {
        PuzzleCategory::Numerical => p.numerical_hint,
        PuzzleCategory::Visual    => p.visual_hint,
        PuzzleCategory::Logic     => p.logic_hint,
    }
}

// ---------------------------------------------------------------------------
// Turkish case suffixes
// ---------------------------------------------------------------------------

fn tr_vowel(c: char) -> Option<char> {
    match c {
        'a' | 'A' => Some('a'),
        'ı' | 'I' => Some('ı'),
        'o' | 'O' => Some('o'),
        'u' | 'U' => Some('u'),
        'e' | 'E' => Some('e'),
        'i' | 'İ' => Some('i'),
        'ö' | 'Ö' => Some('ö'),
        'ü' | 'Ü' => Some('ü'),
        _ => None,
    }
}

fn last_vowel(word: &str) -> char {
    word.chars().rev().find_map(tr_vowel).unwrap_or('e')
}

fn ends_with_vowel(word: &str) -> bool {
    word.chars().last().and_then(tr_vowel).is_some()
}

fn ends_voiceless(word: &str) -> bool {
    word.chars()
        .last()
        .is_some_and(|c| "fstkçşhpFSTKÇŞHP".contains(c))
}

/// Ablative suffix for a proper name: `Ayşe'den`, `Can'dan`, `Mehmet'ten`.
pub fn tr_ablative(name: &str) -> String {
    let d = if ends_voiceless(name) { 't' } else { 'd' };
    let v = match last_vowel(name) {
        'a' | 'ı' | 'o' | 'u' => 'a',
        _ => 'e',
    };
    format!("{name}'{d}{v}n")
}

/// Genitive suffix for a proper name: `Ayşe'nin`, `Can'ın`, `Mehmet'in`.
pub fn tr_genitive(name: &str) -> String {
    let v = match last_vowel(name) {
        'a' | 'ı' => 'ı',
        'o' | 'u' => 'u',
        'ö' | 'ü' => 'ü',
        _ => 'i',
    };
    if ends_with_vowel(name) {
        format!("{name}'n{v}n")
    } else {
        format!("{name}'{v}n")
    }
}
