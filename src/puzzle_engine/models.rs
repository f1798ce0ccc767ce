use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::GenerationPolicy;

// ---------------------------------------------------------------------------
// Request-side enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy   => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard   => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy"   => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard"   => Ok(Difficulty::Hard),
            _ => Err(UnknownTag::Difficulty(s.to_string())),
        }
    }
}

/// Output language. Turkish is the default, matching the exam the trainer targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Tr,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Tr, Language::En];
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Tr => write!(f, "tr"),
            Language::En => write!(f, "en"),
        }
    }
}

impl FromStr for Language {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tr" => Ok(Language::Tr),
            "en" => Ok(Language::En),
            _ => Err(UnknownTag::Language(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnknownTag {
    #[error("unknown difficulty: {0}")]
    Difficulty(String),
    #[error("unknown language tag: {0}")]
    Language(String),
    #[error("unknown puzzle type: {0}")]
    PuzzleType(String),
}

// ---------------------------------------------------------------------------
// Archetypes and categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PuzzleCategory {
    Numerical,
    Visual,
    Logic,
}

impl PuzzleCategory {
    /// Report order.
    pub const ALL: [PuzzleCategory; 3] = [
        PuzzleCategory::Numerical,
        PuzzleCategory::Visual,
        PuzzleCategory::Logic,
    ];
}

impl fmt::Display for PuzzleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleCategory::Numerical => write!(f, "NUMERICAL"),
            PuzzleCategory::Visual    => write!(f, "VISUAL"),
            PuzzleCategory::Logic     => write!(f, "LOGIC"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PuzzleType {
    TriangleMath,
    MatrixLogic,
    BalanceScale,
    CubeFolding,
    SymbolEquation,
    OddOneOut,
    WordProblem,
    AnalyticGeo,
}

impl PuzzleType {
    /// Every archetype, in dispatch order.
    pub const ALL: [PuzzleType; 8] = [
        PuzzleType::TriangleMath,
        PuzzleType::MatrixLogic,
        PuzzleType::BalanceScale,
        PuzzleType::CubeFolding,
        PuzzleType::SymbolEquation,
        PuzzleType::OddOneOut,
        PuzzleType::WordProblem,
        PuzzleType::AnalyticGeo,
    ];

    /// Reporting category. Fixed per archetype.
    pub fn category(self) -> PuzzleCategory {
        match self {
            PuzzleType::TriangleMath   => PuzzleCategory::Numerical,
            PuzzleType::SymbolEquation => PuzzleCategory::Numerical,
            PuzzleType::AnalyticGeo    => PuzzleCategory::Numerical,
            PuzzleType::MatrixLogic    => PuzzleCategory::Visual,
            PuzzleType::CubeFolding    => PuzzleCategory::Visual,
            PuzzleType::OddOneOut      => PuzzleCategory::Visual,
            PuzzleType::BalanceScale   => PuzzleCategory::Logic,
            PuzzleType::WordProblem    => PuzzleCategory::Logic,
        }
    }

    /// Wire tag, e.g. `"TRIANGLE_MATH"`.
    pub fn tag(self) -> &'static str {
        match self {
            PuzzleType::TriangleMath   => "TRIANGLE_MATH",
            PuzzleType::MatrixLogic    => "MATRIX_LOGIC",
            PuzzleType::BalanceScale   => "BALANCE_SCALE",
            PuzzleType::CubeFolding    => "CUBE_FOLDING",
            PuzzleType::SymbolEquation => "SYMBOL_EQUATION",
            PuzzleType::OddOneOut      => "ODD_ONE_OUT",
            PuzzleType::WordProblem    => "WORD_PROBLEM",
            PuzzleType::AnalyticGeo    => "ANALYTIC_GEO",
        }
    }

    /// Prefix used for puzzle ids and option ids.
    pub fn id_prefix(self) -> &'static str {
        match self {
            PuzzleType::TriangleMath   => "tri",
            PuzzleType::MatrixLogic    => "mat",
            PuzzleType::BalanceScale   => "bal",
            PuzzleType::CubeFolding    => "cube",
            PuzzleType::SymbolEquation => "sym",
            PuzzleType::OddOneOut      => "odd",
            PuzzleType::WordProblem    => "word",
            PuzzleType::AnalyticGeo    => "geo",
        }
    }

    pub fn from_tag(tag: &str) -> Option<PuzzleType> {
        PuzzleType::ALL.into_iter().find(|t| t.tag() == tag)
    }
}

impl fmt::Display for PuzzleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PuzzleType::TriangleMath   => "Triangle Math",
            PuzzleType::MatrixLogic    => "Matrix Logic",
            PuzzleType::BalanceScale   => "Balance Scale",
            PuzzleType::CubeFolding    => "Cube Folding",
            PuzzleType::SymbolEquation => "Symbol Equation",
            PuzzleType::OddOneOut      => "Odd One Out",
            PuzzleType::WordProblem    => "Word Problem",
            PuzzleType::AnalyticGeo    => "Analytic Geometry",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PuzzleType {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PuzzleType::from_tag(s.trim()).ok_or_else(|| UnknownTag::PuzzleType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Glyphs shared by several archetypes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Square,
    Circle,
    Triangle,
    Star,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// One-letter code used in option values ("RRBR").
    pub fn code(self) -> char {
        match self {
            Color::Red    => 'R',
            Color::Blue   => 'B',
            Color::Green  => 'G',
            Color::Yellow => 'Y',
        }
    }
}

// ---------------------------------------------------------------------------
// Archetype payloads
// ---------------------------------------------------------------------------

/// Triangle rule variants. The center is always `rule.apply(top, left, right)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriangleRule {
    SumMinusRight,
    SumAll,
    ProductPlusRight,
    AbsDiffTimesLeft,
    DoubledSum,
    ProductMinusDoubleLeft,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriangleData {
    pub top: i64,
    pub left: i64,
    pub right: i64,
    pub rule: TriangleRule,
    /// Localized rule text, shown by the renderer under the triangle.
    pub rule_description: String,
}

/// Marks the grid cell the player has to fill in.
pub const MATRIX_SENTINEL: i8 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixData {
    /// Quarter-turn states 0..=3; the bottom-right cell holds [`MATRIX_SENTINEL`].
    pub grid: [[i8; 3]; 3],
    /// Quarter turns added per cell in reading order (+1, -1 or +2).
    pub step: i8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeCount {
    pub shape: Shape,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    pub left: Vec<ShapeCount>,
    pub right: Vec<ShapeCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceData {
    pub scales: Vec<Scale>,
    /// Left pan of the question scale; the right pan is the unknown.
    pub question: Vec<ShapeCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeData {
    /// Symbols on faces 0..=5. Opposite pairs are {0,5}, {1,3}, {2,4}.
    pub net: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Plus,
    Minus,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Plus  => write!(f, "+"),
            Operator::Minus => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquationItem {
    Symbol(Shape),
    Op(Operator),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEquation {
    pub items: Vec<EquationItem>,
    pub result: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEquationData {
    pub equations: Vec<SymbolEquation>,
    /// Left-hand side of the asked equation; its result is the unknown.
    pub question: Vec<EquationItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OddRule {
    Count,
    Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OddOneOutData {
    pub rule: OddRule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPuzzleData {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoKind {
    Midpoint,
    Distance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryData {
    pub kind: GeoKind,
    pub a: Point,
    pub b: Point,
    pub text: String,
    pub sub_text: String,
}

/// Archetype payload. Only the renderer for the matching [`PuzzleType`] reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum PuzzleData {
    Triangle(TriangleData),
    Matrix(MatrixData),
    Balance(BalanceData),
    Cube(CubeData),
    SymbolEquation(SymbolEquationData),
    OddOneOut(OddOneOutData),
    Text(TextPuzzleData),
    Geometry(GeometryData),
}

impl PuzzleData {
    /// Whether this payload is the one the given archetype produces.
    pub fn fits(&self, puzzle_type: PuzzleType) -> bool {
        matches!(
            (puzzle_type, self),
            (PuzzleType::TriangleMath, PuzzleData::Triangle(_))
                | (PuzzleType::MatrixLogic, PuzzleData::Matrix(_))
                | (PuzzleType::BalanceScale, PuzzleData::Balance(_))
                | (PuzzleType::CubeFolding, PuzzleData::Cube(_))
                | (PuzzleType::SymbolEquation, PuzzleData::SymbolEquation(_))
                | (PuzzleType::OddOneOut, PuzzleData::OddOneOut(_))
                | (PuzzleType::WordProblem, PuzzleData::Text(_))
                | (PuzzleType::AnalyticGeo, PuzzleData::Geometry(_))
        )
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Number(n) => write!(f, "{}", n),
            OptionValue::Text(s)   => write!(f, "{}", s),
        }
    }
}

impl OptionValue {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            OptionValue::Number(n) => Some(*n),
            OptionValue::Text(_)   => None,
        }
    }
}

/// Rendering hints for options that are pictures rather than plain values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VisualData {
    Rotation { quarter_turns: u8 },
    Shapes { shape: Shape, count: u32 },
    CubeFaces { faces: [String; 3], face_indices: [usize; 3] },
    Dots { count: u32 },
    ColorGrid { colors: [Color; 4] },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleOption {
    pub id: String,
    pub value: OptionValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_data: Option<VisualData>,
}

// ---------------------------------------------------------------------------
// Puzzle record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: String,
    #[serde(rename = "type")]
    pub puzzle_type: PuzzleType,
    pub category: PuzzleCategory,
    pub difficulty: Difficulty,
    pub data: PuzzleData,
    pub question: String,
    pub options: Vec<PuzzleOption>,
    pub correct_option_id: String,
    pub explanation: String,
}

/// A broken puzzle invariant. Generators never produce these; tests look for them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleDefect {
    #[error("correct option id {0} not found among options")]
    MissingCorrectOption(String),
    #[error("option id {0} appears more than once")]
    DuplicateOptionId(String),
    #[error("option value {0} appears more than once")]
    DuplicateValue(String),
    #[error("expected 4 or 5 options, found {0}")]
    OptionCount(usize),
    #[error("question or explanation text is empty")]
    EmptyText,
    #[error("payload does not belong to {0}")]
    PayloadMismatch(PuzzleType),
    #[error("category {found} does not match {puzzle_type}")]
    CategoryMismatch { puzzle_type: PuzzleType, found: PuzzleCategory },
}

impl Puzzle {
    pub fn option(&self, id: &str) -> Option<&PuzzleOption> {
        self.options.iter().find(|o| o.id == id)
    }

    pub fn correct_option(&self) -> Option<&PuzzleOption> {
        self.option(&self.correct_option_id)
    }

    pub fn is_correct(&self, option_id: &str) -> bool {
        option_id == self.correct_option_id
    }

    /// Collect every broken structural invariant. Empty for a well-formed puzzle.
    pub fn check_invariants(&self) -> Vec<PuzzleDefect> {
        let mut defects = Vec::new();

        if !(4..=5).contains(&self.options.len()) {
            defects.push(PuzzleDefect::OptionCount(self.options.len()));
        }

        let correct_hits = self
            .options
            .iter()
            .filter(|o| o.id == self.correct_option_id)
            .count();
        if correct_hits == 0 {
            defects.push(PuzzleDefect::MissingCorrectOption(self.correct_option_id.clone()));
        }

        let mut ids = HashSet::new();
        let mut values = HashSet::new();
        for opt in &self.options {
            if !ids.insert(opt.id.as_str()) {
                defects.push(PuzzleDefect::DuplicateOptionId(opt.id.clone()));
            }
            if !values.insert(&opt.value) {
                defects.push(PuzzleDefect::DuplicateValue(opt.value.to_string()));
            }
        }

        if self.question.trim().is_empty() || self.explanation.trim().is_empty() {
            defects.push(PuzzleDefect::EmptyText);
        }
        if !self.data.fits(self.puzzle_type) {
            defects.push(PuzzleDefect::PayloadMismatch(self.puzzle_type));
        }
        if self.category != self.puzzle_type.category() {
            defects.push(PuzzleDefect::CategoryMismatch {
                puzzle_type: self.puzzle_type,
                found: self.category,
            });
        }
        defects
    }
}

// ---------------------------------------------------------------------------
// Generation request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleRequest {
    /// `None` picks an archetype uniformly at random.
    #[serde(default)]
    pub puzzle_type: Option<PuzzleType>,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub language: Language,
    /// Fixed seed for reproducible output; `None` draws from OS entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
    #[serde(default)]
    pub policy: GenerationPolicy,
}

impl PuzzleRequest {
    /// Random archetype, entropy seed, default policy.
    pub fn new(difficulty: Difficulty, language: Language) -> Self {
        Self {
            puzzle_type: None,
            difficulty,
            language,
            rng_seed: None,
            policy: GenerationPolicy::default(),
        }
    }

    pub fn with_type(mut self, puzzle_type: PuzzleType) -> Self {
        self.puzzle_type = Some(puzzle_type);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_policy(mut self, policy: GenerationPolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_round_trips_through_its_tag() {
        for t in PuzzleType::ALL {
            assert_eq!(PuzzleType::from_tag(t.tag()), Some(t));
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.tag()));
        }
        assert_eq!(PuzzleType::from_tag("SHAPE_MATH"), None);
    }

    #[test]
    fn language_tags_parse_case_insensitively() {
        assert_eq!("EN".parse::<Language>(), Ok(Language::En));
        assert_eq!(" tr ".parse::<Language>(), Ok(Language::Tr));
        assert!("de".parse::<Language>().is_err());
        assert_eq!(Language::default(), Language::Tr);
    }

    #[test]
    fn categories_are_fixed_per_archetype() {
        let numerical = PuzzleType::ALL
            .iter()
            .filter(|t| t.category() == PuzzleCategory::Numerical)
            .count();
        assert_eq!(numerical, 3);
        assert_eq!(PuzzleType::WordProblem.category(), PuzzleCategory::Logic);
        assert_eq!(PuzzleType::CubeFolding.category(), PuzzleCategory::Visual);
    }

    #[test]
    fn invariant_check_flags_duplicate_values_and_missing_answer() {
        let puzzle = Puzzle {
            id: "tri-0".into(),
            puzzle_type: PuzzleType::TriangleMath,
            category: PuzzleCategory::Numerical,
            difficulty: Difficulty::Easy,
            data: PuzzleData::Text(TextPuzzleData { text: "x".into(), sub_text: None }),
            question: "q".into(),
            options: vec![
                PuzzleOption { id: "a".into(), value: OptionValue::Number(3), visual_data: None },
                PuzzleOption { id: "b".into(), value: OptionValue::Number(3), visual_data: None },
            ],
            correct_option_id: "z".into(),
            explanation: "e".into(),
        };
        let defects = puzzle.check_invariants();
        assert!(defects.contains(&PuzzleDefect::OptionCount(2)));
        assert!(defects.contains(&PuzzleDefect::MissingCorrectOption("z".into())));
        assert!(defects.contains(&PuzzleDefect::DuplicateValue("3".into())));
        assert!(defects.contains(&PuzzleDefect::PayloadMismatch(PuzzleType::TriangleMath)));
    }
}
