//! Character classification for word scanning

use unicode_general_category::{get_general_category, GeneralCategory};

/// Classification of code points as seen by the word scanner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Unicode White_Space; terminates a word
    Whitespace,
    /// General category L*; kept in the word
    Letter,
    /// General category P*; consumed and stripped, width is tracked
    Punctuation,
    /// Digits, symbols, marks, replacement characters
    Other,
}

/// Classify a code point.
///
/// Whitespace is checked first; no White_Space code point is in category L
/// or P.
pub fn classify(ch: char) -> CharClass {
    if ch.is_whitespace() {
        return CharClass::Whitespace;
    }

    match get_general_category(ch) {
        GeneralCategory::UppercaseLetter
        | GeneralCategory::LowercaseLetter
        | GeneralCategory::TitlecaseLetter
        | GeneralCategory::ModifierLetter
        | GeneralCategory::OtherLetter => CharClass::Letter,
        GeneralCategory::ConnectorPunctuation
        | GeneralCategory::DashPunctuation
        | GeneralCategory::OpenPunctuation
        | GeneralCategory::ClosePunctuation
        | GeneralCategory::InitialPunctuation
        | GeneralCategory::FinalPunctuation
        | GeneralCategory::OtherPunctuation => CharClass::Punctuation,
        _ => CharClass::Other,
    }
}

/// Check if a code point is in general category P.
///
/// ASCII symbols (`$ + < = > ^ ` | ~`) are category S, not punctuation.
pub fn is_punctuation(ch: char) -> bool {
    classify(ch) == CharClass::Punctuation
}
