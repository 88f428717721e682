//! The sixteen MBTI type codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the sixteen four-letter codes over {E/I} x {S/N} x {T/F} x {J/P}.
///
/// Variants are declared alphabetically, so the derived `Ord` matches the
/// sorted order of the codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MbtiType {
    Enfj,
    Enfp,
    Entj,
    Entp,
    Esfj,
    Esfp,
    Estj,
    Estp,
    Infj,
    Infp,
    Intj,
    Intp,
    Isfj,
    Isfp,
    Istj,
    Istp,
}

impl MbtiType {
    pub const COUNT: usize = 16;

    pub const ALL: [MbtiType; MbtiType::COUNT] = [
        MbtiType::Enfj,
        MbtiType::Enfp,
        MbtiType::Entj,
        MbtiType::Entp,
        MbtiType::Esfj,
        MbtiType::Esfp,
        MbtiType::Estj,
        MbtiType::Estp,
        MbtiType::Infj,
        MbtiType::Infp,
        MbtiType::Intj,
        MbtiType::Intp,
        MbtiType::Isfj,
        MbtiType::Isfp,
        MbtiType::Istj,
        MbtiType::Istp,
    ];

    pub fn code(self) -> &'static str {
        match self {
            MbtiType::Enfj => "ENFJ",
            MbtiType::Enfp => "ENFP",
            MbtiType::Entj => "ENTJ",
            MbtiType::Entp => "ENTP",
            MbtiType::Esfj => "ESFJ",
            MbtiType::Esfp => "ESFP",
            MbtiType::Estj => "ESTJ",
            MbtiType::Estp => "ESTP",
            MbtiType::Infj => "INFJ",
            MbtiType::Infp => "INFP",
            MbtiType::Intj => "INTJ",
            MbtiType::Intp => "INTP",
            MbtiType::Isfj => "ISFJ",
            MbtiType::Isfp => "ISFP",
            MbtiType::Istj => "ISTJ",
            MbtiType::Istp => "ISTP",
        }
    }
}

impl fmt::Display for MbtiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMbtiTypeError(pub String);

impl fmt::Display for ParseMbtiTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not one of the 16 MBTI type codes", self.0)
    }
}

impl std::error::Error for ParseMbtiTypeError {}

/// Exact, upper-case match. Column headers are compared the same way, so
/// `"infj"` is rejected rather than silently matching the `INFJ` column.
impl FromStr for MbtiType {
    type Err = ParseMbtiTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MbtiType::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| ParseMbtiTypeError(s.to_string()))
    }
}

impl TryFrom<String> for MbtiType {
    type Error = ParseMbtiTypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MbtiType> for String {
    fn from(t: MbtiType) -> Self {
        t.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_codes_are_sorted_and_round_trip() {
        let codes: Vec<&str> = MbtiType::ALL.iter().map(|t| t.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
        for t in MbtiType::ALL {
            assert_eq!(t.code().parse::<MbtiType>(), Ok(t));
        }
    }

    #[test]
    fn rejects_unknown_and_lowercase() {
        assert!("ZZZZ".parse::<MbtiType>().is_err());
        assert!("infj".parse::<MbtiType>().is_err());
    }
}
