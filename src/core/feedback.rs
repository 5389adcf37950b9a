//! Per-letter feedback symbols

use std::fmt;

/// Feedback for a single letter position
///
/// The declaration order is the enumeration order used by the pattern
/// generator: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    /// Letter not in the word, or every occurrence already accounted for (black)
    Absent,
    /// Letter in the word at another position (yellow)
    Present,
    /// Letter in the correct position (green)
    Correct,
}

impl Feedback {
    /// All symbols in enumeration order
    pub const ALL: [Self; 3] = [Self::Absent, Self::Present, Self::Correct];

    /// Base-3 digit of this symbol
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    /// Inverse of [`Feedback::digit`]
    #[inline]
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Correct),
            _ => None,
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts letters (`g`/`y`/`b`/`x`, any case), digits (`2`/`1`/`0`),
    /// `-`/`_` for absent, and the usual square emoji.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '2' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '1' | '🟨' => Some(Self::Present),
            'B' | 'b' | 'X' | 'x' | '0' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Emoji square for this symbol
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "green",
            Self::Present => "yellow",
            Self::Absent => "black",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_matches_enumeration() {
        assert!(Feedback::Absent < Feedback::Present);
        assert!(Feedback::Present < Feedback::Correct);
        let mut sorted = Feedback::ALL;
        sorted.sort();
        assert_eq!(sorted, Feedback::ALL);
    }

    #[test]
    fn digits_round_trip() {
        for fb in Feedback::ALL {
            assert_eq!(Feedback::from_digit(fb.digit()), Some(fb));
        }
        assert_eq!(Feedback::from_digit(3), None);
    }

    #[test]
    fn parse_characters() {
        assert_eq!(Feedback::from_char('G'), Some(Feedback::Correct));
        assert_eq!(Feedback::from_char('y'), Some(Feedback::Present));
        assert_eq!(Feedback::from_char('-'), Some(Feedback::Absent));
        assert_eq!(Feedback::from_char('⬛'), Some(Feedback::Absent));
        assert_eq!(Feedback::from_char('🟩'), Some(Feedback::Correct));
        assert_eq!(Feedback::from_char('q'), None);
    }

    #[test]
    fn display_uses_color_names() {
        assert_eq!(Feedback::Absent.to_string(), "black");
        assert_eq!(Feedback::Present.to_string(), "yellow");
        assert_eq!(Feedback::Correct.to_string(), "green");
    }
}
