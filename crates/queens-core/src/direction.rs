//! Vertical movement directions and their wire tokens.

use std::fmt;

/// Direction of a queen's move within its column.
///
/// `Up` means toward row 0, `Down` toward row N-1. Agents address
/// directions by the lowercase tokens `"up"` and `"down"`; the adapter
/// parses them via [`Direction::from_token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0. Refused when the queen is already at row 0.
    Up,
    /// Toward row N-1. Refused when the queen is already at row N-1.
    Down,
}

impl Direction {
    /// Parse an agent-issued direction token.
    ///
    /// Tokens are case-sensitive: only exactly `"up"` or `"down"` are
    /// accepted. Returns `None` for anything else.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            _ => None,
        }
    }

    /// The wire token for this direction.
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_tokens() {
        assert_eq!(Direction::from_token("up"), Some(Direction::Up));
        assert_eq!(Direction::from_token("down"), Some(Direction::Down));
    }

    #[test]
    fn rejects_unknown_and_cased_tokens() {
        assert_eq!(Direction::from_token("Up"), None);
        assert_eq!(Direction::from_token("DOWN"), None);
        assert_eq!(Direction::from_token("left"), None);
        assert_eq!(Direction::from_token(""), None);
    }

    #[test]
    fn token_round_trip() {
        for d in [Direction::Up, Direction::Down] {
            assert_eq!(Direction::from_token(d.as_token()), Some(d));
            assert_eq!(d.to_string(), d.as_token());
        }
    }
}
