use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// One of the two sides of the game. Serialized as `1` for the first player and `-1` for the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    pub fn sign(self) -> i8 {
        match self {
            Player::First => 1,
            Player::Second => -1,
        }
    }
}

impl From<Player> for i8 {
    fn from(player: Player) -> Self {
        player.sign()
    }
}

impl TryFrom<i8> for Player {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::First),
            -1 => Ok(Player::Second),
            v => Err(format!("{} is not a valid player, expected 1 or -1", v)),
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.sign())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_an_involution() {
        assert_eq!(Player::First.opponent(), Player::Second);
        assert_eq!(Player::First.opponent().opponent(), Player::First);
    }

    #[test]
    fn test_serializes_as_sign() {
        assert_eq!(serde_json::to_string(&Player::First).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Player::Second).unwrap(), "-1");
        assert_eq!(serde_json::from_str::<Player>("-1").unwrap(), Player::Second);
        assert!(serde_json::from_str::<Player>("0").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Player::First.to_string(), "+1");
        assert_eq!(Player::Second.to_string(), "-1");
    }
}
