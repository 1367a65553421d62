use std::fmt;

use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Red.other(), Player::Yellow);
        assert_eq!(Player::Yellow.other(), Player::Red);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Red.name(), "Red");
        assert_eq!(Player::Yellow.to_string(), "Yellow");
    }

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Seat {
        player: Player,
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let text = toml::to_string(&Seat {
            player: Player::Yellow,
        })
        .unwrap();
        assert_eq!(text.trim(), r#"player = "yellow""#);

        let seat: Seat = toml::from_str(r#"player = "red""#).unwrap();
        assert_eq!(seat.player, Player::Red);
    }

    #[test]
    fn test_serde_rejects_unknown_and_capitalized_names() {
        assert!(toml::from_str::<Seat>(r#"player = "Red""#).is_err());
        assert!(toml::from_str::<Seat>(r#"player = "blue""#).is_err());
    }

    #[test]
    fn test_cell_roundtrip() {
        for player in [Player::Red, Player::Yellow] {
            assert_eq!(player.to_cell().player(), Some(player));
        }
        assert_eq!(Cell::Empty.player(), None);
    }
}
