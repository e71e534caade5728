//! Card definitions - immutable card data.
//!
//! A `Card` is a cost vector, the color of the bonus it grants and its point
//! value. Cards compare structurally: lexicographic cost, then color, then
//! value. That ordering is what the catalogue iterates in.
//!
//! ## Text Format
//!
//! One card per line: five costs (black red green blue white), a color word
//! and a point value.
//!
//! ```
//! use splendor_anneal::cards::{Card, Color};
//!
//! let card = Card::parse_line("0 2 4 1 0 black 2").unwrap().unwrap();
//! assert_eq!(card.color(), Color::Black);
//! assert_eq!(card.value(), 2);
//! assert_eq!(card.to_string(), "black (2) red 2, green 4, blue 1, ");
//! ```

use serde::{Deserialize, Serialize};

use super::color::{BonusVector, Color, ColorMap, COLOR_COUNT};
use crate::core::{Result, RulesConfig};

/// Point value that marks a tier-3 card.
pub const TIER_THREE_VALUE: u8 = 10;

/// Deck a card belongs to, decided by its point value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Zero-point cards.
    One,
    /// Cards worth 1 to 9 points.
    Two,
    /// Cards carrying the value-10 marker.
    Three,
}

impl Tier {
    /// All tiers, deck order.
    pub const ALL: [Tier; 3] = [Tier::One, Tier::Two, Tier::Three];

    /// Tier for a point value.
    #[must_use]
    pub const fn of_value(value: u8) -> Self {
        match value {
            0 => Tier::One,
            TIER_THREE_VALUE => Tier::Three,
            _ => Tier::Two,
        }
    }

    /// Deck index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Tier::One => 0,
            Tier::Two => 1,
            Tier::Three => 2,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tier-{}", self.index() + 1)
    }
}

/// Immutable card value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    cost: ColorMap<u8>,
    color: Color,
    value: u8,
}

impl Card {
    /// Create a card from a cost vector in black, red, green, blue, white order.
    #[must_use]
    pub const fn new(cost: [u8; COLOR_COUNT], color: Color, value: u8) -> Self {
        Self {
            cost: ColorMap::from_array(cost),
            color,
            value,
        }
    }

    /// Cost vector.
    #[must_use]
    pub fn cost_vector(&self) -> &ColorMap<u8> {
        &self.cost
    }

    /// Color of the bonus this card grants.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Point value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Deck this card belongs to.
    #[must_use]
    pub const fn tier(&self) -> Tier {
        Tier::of_value(self.value)
    }

    /// Tokens needed to buy this card given `bonus`, or `None` if the
    /// purchase is impossible.
    ///
    /// Impossible means some single color falls short by more than
    /// `color_deficit_cap`, or the total shortfall exceeds `token_cap`.
    #[must_use]
    pub fn cost(&self, bonus: &BonusVector, rules: &RulesConfig) -> Option<u32> {
        let mut total = 0u32;
        for (color, &price) in self.cost.iter() {
            let have = u32::from(bonus[color]);
            let price = u32::from(price);
            if have >= price {
                continue;
            }
            if have + rules.color_deficit_cap < price {
                return None;
            }
            total += price - have;
        }
        (total <= rules.token_cap).then_some(total)
    }

    /// Parse one line of card text.
    ///
    /// Returns `Ok(None)` for blank, comment (`#`) and malformed lines, which
    /// callers skip. A well-placed but unknown color word is an error.
    pub fn parse_line(line: &str) -> Result<Option<Card>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut fields = line.split_whitespace();

        let mut cost = [0u8; COLOR_COUNT];
        for slot in &mut cost {
            match fields.next().and_then(|f| f.parse::<u8>().ok()) {
                Some(v) => *slot = v,
                None => return Ok(None),
            }
        }

        let Some(color_word) = fields.next() else {
            return Ok(None);
        };
        let color: Color = color_word.parse()?;

        let Some(value) = fields.next().and_then(|f| f.parse::<u8>().ok()) else {
            return Ok(None);
        };

        Ok(Some(Card::new(cost, color, value)))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) ", self.color, self.value)?;
        for (color, &n) in self.cost.iter() {
            if n > 0 {
                write!(f, "{color} {n}, ")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;

    fn rules() -> RulesConfig {
        RulesConfig::default()
    }

    #[test]
    fn test_parse_line() {
        let card = Card::parse_line("6 0 6 8 6 red 10").unwrap().unwrap();
        assert_eq!(card.cost_vector().as_array(), &[6, 0, 6, 8, 6]);
        assert_eq!(card.color(), Color::Red);
        assert_eq!(card.tier(), Tier::Three);
    }

    #[test]
    fn test_parse_skips_malformed() {
        assert!(Card::parse_line("").unwrap().is_none());
        assert!(Card::parse_line("# comment").unwrap().is_none());
        assert!(Card::parse_line("1 2 3 red 0").unwrap().is_none());
        assert!(Card::parse_line("1 2 3 4 5").unwrap().is_none());
        assert!(Card::parse_line("1 2 3 4 5 red").unwrap().is_none());
        assert!(Card::parse_line("1 2 x 4 5 red 0").unwrap().is_none());
        assert!(Card::parse_line("1 2 3 4 300 red 0").unwrap().is_none());
    }

    #[test]
    fn test_parse_unknown_color_is_error() {
        let err = Card::parse_line("1 1 1 1 1 purple 0").unwrap_err();
        assert!(matches!(err, Error::UnknownColor(_)));
    }

    #[test]
    fn test_tier_of_value() {
        assert_eq!(Tier::of_value(0), Tier::One);
        assert_eq!(Tier::of_value(1), Tier::Two);
        assert_eq!(Tier::of_value(9), Tier::Two);
        assert_eq!(Tier::of_value(10), Tier::Three);
        assert_eq!(Tier::Three.to_string(), "tier-3");
    }

    #[test]
    fn test_ordering_is_cost_then_color_then_value() {
        let a = Card::new([0, 0, 0, 0, 1], Color::White, 0);
        let b = Card::new([0, 0, 0, 1, 0], Color::Black, 0);
        let c = Card::new([0, 0, 0, 1, 0], Color::Red, 0);
        let d = Card::new([0, 0, 0, 1, 0], Color::Red, 3);
        assert!(a < b);
        assert!(b < c);
        assert!(c < d);
    }

    #[test]
    fn test_cost_exact_deficit() {
        let card = Card::new([3, 2, 0, 3, 0], Color::Red, 1);
        let mut bonus = BonusVector::default();
        assert_eq!(card.cost(&bonus, &rules()), Some(8));

        bonus[Color::Black] = 2;
        bonus[Color::Green] = 5;
        assert_eq!(card.cost(&bonus, &rules()), Some(6));
    }

    #[test]
    fn test_cost_single_color_cap() {
        let card = Card::new([0, 5, 0, 0, 0], Color::White, 2);
        let mut bonus = BonusVector::default();
        assert_eq!(card.cost(&bonus, &rules()), None);

        bonus[Color::Red] = 1;
        assert_eq!(card.cost(&bonus, &rules()), Some(4));
    }

    #[test]
    fn test_cost_token_supply_cap() {
        // 4 + 4 + 4 + 1 = 13 tokens.
        let card = Card::new([4, 4, 4, 1, 0], Color::Blue, 1);
        assert_eq!(card.cost(&BonusVector::default(), &rules()), None);

        let card = Card::new([4, 4, 4, 0, 0], Color::Blue, 1);
        assert_eq!(card.cost(&BonusVector::default(), &rules()), Some(12));
    }

    #[test]
    fn test_display() {
        let card = Card::new([6, 8, 6, 6, 0], Color::White, 10);
        assert_eq!(card.to_string(), "white (10) black 6, red 8, green 6, blue 6, ");
    }
}
