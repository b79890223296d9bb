use crate::Rank;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of scoring a hand. A two-card 21 outranks any other 21, so it is
/// its own variant instead of a magic total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Score {
    /// Natural blackjack: exactly two cards totalling 21.
    Natural,
    /// Any other total, possibly over 21.
    Total(u8),
}

impl Score {
    pub fn is_natural(&self) -> bool {
        matches!(self, Score::Natural)
    }

    pub fn is_bust(&self) -> bool {
        matches!(self, Score::Total(total) if *total > 21)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Natural => f.write_str("blackjack"),
            Score::Total(total) => write!(f, "{total}"),
        }
    }
}

/// Calculate the score of a blackjack hand.
///
/// The natural check runs on the raw ace-high sum, before any softening:
/// only a hand of exactly two cards totalling 21 qualifies. Hands with
/// three or more cards that happen to reach 21 are an ordinary `Total(21)`.
pub fn calculate_score(cards: &[Rank]) -> Score {
    let mut total = 0;
    let mut aces = 0;

    for rank in cards {
        let value = rank.value();
        if value == 11 {
            aces += 1;
        }
        total += value;
    }

    if cards.len() == 2 && total == 21 {
        return Score::Natural;
    }

    // Count aces as 1 instead of 11 until the hand is back at or under 21
    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    Score::Total(total)
}

/// Ordered cards held by one side during a round. Append-only while the
/// round runs; discarded when it ends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Rank>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn add_card(&mut self, rank: Rank) {
        self.cards.push(rank);
    }

    pub fn score(&self) -> Score {
        calculate_score(&self.cards)
    }

    /// The first card dealt, the one the dealer shows face up.
    pub fn upcard(&self) -> Option<Rank> {
        self.cards.first().copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, rank) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{rank}")?;
        }
        f.write_str("]")
    }
}
