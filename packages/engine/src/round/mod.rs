use crate::{Hand, Score, Shoe};
use serde::{Deserialize, Serialize};

/// Who takes the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Player,
    Dealer,
    Push,
}

/// An outcome paired with the table talk that goes with it. The message is
/// presentation only; callers branch on the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: Outcome,
    pub message: &'static str,
}

/// House drawing rule: the dealer keeps drawing below 17, stands on any 17
/// or better, stands on a natural, and stops at once if the player has
/// already busted.
pub fn dealer_must_draw(dealer: Score, player: Score) -> bool {
    if player.is_bust() {
        return false;
    }
    match dealer {
        Score::Natural => false,
        Score::Total(total) => total < 17,
    }
}

/// Compare the two final scores. Branch order is rule precedence: a push is
/// checked before naturals, naturals before busts, busts before the plain
/// comparison.
pub fn resolve(player: Score, dealer: Score) -> Resolution {
    if player == dealer {
        return Resolution {
            outcome: Outcome::Push,
            message: "It's a push. Nobody takes the round.",
        };
    }
    match (player, dealer) {
        (Score::Natural, _) => Resolution {
            outcome: Outcome::Player,
            message: "Blackjack! You win.",
        },
        (_, Score::Natural) => Resolution {
            outcome: Outcome::Dealer,
            message: "Dealer has blackjack. You lose.",
        },
        (Score::Total(p), Score::Total(d)) => {
            if p > 21 {
                Resolution {
                    outcome: Outcome::Dealer,
                    message: "You went over. You lose.",
                }
            } else if d > 21 {
                Resolution {
                    outcome: Outcome::Player,
                    message: "Dealer went over. You win.",
                }
            } else if p > d {
                Resolution {
                    outcome: Outcome::Player,
                    message: "You win.",
                }
            } else {
                Resolution {
                    outcome: Outcome::Dealer,
                    message: "You lose.",
                }
            }
        }
    }
}

/// Phase of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    PlayerTurn,
    DealerTurn,
    Settled,
}

/// One round of play: two hands and whose turn it is. The shoe stays with
/// the caller, so a round is plain data with no hidden state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub player: Hand,
    pub dealer: Hand,
    pub phase: Phase,
}

impl Round {
    /// Opening deal: two cards each, alternating. Hands are never scored
    /// before this. If either side opens with a natural, or the player is
    /// dealt 21 outright, the player has no decision to make.
    pub fn deal(shoe: &mut Shoe) -> Self {
        let mut player = Hand::new();
        let mut dealer = Hand::new();
        for _ in 0..2 {
            player.add_card(shoe.deal());
            dealer.add_card(shoe.deal());
        }
        let mut round = Self {
            player,
            dealer,
            phase: Phase::PlayerTurn,
        };
        if round.player_turn_over() {
            round.phase = Phase::DealerTurn;
        }
        round
    }

    pub fn player_score(&self) -> Score {
        self.player.score()
    }

    pub fn dealer_score(&self) -> Score {
        self.dealer.score()
    }

    /// The player keeps choosing while neither side holds a natural and the
    /// player sits below 21.
    fn player_turn_over(&self) -> bool {
        let player = self.player_score();
        if player.is_natural() || self.dealer_score().is_natural() {
            return true;
        }
        matches!(player, Score::Total(total) if total >= 21)
    }

    pub fn can_hit(&self) -> bool {
        self.phase == Phase::PlayerTurn
    }

    /// Deal the player one more card, ending the turn if it settles things.
    pub fn player_hit(&mut self, shoe: &mut Shoe) -> Score {
        if self.phase == Phase::PlayerTurn {
            self.player.add_card(shoe.deal());
            if self.player_turn_over() {
                self.phase = Phase::DealerTurn;
            }
        }
        self.player_score()
    }

    pub fn player_stand(&mut self) {
        if self.phase == Phase::PlayerTurn {
            self.phase = Phase::DealerTurn;
        }
    }

    /// Run the dealer out: draw while the house rule says the dealer must,
    /// then settle the round.
    pub fn play_dealer(&mut self, shoe: &mut Shoe) -> Score {
        while dealer_must_draw(self.dealer_score(), self.player_score()) {
            self.dealer.add_card(shoe.deal());
        }
        self.phase = Phase::Settled;
        self.dealer_score()
    }

    pub fn resolve(&self) -> Resolution {
        resolve(self.player_score(), self.dealer_score())
    }
}
