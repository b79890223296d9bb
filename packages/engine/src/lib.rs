mod card;
mod hand;
mod round;
mod session;
mod shoe;

pub use card::Rank;
pub use hand::{calculate_score, Hand, Score};
pub use round::{dealer_must_draw, resolve, Outcome, Phase, Resolution, Round};
pub use session::{Bet, BetError, Session, SkillLevel, COINS, DEFAULT_BALANCE};
pub use shoe::Shoe;
