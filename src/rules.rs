//! Round definitions, guesses, and the per-round win predicates.
//!
//! Everything here is pure: no state, no randomness, no side effects.

use crate::card::{Card, Rank, Suit};

/// One of the five rounds of a ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Round {
    /// Red or black.
    One,
    /// Higher or lower than the previous card.
    Two,
    /// Inside or outside the first two cards.
    Three,
    /// Exact suit.
    Four,
    /// Exact face value.
    Five,
}

impl Round {
    /// All rounds in play order.
    pub const ALL: [Self; 5] = [Self::One, Self::Two, Self::Three, Self::Four, Self::Five];

    /// Returns the round number (1..=5).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the round with the given number.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=5 => Some(Self::ALL[(number - 1) as usize]),
            _ => None,
        }
    }

    /// Returns the zero-based index of the round.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the following round, or `None` after round five.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// Returns the preceding round, or `None` for round one.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    /// Returns whether this is the final round.
    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, Self::Five)
    }
}

/// Round one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Hearts or diamonds.
    Red,
    /// Spades or clubs.
    Black,
}

/// Round two guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Same or higher than the previous card.
    Higher,
    /// Strictly lower than the previous card.
    Lower,
}

/// Round three guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Span {
    /// Within the closed range of the first two cards.
    Inside,
    /// Strictly outside that range.
    Outside,
}

/// A player's guess for a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Guess {
    /// Round one.
    Color(Color),
    /// Round two.
    Direction(Direction),
    /// Round three.
    Span(Span),
    /// Round four.
    Suit(Suit),
    /// Round five.
    Rank(Rank),
}

impl Guess {
    /// Returns the round this guess belongs to.
    #[must_use]
    pub const fn round(self) -> Round {
        match self {
            Self::Color(_) => Round::One,
            Self::Direction(_) => Round::Two,
            Self::Span(_) => Round::Three,
            Self::Suit(_) => Round::Four,
            Self::Rank(_) => Round::Five,
        }
    }

    /// Returns whether the guess can be placed in `round`.
    #[must_use]
    pub fn fits(self, round: Round) -> bool {
        self.round() == round
    }

    /// Lists every legal guess for `round`.
    ///
    /// Round five lists face values in ace-high order.
    #[must_use]
    pub fn options_for(round: Round) -> &'static [Self] {
        const ROUND_ONE: [Guess; 2] = [Guess::Color(Color::Red), Guess::Color(Color::Black)];
        const ROUND_TWO: [Guess; 2] = [
            Guess::Direction(Direction::Higher),
            Guess::Direction(Direction::Lower),
        ];
        const ROUND_THREE: [Guess; 2] = [Guess::Span(Span::Inside), Guess::Span(Span::Outside)];
        const ROUND_FOUR: [Guess; 4] = [
            Guess::Suit(Suit::Spades),
            Guess::Suit(Suit::Hearts),
            Guess::Suit(Suit::Diamonds),
            Guess::Suit(Suit::Clubs),
        ];
        const ROUND_FIVE: [Guess; 13] = {
            let mut guesses = [Guess::Rank(Rank::Two); 13];
            let mut i = 0;
            while i < 13 {
                guesses[i] = Guess::Rank(Rank::ALL[i]);
                i += 1;
            }
            guesses
        };

        match round {
            Round::One => &ROUND_ONE,
            Round::Two => &ROUND_TWO,
            Round::Three => &ROUND_THREE,
            Round::Four => &ROUND_FOUR,
            Round::Five => &ROUND_FIVE,
        }
    }
}

/// Converts a face value to its comparison value (2..=14, ace high).
#[must_use]
pub const fn card_numeric_value(rank: Rank) -> u8 {
    rank.value()
}

/// Round one: wins iff the card colour matches.
#[must_use]
pub const fn round1_wins(guess: Color, card: &Card) -> bool {
    match guess {
        Color::Red => card.is_red(),
        Color::Black => !card.is_red(),
    }
}

/// Round two: `Higher` wins on ties, `Lower` only when strictly lower.
#[must_use]
pub const fn round2_wins(guess: Direction, drawn: u8, previous: u8) -> bool {
    match guess {
        Direction::Higher => drawn >= previous,
        Direction::Lower => drawn < previous,
    }
}

/// Round three: `Inside` is the closed range spanned by the first two cards.
#[must_use]
pub fn round3_wins(guess: Span, drawn: u8, first: u8, second: u8) -> bool {
    let low = first.min(second);
    let high = first.max(second);
    let inside = (low..=high).contains(&drawn);
    match guess {
        Span::Inside => inside,
        Span::Outside => !inside,
    }
}

/// Round four: exact suit.
#[must_use]
pub fn round4_wins(guess: Suit, card: &Card) -> bool {
    card.suit == guess
}

/// Round five: exact face value.
#[must_use]
pub fn round5_wins(guess: Rank, card: &Card) -> bool {
    card.rank == guess
}

/// Evaluates `guess` for `round` against the drawn cards of a ride.
///
/// `drawn` holds every card drawn so far, with the card just drawn last.
/// Returns `None` when the guess does not belong to `round` or when the cards
/// needed for comparison are missing.
#[must_use]
pub fn evaluate(round: Round, guess: Guess, drawn: &[Card]) -> Option<bool> {
    let (card, earlier) = drawn.split_last()?;

    match (round, guess) {
        (Round::One, Guess::Color(color)) => Some(round1_wins(color, card)),
        (Round::Two, Guess::Direction(direction)) => {
            let previous = earlier.last()?;
            Some(round2_wins(
                direction,
                card_numeric_value(card.rank),
                card_numeric_value(previous.rank),
            ))
        }
        (Round::Three, Guess::Span(span)) => {
            let [first, second, ..] = earlier else {
                return None;
            };
            Some(round3_wins(
                span,
                card_numeric_value(card.rank),
                card_numeric_value(first.rank),
                card_numeric_value(second.rank),
            ))
        }
        (Round::Four, Guess::Suit(suit)) => Some(round4_wins(suit, card)),
        (Round::Five, Guess::Rank(rank)) => Some(round5_wins(rank, card)),
        _ => None,
    }
}
