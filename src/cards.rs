use std::fmt;
use std::str::FromStr;

/// Card ranks, numbered so that a card ordinal is `rank << 2 | suit`.
///
/// Slot 1 holds the low ace used by ace-to-five decks and slot 12 the knight of
/// some European decks, so the thirteen standard ranks are not contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    LowAce = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Knight = 12,
    Queen = 13,
    King = 14,
    Ace = 15,
}

impl Rank {
    /// The thirteen ranks of a standard deck, deuce to (high) ace.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Raw rank number used in the card encoding (1..=15).
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn from_value(v: u8) -> Option<Rank> {
        match v {
            1 => Some(Rank::LowAce),
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Knight),
            13 => Some(Rank::Queen),
            14 => Some(Rank::King),
            15 => Some(Rank::Ace),
            _ => None,
        }
    }

    /// Rank on the standard poker scale, deuce = 2 through ace = 14.
    ///
    /// Both aces map to 14; knights have no poker value.
    pub const fn poker_value(self) -> Option<u8> {
        match self {
            Rank::LowAce | Rank::Ace => Some(14),
            Rank::Knight => None,
            Rank::Queen => Some(12),
            Rank::King => Some(13),
            r => Some(r as u8),
        }
    }

    /// Inverse of [`Rank::poker_value`]; 14 yields the high ace.
    pub const fn from_poker_value(v: u8) -> Option<Rank> {
        match v {
            2..=11 => Rank::from_value(v),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::LowAce | Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Knight => 'C',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }

    /// English name, e.g. "deuce".
    pub const fn name(self) -> &'static str {
        match self {
            Rank::LowAce | Rank::Ace => "ace",
            Rank::Two => "deuce",
            Rank::Three => "trey",
            Rank::Four => "four",
            Rank::Five => "five",
            Rank::Six => "six",
            Rank::Seven => "seven",
            Rank::Eight => "eight",
            Rank::Nine => "nine",
            Rank::Ten => "ten",
            Rank::Jack => "jack",
            Rank::Knight => "knight",
            Rank::Queen => "queen",
            Rank::King => "king",
        }
    }

    /// English plural, e.g. "sixes".
    pub const fn plural(self) -> &'static str {
        match self {
            Rank::LowAce | Rank::Ace => "aces",
            Rank::Two => "deuces",
            Rank::Three => "treys",
            Rank::Four => "fours",
            Rank::Five => "fives",
            Rank::Six => "sixes",
            Rank::Seven => "sevens",
            Rank::Eight => "eights",
            Rank::Nine => "nines",
            Rank::Ten => "tens",
            Rank::Jack => "jacks",
            Rank::Knight => "knights",
            Rank::Queen => "queens",
            Rank::King => "kings",
        }
    }

    /// Indefinite article to put in front of [`Rank::name`].
    pub const fn article(self) -> &'static str {
        match self {
            Rank::LowAce | Rank::Ace | Rank::Eight => "an",
            _ => "a",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t == "10" {
            return Ok(Rank::Ten);
        }
        let mut chars = t.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::try_from(c).map_err(|_| RankParseError::Invalid(s.to_string())),
            _ => Err(RankParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '1' => Ok(Rank::LowAce),
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'C' => Ok(Rank::Knight),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(RankParseError::Invalid(c.to_string())),
        }
    }
}

/// Four suits; order has no hand-strength meaning but is fixed for ordering: C < D < H < S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Clubs = 1,
    Diamonds = 2,
    Hearts = 3,
    Spades = 4,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn from_value(v: u8) -> Option<Suit> {
        match v {
            1 => Some(Suit::Clubs),
            2 => Some(Suit::Diamonds),
            3 => Some(Suit::Hearts),
            4 => Some(Suit::Spades),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "clubs" => Ok(Suit::Clubs),
            "diamonds" => Ok(Suit::Diamonds),
            "hearts" => Ok(Suit::Hearts),
            "spades" => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Suit::Clubs),
            'd' => Ok(Suit::Diamonds),
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card encoded as a small ordinal.
///
/// Ranked cards are `rank << 2 | (suit - 1)`, which puts the low aces at 4..=7 and
/// the ace of spades at 63. Ordinals 1, 2 and 3 are the white, black and plain
/// jokers, which have neither rank nor suit.
///
/// ```
/// use primeval::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(card.to_string(), "As");
/// assert_eq!(card.ordinal(), 63);
/// assert_eq!(Card::JOKER.rank(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card(u8);

impl Card {
    pub const WHITE_JOKER: Card = Card(1);
    pub const BLACK_JOKER: Card = Card(2);
    pub const JOKER: Card = Card(3);

    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self(((rank as u8) << 2) | (suit as u8 - 1))
    }

    /// Card for an ordinal in 1..=63.
    pub const fn from_ordinal(v: u8) -> Option<Card> {
        if v >= 1 && v <= 63 {
            Some(Card(v))
        } else {
            None
        }
    }

    pub const fn ordinal(self) -> u8 {
        self.0
    }

    pub const fn is_joker(self) -> bool {
        self.0 <= Card::JOKER.0
    }

    pub const fn rank(self) -> Option<Rank> {
        if self.is_joker() {
            None
        } else {
            Rank::from_value(self.0 >> 2)
        }
    }

    pub const fn suit(self) -> Option<Suit> {
        if self.is_joker() {
            None
        } else {
            Suit::from_value((self.0 & 3) + 1)
        }
    }

    pub const fn to_tuple(self) -> Option<(Rank, Suit)> {
        match (self.rank(), self.suit()) {
            (Some(r), Some(s)) => Some((r, s)),
            _ => None,
        }
    }

    /// The high ace of the same suit if this is a low ace, otherwise the card itself.
    pub const fn high_ace_fix(self) -> Card {
        if matches!(self.rank(), Some(Rank::LowAce)) {
            Card(self.0 + ((Rank::Ace as u8 - Rank::LowAce as u8) << 2))
        } else {
            self
        }
    }

    /// The low ace of the same suit if this is a high ace, otherwise the card itself.
    pub const fn low_ace_fix(self) -> Card {
        if matches!(self.rank(), Some(Rank::Ace)) {
            Card(self.0 - ((Rank::Ace as u8 - Rank::LowAce as u8) << 2))
        } else {
            self
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Card::WHITE_JOKER => write!(f, "Jw"),
            Card::BLACK_JOKER => write!(f, "Jb"),
            Card::JOKER => write!(f, "Jk"),
            card => match card.to_tuple() {
                Some((rank, suit)) => write!(f, "{rank}{suit}"),
                None => write!(f, "??"),
            },
        }
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        match t {
            "Jw" | "jw" => return Ok(Card::WHITE_JOKER),
            "Jb" | "jb" => return Ok(Card::BLACK_JOKER),
            "Jk" | "jk" => return Ok(Card::JOKER),
            _ => {}
        }

        // rank is everything but the last char ("10" allowed); suit is the last char
        let suit_ch = t.chars().last().ok_or_else(|| CardParseError::Invalid(s.to_string()))?;
        let rank_str = &t[..t.len() - suit_ch.len_utf8()];
        if rank_str.is_empty() {
            return Err(CardParseError::Invalid(s.to_string()));
        }

        let rank = Rank::from_str(rank_str)?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse cards separated by whitespace or commas, or run together as in `"7sAd5s"`.
///
/// ```
/// use primeval::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("As, Kd 10c").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
///
/// let packed = parse_cards("7sAd5s").unwrap();
/// assert_eq!(packed.len(), 3);
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    let mut cards = Vec::new();
    for token in input.split(|c: char| c.is_whitespace() || c == ',').filter(|s| !s.is_empty()) {
        let mut rest = token;
        while !rest.is_empty() {
            let width = if rest.starts_with("10") { 3 } else { 2 };
            let Some(chunk) = rest.get(..width) else {
                return Err(CardParseError::Invalid(rest.to_string()));
            };
            cards.push(Card::from_str(chunk)?);
            rest = &rest[width..];
        }
    }
    Ok(cards)
}

/// Format cards run together, the inverse of [`parse_cards`].
pub fn cards_to_string(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect()
}
