//! # Bones Club
//!
//! Client-side library for a card games and social betting app: solo
//! poker rounds, a pari-mutuel-style bets feature, a wallet ledger view,
//! and peer-to-peer chat, all running against a hosted backend.
//!
//! The backend owns persistence, row security, the realtime change feed,
//! and the money-moving remote procedures (`wallet_apply_delta`,
//! `create_bet_with_prize`, `join_bet`, `settle_bet`, `add_review`). This
//! crate implements everything that runs on the device: the card and hand
//! evaluation core, the solo round rules, input validation, and the
//! composition logic around those remote calls.
//!
//! ## Core Modules
//!
//! - [`cards`]: deck construction, shuffling, dealing, and 5-card hand
//!   evaluation with tie-breaks - the pure, I/O-free heart of the crate
//! - [`solo`]: the three house games (five-card, high-card, pair-plus)
//!   and round recording
//! - [`wallet`]: balance, ledger view, deposits and withdrawals
//! - [`bets`]: create, browse, join, and settle social bets
//! - [`chat`]: conversations, threads, and realtime thread feeds
//! - [`reviews`]: comments attached to bets
//! - [`profiles`]: public player identity and the balance column
//! - [`remote`]: the backend boundary (errors, configuration)
//!
//! ## Example
//!
//! ```
//! use bones_club::cards::{Card, Deck, Suit, compare_hands, evaluate};
//! use std::cmp::Ordering;
//!
//! // Deal a round.
//! let mut deck = Deck::new();
//! deck.shuffle();
//! let player = deck.deal(5).unwrap();
//! let dealer = deck.deal(5).unwrap();
//! println!("{}: {}", player[0].key(), evaluate(&player).label());
//! assert_eq!(deck.remaining(), 42);
//!
//! // The wheel is the lowest straight.
//! let wheel = [
//!     Card(14, Suit::Hearts),
//!     Card(2, Suit::Clubs),
//!     Card(3, Suit::Diamonds),
//!     Card(4, Suit::Spades),
//!     Card(5, Suit::Hearts),
//! ];
//! assert_eq!(evaluate(&wheel).label(), "STRAIGHT");
//! assert_eq!(evaluate(&wheel).tiebreaks, vec![5]);
//! # let _ = compare_hands(&player, &dealer) == Ordering::Equal;
//! ```

/// Card domain: deck, dealing, and hand evaluation.
pub mod cards;
pub use cards::{
    Card, CardError, Deck, HandCategory, HandEvaluation, Suit, Value, compare_hands, evaluate,
};

/// Solo games against the house.
pub mod solo;
pub use solo::{GameType, Round, RoundOutcome, SoloError, SoloManager};

/// Wallet balance and ledger.
pub mod wallet;
pub use wallet::{WalletError, WalletManager, WalletTx};

/// Social bets.
pub mod bets;
pub use bets::{Bet, BetStats, BetStatus, BetsError, BetsManager};

/// Peer-to-peer chat.
pub mod chat;
pub use chat::{ChatManager, ChatMessage, Conversation};

/// Bet reviews.
pub mod reviews;
pub use reviews::ReviewsManager;

/// Player profiles and shared id/currency aliases.
pub mod profiles;
pub use profiles::{Bones, Profile, UserId};

/// Remote backend boundary.
pub mod remote;
pub use remote::{RemoteConfig, RemoteError, RemoteResult};
