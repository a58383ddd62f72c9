// src/components/mod.rs

pub mod card;
pub mod stack;

pub use card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use stack::{StackInfo, StackType};
