// src/logic/mod.rs

pub mod deck;
pub mod rules;
