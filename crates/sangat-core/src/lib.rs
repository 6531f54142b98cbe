//! Registration records and printable Hindi badges for the sangat desk.
//!
//! The transliteration core (`numeric`, `unicode`, `translit`,
//! `badge::formatter`) is pure and total. Everything around it (records,
//! stores, layout, rendering) reports failures through typed errors.

pub mod badge;
pub mod numeric;
pub mod registration;
pub mod settings;
pub mod translit;
pub mod unicode;

#[cfg(test)]
mod tests;
