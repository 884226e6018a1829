//! Terminal UI for the Mystic Deck ritual.
//!
//! A ratatui front end: the selection, questioning, and reveal steps are drawn
//! as panels over an animated particle backdrop. All ritual state lives in a
//! single [`app::RitualApp`] owned by the event loop.

pub mod app;
pub mod backdrop;
pub mod terminal;
pub mod views;
