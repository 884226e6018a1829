//! Windowed Mystic Deck ritual.
//!
//! A macroquad front end: the pool is fanned out across the window over a
//! drifting particle backdrop, and one screen per ritual step handles input
//! and drawing.

pub mod app;
pub mod backdrop;
pub mod fan;
pub mod input;
pub mod screen;
pub mod theme;
pub mod widget;
