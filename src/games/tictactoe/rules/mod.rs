//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`](super::Board). They never mutate the
//! board and know nothing about whose turn it is.

pub mod draw;
pub mod win;

pub use draw::check_draw;
pub use win::{check_win, winning_line};
