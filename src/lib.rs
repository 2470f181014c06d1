//! A word hunt library for Rust.
//! <br>
//! This crate finds every word from a lexicon that can be spelled on a square
//! board of letter tiles, following the usual word hunt rules: a word is built
//! by walking from tile to adjacent tile (horizontally, vertically or
//! diagonally) without using any tile twice. It can also reconstruct the exact
//! path that spells a given word, and score a set of found words.
//! The search is a depth-first traversal pruned against the lexicon, so even
//! exhaustive enumeration of a board takes well under a millisecond for
//! typical word lists. With the `rayon` feature (enabled by default) the
//! traversals from different start tiles run in parallel.
//!
//! # How to use `wordhunt_solver`
//! Start by creating a board, then specify the lexicon to be used, and the
//! tiles on the board. By default a standard 4x4 board is used, but you can
//! specify your own tiles. A tile may hold more than one letter (like the
//! "QU" tile found in some tile sets). The lexicon must be in utf-8 and
//! contain one word per token; any whitespace separates tokens.
//!
//! # Basic usage
//! ```
//! use wordhunt_solver::Board;
//!
//! let board = Board::default().with_lexicon_from_words(&["peace", "cap", "toy"]);
//! let words = board.find_all_words(3)?;
//! assert_eq!(words.len(), 3);
//! assert!(words.contains("PEACE"));
//! let path = board.find_path("peace")?;
//! assert_eq!(path.len(), 5);
//! assert_eq!(board.score_words(&words, 3)?, 5);
//! # Ok::<(), wordhunt_solver::Error>(())
//! ```
//!
mod board;
mod error;
mod grid;
mod lexicon;
mod search;

pub use board::Board;
pub use error::Error;
pub use grid::{Grid, Neighbors, Pos};
pub use lexicon::Lexicon;
