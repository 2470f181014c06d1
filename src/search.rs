//! Depth-first board traversals: word enumeration and path reconstruction.
//!
//! Both searches walk the grid cell by cell, growing a candidate word and
//! backtracking when it can no longer lead anywhere. All mutable traversal
//! state (the visited markers, the word buffer, the path) lives in a scratch
//! context created per top-level call, so the board itself is never mutated
//! and concurrent searches cannot interfere.

use crate::grid::{Grid, Pos};
use crate::lexicon::Lexicon;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Scratch state for one word-enumeration traversal.
struct WordSearch<'a> {
    grid: &'a Grid,
    lexicon: &'a Lexicon,
    min_length: usize,
    visited: Vec<bool>,
    word: String,
    found: BTreeSet<String>,
}

impl<'a> WordSearch<'a> {
    fn new(grid: &'a Grid, lexicon: &'a Lexicon, min_length: usize) -> WordSearch<'a> {
        WordSearch {
            grid,
            lexicon,
            min_length,
            visited: vec![false; grid.len()],
            word: String::new(),
            found: BTreeSet::new(),
        }
    }

    /// Extend the candidate word with the tile at `pos`, record it if it is
    /// a lexicon word of sufficient length, and recurse into all neighbors.
    /// Prunes before touching any state when `pos` is already on the current
    /// path or the extended candidate is not a prefix of any lexicon word.
    /// Restores the visited marker and the word buffer on every exit path.
    fn explore(&mut self, pos: Pos) {
        let index = self.grid.index(pos);
        if self.visited[index] {
            return;
        }
        let len = self.word.len();
        self.word.push_str(self.grid.tile(pos));
        if !self.lexicon.has_prefix(&self.word) {
            self.word.truncate(len);
            return;
        }
        self.visited[index] = true;
        if self.word.chars().count() >= self.min_length && self.lexicon.contains(&self.word) {
            self.found.insert(self.word.clone());
        }
        for neighbor in self.grid.neighbors(pos) {
            self.explore(neighbor);
        }
        self.visited[index] = false;
        self.word.truncate(len);
    }
}

/// Find all lexicon words of at least `min_length` characters that can be
/// spelled on `grid` by a simple path of adjacent cells.
///
/// Every cell starts an independent traversal with its own scratch state:
/// a word may reuse cells that an earlier start cell's words also used,
/// just never the same cell twice within one path.
#[cfg(feature = "rayon")]
pub(crate) fn find_words(grid: &Grid, lexicon: &Lexicon, min_length: usize) -> BTreeSet<String> {
    (0..grid.len())
        .into_par_iter()
        .map(|start| {
            let mut search = WordSearch::new(grid, lexicon, min_length);
            search.explore(grid.pos(start));
            search.found
        })
        .reduce(BTreeSet::new, |mut all, found| {
            all.extend(found);
            all
        })
}

#[cfg(not(feature = "rayon"))]
pub(crate) fn find_words(grid: &Grid, lexicon: &Lexicon, min_length: usize) -> BTreeSet<String> {
    let mut all = BTreeSet::new();
    for start in grid.positions() {
        let mut search = WordSearch::new(grid, lexicon, min_length);
        search.explore(start);
        all.extend(search.found);
    }
    all
}

/// Scratch state for one path-reconstruction traversal.
struct PathSearch<'a> {
    grid: &'a Grid,
    target: &'a str,
    /// Number of cells a confirmed path must have. Tiles may hold more than
    /// one letter, so a candidate that equals the target as a string can
    /// still be rejected when its path is shorter than this.
    target_cells: usize,
    visited: Vec<bool>,
    word: String,
    path: Vec<usize>,
    confirmed: Option<Vec<usize>>,
}

impl<'a> PathSearch<'a> {
    fn new(grid: &'a Grid, target: &'a str) -> PathSearch<'a> {
        PathSearch {
            grid,
            target,
            target_cells: target.chars().count(),
            visited: vec![false; grid.len()],
            word: String::new(),
            path: Vec::new(),
            confirmed: None,
        }
    }

    /// Extend the candidate word and the path together, pruning when the
    /// candidate stops being a prefix of the target. Once a path is
    /// confirmed no further branches are explored.
    fn explore(&mut self, pos: Pos) {
        let index = self.grid.index(pos);
        if self.visited[index] {
            return;
        }
        let len = self.word.len();
        self.word.push_str(self.grid.tile(pos));
        if !self.target.starts_with(&self.word) {
            self.word.truncate(len);
            return;
        }
        self.visited[index] = true;
        self.path.push(index);
        if self.word == self.target && self.path.len() == self.target_cells {
            self.confirmed = Some(self.path.clone());
        }
        for neighbor in self.grid.neighbors(pos) {
            if self.confirmed.is_some() {
                break;
            }
            self.explore(neighbor);
        }
        self.path.pop();
        self.visited[index] = false;
        self.word.truncate(len);
    }
}

/// Find the first simple path of adjacent cells on `grid` that spells
/// `target`, as row-major cell indices. Returns an empty path if the word is
/// not on the board.
///
/// Start cells are scanned in row-major order. A cell whose whole tile
/// equals the target yields a one-cell path without a traversal; the first
/// traversal that confirms a path wins.
pub(crate) fn find_path(grid: &Grid, target: &str) -> Vec<usize> {
    for start in grid.positions() {
        let tile = grid.tile(start);
        if tile == target {
            return vec![grid.index(start)];
        }
        if target.starts_with(tile) {
            let mut search = PathSearch::new(grid, target);
            search.explore(start);
            if let Some(path) = search.confirmed {
                return path;
            }
        }
    }
    Vec::new()
}
