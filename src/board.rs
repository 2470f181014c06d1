use crate::grid::Grid;
use crate::lexicon::Lexicon;
use crate::search;
use crate::Error;
use std::collections::BTreeSet;
use std::fmt;

/// The default 4x4 board, in row-major order.
const DEFAULT_TILES: [&str; 16] = [
    "E", "E", "C", "A", "A", "L", "E", "P", "H", "N", "B", "O", "Q", "T", "T", "Y",
];

/// Represents a word hunt board: a square grid of letter tiles, plus the
/// lexicon of words that count as valid.
///
/// A word is on the board when it can be spelled by a path of adjacent cells
/// (horizontally, vertically or diagonally) that uses no cell twice. The
/// board borrows nothing and is never mutated by a search, so searches can
/// run repeatedly, or concurrently from several threads.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    lexicon: Option<Lexicon>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Display the board as one line per row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Board {
    /// Create a new board with the default 4x4 tiles and no lexicon.
    ///
    /// Additional builder functions are used to set the lexicon and the
    /// tiles of the board. See also:
    /// - [`with_lexicon_from_file`](Board::with_lexicon_from_file)
    /// - [`with_lexicon_from_words`](Board::with_lexicon_from_words)
    /// - [`with_tiles`](Board::with_tiles)
    ///
    /// ## Examples
    ///
    /// Basic usage:
    ///```
    /// use wordhunt_solver::Board;
    ///
    /// let board = Board::new().with_lexicon_from_words(&["peace"]);
    ///```
    #[must_use]
    pub fn new() -> Board {
        // The default board is square and has no empty tiles, so it is safe
        // to unwrap.
        let grid = Grid::from_tiles(&DEFAULT_TILES).unwrap();
        Board {
            grid,
            lexicon: None,
        }
    }

    /// Specify the lexicon by reading it from `wordfile`, and return the
    /// modified board.
    ///
    /// The `wordfile` must be encoded in utf-8; any whitespace separates
    /// words.
    ///
    /// ## Errors
    /// This function will give an error if the `wordfile` can not be read.
    /// ## Examples
    /// ```no_run
    /// # use wordhunt_solver::{Board, Error};
    /// let board = Board::new().with_lexicon_from_file("wordlists/words.txt")?;
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_lexicon_from_file(mut self, wordfile: &str) -> Result<Board, Error> {
        self.lexicon = Some(Lexicon::from_file(wordfile)?);
        Ok(self)
    }

    /// Specify the lexicon by a list of words, and return the modified board.
    /// ## Examples
    /// ```
    /// use wordhunt_solver::Board;
    /// let board = Board::new().with_lexicon_from_words(&["aardvark", "zebra"]);
    /// ```
    pub fn with_lexicon_from_words<S: AsRef<str>>(mut self, words: &[S]) -> Board {
        self.lexicon = Some(Lexicon::from_words(words));
        self
    }

    /// Replace the lexicon.
    pub fn set_lexicon(&mut self, lexicon: Lexicon) {
        self.lexicon = Some(lexicon);
    }

    /// Specify the board tiles from a flat list in row-major order, and
    /// return the modified board. Tiles are uppercased on ingestion.
    ///
    /// ## Errors
    /// If the number of tiles is not a perfect square, or a tile is empty.
    /// ## Examples
    /// ```
    /// # use wordhunt_solver::{Board, Error};
    /// let board = Board::new().with_tiles(&["b", "e", "t", "a"])?;
    /// assert_eq!(board.grid().size(), 2);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_tiles<S: AsRef<str>>(mut self, tiles: &[S]) -> Result<Board, Error> {
        self.set_tiles(tiles)?;
        Ok(self)
    }

    /// Replace the board tiles from a flat list in row-major order.
    /// ## Errors
    /// If the number of tiles is not a perfect square, or a tile is empty.
    pub fn set_tiles<S: AsRef<str>>(&mut self, tiles: &[S]) -> Result<(), Error> {
        self.grid = Grid::from_tiles(tiles)?;
        Ok(())
    }

    /// Return reference to our grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return reference to our lexicon, or `None` if none is loaded
    pub fn lexicon(&self) -> Option<&Lexicon> {
        self.lexicon.as_ref()
    }

    fn require_lexicon(&self) -> Result<&Lexicon, Error> {
        self.lexicon.as_ref().ok_or(Error::NoLexicon)
    }

    /// Find all lexicon words of at least `min_length` characters that are
    /// on the board. Each word appears once, in sort order, no matter how
    /// many paths spell it.
    ///
    /// ## Errors
    /// - If no lexicon is loaded.
    /// - If `min_length` is 0.
    /// ## Examples
    /// ```
    /// # use wordhunt_solver::{Board, Error};
    /// let board = Board::new().with_lexicon_from_words(&["peace", "bent", "toy"]);
    /// let words = board.find_all_words(4)?;
    /// assert_eq!(words.len(), 2);
    /// assert!(words.contains("PEACE"));
    /// assert!(words.contains("BENT"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn find_all_words(&self, min_length: usize) -> Result<BTreeSet<String>, Error> {
        let lexicon = self.require_lexicon()?;
        if min_length < 1 {
            return Err(Error::InvalidMinLength(min_length));
        }
        Ok(search::find_words(&self.grid, lexicon, min_length))
    }

    /// Find a path of adjacent cells that spells `word`, as row-major cell
    /// indices (the numbering of [`Grid::index`]). Returns an empty path if
    /// the word is not on the board.
    ///
    /// The word is uppercased before the search, like the board tiles.
    ///
    /// ## Errors
    /// If no lexicon is loaded.
    /// ## Examples
    /// ```
    /// # use wordhunt_solver::{Board, Error};
    /// let board = Board::new().with_lexicon_from_words(&["cap"]);
    /// assert_eq!(board.find_path("cap")?, [2, 3, 7]);
    /// assert!(board.find_path("zoo")?.is_empty());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn find_path(&self, word: &str) -> Result<Vec<usize>, Error> {
        self.require_lexicon()?;
        Ok(search::find_path(&self.grid, &word.to_uppercase()))
    }

    /// Returns true if `word` is in the lexicon. The word is uppercased
    /// before the lookup.
    ///
    /// ## Errors
    /// If no lexicon is loaded.
    pub fn is_valid_word(&self, word: &str) -> Result<bool, Error> {
        Ok(self.require_lexicon()?.contains(&word.to_uppercase()))
    }

    /// Returns true if at least one lexicon word starts with `prefix`. The
    /// prefix is uppercased before the lookup.
    ///
    /// ## Errors
    /// If no lexicon is loaded.
    pub fn is_valid_prefix(&self, prefix: &str) -> Result<bool, Error> {
        Ok(self.require_lexicon()?.has_prefix(&prefix.to_uppercase()))
    }

    /// Compute the cumulative score for `words`. A word of exactly
    /// `min_length` characters scores one point, plus one more point for
    /// each character beyond the minimum; shorter words score nothing.
    ///
    /// The words are scored as given: whether they are in the lexicon, or
    /// on the board, is the caller's business.
    ///
    /// ## Errors
    /// - If no lexicon is loaded.
    /// - If `min_length` is 0.
    /// ## Examples
    /// ```
    /// # use wordhunt_solver::{Board, Error};
    /// let board = Board::new().with_lexicon_from_words(&["peace"]);
    /// assert_eq!(board.score_words(&["peace"], 5)?, 1);
    /// assert_eq!(board.score_words(&["peace"], 2)?, 4);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn score_words<S, I>(&self, words: I, min_length: usize) -> Result<u32, Error>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        self.require_lexicon()?;
        if min_length < 1 {
            return Err(Error::InvalidMinLength(min_length));
        }
        let mut score = 0;
        for word in words {
            let length = word.as_ref().chars().count();
            if length >= min_length {
                score += 1 + (length - min_length) as u32;
            }
        }
        Ok(score)
    }
}
