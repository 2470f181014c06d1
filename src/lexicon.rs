use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::fs::read_to_string;

/// An ordered set of uppercase words.
///
/// The lexicon answers the two queries the board search is built on: exact
/// membership, and "does any word start with this prefix". Words are kept in
/// a sorted set, so the prefix test is a range lookup: a prefix is valid iff
/// the first word at or after it in sort order starts with it. A word counts
/// as a prefix of itself.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lexicon {
    words: BTreeSet<String>,
    /// Path of the wordfile used to build the lexicon.
    /// Empty if the lexicon is not built from a file.
    wordfile: String,
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Lexicon: {} words from '{}'>",
            self.words.len(),
            self.wordfile
        )
    }
}

impl Lexicon {
    /// Read the lexicon from a file. The file must be encoded in utf-8;
    /// any whitespace separates words. Words are uppercased, and inserting a
    /// word twice is a no-op.
    ///
    /// ## Errors
    /// Fails if the wordfile can not be read.
    /// ## Examples
    /// ```no_run
    /// # use wordhunt_solver::{Lexicon, Error};
    /// let lexicon = Lexicon::from_file("wordlists/words.txt")?;
    /// println!("{}", lexicon);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_file(wordfile: &str) -> Result<Lexicon, Error> {
        let words = read_to_string(wordfile)
            .map_err(|source| Error::ReadError {
                path: String::from(wordfile),
                source,
            })?
            .split_whitespace()
            .map(str::to_uppercase)
            .collect();
        Ok(Lexicon {
            words,
            wordfile: String::from(wordfile),
        })
    }

    /// Build a lexicon from a list of words.
    /// ## Examples
    /// ```
    /// use wordhunt_solver::Lexicon;
    /// let lexicon = Lexicon::from_words(&["aardvark", "zebra"]);
    /// assert_eq!(lexicon.len(), 2);
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Lexicon {
        Lexicon {
            words: words
                .iter()
                .map(|word| word.as_ref().to_uppercase())
                .collect(),
            wordfile: String::new(),
        }
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the lexicon from a bincoded wordfile.
    /// ## Errors
    /// - If the wordfile can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Lexicon, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut lexicon: Lexicon = bincode::deserialize_from(reader)
            .map_err(|_| Error::WordfileDeserializeError(String::from(wordfile)))?;
        lexicon.wordfile = String::from(wordfile);
        Ok(lexicon)
    }

    /// Returns true if `word` is in the lexicon. The lexicon is uppercase,
    /// so lookups are case sensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns true if at least one word in the lexicon starts with `prefix`.
    /// A word is a prefix of itself.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        use std::ops::Bound;
        self.words
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .next()
            .map_or(false, |word| word.starts_with(prefix))
    }

    /// The number of words in the lexicon.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in sort order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &[
        "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel", "belt",
    ];

    fn test_lexicon() -> Lexicon {
        Lexicon::from_words(WORDS)
    }

    #[test]
    fn test_contains() {
        let lexicon = test_lexicon();
        assert_eq!(lexicon.len(), WORDS.len());
        for &word in WORDS {
            assert!(lexicon.contains(&word.to_uppercase()));
        }
        assert!(!lexicon.contains("af"));
        assert!(!lexicon.contains("AX"));
    }

    #[test]
    fn test_has_prefix() {
        let lexicon = test_lexicon();
        assert!(lexicon.has_prefix("A"));
        assert!(lexicon.has_prefix("BEL"));
        // a stored word is a prefix of itself
        assert!(lexicon.has_prefix("BELT"));
        assert!(!lexicon.has_prefix("BELTS"));
        assert!(!lexicon.has_prefix("C"));
        assert!(!lexicon.has_prefix("AB"));
    }

    #[test]
    fn test_from_words_set_semantics() {
        let lexicon = Lexicon::from_words(&["bar", "BAR", "Bar"]);
        assert_eq!(lexicon.len(), 1);
        assert!(lexicon.contains("BAR"));
    }

    #[test]
    fn test_iter_sorted() {
        let lexicon = Lexicon::from_words(&["bo", "al", "bar"]);
        let words: Vec<&str> = lexicon.iter().collect();
        assert_eq!(words, ["AL", "BAR", "BO"]);
    }

    #[test]
    fn test_from_file() -> Result<(), Error> {
        let path = std::env::temp_dir().join("wordhunt_solver_test_words.txt");
        std::fs::write(&path, "bar\nbes  bel\n\nbelt\nbar\n").unwrap();
        let lexicon = Lexicon::from_file(path.to_str().unwrap())?;
        assert_eq!(lexicon.len(), 4);
        assert!(lexicon.contains("BES"));
        assert!(lexicon.has_prefix("BEL"));
        std::fs::remove_file(&path).unwrap();
        Ok(())
    }

    #[test]
    fn test_from_missing_file() {
        match Lexicon::from_file("does_not_exist.txt") {
            Err(Error::ReadError { path, .. }) => assert_eq!(path, "does_not_exist.txt"),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
