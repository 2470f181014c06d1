use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use tinyvec::ArrayVec;

/// A position on the board, as (row, col) with (0, 0) the top left square.
///
/// Positions are only meaningful for the [`Grid`] they were created for.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

/// Up to 8 in-bounds neighbors of a position.
pub type Neighbors = ArrayVec<[Pos; 8]>;

/// Square word hunt board, consisting of N x N letter tiles.
///
/// Tiles are uppercase strings and may hold more than one letter (like the
/// "QU" tile found in some tile sets). A grid is immutable after
/// construction; the board it belongs to replaces it as a whole.
///
/// Cells are numbered in row-major order: the cell at `(row, col)` has index
/// `row * size + col`, so the top left cell is 0 and the bottom right cell is
/// `size * size - 1`. The same numbering is used for the tiles passed to
/// [`from_tiles`](Grid::from_tiles) and for the paths returned by
/// [`Board::find_path`](crate::Board::find_path).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    tiles: Vec<String>,
    size: usize,
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Grid {
    /// Create a `Grid` from a flat list of tiles in row-major order.
    /// Tiles are uppercased on ingestion.
    ///
    /// ## Errors
    /// If the number of tiles is not a perfect square, or a tile is empty.
    /// ## Examples
    /// ```
    /// # use wordhunt_solver::{Grid, Pos, Error};
    /// let grid = Grid::from_tiles(&["c", "a", "t", "s"])?;
    /// assert_eq!(grid.size(), 2);
    /// assert_eq!(grid.tile(Pos { row: 1, col: 0 }), "T");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_tiles<S: AsRef<str>>(tiles: &[S]) -> Result<Grid, Error> {
        let size = (tiles.len() as f64).sqrt() as usize;
        if size * size != tiles.len() {
            return Err(Error::NotSquare(tiles.len()));
        }
        let tiles = tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| {
                let tile = tile.as_ref();
                if tile.is_empty() {
                    return Err(Error::EmptyTile(i));
                }
                Ok(tile.to_uppercase())
            })
            .collect::<Result<Vec<String>, Error>>()?;
        Ok(Grid { tiles, size })
    }

    /// The number of rows (and columns) on the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The number of cells on the board.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The tiles in row-major order.
    pub fn tiles(&self) -> &[String] {
        &self.tiles
    }

    /// The tile at `pos`.
    pub fn tile(&self, pos: Pos) -> &str {
        &self.tiles[self.index(pos)]
    }

    /// The row-major cell index of `pos`.
    pub fn index(&self, pos: Pos) -> usize {
        pos.row * self.size + pos.col
    }

    /// The position of the row-major cell `index`.
    pub fn pos(&self, index: usize) -> Pos {
        Pos {
            row: index / self.size,
            col: index % self.size,
        }
    }

    /// Iterate over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Pos { row, col }))
    }

    /// All in-bounds neighbors of `pos`, in a fixed order: row offset -1..=1,
    /// then column offset -1..=1, skipping `pos` itself. The order determines
    /// which path is reconstructed first when a word can be spelled in more
    /// than one way.
    ///
    /// ## Examples
    /// ```
    /// # use wordhunt_solver::{Grid, Pos, Error};
    /// let grid = Grid::from_tiles(&["c", "a", "t", "s"])?;
    /// assert_eq!(grid.neighbors(Pos { row: 0, col: 0 }).len(), 3);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn neighbors(&self, pos: Pos) -> Neighbors {
        let mut neighbors = Neighbors::new();
        let size = self.size as isize;
        for drow in -1..=1 {
            for dcol in -1..=1 {
                if drow == 0 && dcol == 0 {
                    continue;
                }
                let row = pos.row as isize + drow;
                let col = pos.col as isize + dcol;
                if row >= 0 && row < size && col >= 0 && col < size {
                    neighbors.push(Pos {
                        row: row as usize,
                        col: col as usize,
                    });
                }
            }
        }
        neighbors
    }

    /// Get the board as a list of row strings, with tiles right-aligned to a
    /// common width.
    pub fn to_strings(&self) -> Vec<String> {
        let width = self.tiles.iter().map(String::len).max().unwrap_or(0);
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| format!("{:>1$}", self.tiles[row * self.size + col], width))
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    pub use super::*;

    #[test]
    fn test_from_tiles_not_square() {
        let tiles = ["A"; 10];
        match Grid::from_tiles(&tiles) {
            Err(Error::NotSquare(10)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_from_tiles_empty_tile() {
        match Grid::from_tiles(&["a", "b", "", "d"]) {
            Err(Error::EmptyTile(2)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_from_tiles_uppercases() -> Result<(), Error> {
        let grid = Grid::from_tiles(&["a", "b", "Qu", "d"])?;
        assert_eq!(grid.tiles(), &["A", "B", "QU", "D"]);
        Ok(())
    }

    #[test]
    fn test_index_is_row_major() -> Result<(), Error> {
        let grid = Grid::from_tiles(&["a", "b", "c", "d", "e", "f", "g", "h", "i"])?;
        let pos = Pos { row: 1, col: 2 };
        assert_eq!(grid.index(pos), 5);
        assert_eq!(grid.pos(5), pos);
        assert_eq!(grid.tile(pos), "F");
        Ok(())
    }

    #[test]
    fn test_positions_row_major() -> Result<(), Error> {
        let grid = Grid::from_tiles(&["a", "b", "c", "d"])?;
        let indices: Vec<usize> = grid.positions().map(|p| grid.index(p)).collect();
        assert_eq!(indices, [0, 1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_neighbors_order() -> Result<(), Error> {
        let grid = Grid::from_tiles(&["a", "b", "c", "d", "e", "f", "g", "h", "i"])?;
        let center = Pos { row: 1, col: 1 };
        let neighbors: Vec<(usize, usize)> = grid
            .neighbors(center)
            .iter()
            .map(|p| (p.row, p.col))
            .collect();
        let expect = [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2),
        ];
        assert_eq!(neighbors, expect);
        Ok(())
    }

    #[test]
    fn test_neighbors_in_bounds() -> Result<(), Error> {
        let grid = Grid::from_tiles(&["a", "b", "c", "d", "e", "f", "g", "h", "i"])?;
        assert_eq!(grid.neighbors(Pos { row: 0, col: 0 }).len(), 3);
        assert_eq!(grid.neighbors(Pos { row: 0, col: 1 }).len(), 5);
        assert_eq!(grid.neighbors(Pos { row: 2, col: 2 }).len(), 3);
        let single = Grid::from_tiles(&["a"])?;
        assert!(single.neighbors(Pos { row: 0, col: 0 }).is_empty());
        Ok(())
    }

    #[test]
    fn test_display() -> Result<(), Error> {
        let grid = Grid::from_tiles(&["qu", "a", "i", "t"])?;
        assert_eq!(format!("{}", grid), "QU  A\n I  T");
        Ok(())
    }
}
