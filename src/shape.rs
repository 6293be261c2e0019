//! Geometric candidate placements for a word.
//!
//! Enumeration only looks at the word length and board size. Whether the letters actually fit
//! against what is already on the board is decided later by the placement engine.

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardSize, Cell, Coordinate};

/// Which placement shapes are allowed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeFlags {
    /// Left-to-right runs along a row.
    pub horizontal: bool,

    /// Top-to-bottom runs along a column.
    pub vertical: bool,

    /// Straight diagonal runs, both descending and ascending.
    pub diagonal: bool,

    /// "L" shapes made of one horizontal and one vertical run.
    pub bends_straight: bool,

    /// "V" shapes made of two diagonal runs meeting at a pivot.
    pub bends_diagonal: bool,

    /// Rectangles filled in reading order.
    pub block: bool,
}

impl ShapeFlags {
    /// Every shape category enabled.
    pub const ALL: Self = Self {
        horizontal: true,
        vertical: true,
        diagonal: true,
        bends_straight: true,
        bends_diagonal: true,
        block: true,
    };

    /// Whether at least one shape category is enabled.
    pub fn any(&self) -> bool {
        self.horizontal
            || self.vertical
            || self.diagonal
            || self.bends_straight
            || self.bends_diagonal
            || self.block
    }
}

/// The shape a [Placement] was generated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    /// `(row, col + i)`.
    Horizontal,

    /// `(row + i, col)`.
    Vertical,

    /// `(row + i, col + i)`.
    DiagonalDown,

    /// `(row + i, col - i)`.
    DiagonalUp,

    /// Right from the start, then down from the bend.
    BendRightDown,

    /// Down from the start, then right from the bend.
    BendDownRight,

    /// Diagonally down-right to the pivot, then diagonally up-right.
    BendDiagonalDownUp,

    /// Diagonally up-right to the pivot, then diagonally down-right.
    BendDiagonalUpDown,

    /// A rectangle filled row by row.
    Block,
}

/// Columns and rows of a block placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDimensions {
    /// Number of columns in the block.
    pub width: usize,

    /// Number of rows in the block.
    pub height: usize,
}

/// A candidate set of cells for one word. `positions[i]` receives the word's `i`th arranged letter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The shape this placement was generated from.
    pub kind: ShapeKind,

    /// The cells, in the order the letters are laid down.
    pub positions: Vec<Coordinate>,

    /// Set for [ShapeKind::Block] placements only.
    pub block: Option<BlockDimensions>,
}

impl Placement {
    fn new(kind: ShapeKind, positions: Vec<Coordinate>) -> Self {
        Self {
            kind,
            positions,
            block: None,
        }
    }

    /// Reads the cells under this placement in position order.
    pub fn read(&self, board: &Board) -> Vec<Cell> {
        self.positions.iter().map(|&coord| board[coord]).collect()
    }

    /// Reads this placement as a string, or `None` if any of its cells is empty.
    pub fn read_word(&self, board: &Board) -> Option<String> {
        self.read(board).into_iter().collect()
    }
}

/// Rectangles a word of each length can be folded into. Every entry has an exact area match.
const BLOCK_TABLE: &[(usize, &[(usize, usize)])] = &[
    (4, &[(2, 2)]),
    (6, &[(2, 3), (3, 2)]),
    (8, &[(2, 4), (4, 2)]),
    (9, &[(3, 3)]),
    (10, &[(2, 5), (5, 2)]),
    (12, &[(3, 4), (4, 3), (2, 6), (6, 2)]),
    (14, &[(2, 7), (7, 2)]),
    (15, &[(3, 5), (5, 3)]),
    (16, &[(4, 4), (2, 8), (8, 2)]),
];

/// Word lengths rejected up front when block placement is enabled.
pub const UNSUPPORTED_BLOCK_LENGTHS: [usize; 5] = [3, 5, 7, 11, 13];

/// The `(width, height)` rectangles available to a word of length `len`.
pub fn block_dimensions(len: usize) -> &'static [(usize, usize)] {
    BLOCK_TABLE
        .iter()
        .find(|(table_len, _)| *table_len == len)
        .map(|(_, dims)| *dims)
        .unwrap_or(&[])
}

/// Every placement of a word of length `len` on a board of `size`, across the enabled shapes.
///
/// Categories are concatenated in the order horizontal, vertical, diagonal, straight bends,
/// diagonal bends, block.
pub fn enumerate(len: usize, size: BoardSize, shapes: &ShapeFlags) -> Vec<Placement> {
    let mut placements = Vec::new();

    if len == 0 {
        return placements;
    }

    if shapes.horizontal {
        placements.extend(horizontal(len, size));
    }
    if shapes.vertical {
        placements.extend(vertical(len, size));
    }
    if shapes.diagonal {
        placements.extend(diagonal(len, size));
    }
    if shapes.bends_straight {
        placements.extend(bends_straight(len, size));
    }
    if shapes.bends_diagonal {
        placements.extend(bends_diagonal(len, size));
    }
    if shapes.block {
        placements.extend(block(len, size));
    }

    placements
}

/// Runs along a single row, read left to right.
pub fn horizontal(len: usize, size: BoardSize) -> Vec<Placement> {
    let mut placements = Vec::new();

    if len > size.width {
        return placements;
    }

    for row in 0..size.height {
        for col in 0..=size.width - len {
            let positions = (0..len).map(|i| (row, col + i)).collect();
            placements.push(Placement::new(ShapeKind::Horizontal, positions));
        }
    }

    placements
}

/// Runs along a single column, read top to bottom.
pub fn vertical(len: usize, size: BoardSize) -> Vec<Placement> {
    let mut placements = Vec::new();

    if len > size.height {
        return placements;
    }

    for row in 0..=size.height - len {
        for col in 0..size.width {
            let positions = (0..len).map(|i| (row + i, col)).collect();
            placements.push(Placement::new(ShapeKind::Vertical, positions));
        }
    }

    placements
}

/// Descending runs followed by ascending runs.
pub fn diagonal(len: usize, size: BoardSize) -> Vec<Placement> {
    let mut placements = Vec::new();

    if len == 0 || len > size.width || len > size.height {
        return placements;
    }

    for row in 0..=size.height - len {
        for col in 0..=size.width - len {
            let positions = (0..len).map(|i| (row + i, col + i)).collect();
            placements.push(Placement::new(ShapeKind::DiagonalDown, positions));
        }
    }

    for row in 0..=size.height - len {
        for col in len - 1..size.width {
            let positions = (0..len).map(|i| (row + i, col - i)).collect();
            placements.push(Placement::new(ShapeKind::DiagonalUp, positions));
        }
    }

    placements
}

/// "L" shapes. For a bend point `b`, the first `b` letters form the first run and the remaining
/// letters continue from the last cell of that run at a right angle.
pub fn bends_straight(len: usize, size: BoardSize) -> Vec<Placement> {
    let mut placements = Vec::new();

    for row in 0..size.height {
        for col in 0..size.width {
            for bend in 1..len {
                let rest = len - bend;

                if col + bend <= size.width && row + rest < size.height {
                    let corner = col + bend - 1;
                    let positions = (0..bend)
                        .map(|i| (row, col + i))
                        .chain((1..=rest).map(|j| (row + j, corner)))
                        .collect();
                    placements.push(Placement::new(ShapeKind::BendRightDown, positions));
                }

                if row + bend <= size.height && col + rest < size.width {
                    let corner = row + bend - 1;
                    let positions = (0..bend)
                        .map(|i| (row + i, col))
                        .chain((1..=rest).map(|j| (corner, col + j)))
                        .collect();
                    placements.push(Placement::new(ShapeKind::BendDownRight, positions));
                }
            }
        }
    }

    placements
}

/// "V" shapes. For a bend point `b`, the first `b` letters run diagonally to a pivot and the
/// remaining letters continue rightward along the opposite diagonal.
pub fn bends_diagonal(len: usize, size: BoardSize) -> Vec<Placement> {
    let mut placements = Vec::new();

    // Both legs always move right, so the whole word spans `len` columns.
    if len > size.width {
        return placements;
    }

    for row in 0..size.height {
        for col in 0..=size.width - len {
            for bend in 1..len {
                let rest = len - bend;
                let pivot_col = col + bend - 1;

                let pivot_row = row + bend - 1;
                if pivot_row < size.height && pivot_row >= rest {
                    let positions = (0..bend)
                        .map(|i| (row + i, col + i))
                        .chain((1..=rest).map(|j| (pivot_row - j, pivot_col + j)))
                        .collect();
                    placements.push(Placement::new(ShapeKind::BendDiagonalDownUp, positions));
                }

                if row + 1 >= bend && row + 1 - bend + rest < size.height {
                    let pivot_row = row + 1 - bend;
                    let positions = (0..bend)
                        .map(|i| (row - i, col + i))
                        .chain((1..=rest).map(|j| (pivot_row + j, pivot_col + j)))
                        .collect();
                    placements.push(Placement::new(ShapeKind::BendDiagonalUpDown, positions));
                }
            }
        }
    }

    placements
}

/// Rectangles from [block_dimensions], filled in reading order.
pub fn block(len: usize, size: BoardSize) -> Vec<Placement> {
    let mut placements = Vec::new();

    for &(width, height) in block_dimensions(len) {
        if width > size.width || height > size.height {
            continue;
        }

        for row in 0..=size.height - height {
            for col in 0..=size.width - width {
                let positions = (0..height)
                    .flat_map(|r| (0..width).map(move |c| (row + r, col + c)))
                    .take(len)
                    .collect();

                placements.push(Placement {
                    kind: ShapeKind::Block,
                    positions,
                    block: Some(BlockDimensions { width, height }),
                });
            }
        }
    }

    placements
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn all_on_board(placements: &[Placement], size: BoardSize, len: usize) {
        for placement in placements {
            assert_eq!(placement.positions.len(), len, "{placement:?}");
            assert!(
                placement.positions.iter().all(|&coord| size.contains(coord)),
                "{placement:?} leaves the board"
            );

            let unique: HashSet<_> = placement.positions.iter().collect();
            assert_eq!(unique.len(), len, "{placement:?} reuses a cell");
        }
    }

    #[test]
    fn horizontal_offsets() {
        let placements = horizontal(3, BoardSize::new(5, 1));

        let starts: Vec<_> = placements.iter().map(|p| p.positions[0]).collect();
        assert_eq!(starts, vec![(0, 0), (0, 1), (0, 2)]);
        assert_eq!(placements[2].positions, vec![(0, 2), (0, 3), (0, 4)]);
    }

    #[test]
    fn vertical_counts() {
        let size = BoardSize::new(3, 4);
        let placements = vertical(2, size);

        assert_eq!(placements.len(), 3 * 3);
        all_on_board(&placements, size, 2);
        assert!(vertical(5, size).is_empty());
    }

    #[test]
    fn diagonal_produces_both_families() {
        let size = BoardSize::new(3, 3);
        let placements = diagonal(3, size);

        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].positions, vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(placements[1].positions, vec![(0, 2), (1, 1), (2, 0)]);
        assert_eq!(placements[1].kind, ShapeKind::DiagonalUp);
    }

    #[test]
    fn straight_bend_shapes() {
        let size = BoardSize::new(2, 2);
        let placements = bends_straight(3, size);

        all_on_board(&placements, size, 3);
        assert!(placements.contains(&Placement::new(
            ShapeKind::BendRightDown,
            vec![(0, 0), (0, 1), (1, 1)]
        )));
        assert!(placements.contains(&Placement::new(
            ShapeKind::BendDownRight,
            vec![(0, 0), (1, 0), (1, 1)]
        )));
        assert_eq!(placements.len(), 2);
    }

    #[test]
    fn straight_bends_stay_on_board() {
        let size = BoardSize::new(4, 3);
        for len in 2..=6 {
            all_on_board(&bends_straight(len, size), size, len);
        }
        assert!(bends_straight(1, size).is_empty());
    }

    #[test]
    fn diagonal_bend_has_two_legs() {
        let size = BoardSize::new(3, 2);
        let placements = bends_diagonal(3, size);

        all_on_board(&placements, size, 3);
        assert!(placements.contains(&Placement::new(
            ShapeKind::BendDiagonalDownUp,
            vec![(0, 0), (1, 1), (0, 2)]
        )));
        assert!(placements.contains(&Placement::new(
            ShapeKind::BendDiagonalUpDown,
            vec![(1, 0), (0, 1), (1, 2)]
        )));
    }

    #[test]
    fn diagonal_bends_stay_on_board() {
        let size = BoardSize::new(5, 4);
        for len in 2..=5 {
            all_on_board(&bends_diagonal(len, size), size, len);
        }
        assert!(bends_diagonal(6, size).is_empty());
    }

    #[test]
    fn block_fills_reading_order() {
        let size = BoardSize::new(3, 2);
        let placements = block(6, size);

        assert_eq!(placements.len(), 1);
        assert_eq!(
            placements[0].positions,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
        assert_eq!(
            placements[0].block,
            Some(BlockDimensions {
                width: 3,
                height: 2
            })
        );
    }

    #[test]
    fn block_lengths_outside_table() {
        let size = BoardSize::new(8, 8);
        for len in UNSUPPORTED_BLOCK_LENGTHS {
            assert!(block(len, size).is_empty());
        }
        assert_eq!(block(4, size).len(), 7 * 7);
    }

    #[test]
    fn disabled_shapes_contribute_nothing() {
        let size = BoardSize::new(5, 5);
        let shapes = ShapeFlags {
            vertical: true,
            ..Default::default()
        };

        let placements = enumerate(3, size, &shapes);
        assert!(placements.iter().all(|p| p.kind == ShapeKind::Vertical));
        assert!(enumerate(3, size, &ShapeFlags::default()).is_empty());
    }

    #[test]
    fn enumeration_order_follows_categories() {
        fn category(kind: ShapeKind) -> usize {
            match kind {
                ShapeKind::Horizontal => 0,
                ShapeKind::Vertical => 1,
                ShapeKind::DiagonalDown | ShapeKind::DiagonalUp => 2,
                ShapeKind::BendRightDown | ShapeKind::BendDownRight => 3,
                ShapeKind::BendDiagonalDownUp | ShapeKind::BendDiagonalUpDown => 4,
                ShapeKind::Block => 5,
            }
        }

        let placements = enumerate(4, BoardSize::new(4, 4), &ShapeFlags::ALL);
        let categories: Vec<usize> = placements.iter().map(|p| category(p.kind)).collect();

        assert!(categories.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(categories.first(), Some(&0));
        assert_eq!(categories.last(), Some(&5));
    }
}
