use std::ops::Index;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    board::{Board, BoardSize, Cell, Coordinate},
    letters::DirectionMode,
    placement::{self, PlacementError},
    shape::{Placement, ShapeFlags, UNSUPPORTED_BLOCK_LENGTHS},
    Error,
};

/// Which shapes words may take, and how their letters are oriented within a shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentConfig {
    /// The enabled shape categories.
    pub lines: ShapeFlags,

    /// How letters map onto a placement's positions.
    #[serde(default)]
    pub direction: DirectionMode,
}

/// The configuration for a layout. See [`Layout::generate`] for details.
#[derive(Clone, Copy, Debug)]
pub struct LayoutConfig<'a> {
    /// The board dimensions.
    pub size: BoardSize,

    /// The words to place, in placement order.
    pub words: &'a [String],

    /// The allowed shapes and direction mode.
    pub alignment: AlignmentConfig,
}

impl LayoutConfig<'_> {
    /// Checks the configuration before any board is created.
    pub fn validate(&self) -> Result<(), Error> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(Error::InvalidBoardSize {
                width: self.size.width,
                height: self.size.height,
            });
        }

        if !self.alignment.lines.any() {
            return Err(Error::NoShapesEnabled);
        }

        if let Some(index) = self.words.iter().position(|word| word.is_empty()) {
            return Err(Error::EmptyWord(index));
        }

        if self.alignment.lines.block {
            for word in self.words {
                let len = word.chars().count();

                if UNSUPPORTED_BLOCK_LENGTHS.contains(&len) {
                    return Err(Error::UnsupportedBlockLength {
                        word: word.clone(),
                        len,
                    });
                }
            }
        }

        Ok(())
    }
}

/// A filled board together with where each word ended up and which words were left out.
#[derive(Clone, Debug)]
pub struct Layout {
    board: Board,
    placements: Vec<(String, Placement)>,
    failures: Vec<(String, PlacementError)>,
}

impl Layout {
    /// Generates a layout using the thread-local random number generator.
    pub fn new(config: &LayoutConfig<'_>) -> Result<Self, Error> {
        Self::generate(config, &mut rand::thread_rng())
    }

    /// Validates `config`, then places every word in order on an empty board.
    ///
    /// Only configuration problems are returned as errors. A word that cannot be placed is logged,
    /// recorded in [Layout::failures], and left off the board, and the remaining words are still
    /// attempted.
    pub fn generate<R: Rng + ?Sized>(config: &LayoutConfig<'_>, rng: &mut R) -> Result<Self, Error> {
        config.validate()?;

        let mut board = Board::new(config.size);
        let mut placements = Vec::with_capacity(config.words.len());
        let mut failures = Vec::new();

        for word in config.words {
            match placement::place(
                &mut board,
                word,
                &config.alignment.lines,
                config.alignment.direction,
                rng,
            ) {
                Ok(placement) => placements.push((word.clone(), placement)),
                Err(err) => {
                    warn!(%word, %err, "failed to place word");
                    failures.push((word.clone(), err));
                }
            }
        }

        info!(
            placed = placements.len(),
            failed = failures.len(),
            width = config.size.width,
            height = config.size.height,
            "generated layout"
        );

        Ok(Self {
            board,
            placements,
            failures,
        })
    }

    /// The filled board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the layout, returning the board.
    pub fn into_board(self) -> Board {
        self.board
    }

    /// The number of columns.
    pub fn width(&self) -> usize {
        self.board.width()
    }

    /// The number of rows.
    pub fn height(&self) -> usize {
        self.board.height()
    }

    /// Gets the cell at the specified coordinate, returning [`Option::None`] if it is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get((row, col)).ok()
    }

    /// Each placed word with the placement it was committed to, in input order.
    pub fn placements(&self) -> &[(String, Placement)] {
        &self.placements
    }

    /// Each word that could not be placed, with the reason.
    pub fn failures(&self) -> &[(String, PlacementError)] {
        &self.failures
    }
}

impl Index<Coordinate> for Layout {
    type Output = Cell;

    fn index(&self, index: Coordinate) -> &Self::Output {
        &self.board[index]
    }
}
