#![warn(missing_docs)]

//! # Word grids
//!
//! A crate that lays a list of words out on a grid. Words may run in straight lines, along
//! diagonals, around a single bend, or folded into rectangular blocks, and words that cross must
//! agree on the shared letter.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use word_grid::{AlignmentConfig, BoardSize, DirectionMode, Layout, LayoutConfig, ShapeFlags};
//!
//! let words = [String::from("cat")];
//! let layout = Layout::generate(
//!     &LayoutConfig {
//!         size: BoardSize::new(5, 1),
//!         words: &words,
//!         alignment: AlignmentConfig {
//!             lines: ShapeFlags { horizontal: true, ..Default::default() },
//!             direction: DirectionMode::Forward,
//!         },
//!     },
//!     &mut StdRng::seed_from_u64(1),
//! )
//! .unwrap();
//!
//! assert_eq!(layout.placements().len(), 1);
//! ```

/// The grid of cells words are written into.
pub mod board;
/// Settings for the command line binary.
#[allow(missing_docs)]
pub mod config;
mod error;
/// Validating a configuration and placing a whole word list.
pub mod generator;
/// Mapping a word's letters onto placement positions.
pub mod letters;
/// Placing a single word by random retry.
pub mod placement;
pub mod render;
pub mod shape;

pub use board::{Board, BoardSize, Cell, Coordinate};
pub use error::Error;
pub use generator::{AlignmentConfig, Layout, LayoutConfig};
pub use letters::DirectionMode;
pub use placement::{PlacementError, MAX_ATTEMPTS};
pub use render::{Render, RenderStyle};
pub use shape::{BlockDimensions, Placement, ShapeFlags, ShapeKind};
