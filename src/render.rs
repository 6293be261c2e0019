//! Text rendering of a finished board.

use std::fmt::{self, Display, Write};

use serde::{Deserialize, Serialize};

use crate::{board::Board, generator::Layout};

/// Shown in place of unused cells unless another placeholder is chosen.
pub const DEFAULT_PLACEHOLDER: char = '.';

/// How the board is laid out as text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RenderStyle {
    /// Rows of space-separated cells.
    #[default]
    Plain,

    /// The plain rows inside an ASCII box.
    Bordered,

    /// Column indices along the top and row indices down the left side.
    Coordinates,
}

/// A [Display] adapter that renders a board in a given style.
#[derive(Clone, Copy, Debug)]
pub struct Render<'a> {
    board: &'a Board,
    style: RenderStyle,
    placeholder: char,
}

impl<'a> Render<'a> {
    /// Renders `board` in `style` with the [DEFAULT_PLACEHOLDER].
    pub fn new(board: &'a Board, style: RenderStyle) -> Self {
        Self {
            board,
            style,
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }

    /// Uses `placeholder` for unused cells.
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    fn row_text(&self, row: impl Iterator<Item = &'a Option<char>>) -> String {
        let mut text = String::new();

        for (i, cell) in row.enumerate() {
            if i > 0 {
                text.push(' ');
            }
            text.push(cell.unwrap_or(self.placeholder));
        }

        text
    }
}

impl Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            RenderStyle::Plain => {
                for row in self.board.rows() {
                    writeln!(f, "{}", self.row_text(row))?;
                }
            }
            RenderStyle::Bordered => {
                // Each cell is one character plus a separating space, padded by one space per side.
                let edge = format!("+{}+", "-".repeat(self.board.width() * 2 + 1));

                writeln!(f, "{edge}")?;
                for row in self.board.rows() {
                    writeln!(f, "| {} |", self.row_text(row))?;
                }
                writeln!(f, "{edge}")?;
            }
            RenderStyle::Coordinates => {
                let label_width = self.board.height().saturating_sub(1).to_string().len();
                let cell_width = self.board.width().saturating_sub(1).to_string().len();

                let mut header = " ".repeat(label_width);
                for col in 0..self.board.width() {
                    write!(header, " {col:>cell_width$}")?;
                }
                writeln!(f, "{header}")?;

                for (index, row) in self.board.rows().enumerate() {
                    write!(f, "{index:>label_width$}")?;
                    for cell in row {
                        write!(f, " {:>cell_width$}", cell.unwrap_or(self.placeholder))?;
                    }
                    writeln!(f)?;
                }
            }
        }

        Ok(())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Render::new(self, RenderStyle::Plain).fmt(f)
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let render = Render::new(self.board(), RenderStyle::Plain);
        let mut words_iter = self.placements().iter().map(|(word, _)| word.as_str());

        for row in self.board().rows() {
            writeln!(
                f,
                "{} | {}",
                render.row_text(row),
                words_iter.next().unwrap_or("")
            )?;
        }

        Ok(())
    }
}
