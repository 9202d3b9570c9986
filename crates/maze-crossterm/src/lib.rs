//! Crossterm terminal output for mazes.
//!
//! Provides a [`TermPrinter`] that writes the rows produced by
//! [`maze_core::render`] to any [`Write`] sink, optionally colouring each
//! glyph with crossterm styles.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color as CtColor, Print, ResetColor, SetAttribute, SetForegroundColor},
    tty::IsTty,
};

use maze_core::{
    Maze,
    render::{self, Glyph, Overlay},
};

/// When to emit colour escape sequences.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colour only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a yes/no decision for stdout.
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => io::stdout().is_tty(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Foreground colour for each glyph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub start: CtColor,
    pub end: CtColor,
    pub path: CtColor,
    pub wall: CtColor,
    pub open: CtColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            start: CtColor::Green,
            end: CtColor::Red,
            path: CtColor::Yellow,
            wall: CtColor::DarkGrey,
            open: CtColor::Reset,
        }
    }
}

impl Palette {
    /// Maps a [`Glyph`] to its [`crossterm::style::Color`].
    pub fn color(&self, g: Glyph) -> CtColor {
        match g {
            Glyph::Start => self.start,
            Glyph::End => self.end,
            Glyph::Path => self.path,
            Glyph::Wall => self.wall,
            Glyph::Open => self.open,
        }
    }
}

/// Writes mazes to a terminal or any other byte sink.
#[derive(Clone, Debug, Default)]
pub struct TermPrinter {
    color: bool,
    palette: Palette,
}

impl TermPrinter {
    /// Create a printer. With `color` off the output is exactly
    /// [`render::render_text`].
    pub fn new(color: bool) -> Self {
        Self {
            color,
            palette: Palette::default(),
        }
    }

    /// Replace the colour palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Whether colour escapes are written.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Write `maze`, one line per row, with `overlay` cells marked as path.
    pub fn print_maze<W: Write>(
        &self,
        out: &mut W,
        maze: &Maze,
        overlay: Option<&dyn Overlay>,
    ) -> io::Result<()> {
        if !self.color {
            out.write_all(render::render_text(maze, overlay).as_bytes())?;
            return out.flush();
        }

        for row in render::glyph_rows(maze, overlay) {
            for (i, g) in row.into_iter().enumerate() {
                if i > 0 {
                    queue!(out, Print(' '))?;
                }
                if g == Glyph::Start || g == Glyph::End {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }
                queue!(
                    out,
                    SetForegroundColor(self.palette.color(g)),
                    Print(g.ch()),
                    SetAttribute(Attribute::Reset),
                    ResetColor
                )?;
            }
            queue!(out, Print('\n'))?;
        }
        out.flush()
    }
}
