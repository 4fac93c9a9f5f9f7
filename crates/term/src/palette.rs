//! Presentation palette: roles and tones to terminal styles.
//!
//! Built once at startup and handed to the renderer; the core never sees a
//! color, only [`Role`]s and [`Tone`]s.

use crossterm::style::Color;

use crate::types::{Role, Tone};

/// Minimal styling for one glyph or line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Color,
    pub bold: bool,
}

impl CellStyle {
    pub const fn fg(fg: Color) -> Self {
        Self { fg, bold: false }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::fg(Color::Reset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub player: CellStyle,
    pub enemy: CellStyle,
    pub wall: CellStyle,
    pub floor: CellStyle,
    pub hint: CellStyle,
    pub warning: CellStyle,
    pub alert: CellStyle,
}

impl Palette {
    /// Every role and tone in the terminal's default color.
    pub fn plain() -> Self {
        let s = CellStyle::default();
        Self {
            player: s,
            enemy: s,
            wall: s,
            floor: s,
            hint: s,
            warning: s,
            alert: s,
        }
    }

    pub fn role(&self, role: Role) -> CellStyle {
        match role {
            Role::Player => self.player,
            Role::Enemy => self.enemy,
            Role::Wall => self.wall,
            Role::Floor => self.floor,
        }
    }

    pub fn tone(&self, tone: Tone) -> CellStyle {
        match tone {
            Tone::Hint => self.hint,
            Tone::Warning => self.warning,
            Tone::Alert => self.alert,
        }
    }
}

impl Default for Palette {
    /// Classic 16-color scheme: green player, red enemy, grey walls, dim floor.
    fn default() -> Self {
        Self {
            player: CellStyle::fg(Color::DarkGreen).bold(),
            enemy: CellStyle::fg(Color::DarkRed).bold(),
            wall: CellStyle::fg(Color::Grey),
            floor: CellStyle::fg(Color::DarkGrey),
            hint: CellStyle::fg(Color::DarkCyan),
            warning: CellStyle::fg(Color::DarkYellow),
            alert: CellStyle::fg(Color::DarkRed),
        }
    }
}
