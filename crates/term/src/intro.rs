//! Welcome screen shown once before play.

use anyhow::Result;

use crate::engine::Renderer;
use crate::types::{Role, Tone, ENEMY_GLYPH, PLAYER_GLYPH, WALL_GLYPH};

pub const TITLE: &str = "WELCOME TO TUI CHASE";

/// Draw the rules and a prompt asking the player to acknowledge them.
///
/// The two entity glyphs are drawn as cells so they pick up the same styles
/// they have on the map.
pub fn render_intro<R: Renderer + ?Sized>(renderer: &mut R, ack_prompt: &str) -> Result<()> {
    renderer.clear()?;
    renderer.write_line(TITLE, Tone::Hint)?;
    renderer.write_line("", Tone::Hint)?;
    renderer.write_line("It's pretty simple:", Tone::Hint)?;

    // Legend rows 3 and 4 leave column 4 blank for the glyph cells.
    renderer.write_line("  -   is you.", Tone::Hint)?;
    renderer.write_line("  -   is the enemy.", Tone::Hint)?;
    renderer.draw_cell(4, 3, PLAYER_GLYPH, Role::Player)?;
    renderer.draw_cell(4, 4, ENEMY_GLYPH, Role::Enemy)?;

    renderer.write_line("  - Move with W A S D.", Tone::Hint)?;
    renderer.write_line(
        &format!("  - Stay inside the walls ({WALL_GLYPH}) and avoid the enemy."),
        Tone::Hint,
    )?;
    renderer.write_line("  - If the enemy reaches you, the game ends.", Tone::Hint)?;
    renderer.write_line("", Tone::Hint)?;
    renderer.write_prompt(ack_prompt)?;
    renderer.present()
}
