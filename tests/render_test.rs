//! Terminal renderer and welcome screen output

use tui_chase::core::{GameConfig, GameState};
use tui_chase::engine::Renderer;
use tui_chase::term::{render_intro, Palette, TerminalRenderer, TITLE};
use tui_chase::types::{Role, Tone};

fn output(term: &TerminalRenderer<Vec<u8>>) -> String {
    String::from_utf8_lossy(term.writer()).into_owned()
}

#[test]
fn intro_shows_title_rules_and_prompt() {
    let mut term = TerminalRenderer::with_writer(Vec::new(), Palette::plain());
    render_intro(&mut term, "Press Enter to start playing...").unwrap();

    let out = output(&term);
    assert!(out.contains(TITLE));
    assert!(out.contains("Move with W A S D."));
    assert!(out.contains("Stay inside the walls (#)"));
    assert!(out.contains("Press Enter to start playing..."));
    assert!(out.contains('P'));
    assert!(out.contains('E'));
}

#[test]
fn present_flushes_once_per_frame() {
    let mut term = TerminalRenderer::with_writer(Vec::new(), Palette::default());
    term.clear().unwrap();
    term.draw_cell(0, 0, '#', Role::Wall).unwrap();
    term.write_line("status", Tone::Warning).unwrap();
    assert!(term.writer().is_empty());

    term.present().unwrap();
    let first = term.writer().len();
    assert!(first > 0);

    // A second present with nothing queued only adds the style reset.
    term.present().unwrap();
    assert!(term.writer().len() > first);
    assert!(term.writer().len() - first < 16);
}

#[test]
fn frame_glyphs_reach_the_terminal() {
    let state = GameState::new(GameConfig::default()).unwrap();
    let mut term = TerminalRenderer::with_writer(Vec::new(), Palette::plain());
    term.clear().unwrap();
    for (x, y, cell) in state.frame().iter() {
        term.draw_cell(x, y, cell.glyph, cell.role).unwrap();
    }
    term.present().unwrap();

    let out = output(&term);
    // Row 2 of the default map: wall, floor, player, floors, wall.
    assert!(out.contains("#.P................#"));
    assert!(out.contains("#................E.#"));
}

#[test]
fn exit_leaves_a_fresh_line() {
    let mut term = TerminalRenderer::with_writer(Vec::new(), Palette::default());
    term.exit().unwrap();
    assert!(output(&term).ends_with("\r\n"));
}
