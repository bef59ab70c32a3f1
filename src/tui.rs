//! The terminal front-end for the replay.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use replay::scene::{Body, Highlight, SceneGraph, Shade};
use replay::view::ViewOptions;
use replay::{Config, MoveList, MoveOutcome, Session, Side, Square, Step};
use std::io::{self, Stdout, Write};
use std::time::Instant;
use tracing::{debug, info};

const CELL_WIDTH: u16 = 3;
const BOARD_LEFT: u16 = 4;
const BOARD_TOP: u16 = 2;

/// Raw mode and the alternate screen for as long as it lives.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut Stdout) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Runs the replay loop until the user quits.
pub fn run(config: Config, moves: MoveList) -> io::Result<()> {
    let frame_interval = config.frame_interval;
    let mut session = Session::standard(config, moves);
    let mut view = ViewOptions::default();
    let mut status = String::from("Press → to play the next move.");

    let mut out = io::stdout();
    let _guard = TerminalGuard::enter(&mut out)?;
    draw(&mut out, &session, &view, &status)?;

    let mut last_frame = Instant::now();
    loop {
        let mut dirty = false;
        if event::poll(frame_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Right => {
                            let step = session.on_advance_key();
                            debug!(?step, "advance key");
                            status = describe(&session, step);
                        }
                        KeyCode::Left => {
                            let step = session.on_retreat_key();
                            debug!(?step, "retreat key");
                            status = describe(&session, step);
                        }
                        KeyCode::Char('c') => view.toggle_flip(),
                        KeyCode::Char('l') => view.toggle_lights(),
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        _ => {}
                    }
                    dirty = true;
                }
            }
        }

        let now = Instant::now();
        if let Some(landed) = session.on_frame(now - last_frame) {
            status = format!("{landed}");
        }
        last_frame = now;

        if session.scene_mut().take_redraw() || dirty {
            draw(&mut out, &session, &view, &status)?;
        }
    }
    info!(cursor = session.state().cursor(), "terminal closed");
    Ok(())
}

fn describe(session: &Session<SceneGraph>, step: Step) -> String {
    match step {
        Step::Applied(MoveOutcome::Unresolved(err)) => format!("Skipped: {err}"),
        Step::Applied(_) => match session.state().animating() {
            Some((piece, square)) => format!("{piece} -> {square}"),
            None => String::new(),
        },
        Step::CursorOnly => String::from("Stepped back over a skipped move."),
        Step::Dropped => String::from("Still moving..."),
        Step::AtBoundary => String::from("No more moves that way."),
        Step::Disabled => String::from("Undo is turned off."),
    }
}

fn draw(out: &mut Stdout, session: &Session<SceneGraph>, view: &ViewOptions, status: &str) -> io::Result<()> {
    let scene = session.scene();
    queue!(out, Clear(ClearType::All), MoveTo(0, 0), Print("--- Chess Replay ---"))?;

    // Pieces are drawn in the cell nearest their current position, so a piece in flight
    // steps across the cells it passes.
    let mut occupants = [[None; 8]; 8];
    for piece in scene.pieces() {
        let Body::Piece { kind, side } = piece.body else {
            continue;
        };
        if let Some(square) = Square::from_world(piece.position) {
            let (x, y) = square.coord();
            occupants[x as usize][y as usize] = Some((kind.symbol(), side));
        }
    }

    for tile in scene.tiles() {
        let Body::Tile { square, shade, highlight } = tile.body else {
            continue;
        };
        let (x, y) = square.coord();
        let (column, row) = view.to_screen(x, y);
        let background = match (highlight, shade, view.lights_on) {
            (Some(Highlight::Destination), _, _) => Color::Green,
            (None, Shade::Light, true) => Color::Grey,
            (None, Shade::Dark, true) => Color::DarkGrey,
            (None, Shade::Light, false) => Color::DarkGrey,
            (None, Shade::Dark, false) => Color::Black,
        };
        let (symbol, foreground) = match occupants[x as usize][y as usize] {
            Some((symbol, Side::Red)) => (symbol, Color::Red),
            Some((symbol, Side::Blue)) => (symbol, Color::Blue),
            None => (' ', Color::Reset),
        };
        queue!(
            out,
            MoveTo(BOARD_LEFT + column as u16 * CELL_WIDTH, BOARD_TOP + row as u16),
            SetBackgroundColor(background),
            SetForegroundColor(foreground),
            Print(format!(" {symbol} ")),
        )?;
    }
    queue!(out, ResetColor)?;

    // Rank and file labels.
    for i in 0..8u8 {
        let (column, row) = view.to_screen(i, i);
        let file = (b'a' + i) as char;
        queue!(
            out,
            MoveTo(BOARD_LEFT + column as u16 * CELL_WIDTH + 1, BOARD_TOP + 8),
            Print(file),
            MoveTo(BOARD_LEFT - 2, BOARD_TOP + row as u16),
            Print(i + 1),
        )?;
    }

    let state = session.state();
    queue!(
        out,
        MoveTo(0, BOARD_TOP + 10),
        Print(format!("Move {}/{}  {}", state.cursor(), state.moves().len(), status)),
        MoveTo(0, BOARD_TOP + 11),
        Print("→ next   ← previous   c flip   l lights   q quit"),
    )?;
    out.flush()
}
