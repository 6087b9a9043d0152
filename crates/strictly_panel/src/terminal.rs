//! Interactive terminal panel.
//!
//! Keys stand in for the four switches and the simulated register chain is
//! drawn as a 3x3 grid of colored LEDs. Key events are already discrete
//! presses, so they go straight to the controller without debouncing.

use crate::status::describe;
use crate::{Button, Controller, PanelConfig, PanelError, ShiftRegisterChain, SimulatedTransport};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::style::{Color as TermColor, Print, ResetColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use strictly_ledgame::{Color, Frame, GameState, Outcome, Position};
use tracing::{info, instrument, warn};

/// What a key asks the panel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a switch.
    Press(Button),
    /// Leave the panel.
    Quit,
}

/// Maps a key to a panel action.
pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let action = match key.code {
        KeyCode::Char('p') => KeyAction::Press(Button::Power),
        KeyCode::Char('r') => KeyAction::Press(Button::Reset),
        KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::Right => {
            KeyAction::Press(Button::Advance)
        }
        KeyCode::Enter | KeyCode::Char('s') => KeyAction::Press(Button::Select),
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        _ => return None,
    };
    Some(action)
}

/// Restores the terminal when dropped, including on early return.
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen)
            .and_then(|()| terminal::disable_raw_mode())
        {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

fn led(frame: &Frame, pos: Position) -> (TermColor, &'static str) {
    match frame.get(pos).color() {
        Some(Color::Red) => (TermColor::Red, "●"),
        Some(Color::Green) => (TermColor::Green, "●"),
        None if frame.get(pos).is_lit() => (TermColor::Yellow, "●"),
        None => (TermColor::DarkGrey, "○"),
    }
}

/// Draws the LED grid and status text.
pub fn draw(
    out: &mut impl Write,
    frame: &Frame,
    state: &GameState,
    powered: bool,
    message: &str,
) -> io::Result<()> {
    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        Print("strictly_panel  [p]ower [r]eset [space] advance [enter] select [q]uit")
    )?;

    for pos in Position::ALL {
        // Grid is 3x3, so both coordinates fit in u16.
        let x = 2 + 2 * pos.col() as u16;
        let y = 2 + pos.row() as u16;
        let (color, symbol) = led(frame, pos);
        queue!(out, cursor::MoveTo(x, y), SetForegroundColor(color), Print(symbol))?;
    }
    queue!(out, ResetColor)?;

    let status = if !powered {
        "Powered off".to_string()
    } else {
        match state.outcome() {
            Outcome::InProgress => format!(
                "{} to move, cursor on tile {}",
                state.current_player(),
                state.selected_tile().to_index() + 1
            ),
            outcome => outcome.to_string(),
        }
    };
    queue!(
        out,
        cursor::MoveTo(0, 6),
        Print(status),
        cursor::MoveTo(0, 7),
        Print(message)
    )?;
    out.flush()
}

/// Runs the interactive panel until the player quits.
///
/// Returns the final game state.
#[instrument(skip(config))]
pub fn run(config: &PanelConfig) -> Result<GameState, PanelError> {
    let chain = ShiftRegisterChain::new(*config.registers())?;
    let mut controller = Controller::new(config.game_config(), SimulatedTransport::simulated(chain));
    let tick = Duration::from_millis(*config.poll_interval());

    let _guard = RawModeGuard::enter().map_err(crate::TransportError::from)?;
    controller.start()?;
    let mut stdout = io::stdout();
    let mut message = String::from("New game. Player 1's turn");
    redraw(&mut stdout, &controller, &message)?;

    let start = Instant::now();
    info!("Interactive panel running");
    loop {
        let mut presses = Vec::new();
        if event::poll(tick).map_err(crate::TransportError::from)? {
            while event::poll(Duration::ZERO).map_err(crate::TransportError::from)? {
                if let Event::Key(key) = event::read().map_err(crate::TransportError::from)? {
                    match key_action(key) {
                        Some(KeyAction::Press(button)) => presses.push(button),
                        Some(KeyAction::Quit) => {
                            info!("Quit requested");
                            return Ok(controller.state().clone());
                        }
                        None => {}
                    }
                }
            }
        }

        let now = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        let report = controller.poll(now, &presses)?;
        if let Some(line) = report.events.iter().rev().find_map(describe) {
            message = line;
        }
        if report.rendered || !presses.is_empty() {
            redraw(&mut stdout, &controller, &message)?;
        }
    }
}

fn redraw(
    out: &mut impl Write,
    controller: &Controller<SimulatedTransport>,
    message: &str,
) -> Result<(), PanelError> {
    let frame = controller.transport().displayed()?;
    draw(out, &frame, controller.state(), controller.is_powered(), message)
        .map_err(crate::TransportError::from)?;
    Ok(())
}
