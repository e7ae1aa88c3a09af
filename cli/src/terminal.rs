//! Terminal display surface
//!
//! Renders the four pads, the banner line, and the choice trail with
//! crossterm. The whole frame is redrawn on every change; at four pads and
//! two text lines that is far below anything a terminal would notice.
//!
//! Raw mode and the alternate screen are entered on construction and
//! restored on drop, so the shell comes back intact however the game ends.

use std::io::{Stdout, Write, stdout};

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::warn;

use simon_core::{DisplaySurface, Signal};

/// Pads left to right in keyboard order, matching the a/s/d/f aliases.
const PAD_ORDER: [Signal; 4] = [Signal::Green, Signal::Red, Signal::Yellow, Signal::Blue];

const PAD_WIDTH: u16 = 9;
const PAD_HEIGHT: u16 = 3;
const PAD_GAP: u16 = 2;

fn key_label(signal: Signal) -> char {
    match signal {
        Signal::Green => 'a',
        Signal::Red => 's',
        Signal::Yellow => 'd',
        Signal::Blue => 'f',
    }
}

fn pad_color(signal: Signal, lit: bool) -> Color {
    match (signal, lit) {
        (Signal::Green, false) => Color::DarkGreen,
        (Signal::Green, true) => Color::Green,
        (Signal::Red, false) => Color::DarkRed,
        (Signal::Red, true) => Color::Red,
        (Signal::Blue, false) => Color::DarkBlue,
        (Signal::Blue, true) => Color::Blue,
        (Signal::Yellow, false) => Color::DarkYellow,
        (Signal::Yellow, true) => Color::Yellow,
    }
}

/// Crossterm-backed implementation of the game's display surface.
pub struct TerminalDisplay {
    out: Stdout,
    lit: [bool; 4],
    trail: Vec<Signal>,
    message: String,
}

impl TerminalDisplay {
    /// Enter raw mode and the alternate screen and draw the initial frame.
    pub fn new() -> std::io::Result<Self> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide)?;

        let mut display = Self {
            out,
            lit: [false; 4],
            trail: Vec::new(),
            message: "Watch the pads, then repeat with a/s/d/f. Esc quits.".to_string(),
        };
        display.redraw()?;
        Ok(display)
    }

    fn redraw(&mut self) -> std::io::Result<()> {
        queue!(
            self.out,
            Clear(ClearType::All),
            cursor::MoveTo(2, 0),
            Print("S I M O N"),
            cursor::MoveTo(2, 1),
            Print(&self.message),
        )?;

        for row in 0..PAD_HEIGHT {
            queue!(self.out, cursor::MoveTo(2, 3 + row))?;
            for signal in PAD_ORDER {
                let color = pad_color(signal, self.lit[signal.index()]);
                queue!(
                    self.out,
                    SetBackgroundColor(color),
                    Print(" ".repeat(PAD_WIDTH as usize)),
                    ResetColor,
                    Print(" ".repeat(PAD_GAP as usize)),
                )?;
            }
        }

        // Key labels, centered under their pads.
        for (i, signal) in PAD_ORDER.into_iter().enumerate() {
            let x = 2 + i as u16 * (PAD_WIDTH + PAD_GAP) + PAD_WIDTH / 2;
            queue!(
                self.out,
                cursor::MoveTo(x, 3 + PAD_HEIGHT),
                Print(key_label(signal)),
            )?;
        }

        queue!(self.out, cursor::MoveTo(2, 5 + PAD_HEIGHT), Print("moves: "))?;
        for &signal in &self.trail {
            queue!(
                self.out,
                SetForegroundColor(pad_color(signal, true)),
                Print("■ "),
                ResetColor,
            )?;
        }

        self.out.flush()
    }

    fn redraw_or_warn(&mut self) {
        if let Err(err) = self.redraw() {
            warn!(%err, "terminal redraw failed");
        }
    }
}

impl DisplaySurface for TerminalDisplay {
    fn activate(&mut self, signal: Signal) {
        self.lit[signal.index()] = true;
        self.redraw_or_warn();
    }

    fn deactivate(&mut self, signal: Signal) {
        self.lit[signal.index()] = false;
        self.redraw_or_warn();
    }

    fn render_choice_trail(&mut self, choices: &[Signal]) {
        self.trail = choices.to_vec();
        self.redraw_or_warn();
    }

    fn show_message(&mut self, text: &str) {
        self.message = text.to_string();
        self.redraw_or_warn();
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        let _ = execute!(self.out, LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}
