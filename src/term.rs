//! Terminal front-end: a framebuffer canvas and keyboard input via crossterm

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use tracing::{debug, error};

use crate::config::{GameConfig, BACKGROUND_COLOR, TERMINAL_SAMPLE_X, TERMINAL_SAMPLE_Y};
use crate::error::GameError;
use crate::input::{InputEvent, InputSource, Key};
use crate::render::{Color, Rect, Renderer};

/// Upper half block: foreground paints the top sample, background the bottom one
const HALF_BLOCK: char = '\u{2580}';

/// Raw mode and the alternate screen, restored on drop
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> Result<Self, GameError> {
        terminal::enable_raw_mode()?;
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        debug!("Terminal switched to raw mode");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let restored = execute!(io::stdout(), ResetColor, Show, LeaveAlternateScreen)
            .and_then(|_| terminal::disable_raw_mode());
        if let Err(e) = restored {
            error!("Failed to restore terminal: {}", e);
        }
    }
}

/// A framebuffer the size of the playfield, printed as half-block characters
pub struct TerminalCanvas<W: Write = Stdout> {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
    out: W,
}

impl TerminalCanvas<Stdout> {
    pub fn stdout(config: &GameConfig) -> Self {
        Self::new(config, io::stdout())
    }
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(config: &GameConfig, out: W) -> Self {
        // GameConfig caps both sides, so the framebuffer stays small
        let width = config.pixel_width() as usize;
        let height = config.pixel_height() as usize;
        Self {
            width,
            height,
            pixels: vec![BACKGROUND_COLOR; width * height],
            out,
        }
    }

    /// Color at a framebuffer position, background outside
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            BACKGROUND_COLOR
        }
    }

    /// Terminal columns and lines needed to show the whole framebuffer
    pub fn text_size(&self) -> (u16, u16) {
        let columns = self.width.div_ceil(usize::from(TERMINAL_SAMPLE_X));
        let samples = self.height.div_ceil(usize::from(TERMINAL_SAMPLE_Y));
        let lines = samples.div_ceil(2);
        (
            u16::try_from(columns).unwrap_or(u16::MAX),
            u16::try_from(lines).unwrap_or(u16::MAX),
        )
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalCanvas<W> {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), GameError> {
        let clip = |start: i32, len: u32, max: usize| -> (usize, usize) {
            let max = i64::try_from(max).unwrap_or(i64::MAX);
            let start = i64::from(start);
            let from = start.clamp(0, max);
            let to = (start + i64::from(len)).clamp(0, max);
            (from as usize, to as usize)
        };
        let (x0, x1) = clip(rect.x, rect.width, self.width);
        let (y0, y1) = clip(rect.y, rect.height, self.height);

        for y in y0..y1 {
            let row = y * self.width;
            self.pixels[row + x0..row + x1].fill(color);
        }
        Ok(())
    }

    fn present(&mut self) -> Result<(), GameError> {
        let (columns, lines) = self.text_size();
        let (sx, sy) = (u32::from(TERMINAL_SAMPLE_X), u32::from(TERMINAL_SAMPLE_Y));

        for line in 0..lines {
            queue!(self.out, MoveTo(0, line))?;
            for column in 0..columns {
                let x = u32::from(column) * sx;
                let top = self.pixel(x, u32::from(line) * 2 * sy);
                let bottom = self.pixel(x, (u32::from(line) * 2 + 1) * sy);
                queue!(
                    self.out,
                    SetForegroundColor(term_color(top)),
                    SetBackgroundColor(term_color(bottom)),
                    Print(HALF_BLOCK)
                )?;
            }
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        Ok(())
    }
}

fn term_color(color: Color) -> crossterm::style::Color {
    crossterm::style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Keyboard events from the terminal, read without blocking
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<Option<InputEvent>, GameError> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = translate_key(key) {
                    return Ok(Some(event));
                }
            }
        }
        Ok(None)
    }
}

/// Map a crossterm key event to a game event; key releases are dropped
pub fn translate_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }

    let key = match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char('q') | KeyCode::Char('Q') => Key::Q,
        _ => Key::Other,
    };
    Some(InputEvent::KeyDown(key))
}
