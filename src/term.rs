use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};
use log::{debug, warn};

use crate::error::{TermError, TermResult};

/// Terminal column/row position.
pub type Pos = (u16, u16);

pub struct TermManager {
    width: u16,
    height: u16,
    stdout: Stdout,
    screen: Vec<char>,
    current_msg: Option<Message>,
    active: bool,
}

struct Message {
    top_left: Pos,
    width: u16,
    height: u16,
}

impl TermManager {
    pub fn new() -> TermResult<Self> {
        let (width, height) = terminal::size()?;
        let screen = vec![' '; width as usize * height as usize];
        Ok(TermManager { width, height, stdout: stdout(), screen, current_msg: None, active: false })
    }

    /// Fails with [`TermError::TooSmall`] before touching the terminal.
    pub fn require_size(&self, needed: Pos) -> TermResult<()> {
        if self.width < needed.0 || self.height < needed.1 {
            return Err(TermError::TooSmall { needed, actual: (self.width, self.height) });
        }
        Ok(())
    }

    pub fn setup(&mut self) -> TermResult<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        self.active = true;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        debug!("terminal set up at {}x{}", self.width, self.height);
        Ok(())
    }

    pub fn restore(&mut self) -> TermResult<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        debug!("terminal restored");
        Ok(())
    }

    /// Drains every key event that arrives within `wait`, returning as soon as
    /// the queue is empty after the first poll.
    pub fn read_key_events(&self, wait: Duration) -> TermResult<Vec<KeyEvent>> {
        let mut events = vec![];
        let mut timeout = wait;

        while poll(timeout)? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
            timeout = Duration::ZERO;
        }

        Ok(events)
    }

    pub fn size(&self) -> Pos {
        (self.width, self.height)
    }

    /// Draws a rectangle outline with `top_left` as its corner.
    pub fn draw_borders(&mut self, top_left: Pos, size: Pos) -> TermResult<()> {
        let (x0, y0) = top_left;
        let (width, height) = size;
        let end_x = x0 + width - 1;
        let end_y = y0 + height - 1;

        for x in x0..=end_x {
            let ch = if x == x0 || x == end_x { '+' } else { '-' };
            self.print_at((x, y0), ch)?;
            self.print_at((x, end_y), ch)?;
        }

        for y in y0 + 1..end_y {
            self.print_at((x0, y), '|')?;
            self.print_at((end_x, y), '|')?;
        }

        self.flush()
    }

    /// Shows `lines` in a box centered on the screen. The cells underneath
    /// come back on [`hide_message`](Self::hide_message).
    pub fn show_message(&mut self, lines: &[&str]) -> TermResult<()> {
        self.hide_message()?;

        let msg_height = (lines.len() + 2) as u16;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as u16;
        let top_left = (
            (self.width / 2).saturating_sub(msg_width / 2),
            (self.height / 2).saturating_sub(msg_height / 2),
        );

        for y in [top_left.1, top_left.1 + msg_height - 1] {
            for dx in 0..msg_width {
                self.print_at_no_save((top_left.0 + dx, y), ' ')?;
            }
        }

        for (i, line) in lines.iter().enumerate() {
            let padded = format!("{line: ^width$}", width = msg_width as usize);
            let y = top_left.1 + i as u16 + 1;
            for (dx, ch) in padded.chars().enumerate() {
                self.print_at_no_save((top_left.0 + dx as u16, y), ch)?;
            }
        }

        self.current_msg = Some(Message { width: msg_width, height: msg_height, top_left });
        self.flush()
    }

    pub fn hide_message(&mut self) -> TermResult<()> {
        let Some(msg) = self.current_msg.take() else {
            return Ok(());
        };

        for dy in 0..msg.height {
            for dx in 0..msg.width {
                let (x, y) = (msg.top_left.0 + dx, msg.top_left.1 + dy);
                let ch = self.screen_at((x, y)).unwrap_or(' ');
                self.print_at_no_save((x, y), ch)?;
            }
        }

        self.flush()
    }

    /// Prints `ch` and remembers it, unless a message box currently covers
    /// `pos`, in which case it is only remembered.
    pub fn print_at(&mut self, pos: Pos, ch: char) -> TermResult<()> {
        if let Some(idx) = self.index(pos) {
            self.screen[idx] = ch;
        }
        if self.current_msg.as_ref().is_some_and(|m| m.covers(pos)) {
            return Ok(());
        }
        self.print_at_no_save(pos, ch)
    }

    pub fn print_str_at(&mut self, pos: Pos, text: &str) -> TermResult<()> {
        for (dx, ch) in text.chars().enumerate() {
            self.print_at((pos.0 + dx as u16, pos.1), ch)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) -> TermResult<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        self.screen = vec![' '; self.width as usize * self.height as usize];
        self.current_msg = None;
        Ok(())
    }

    pub fn flush(&mut self) -> TermResult<()> {
        self.stdout.flush()?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_at_no_save(&mut self, pos: Pos, ch: char) -> TermResult<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        Ok(())
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        (pos.0 < self.width && pos.1 < self.height)
            .then(|| self.width as usize * pos.1 as usize + pos.0 as usize)
    }

    fn screen_at(&self, pos: Pos) -> Option<char> {
        self.index(pos).map(|idx| self.screen[idx])
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!("could not restore terminal: {err}");
        }
    }
}

impl Message {
    fn covers(&self, pos: Pos) -> bool {
        (self.top_left.0..self.top_left.0 + self.width).contains(&pos.0)
            && (self.top_left.1..self.top_left.1 + self.height).contains(&pos.1)
    }
}
