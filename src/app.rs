//! Interactive REPL over a terminal session.
//!
//! Raw-mode key loop: printable keys edit the input buffer, Enter submits,
//! Tab completes, Up/Down recall previous submissions. The scrollback is
//! flushed incrementally; a shrink means `clear` ran and the screen resets.

use std::io::{Stdout, Write, stdout};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    queue,
    terminal::{self, Clear, ClearType},
};
use termfolio::core::Session;

use crate::render;

pub struct Repl {
    session: Session,
    rendered: usize,
}

impl Repl {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            rendered: 0,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        let result = self.event_loop(&mut out).await;
        terminal::disable_raw_mode()?;
        println!();
        result
    }

    async fn event_loop(&mut self, out: &mut Stdout) -> Result<()> {
        self.flush_history(out)?;
        self.draw_input(out)?;

        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match (key.code, key.modifiers) {
                (KeyCode::Char('c'), KeyModifiers::CONTROL)
                | (KeyCode::Char('d'), KeyModifiers::CONTROL) => break,
                (KeyCode::Enter, _) => {
                    self.clear_input_line(out)?;
                    self.session.submit().await;
                    self.flush_history(out)?;
                    self.draw_input(out)?;
                }
                (KeyCode::Tab, _) => {
                    self.session.complete();
                    if self.session.history().len() != self.rendered {
                        self.clear_input_line(out)?;
                        self.flush_history(out)?;
                    }
                    self.draw_input(out)?;
                }
                (KeyCode::Backspace, _) => {
                    self.session.backspace();
                    self.draw_input(out)?;
                }
                (KeyCode::Up, _) => {
                    if let Some(previous) = self.session.recall(-1) {
                        self.session.set_input(previous);
                    }
                    self.draw_input(out)?;
                }
                (KeyCode::Down, _) => {
                    let next = self.session.recall(1).unwrap_or_default();
                    self.session.set_input(next);
                    self.draw_input(out)?;
                }
                (KeyCode::Char(c), modifiers)
                    if modifiers.is_empty() || modifiers == KeyModifiers::SHIFT =>
                {
                    self.session.push_char(c);
                    self.draw_input(out)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Print scrollback lines appended since the last flush.
    fn flush_history(&mut self, out: &mut Stdout) -> Result<()> {
        let len = self.session.history().len();
        if len < self.rendered {
            queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
            self.rendered = 0;
        }
        for index in self.rendered..len {
            let formatted = render::format_line(&self.session.history()[index]);
            write!(out, "{formatted}\r\n")?;
        }
        self.rendered = len;
        out.flush()?;
        Ok(())
    }

    fn draw_input(&mut self, out: &mut Stdout) -> Result<()> {
        queue!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        write!(
            out,
            "{}{}",
            render::prompt(&self.session.prompt_path()),
            self.session.input()
        )?;
        out.flush()?;
        Ok(())
    }

    fn clear_input_line(&mut self, out: &mut Stdout) -> Result<()> {
        queue!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        out.flush()?;
        Ok(())
    }
}
