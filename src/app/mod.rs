//! Terminal front end: key handling and the draw loop.
//!
//! Each remote call is awaited inline before the next frame is drawn. There
//! is exactly one in-flight operation at a time and no background work, so
//! the UI simply holds still while Slack answers.

use std::io::Stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::controller::{EditSession, Notice, SessionState};
use crate::slack::MessageApi;
use crate::ui;

mod input;

pub use input::InputState;

/// Which field keystrokes land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Url,
    Editor,
}

/// Everything the renderer needs for one frame.
pub struct AppView<'a> {
    pub state: &'a SessionState,
    pub notice: Option<&'a Notice>,
    pub url_input: &'a InputState,
    pub editor_input: &'a InputState,
    pub focus: Focus,
}

pub struct App<A: MessageApi> {
    session: EditSession<A>,
    url_input: InputState,
    editor_input: InputState,
    focus: Focus,
    should_quit: bool,
}

impl<A: MessageApi> App<A> {
    pub fn new(session: EditSession<A>) -> Self {
        Self {
            session,
            url_input: InputState::new(),
            editor_input: InputState::new(),
            focus: Focus::Url,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        loop {
            terminal
                .draw(|frame| ui::draw_app(frame, &self.view()))
                .context("rendering frame")?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250)).context("polling for terminal events")? {
                match event::read().context("reading terminal event")? {
                    Event::Key(key) => self.handle_key(key).await,
                    Event::Resize(_, _) => {
                        // no-op: next draw adapts to the new size
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn view(&self) -> AppView<'_> {
        AppView {
            state: self.session.state(),
            notice: self.session.notice(),
            url_input: &self.url_input,
            editor_input: &self.editor_input,
            focus: self.focus,
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('s') => {
                    self.submit_update().await;
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => self.abandon_cycle(),
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Enter => match self.focus {
                Focus::Url => self.submit_url().await,
                Focus::Editor => self.editor_input.insert_newline(),
            },
            KeyCode::Backspace => {
                self.focused_input_mut().backspace();
            }
            KeyCode::Delete => {
                self.focused_input_mut().delete();
            }
            KeyCode::Left => self.focused_input_mut().move_left(),
            KeyCode::Right => self.focused_input_mut().move_right(),
            KeyCode::Home => self.focused_input_mut().move_home(),
            KeyCode::End => self.focused_input_mut().move_end(),
            KeyCode::Char(ch)
                if !key.modifiers.intersects(
                    KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
                ) =>
            {
                self.focused_input_mut().insert_char(ch);
            }
            _ => {}
        }
    }

    fn focused_input_mut(&mut self) -> &mut InputState {
        match self.focus {
            Focus::Url => &mut self.url_input,
            Focus::Editor => &mut self.editor_input,
        }
    }

    async fn submit_url(&mut self) {
        let url = self.url_input.text().trim().to_string();
        if url.is_empty() {
            return;
        }

        self.session.on_submit_url(&url).await;

        match self.session.state() {
            SessionState::MessageLoaded { current_text, .. } => {
                self.editor_input.set_text(current_text.clone());
                self.focus = Focus::Editor;
            }
            _ => {
                self.editor_input.clear();
                self.focus = Focus::Url;
            }
        }
    }

    async fn submit_update(&mut self) {
        if self.session.state().locator().is_none() {
            return;
        }
        let text = self.editor_input.text().to_string();
        self.session.on_submit_update(&text).await;
    }

    fn abandon_cycle(&mut self) {
        self.session.reset();
        self.url_input.clear();
        self.editor_input.clear();
        self.focus = Focus::Url;
    }

    fn toggle_focus(&mut self) {
        if self.session.state().locator().is_none() {
            self.focus = Focus::Url;
            return;
        }
        self.focus = match self.focus {
            Focus::Url => Focus::Editor,
            Focus::Editor => Focus::Url,
        };
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("switching to alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("creating terminal backend")?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("disabling raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("restoring screen state")?;
    terminal.show_cursor().ok();
    Ok(())
}
