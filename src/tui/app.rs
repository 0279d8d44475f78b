//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the task store, wires the
//! top-level controls (input, add, sort, confirmation panel) to it, delegates
//! list interactions to the [`ListView`] and runs the event loop.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::cli::Config;
use crate::store::TaskStore;
use crate::tui::{
    enums::{Control, Focus},
    icons::{sort_icon, ACCENT, DANGER, DELETE},
    input::InputField,
    list_view::ListView,
};

/// Main application state for the terminal user interface.
pub struct App {
    store: TaskStore,
    list: ListView,
    input: InputField,
    focus: Focus,
    panel_visible: bool,
    sort_hovered: bool,
    controls: Vec<(Control, Rect)>,
    status_message: String,
    tick: Duration,
    should_quit: bool,
}

impl App {
    /// Create an app with an empty list.
    pub fn new(config: &Config) -> Self {
        App {
            store: TaskStore::new(),
            list: ListView::new(),
            input: InputField::new(),
            focus: Focus::Input,
            panel_visible: false,
            sort_hovered: false,
            controls: Vec::new(),
            status_message: String::new(),
            tick: config.tick,
            should_quit: false,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn into_store(self) -> TaskStore {
        self.store
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Screen region of a top-level control on the last render.
    pub fn control_area(&self, control: Control) -> Option<Rect> {
        self.controls
            .iter()
            .find(|(c, _)| *c == control)
            .map(|(_, area)| *area)
    }

    fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let pos = Position::new(column, row);
        self.controls
            .iter()
            .find(|(_, area)| area.contains(pos))
            .map(|(c, _)| *c)
    }

    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    /// Add the typed description as a new task.
    ///
    /// Pressing add always reveals the confirmation panel, even when the
    /// input is blank and nothing is added.
    pub fn add_from_input(&mut self) {
        self.panel_visible = true;
        let description = self.input.value.trim().to_string();
        if description.is_empty() {
            return;
        }
        if let Some(task) = self.store.add(&description) {
            self.input.clear();
            self.set_status_message(format!("Added task {}", task.id));
        }
    }

    /// Sort the list and flip the direction for next time.
    pub fn sort(&mut self) {
        let ascending = self.store.sort_ascending();
        self.store.sort();
        let direction = if ascending { "ascending" } else { "descending" };
        self.set_status_message(format!("Sorted {}", direction));
    }

    pub fn dismiss_panel(&mut self) {
        self.panel_visible = false;
    }

    fn activate(&mut self, control: Control) {
        tracing::trace!(?control, "control clicked");
        match control {
            Control::Input => self.focus = Focus::Input,
            Control::Add => self.add_from_input(),
            Control::Sort => self.sort(),
            Control::Dismiss => self.dismiss_panel(),
        }
    }

    /// Dispatch a single terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Handle a key press for the focused area.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        self.status_message.clear();
        if key.code == KeyCode::Tab {
            self.focus = self.focus.toggle();
            return;
        }
        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.add_from_input(),
            KeyCode::Esc => self.focus = Focus::List,
            KeyCode::Char(c) => self.input.handle_char(c),
            KeyCode::Backspace => self.input.handle_backspace(),
            KeyCode::Delete => self.input.handle_delete(),
            KeyCode::Left => self.input.move_cursor_left(),
            KeyCode::Right => self.input.move_cursor_right(),
            KeyCode::Home => self.input.move_cursor_home(),
            KeyCode::End => self.input.move_cursor_end(),
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        let len = self.store.len();
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('a') | KeyCode::Char('i') => self.focus = Focus::Input,
            KeyCode::Char('s') => self.sort(),
            KeyCode::Esc => self.dismiss_panel(),
            KeyCode::Up if shift => self.list.move_selected(&mut self.store, true),
            KeyCode::Down if shift => self.list.move_selected(&mut self.store, false),
            KeyCode::Char('K') => self.list.move_selected(&mut self.store, true),
            KeyCode::Char('J') => self.list.move_selected(&mut self.store, false),
            KeyCode::Up | KeyCode::Char('k') => self.list.select_prev(len),
            KeyCode::Down | KeyCode::Char('j') => self.list.select_next(len),
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.list.delete_selected(&mut self.store) {
                    self.set_status_message(format!("Deleted task {}", id));
                }
            }
            _ => {}
        }
    }

    /// Handle a mouse event: top-level controls first, then the list.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let control = self.control_at(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.sort_hovered = control == Some(Control::Sort);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(control) = control {
                    self.activate(control);
                    return;
                }
            }
            _ => {}
        }
        if self.list.handle_mouse(mouse, &mut self.store)
            && matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
        {
            self.focus = Focus::List;
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let header = Paragraph::new(Line::from(vec![
            Span::styled("TO-DO LIST", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                format!("{} task(s)", self.store.len()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    fn render_button(f: &mut Frame, area: Rect, label: &str, color: Color) {
        let button = Paragraph::new(label.to_string())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)))
            .alignment(Alignment::Center);
        f.render_widget(button, area);
    }

    fn render_input_row(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(9), Constraint::Length(10)])
            .split(area);

        let border = if self.focus == Focus::Input { ACCENT } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title("New task");
        let inner = block.inner(chunks[0]);
        let (visible, column) = self.input.visible_window(inner.width as usize);
        f.render_widget(Paragraph::new(visible).block(block), chunks[0]);
        if self.focus == Focus::Input && inner.width > 0 {
            // column < inner.width, so the cast cannot truncate
            let x = inner.x.saturating_add(column as u16);
            f.set_cursor_position((x, inner.y));
        }

        Self::render_button(f, chunks[1], "Add", ACCENT);
        let sort_label = format!("{} Sort", sort_icon(self.store.sort_ascending(), self.sort_hovered));
        let sort_color = if self.sort_hovered { Color::Cyan } else { ACCENT };
        Self::render_button(f, chunks[2], &sort_label, sort_color);

        self.controls.push((Control::Input, chunks[0]));
        self.controls.push((Control::Add, chunks[1]));
        self.controls.push((Control::Sort, chunks[2]));
    }

    fn render_panel(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(13)])
            .split(area);

        let notice = Paragraph::new(format!("Click {} next to a task to delete it", DELETE))
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(DANGER))
                    .title("Delete"),
            );
        f.render_widget(notice, chunks[0]);
        Self::render_button(f, chunks[1], "Dismiss", DANGER);
        self.controls.push((Control::Dismiss, chunks[1]));
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.focus {
                Focus::Input => "Enter add | Tab list | Ctrl+C quit".to_string(),
                Focus::List => {
                    "j/k select | J/K move | d delete | s sort | Esc dismiss | Tab input | q quit"
                        .to_string()
                }
            }
        };
        let status = Paragraph::new(text)
            .style(Style::default().bg(ACCENT).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main render function. Rebuilds every control's hit area.
    pub fn render(&mut self, f: &mut Frame) {
        self.controls.clear();
        let panel_height = if self.panel_visible { 3 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(panel_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_input_row(f, chunks[1]);
        if self.panel_visible {
            self.render_panel(f, chunks[2]);
        }
        self.list.render(f, chunks[3], &self.store);
        self.render_status_bar(f, chunks[4]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Redraws after every handled event until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(self.tick)? {
                let ev = event::read()?;
                self.handle_event(ev);
            }
            if self.should_quit {
                break;
            }
        }
        Ok(())
    }
}
