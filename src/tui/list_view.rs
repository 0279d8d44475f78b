//! List container rendering and pointer handling.
//!
//! The view redraws every task on each frame and rebuilds its hit-test table
//! from scratch while doing so. Mouse events are resolved against that table:
//! presses on a row's text start a drag, presses on its delete control are
//! clicks, and releases finish whichever gesture is in progress.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::drag::{DragInteraction, ReorderRequest};
use crate::store::TaskStore;
use crate::tui::enums::ListHit;
use crate::tui::icons::{delete_icon, ACCENT, DANGER, DROP_TARGET};

/// Width of the delete control at the right edge of each row.
const DELETE_WIDTH: u16 = 3;

/// Screen regions of one rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemArea {
    pub id: u64,
    pub row: Rect,
    pub delete: Rect,
}

/// Full-replace renderer for the task list.
#[derive(Debug, Default)]
pub struct ListView {
    items: Vec<ItemArea>,
    visible: bool,
    rendered_revision: Option<u64>,
    offset: usize,
    selected: Option<usize>,
    drag: DragInteraction,
    pressed: Option<ListHit>,
    hover: Option<ListHit>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the container was shown on the last render.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Rows drawn on the last render, top to bottom.
    pub fn items(&self) -> &[ItemArea] {
        &self.items
    }

    pub fn item_area(&self, id: u64) -> Option<ItemArea> {
        self.items.iter().copied().find(|item| item.id == id)
    }

    pub fn drag(&self) -> &DragInteraction {
        &self.drag
    }

    /// Id of the selected task.
    pub fn selected_id(&self, store: &TaskStore) -> Option<u64> {
        self.selected
            .and_then(|idx| store.tasks().get(idx))
            .map(|t| t.id)
    }

    fn clamp_selection(&mut self, len: usize) {
        self.selected = match (self.selected, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(idx), len) => Some(idx.min(len - 1)),
        };
    }

    /// Draw the whole list into `area`, replacing whatever was there.
    ///
    /// An empty store hides the container: nothing is drawn and no rows can be
    /// hit until tasks exist again.
    pub fn render(&mut self, f: &mut Frame, area: Rect, store: &TaskStore) {
        self.items.clear();
        self.rendered_revision = Some(store.revision());
        let tasks = store.tasks();
        self.clamp_selection(tasks.len());

        if tasks.is_empty() {
            self.visible = false;
            self.offset = 0;
            return;
        }
        self.visible = true;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(format!("Tasks ({})", tasks.len()));
        let inner = block.inner(area);
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let height = inner.height as usize;
        if height == 0 || inner.width == 0 {
            return;
        }
        if let Some(selected) = self.selected {
            if selected < self.offset {
                self.offset = selected;
            } else if selected >= self.offset + height {
                self.offset = selected + 1 - height;
            }
        }
        self.offset = self.offset.min(tasks.len().saturating_sub(height));

        let source = self.drag.source();
        let candidate = self.drag.candidate();

        for (line, (idx, task)) in tasks
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(height)
            .enumerate()
        {
            let row = Rect::new(inner.x, inner.y + line as u16, inner.width, 1);
            let delete_width = DELETE_WIDTH.min(row.width);
            let delete = Rect::new(row.right() - delete_width, row.y, delete_width, 1);
            let text = Rect::new(row.x, row.y, row.width - delete_width, 1);
            self.items.push(ItemArea { id: task.id, row, delete });

            let mut style = Style::default().fg(Color::White);
            if Some(idx) == self.selected {
                style = Style::default().bg(Color::Gray).fg(Color::Black);
            }
            if candidate == Some(task.id) && source != Some(task.id) {
                style = Style::default().bg(DROP_TARGET).fg(Color::White);
            }
            if source == Some(task.id) {
                style = style.add_modifier(Modifier::DIM | Modifier::ITALIC);
            }

            let marker = if Some(idx) == self.selected { ">> " } else { "   " };
            let label = Paragraph::new(Line::from(vec![
                Span::raw(marker),
                Span::raw(task.description.as_str()),
            ]))
            .style(style);
            f.render_widget(label, text);

            let hovered = self.hover == Some(ListHit::Delete(task.id));
            let mut delete_style = Style::default().fg(DANGER);
            if hovered {
                delete_style = delete_style.add_modifier(Modifier::BOLD);
            }
            let button = Paragraph::new(format!(" {} ", delete_icon(hovered))).style(delete_style);
            f.render_widget(button, delete);
        }
    }

    /// Resolve a screen position against the rows drawn on the last render.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ListHit> {
        let pos = Position::new(column, row);
        self.items.iter().find_map(|item| {
            if item.delete.contains(pos) {
                Some(ListHit::Delete(item.id))
            } else if item.row.contains(pos) {
                Some(ListHit::Item(item.id))
            } else {
                None
            }
        })
    }

    /// Handle a mouse event against the list. Returns true when the event
    /// landed on the list or continued a gesture that started there.
    ///
    /// Events are ignored while the hit-test table is older than the store,
    /// since rows may have moved since they were drawn.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, store: &mut TaskStore) -> bool {
        if self.rendered_revision != Some(store.revision()) {
            self.drag.cancel();
            self.pressed = None;
            return false;
        }
        let hit = self.hit_test(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = hit;
                if let Some(hit) = hit {
                    self.selected = store.position(hit.id());
                }
                match hit {
                    Some(ListHit::Item(id)) => self.drag.start(id),
                    _ => self.drag.cancel(),
                }
                hit.is_some()
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.hover = hit;
                if !self.drag.is_dragging() {
                    return false;
                }
                match hit {
                    Some(hit) => self.drag.over(hit.id()),
                    None => self.drag.leave(),
                }
                true
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let pressed = self.pressed.take();
                if self.drag.is_dragging() {
                    match hit {
                        Some(hit) => {
                            if let Some(request) = self.drag.drop_on(hit.id()) {
                                self.apply(request, store);
                            }
                        }
                        None => self.drag.cancel(),
                    }
                    return true;
                }
                match (pressed, hit) {
                    (Some(ListHit::Delete(down)), Some(ListHit::Delete(up))) if down == up => {
                        tracing::debug!(id = up, "delete control clicked");
                        store.remove(up);
                        true
                    }
                    _ => hit.is_some(),
                }
            }
            MouseEventKind::Moved => {
                self.hover = hit;
                hit.is_some()
            }
            _ => false,
        }
    }

    fn apply(&mut self, request: ReorderRequest, store: &mut TaskStore) {
        store.apply(request);
        self.selected = store.position(request.source);
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) if idx + 1 < len => idx + 1,
            Some(idx) => idx,
            None => 0,
        });
    }

    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    /// Move the selected task one row up or down through the same reorder
    /// path a drop uses.
    pub fn move_selected(&mut self, store: &mut TaskStore, up: bool) {
        let Some(idx) = self.selected else { return };
        let neighbour = if up { idx.checked_sub(1) } else { Some(idx + 1) };
        let ids = neighbour
            .and_then(|n| store.tasks().get(n))
            .map(|t| t.id)
            .zip(store.tasks().get(idx).map(|t| t.id));
        if let Some((target, source)) = ids {
            self.apply(ReorderRequest { source, target }, store);
        }
    }

    /// Remove the selected task. Returns its id when one was selected.
    pub fn delete_selected(&mut self, store: &mut TaskStore) -> Option<u64> {
        let id = self.selected_id(store)?;
        store.remove(id);
        self.clamp_selection(store.len());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn draw(view: &mut ListView, store: &TaskStore) {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                view.render(f, area, store)
            })
            .unwrap();
    }

    fn store_with(descriptions: &[&str]) -> TaskStore {
        let mut store = TaskStore::new();
        for desc in descriptions {
            store.add(desc);
        }
        store
    }

    fn descriptions(store: &TaskStore) -> Vec<&str> {
        store.tasks().iter().map(|t| t.description.as_str()).collect()
    }

    #[test]
    fn test_render_lays_out_rows_in_order() {
        let store = store_with(&["a", "b", "c"]);
        let mut view = ListView::new();
        draw(&mut view, &store);
        assert!(view.is_visible());
        let ids: Vec<u64> = view.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(view.items()[0].row.y + 1, view.items()[1].row.y);
        assert_eq!(view.items()[0].delete.right(), view.items()[0].row.right());
    }

    #[test]
    fn test_empty_store_hides_container() {
        let mut store = store_with(&["x"]);
        let mut view = ListView::new();
        draw(&mut view, &store);
        assert!(view.is_visible());

        store.remove(0);
        draw(&mut view, &store);
        assert!(!view.is_visible());
        assert!(view.items().is_empty());
        assert_eq!(view.hit_test(5, 1), None);
    }

    #[test]
    fn test_drag_and_drop_reorders() {
        let mut store = store_with(&["a", "b", "c"]);
        let mut view = ListView::new();
        draw(&mut view, &store);

        let source = view.item_area(2).unwrap().row;
        let target = view.item_area(0).unwrap().row;
        assert!(view.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), source.x + 1, source.y), &mut store));
        view.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), target.x + 1, source.y - 1), &mut store);
        view.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), target.x + 1, target.y), &mut store);
        assert_eq!(view.drag().candidate(), Some(0));
        view.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), target.x + 1, target.y), &mut store);

        assert_eq!(descriptions(&store), vec!["c", "a", "b"]);
        assert!(!view.drag().is_dragging());
        assert_eq!(view.selected, Some(0));
    }

    #[test]
    fn test_drop_onto_delete_control_uses_its_row() {
        let mut store = store_with(&["a", "b"]);
        let mut view = ListView::new();
        draw(&mut view, &store);

        let source = view.item_area(0).unwrap().row;
        let target = view.item_area(1).unwrap().delete;
        view.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), source.x, source.y), &mut store);
        view.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), target.x, target.y), &mut store);
        assert_eq!(descriptions(&store), vec!["b", "a"]);
    }

    #[test]
    fn test_drop_on_self_or_outside_is_noop() {
        let mut store = store_with(&["a", "b"]);
        let mut view = ListView::new();
        draw(&mut view, &store);
        let revision = store.revision();

        let row = view.item_area(1).unwrap().row;
        view.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), row.x, row.y), &mut store);
        view.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), row.x + 2, row.y), &mut store);
        assert_eq!(store.revision(), revision);

        view.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), row.x, row.y), &mut store);
        view.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 39, 9), &mut store);
        assert_eq!(view.drag().candidate(), None);
        view.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 39, 9), &mut store);
        assert!(!view.drag().is_dragging());
        assert_eq!(descriptions(&store), vec!["a", "b"]);
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_delete_click_removes_task() {
        let mut store = store_with(&["a", "b"]);
        let mut view = ListView::new();
        draw(&mut view, &store);

        let delete = view.item_area(0).unwrap().delete;
        view.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), delete.x + 1, delete.y), &mut store);
        assert!(!view.drag().is_dragging());
        view.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), delete.x + 1, delete.y), &mut store);
        assert_eq!(descriptions(&store), vec!["b"]);

        // Rows are stale until the next render.
        let stale = view.item_area(1).unwrap().delete;
        assert!(!view.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), stale.x, stale.y), &mut store));
        draw(&mut view, &store);
        assert_eq!(view.items().len(), 1);
    }

    #[test]
    fn test_keyboard_reorder_and_delete() {
        let mut store = store_with(&["a", "b", "c"]);
        let mut view = ListView::new();
        draw(&mut view, &store);
        assert_eq!(view.selected, Some(0));

        view.move_selected(&mut store, false);
        assert_eq!(descriptions(&store), vec!["b", "a", "c"]);
        assert_eq!(view.selected, Some(1));

        view.move_selected(&mut store, true);
        view.move_selected(&mut store, true);
        assert_eq!(descriptions(&store), vec!["a", "b", "c"]);
        assert_eq!(view.selected, Some(0));

        view.select_next(store.len());
        view.select_next(store.len());
        view.select_next(store.len());
        assert_eq!(view.delete_selected(&mut store), Some(2));
        assert_eq!(view.selected, Some(1));
        view.select_prev(store.len());
        assert_eq!(view.selected_id(&store), Some(0));
    }

    #[test]
    fn test_delete_hover_swaps_glyph() {
        let store = store_with(&["a"]);
        let mut view = ListView::new();
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                view.render(f, area, &store)
            })
            .unwrap();
        let delete = view.item_area(0).unwrap().delete;
        let glyph = |t: &Terminal<TestBackend>| {
            t.backend().buffer()[(delete.x + 1, delete.y)].symbol().to_string()
        };
        assert_eq!(glyph(&terminal), crate::tui::icons::DELETE);

        let mut store = store;
        view.handle_mouse(mouse(MouseEventKind::Moved, delete.x + 1, delete.y), &mut store);
        terminal
            .draw(|f| {
                let area = f.area();
                view.render(f, area, &store)
            })
            .unwrap();
        assert_eq!(glyph(&terminal), crate::tui::icons::DELETE_HOVER);
    }
}
