use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::calendar::schedule::{
    block_height, day_name, short_day_name, slot_labels, DISPLAY_DAYS, SLOT_COUNT,
};
use crate::calendar::{ScheduleEvent, SlotCell, Store};
use crate::theme;

/// Cursor position in display coordinates: column into `DISPLAY_DAYS`, row
/// into the slot list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotCursor {
    pub column: usize,
    pub slot: usize,
}

impl SlotCursor {
    pub fn day(&self) -> u8 {
        DISPLAY_DAYS[self.column.min(DISPLAY_DAYS.len() - 1)]
    }

    pub fn time(&self) -> String {
        slot_labels()
            .into_iter()
            .nth(self.slot)
            .unwrap_or_default()
    }

    pub fn left(&mut self) {
        self.column = self.column.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.column = (self.column + 1).min(DISPLAY_DAYS.len() - 1);
    }

    pub fn up(&mut self) {
        self.slot = self.slot.saturating_sub(1);
    }

    pub fn down(&mut self) {
        self.slot = (self.slot + 1).min(SLOT_COUNT - 1);
    }

    /// Move to the column showing weekday `day` (0 = Sunday).
    pub fn jump_to_day(&mut self, day: u8) {
        if let Some(column) = DISPLAY_DAYS.iter().position(|d| *d == day) {
            self.column = column;
        }
    }
}

/// Every cell of the weekly grid, `[slot][column]`, in display order.
pub fn slot_grid(store: &Store) -> Vec<Vec<SlotCell<'_>>> {
    slot_labels()
        .iter()
        .map(|time| {
            DISPLAY_DAYS
                .iter()
                .map(|day| SlotCell::classify(store.schedule_events_for_slot(*day, time), time))
                .collect()
        })
        .collect()
}

/// First slot drawn when only `visible` slots fit, scrolled so the cursor
/// slot stays on screen.
pub fn first_visible_slot(cursor_slot: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    cursor_slot
        .saturating_sub(visible - 1)
        .min(SLOT_COUNT.saturating_sub(visible))
}

pub struct ScheduleView;

impl ScheduleView {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        store: &Store,
        cursor: SlotCursor,
        today_weekday: u8,
    ) {
        let t = theme::current();

        let block = Block::default()
            .title(" Weekly Schedule ")
            .title_style(t.header)
            .title_bottom(Line::from(Span::styled(" n:Add entry ", t.dim)))
            .borders(Borders::ALL)
            .border_style(t.border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width < 16 || inner.height < 3 {
            return;
        }

        let time_col_w: u16 = 6;
        let col_w = (inner.width.saturating_sub(time_col_w) / 7).max(1);

        let mut col_constraints = vec![Constraint::Length(time_col_w)];
        for _ in 0..7 {
            col_constraints.push(Constraint::Length(col_w));
        }
        col_constraints.push(Constraint::Min(0));
        let cols = Layout::horizontal(col_constraints).split(inner);

        // Reserve 1 row for day headers
        let content_rows = inner.height.saturating_sub(1) as usize;
        let rows_per_hour = (content_rows / SLOT_COUNT).max(1) as u16;
        let visible_slots = (content_rows / rows_per_hour as usize).min(SLOT_COUNT);
        let first_slot = first_visible_slot(cursor.slot, visible_slots);

        let grid_top = inner.y + 1;
        let grid_bottom = grid_top + visible_slots as u16 * rows_per_hour;
        // Rows above the window get negative offsets so blocks starting there clip.
        let slot_y = |slot: usize| {
            grid_top as i32 + (slot as i32 - first_slot as i32) * rows_per_hour as i32
        };

        let header_row = Rect::new(inner.x, inner.y, inner.width, 1);
        for (col, day) in DISPLAY_DAYS.iter().enumerate() {
            let label = if col_w >= 11 {
                day_name(*day)
            } else {
                short_day_name(*day)
            };
            let style = if *day == today_weekday { t.today } else { t.header };
            let header = Paragraph::new(Line::from(Span::styled(
                format!("{:^width$}", label, width = col_w as usize),
                style,
            )));
            frame.render_widget(header, cols[col + 1].intersection(header_row));
        }

        let labels = slot_labels();
        let grid = slot_grid(store);
        let mut blocks: Vec<(Rect, &ScheduleEvent, bool)> = Vec::new();
        let mut covered_cursor = None;

        for (slot, cells) in grid.iter().enumerate() {
            let on_screen = (first_slot..first_slot + visible_slots).contains(&slot);
            let y = slot_y(slot);
            if on_screen {
                let row = Rect::new(inner.x, y as u16, inner.width, rows_per_hour);
                let time_para = Paragraph::new(Line::from(Span::styled(
                    format!("{} ", labels[slot]),
                    t.dim,
                )));
                frame.render_widget(time_para, cols[0].intersection(row));
            }

            for (col, cell) in cells.iter().enumerate() {
                let column = cols[col + 1];
                if column.width == 0 {
                    continue;
                }
                let here = cursor == SlotCursor { column: col, slot };

                match cell {
                    SlotCell::Open if on_screen => {
                        let cell_area = Rect::new(column.x, y as u16, column.width, rows_per_hour);
                        let (text, style) = if here {
                            (
                                format!("{:<width$}", "+", width = cell_area.width as usize),
                                t.selected,
                            )
                        } else {
                            ("\u{00b7}".to_string(), t.dim)
                        };
                        frame.render_widget(
                            Paragraph::new(Line::from(Span::styled(text, style))),
                            cell_area,
                        );
                    }
                    SlotCell::Starts(entries) => {
                        for entry in entries {
                            let top = y.max(grid_top as i32);
                            let bottom = (y + block_height(entry, rows_per_hour) as i32)
                                .min(grid_bottom as i32);
                            if bottom <= top {
                                continue;
                            }
                            let width = column.width.saturating_sub(1).max(1);
                            let area =
                                Rect::new(column.x, top as u16, width, (bottom - top) as u16);
                            blocks.push((area, *entry, here));
                        }
                    }
                    SlotCell::Covered if here && on_screen => {
                        covered_cursor = Some(Rect::new(column.right() - 1, y as u16, 1, 1));
                    }
                    _ => {}
                }
            }
        }

        // Blocks last so they overlay the rows they span.
        for (area, entry, here) in blocks {
            let mut style = t.category_block(entry.category);
            if here {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let lines = vec![
                Line::from(Span::styled(
                    entry.title.clone(),
                    style.add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(entry.time_range_display(), style)),
            ];
            frame.render_widget(Paragraph::new(lines).style(style), area);
        }

        // Covered cells are inert; the marker only shows where the cursor is.
        if let Some(marker) = covered_cursor {
            frame.render_widget(
                Paragraph::new(Span::styled("\u{25c2}", t.selected)),
                marker,
            );
        }
    }
}
