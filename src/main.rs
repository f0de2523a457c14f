mod app;
mod calendar;
mod components;
mod config;
mod event;
mod logging;
mod theme;
mod tui;

use std::time::Duration;

use app::{App, ViewMode};
use color_eyre::Result;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use config::Config;

fn main() -> Result<()> {
    color_eyre::install()?;

    let (config, config_path) = Config::load()?;
    let log_path = logging::init(&config.log_level)?;
    log::info!("planner-tui {} starting", env!("CARGO_PKG_VERSION"));
    match config_path {
        Some(ref path) => log::info!("config loaded from {}", path.display()),
        None => log::info!("no config file, using defaults"),
    }
    if let Some(ref path) = log_path {
        log::debug!("logging to {}", path.display());
    }

    theme::init(theme::Theme::from_config(&config.theme, &config.categories));
    let mut app = App::new(&config);

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    log::info!(
        "exiting with {} events and {} schedule entries",
        app.store().events().len(),
        app.store().schedule_events().len()
    );
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        app.refresh_today();
        terminal.draw(|frame| draw(frame, app))?;

        if let Some(key) = event::next_key_event(Duration::from_millis(100))? {
            // Clear status message on any key
            app.status_message = None;

            if let Some(action) = event::action_for(key, app.input_mode(), app.show_help) {
                app.apply(action);
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: content + status bar
    let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

    match app.view_mode {
        ViewMode::Calendar => render_calendar_layout(frame, layout[0], app),
        ViewMode::Schedule => {
            let weekday = chrono::Datelike::weekday(&app.today).num_days_from_sunday() as u8;
            components::ScheduleView::render(
                frame,
                layout[0],
                app.store(),
                app.slot_cursor,
                weekday,
            );
        }
    }

    if let Some(ref dialog) = app.event_dialog {
        components::EventDialog::render(frame, area, dialog, &app.event_draft);
    }
    if let Some(ref dialog) = app.schedule_dialog {
        components::ScheduleDialog::render(frame, area, dialog, &app.schedule_draft);
    }

    if app.show_help {
        components::Help::render(frame, area);
    }

    components::StatusBar::render(frame, layout[1], app);
}

/// Month grid beside the side panel, or above it on narrow terminals.
fn render_calendar_layout(frame: &mut Frame, area: Rect, app: &App) {
    let grid_w = components::month_view::GRID_WIDTH;
    let grid_h: u16 = 10;

    let (grid_area, panel_area) = if area.width >= grid_w + 24 {
        let content =
            Layout::horizontal([Constraint::Length(grid_w), Constraint::Min(24)]).split(area);
        (content[0], content[1])
    } else {
        let content =
            Layout::vertical([Constraint::Length(grid_h), Constraint::Min(0)]).split(area);
        (content[0], content[1])
    };

    components::MonthView::render(
        frame,
        grid_area,
        app.month,
        app.selected_date,
        app.today,
        app.store(),
    );
    components::SidePanel::render(frame, panel_area, app.store(), app.today);
}
