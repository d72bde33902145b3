pub mod app;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use habitchart_core::{HabitRepository, YearUseCase};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::warn;

use crate::theme::Theme;
use crate::tui::app::App;

pub fn run<R: HabitRepository>(use_case: &YearUseCase<R>, year: &str, theme: Theme) -> Result<()> {
    // Fail before touching the terminal if the first year cannot be built.
    let result = use_case.build_year(year)?;
    let mut app = App::new(result, theme);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, use_case);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn run_app<B: Backend, R: HabitRepository>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    use_case: &YearUseCase<R>,
) -> io::Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Right | KeyCode::Char('l') => app.next_day(),
                    KeyCode::Left | KeyCode::Char('h') => app.previous_day(),
                    KeyCode::Down | KeyCode::Char('j') => app.next_month(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous_month(),
                    KeyCode::Char('t') => app.cycle_theme(),
                    KeyCode::Char('[') => switch_year(app, use_case, -1),
                    KeyCode::Char(']') => switch_year(app, use_case, 1),
                    _ => {}
                }
            }
        }
    }
}

fn switch_year<R: HabitRepository>(app: &mut App, use_case: &YearUseCase<R>, step: isize) {
    let Some((index, year)) = app.year_at(step) else {
        return;
    };
    match use_case.build_year(&year) {
        Ok(result) => app.load(index, result),
        Err(e) => {
            warn!(year = %year, error = %e, "failed to build year");
            app.fail(index, e.to_string());
        }
    }
}
