use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gitfinder_core::app::SelectionEngine;
use gitfinder_core::{Input, Outcome, Repository};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use tracing::{debug, info};

use crate::tui::{TuiUpdate, TuiView};

/// One interactive session: the selection engine plus the view that draws it
pub struct App {
    engine: SelectionEngine,
    view: TuiView,
}

impl App {
    pub fn new(repositories: Vec<Repository>, view: TuiView) -> App {
        App {
            engine: SelectionEngine::new(repositories),
            view,
        }
    }

    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    /// Feed one terminal event. Returns true once the session has an outcome.
    pub fn step(&mut self, event: &Event) -> bool {
        if let Some(input) = TuiUpdate::map_event(event) {
            debug!("Input: {:?}", input);
            self.engine.handle(input);
        }
        self.engine.is_finished()
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let size = terminal.size()?;
        self.engine.handle(Input::Resize {
            width: size.width,
            height: size.height,
        });

        loop {
            terminal.draw(|f| self.view.render(&self.engine, f))?;

            if self.step(&event::read()?) {
                break;
            }
        }
        Ok(())
    }

    /// The session outcome. A session that ended without one counts as cancelled.
    pub fn into_outcome(self) -> Outcome<Repository> {
        self.engine.into_outcome().unwrap_or(Outcome::Cancelled)
    }
}

/// Runs `restore` when dropped, so every exit path puts the terminal back.
struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Run the picker on the terminal and return what the user chose.
///
/// The UI is drawn on stderr so stdout stays free for the selected path.
pub fn run_session(repositories: Vec<Repository>, view: TuiView) -> Result<Outcome<Repository>> {
    enable_raw_mode()?;
    let _restore = RestoreGuard::new(|| {
        if let Err(err) = disable_raw_mode() {
            debug!("Failed to disable raw mode: {}", err);
        }
        if let Err(err) = execute!(io::stderr(), LeaveAlternateScreen, Show) {
            debug!("Failed to leave alternate screen: {}", err);
        }
    });

    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(repositories, view);
    app.run(&mut terminal)?;

    let outcome = app.into_outcome();
    info!("Session finished: {:?}", outcome.selected().map(|r| r.path()));
    Ok(outcome)
}
