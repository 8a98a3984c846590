//! Interactive catalog viewer.

pub mod app;
mod components;

use std::{
    io::{stdout, Stdout},
    result::Result as StdResult,
    thread,
    time::Duration,
};

use app::App;
use crossterm::{
    event::EventStream,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
    ExecutableCommand,
};
use futures::StreamExt;
use ratatui::prelude::*;
use tokio::{
    sync::{mpsc, watch},
    time::sleep,
};

use crate::{
    catalog::{parse_catalog, FetchTicket, Product, ProductSource},
    error::{FetchError, Result},
    theme::{SettingsStore, ThemeId, ThemeManager},
};

type FetchOutcome = (FetchTicket, StdResult<Vec<Product>, FetchError>);

pub async fn run<S, P>(theme: ThemeManager<S>, source: P) -> Result<()>
where
    S: SettingsStore,
    P: ProductSource + Clone + Send + 'static,
{
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = event_loop(&mut terminal, theme, source).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn event_loop<S, P>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    theme: ThemeManager<S>,
    source: P,
) -> Result<()>
where
    S: SettingsStore,
    P: ProductSource + Clone + Send + 'static,
{
    let mut theme_changes = theme.subscribe();
    set_root_attribute(root_title(theme.theme()))?;

    let mut app = App::new(theme);
    let (done_tx, mut done_rx) = mpsc::channel::<FetchOutcome>(4);
    let mut event_stream = EventStream::new();

    app.start_fetch();

    while !app.should_exit {
        for ticket in app.take_fetch_requests() {
            spawn_fetch(source.clone(), ticket, done_tx.clone());
        }
        if let Some(title) = changed_title(&mut theme_changes) {
            set_root_attribute(title)?;
        }
        terminal.draw(|frame| app.render(frame))?;

        tokio::select! {
            Some((ticket, outcome)) = done_rx.recv() => {
                app.complete_fetch(ticket, outcome);
            }
            Some(Ok(event)) = event_stream.next() => {
                app.handle_event(&event);
            }
            () = sleep(Duration::from_millis(100)) => {
                app.tick();
            }
        }
    }

    app.shutdown();
    Ok(())
}

/// Run one blocking fetch on a detached thread and report back with its
/// ticket. The runtime never waits for it, so quitting mid-request exits
/// immediately.
fn spawn_fetch<P>(source: P, ticket: FetchTicket, done_tx: mpsc::Sender<FetchOutcome>)
where
    P: ProductSource + Send + 'static,
{
    thread::spawn(move || {
        let outcome = source.fetch().and_then(|body| parse_catalog(&body));
        // The receiver is gone once the view has shut down.
        let _ = done_tx.blocking_send((ticket, outcome));
    });
}

/// Terminal title carrying the active theme id.
fn root_title(id: ThemeId) -> String {
    format!("catalog-tui [{id}]")
}

/// New title when the theme changed since the last call.
fn changed_title(theme_changes: &mut watch::Receiver<ThemeId>) -> Option<String> {
    if theme_changes.has_changed().unwrap_or(false) {
        Some(root_title(*theme_changes.borrow_and_update()))
    } else {
        None
    }
}

/// Expose the active theme on the terminal window, the root of the UI.
fn set_root_attribute(title: String) -> Result<()> {
    stdout().execute(SetTitle(title))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::{catalog::FetchController, theme::MemoryStore};

    /// Source that never answers within the test's lifetime.
    #[derive(Clone)]
    struct Stalled;

    impl ProductSource for Stalled {
        fn fetch(&self) -> StdResult<String, FetchError> {
            thread::sleep(Duration::from_secs(600));
            Err(FetchError::Network("stalled".to_string()))
        }
    }

    #[derive(Clone)]
    struct Fixed;

    impl ProductSource for Fixed {
        fn fetch(&self) -> StdResult<String, FetchError> {
            Ok(r#"[{"id":1,"title":"Lamp","price":2,"description":"d",
                   "category":"c","image":"i"}]"#
                .to_string())
        }
    }

    fn ticket() -> FetchTicket {
        FetchController::new()
            .begin_fetch()
            .expect("Idle controller should start a fetch")
    }

    #[test]
    fn fetch_result_arrives_with_its_ticket() {
        let (done_tx, mut done_rx) = mpsc::channel(1);
        let ticket = ticket();
        spawn_fetch(Fixed, ticket, done_tx);

        let (received, outcome) = done_rx.blocking_recv().unwrap();
        assert_eq!(received, ticket);
        assert_eq!(outcome.unwrap()[0].title, "Lamp");
    }

    #[test]
    fn runtime_shutdown_does_not_wait_for_stalled_fetch() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (done_tx, done_rx) = mpsc::channel(1);
        runtime.block_on(async {
            spawn_fetch(Stalled, ticket(), done_tx);
            sleep(Duration::from_millis(50)).await;
        });

        let started = Instant::now();
        drop(done_rx);
        drop(runtime);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn theme_change_updates_title() {
        let mut manager = ThemeManager::initialize(MemoryStore::default());
        let mut theme_changes = manager.subscribe();
        assert_eq!(root_title(manager.theme()), "catalog-tui [theme1]");
        assert_eq!(changed_title(&mut theme_changes), None);

        manager.set_theme(ThemeId::Theme2);
        assert_eq!(
            changed_title(&mut theme_changes).as_deref(),
            Some("catalog-tui [theme2]")
        );
        assert_eq!(changed_title(&mut theme_changes), None);

        manager.cycle_theme();
        assert_eq!(
            changed_title(&mut theme_changes).as_deref(),
            Some("catalog-tui [theme3]")
        );
    }
}
