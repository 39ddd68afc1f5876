use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::app::{handle_input, App};
use crate::terminal::Tui;
use crate::ui;

// Redraw rate while bars are moving
const FRAME_INTERVAL: Duration = Duration::from_millis(33);
// How long the reader waits for a terminal event before checking for shutdown
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);
const EVENT_BUFFER: usize = 64;

/// Forwards terminal events from a blocking thread until the receiver is gone.
fn spawn_event_reader() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(EVENT_BUFFER);
    tokio::task::spawn_blocking(move || loop {
        if sender.is_closed() {
            break;
        }
        match event::poll(EVENT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("terminal event read failed: {e}");
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                tracing::warn!("terminal event poll failed: {e}");
                break;
            }
        }
    });
    receiver
}

/// Sleeps until the playback timer is due, or forever when none is armed.
async fn playback_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

/// Run the main application event loop
pub async fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut events = spawn_event_reader();
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    while app.running {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f, Instant::now())) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        tokio::select! {
            maybe_event = events.recv() => match maybe_event {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code, Instant::now());
                }
                Some(_) => {
                    // Resize and other events only need the redraw above
                }
                None => {
                    tracing::warn!("terminal event reader stopped");
                    app.quit();
                }
            },
            () = playback_deadline(app.animator.next_deadline()) => {
                app.update(Instant::now());
            }
            _ = frames.tick() => {}
        }
    }

    app.animator.teardown();
    Ok(())
}
