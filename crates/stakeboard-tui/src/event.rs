//! Terminal event handling.

use color_eyre::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::time::Duration;
use tokio::sync::mpsc;

/// Terminal events.
#[derive(Debug)]
pub enum Event {
    /// Periodic tick for redraws.
    Tick,
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize (width, height).
    Resize(u16, u16),
}

/// Merges a tick interval and blocking terminal input into one channel.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Spawn the tick task and the input thread.
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let tick_tx = tx.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(tick_rate_ms));
            loop {
                interval.tick().await;
                if tick_tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        // crossterm reads are blocking, so input gets a plain thread.
        std::thread::spawn(move || {
            loop {
                match event::poll(Duration::from_millis(100)) {
                    Ok(true) => {
                        let event = match event::read() {
                            Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                            Ok(CrosstermEvent::Resize(w, h)) => Some(Event::Resize(w, h)),
                            Ok(_) => None,
                            Err(_) => break,
                        };
                        if let Some(event) = event
                            && tx.send(event).is_err()
                        {
                            break;
                        }
                    }
                    Ok(false) => {
                        if tx.is_closed() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
        });

        Self { rx }
    }

    /// Get the next event.
    pub async fn next(&mut self) -> Result<Event> {
        self.rx
            .recv()
            .await
            .ok_or_else(|| color_eyre::eyre::eyre!("Event channel closed"))
    }
}
