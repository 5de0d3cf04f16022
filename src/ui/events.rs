//! Event channel feeding the UI loop.
//!
//! A background thread polls crossterm for input and emits ticks while the
//! terminal is idle; the source task sends its replies on the same channel.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::store::{ElementId, Record};

/// Everything the app loop reacts to.
pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// The source delivered a collection's elements.
    SourceLoaded {
        collection: String,
        elements: HashMap<ElementId, Record>,
    },
    /// A source command failed; the error is already logged.
    SourceFailed { collection: String, error: String },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the input thread. `tick_rate` bounds how long the UI goes
    /// without a redraw opportunity.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let input_tx = tx.clone();
        thread::spawn(move || loop {
            match event::poll(tick_rate) {
                Ok(true) => {
                    let app_event = match event::read() {
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            Some(AppEvent::Input(key))
                        }
                        Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                        Ok(_) => None,
                        Err(_) => break,
                    };
                    if let Some(app_event) = app_event {
                        if input_tx.send(app_event).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) => {
                    if input_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        });
        Self { rx, tx }
    }

    /// A sender for out-of-thread producers (the source task).
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
