//! Background preference writer
//!
//! Keeps disk I/O off the caller's thread. Saves are queued on a channel and
//! written by a dedicated thread; a burst of saves collapses into a single
//! write of the newest record.
//!
//! ## Architecture
//!
//! ```text
//! Session (caller thread)        Writer thread
//!        │                              │
//!        │  save(prefs)                 │
//!        │─────────────────────────────>│
//!        │  save(prefs')                │ drain queue, keep newest
//!        │─────────────────────────────>│ inner.save(prefs')
//!        │                              │
//!        │  flush()                     │
//!        │─────────────────────────────>│ ack once written
//!        │<─────────────────────────────│
//! ```

use crate::error::{Result, StorageError};
use cent_core::{PersistedPreferences, PreferenceStore};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

enum WriterCommand {
    Save(PersistedPreferences),
    Flush(Sender<()>),
}

/// Write-behind wrapper around any [`PreferenceStore`]
///
/// `save` never blocks on the inner store and never reports its failures;
/// they are logged on the writer thread. `load` reads the inner store
/// directly. Dropping the wrapper writes anything still queued.
pub struct WriteBehindStore<S: PreferenceStore + 'static> {
    inner: Arc<S>,
    command_tx: Option<Sender<WriterCommand>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl<S: PreferenceStore + 'static> WriteBehindStore<S> {
    /// Wrap `inner` and start the writer thread
    pub fn new(inner: S) -> Result<Self> {
        let inner = Arc::new(inner);
        let (command_tx, command_rx) = unbounded::<WriterCommand>();
        let thread_inner = Arc::clone(&inner);

        let thread_handle = thread::Builder::new()
            .name("preference-writer".to_string())
            .spawn(move || Self::writer_thread(&command_rx, thread_inner.as_ref()))?;

        Ok(Self {
            inner,
            command_tx: Some(command_tx),
            thread_handle: Some(thread_handle),
        })
    }

    /// The wrapped store
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Block until every save queued so far has been written
    pub fn flush(&self) -> Result<()> {
        let (ack_tx, ack_rx) = crossbeam_channel::bounded(1);
        self.send(WriterCommand::Flush(ack_tx))?;
        ack_rx.recv().map_err(|_| StorageError::WriterClosed)
    }

    fn send(&self, command: WriterCommand) -> Result<()> {
        self.command_tx
            .as_ref()
            .ok_or(StorageError::WriterClosed)?
            .send(command)
            .map_err(|_| StorageError::WriterClosed)
    }

    /// Background thread that performs the writes
    fn writer_thread(command_rx: &Receiver<WriterCommand>, inner: &S) {
        debug!("Preference writer started");

        while let Ok(first) = command_rx.recv() {
            let mut pending = None;
            let mut acks = Vec::new();
            let mut coalesced = 0usize;

            for command in std::iter::once(first).chain(command_rx.try_iter()) {
                match command {
                    WriterCommand::Save(prefs) => {
                        if pending.replace(prefs).is_some() {
                            coalesced += 1;
                        }
                    }
                    WriterCommand::Flush(ack) => acks.push(ack),
                }
            }

            if let Some(prefs) = pending {
                match inner.save(&prefs) {
                    Ok(()) => debug!(coalesced, "Preferences written"),
                    Err(e) => warn!(error = %e, "Failed to write preferences"),
                }
            }

            for ack in acks {
                let _ = ack.send(());
            }
        }

        debug!("Preference writer exiting");
    }
}

impl<S: PreferenceStore + 'static> PreferenceStore for WriteBehindStore<S> {
    fn load(&self) -> cent_core::Result<Option<PersistedPreferences>> {
        self.inner.load()
    }

    fn save(&self, prefs: &PersistedPreferences) -> cent_core::Result<()> {
        Ok(self.send(WriterCommand::Save(prefs.clone()))?)
    }
}

impl<S: PreferenceStore + 'static> Drop for WriteBehindStore<S> {
    fn drop(&mut self) {
        // Closing the channel lets the writer drain and exit
        self.command_tx.take();
        if let Some(handle) = self.thread_handle.take() {
            if handle.join().is_err() {
                warn!("Preference writer panicked");
            }
        }
    }
}
