//! Cent Player Storage
//!
//! Preference store implementations for Cent Player.
//!
//! Only one record is ever stored: favorites, recently played and volume,
//! under the fixed key `cent-player-storage`. Everything else the session
//! holds is rebuilt on start.
//!
//! # Stores
//!
//! - [`RedbPreferenceStore`]: durable single-file database (redb)
//! - [`MemoryPreferenceStore`]: in-process, with a failure switch for tests
//! - [`WriteBehindStore`]: wraps any store and moves writes to a background
//!   thread so saving never blocks the session
//!
//! # Example
//!
//! ```rust,no_run
//! use cent_core::{load_or_default, PreferenceStore};
//! use cent_storage::{RedbPreferenceStore, WriteBehindStore};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = WriteBehindStore::new(RedbPreferenceStore::open("./data/cent.redb")?)?;
//!
//! let mut prefs = load_or_default(&store);
//! prefs.volume = 0.5;
//! store.save(&prefs)?;
//! store.flush()?;
//! # Ok(())
//! # }
//! ```

mod error;
mod memory;
mod redb_store;
mod write_behind;

pub use error::{Result, StorageError};
pub use memory::MemoryPreferenceStore;
pub use redb_store::RedbPreferenceStore;
pub use write_behind::WriteBehindStore;
