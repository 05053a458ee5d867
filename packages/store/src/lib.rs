pub mod models;
pub mod prefs;
pub mod session;

mod memory;
pub use memory::MemoryPrefs;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStoragePrefs;

pub use models::{Identity, Role};
pub use prefs::{PrefStore, Preferences, Theme};
pub use session::{SessionState, SessionStore, Subscription};
