pub mod config;
pub mod session;

mod memory;
pub use memory::MemorySessionStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileSessionStore;

pub use config::BloodLinkConfig;
pub use session::{Session, SessionStore, StoreError};
