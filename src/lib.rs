//! # skyprefs
//!
//! Client-side synchronization core for the portal's user notification
//! preferences. Maps UI toggle and multi-select events onto minimal partial
//! preference patches, submits them to the preferences API, and reconciles
//! the in-memory preference document with the server's authoritative reply.
//!
//! ARCHITECTURE
//! ============
//! Pure patch construction (`patch`) is separated from the effectful submit
//! boundary (`sync`) so the mapping rules stay unit-testable without a
//! network. The preference document lives in a single-writer store (`store`);
//! the only write path after session load is the synchronizer's success path,
//! which replaces the document with the server's returned copy. Errors never
//! escape the submit boundary as panics — they surface as a user-visible
//! notification and leave local state untouched.

pub mod api;
pub mod config;
pub mod error;
pub mod localization;
pub mod model;
pub mod notify;
pub mod patch;
pub mod store;
pub mod sync;

pub use api::{HttpApi, LocalizationApi, PreferencesApi};
pub use config::ApiConfig;
pub use error::SyncError;
pub use localization::LocalizationSlice;
pub use model::{PatchDocument, PreferenceDocument, Section};
pub use notify::{Notifier, Severity, TracingNotifier};
pub use patch::Toggle;
pub use store::PreferenceStore;
pub use sync::PreferenceSynchronizer;
