// VerityFlow backend access — HTTP client and wire models.
//
// The backend owns the actual classification (Analysis Service) and the
// persisted history (History Store). Everything here is a thin typed
// wrapper over its REST endpoints.

pub mod client;
pub mod models;

pub use client::VerityClient;
pub use models::{TabularExport, VerdictRecord};
