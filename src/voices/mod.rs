//! Voice catalog filtering.
//!
//! Voice records arrive per call from the Polly listing collaborator;
//! this module only filters the supplied collection, it never fetches
//! or persists anything.

mod filter;

pub use filter::{VoiceProfile, list_voices};
