//! polly-tts-rs: AWS Polly voice catalog, engine pricing, and billing CLI.
//!
//! The engine catalog, voice filtering, and cost aggregation code is pure
//! and synchronous; all AWS access sits behind the collaborator traits in
//! [`backend`].

pub mod backend;
pub mod billing;
pub mod cli;
pub mod engines;
pub mod voices;
