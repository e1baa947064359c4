//! Domain models for bindx
//!
//! Pure value types shared by every layer. All of them are rebuilt from
//! scratch on each run; nothing here is persisted.

pub mod application;
pub mod association;
pub mod extension;

pub use application::ApplicationRecord;
pub use association::{Association, Handler};
pub use extension::{AppId, ContentType, Extension};
