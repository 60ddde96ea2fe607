//! scribewise-storage
//!
//! The recent-sessions index. Storage is behind [`sessions::SessionRepository`]
//! so the editor never touches ambient state directly.

pub mod error;
pub mod sessions;
