//! scribewise-core
//!
//! Pure domain types shared by the editor, the completion client and the
//! host application. No I/O lives here.

pub mod error;
pub mod models;
