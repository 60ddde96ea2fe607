//! scribewise-completion
//!
//! Revision requests against an OpenAI-style chat completion endpoint:
//! prompt construction, HTTP transport, and completion parsing.

pub mod client;
pub mod error;
pub mod parse;
pub mod prompt;
pub mod revision;
