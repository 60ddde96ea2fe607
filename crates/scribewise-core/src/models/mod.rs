pub mod annotation;
pub mod revision;
pub mod session;
pub mod snapshot;
pub mod style;
