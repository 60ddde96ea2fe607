//! scribewise-editor
//!
//! The single-document revision model: snapshot history with undo/redo,
//! span lookup, annotation and revision ledgers, transient revision
//! highlights, and the session state machine that ties them together.

pub mod annotations;
pub mod error;
pub mod highlight;
pub mod history;
pub mod locate;
pub mod markup;
pub mod revisions;
pub mod session;
pub mod surface;
