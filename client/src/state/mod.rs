//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `list`, `form`) so components depend
//! on small focused models, and each list view owns its own `ListState`.

pub mod entity;
pub mod form;
pub mod list;
pub mod session;
