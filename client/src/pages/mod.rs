//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Both entity pages share `entity_list`.

pub mod entity_list;
pub mod login;
pub mod products;
pub mod register;
pub mod spices;
