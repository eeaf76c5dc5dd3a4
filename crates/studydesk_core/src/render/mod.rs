//! Projection of in-memory lists into displayable view state.
//!
//! # Responsibility
//! - Rebuild the full on-screen representation from the current list.
//! - Bind per-item actions to stable entry ids at render time.
//!
//! # Invariants
//! - Rendering is idempotent and total: every call clears prior items and
//!   reconstructs one rendered item per element, in order.
//! - Derived counts are pure functions of the rendered list, recomputed on
//!   every render.

mod list_view;

pub use list_view::{ActionBinding, ListAction, ListKind, ListView, RenderedItem, TaskCounts};
