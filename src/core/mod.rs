//! # Core Application Logic
//!
//! Everything here is UI-technology-free: the async load state machine, the
//! carousel neighbor resolver, static catalogs, and configuration. The TUI
//! adapter renders this state; it never reaches around it.
//!
//! ```text
//!        ┌──────────────────────────────┐
//!        │            CORE              │
//!        │                              │
//!        │  • load      (fetch states)  │
//!        │  • carousel  (paging math)   │
//!        │  • catalog   (seed data)     │
//!        │  • config    (settings)      │
//!        └──────────────┬───────────────┘
//!                       ▼
//!                ┌────────────┐
//!                │    TUI     │
//!                │  Adapter   │
//!                │ (ratatui)  │
//!                └────────────┘
//! ```

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod load;

pub use carousel::PagedCarousel;
pub use load::{LoadState, ResourceViewModel};
