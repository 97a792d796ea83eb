//! # Vitrine Engine
//!
//! Terminal-agnostic core of the Vitrine storefront. It owns the theme model and
//! registry, the theme store with its two-phase switch transition, the pure layout
//! resolver that turns theme tokens into rendering directives, and the catalog
//! filter/sort used by the home page.
//!
//! ## Modules
//!
//! - [`theme`] - Theme records, the validated registry and its loaders
//! - [`store`] - Active theme state, switch transitions and persistence
//! - [`storage`] - Key-value persistence backends for the selected theme
//! - [`layout`] - Pure resolvers from layout tokens to rendering directives
//! - [`catalog`] - Product records, filter/sort and the product feed
//! - [`nav`] - Navigation items and active-link decisions
//! - [`taskpool`] - Bounded task spawning with pool-wide cancellation
//! - [`validation`] - Shared validation trait
//! - [`error`] - Engine error types

pub mod catalog;
pub mod error;
pub mod layout;
pub mod nav;
pub mod storage;
pub mod store;
pub mod taskpool;
pub mod theme;
pub mod validation;

pub use error::{EngineError, EngineResult};
pub use store::{ThemeSnapshot, ThemeStore, TransitionTimings};
pub use theme::{Theme, ThemeRegistry};
