//! Message handlers, one module per activity. Each adds an `update_*` method
//! to [`Model`](crate::app::model::Model) that the update handler dispatches to.

pub mod catalog;
pub mod contact;
pub mod popup;
pub mod theme;
