// Core components
pub mod common;
pub mod state;

// Reusable patterns and utilities
pub mod base_popup;
pub mod page;
pub mod product_card;

// Chrome
pub mod header;
pub mod help_bar;
pub mod sidebar;

// Pages
pub mod about;
pub mod contact;
pub mod home;

// Popup components
pub mod notice_popup;
pub mod theme_picker;

// System components
pub mod global_key_watcher;
