pub mod state_manager;

// Re-export for easier access
pub use state_manager::StateManager;
