use thiserror::Error;

use crate::catalog::CatalogError;
use crate::storage::StorageError;
use crate::theme::RegistryError;

/// Umbrella error for engine operations.
///
/// None of these are fatal for the storefront: registry errors stop startup only
/// when the built-in themes themselves are broken, storage errors disable
/// persistence for the session, and catalog errors are rendered as a message in
/// place of the product grid.
///
/// # Examples
///
/// ```no_run
/// use engine::{EngineError, ThemeRegistry};
///
/// fn load() -> Result<ThemeRegistry, EngineError> {
///     let registry = ThemeRegistry::builtin()?;
///     Ok(registry)
/// }
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Theme registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
