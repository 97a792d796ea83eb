use crate::components::common::{Msg, PopupActivityMsg};
use engine::EngineError;
use engine::catalog::CatalogError;
use engine::theme::RegistryError;
use std::fmt::Display;
use std::sync::mpsc::Sender;

/// Application-wide error types for the Vitrine terminal user interface.
///
/// Every variant carries a display-ready message. Errors travel to the main
/// loop as [`Msg::Error`] or through the [`ErrorReporter`], and end up in the
/// notice popup; none of them stop the storefront once it is running.
///
/// # Error Categories
///
/// - [`Config`](AppError::Config) - Configuration loading and validation errors
/// - [`Component`](AppError::Component) - Component mounting and rendering errors
/// - [`State`](AppError::State) - Application state transitions that cannot be honoured
/// - [`Catalog`](AppError::Catalog) - Product feed loading failures
/// - [`Theme`](AppError::Theme) - Theme registry and user theme file errors
///
/// # Examples
///
/// ```no_run
/// use vitrine::error::{AppError, ErrorReporter};
///
/// fn report(reporter: &ErrorReporter, error: AppError) {
///     match error {
///         AppError::Catalog(_) => reporter.report_warning(error, "Catalog", "load"),
///         other => reporter.report_simple(other, "Application", "operation"),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Configuration loading or validation failed
    Config(String),

    /// A component could not be mounted, remounted or activated
    Component(String),

    /// An application state transition could not be applied
    State(String),

    /// The product feed could not be loaded
    Catalog(String),

    /// The theme registry or a user theme file is invalid
    Theme(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Component(msg) => write!(f, "Component Error: {msg}"),
            AppError::State(msg) => write!(f, "State Error: {msg}"),
            AppError::Catalog(msg) => write!(f, "Catalog Error: {msg}"),
            AppError::Theme(msg) => write!(f, "Theme Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// The message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            AppError::Config(msg)
            | AppError::Component(msg)
            | AppError::State(msg)
            | AppError::Catalog(msg)
            | AppError::Theme(msg) => msg,
        }
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Registry(e) => AppError::Theme(e.to_string()),
            EngineError::Storage(e) => AppError::State(e.to_string()),
            EngineError::Catalog(e) => AppError::Catalog(e.to_string()),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        EngineError::from(err).into()
    }
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        EngineError::from(err).into()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Shown as a warning notice; the user can keep going
    Warning,
    Error,
    /// Logged with a critical marker before the application stops
    Critical,
}

/// Where an error happened and what to tell the user about it.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
    pub user_message: String,
    pub technical_details: Option<String>,
    pub suggestion: Option<String>,
    pub severity: ErrorSeverity,
}

impl ErrorContext {
    pub fn new(component: &str, operation: &str) -> Self {
        Self {
            component: component.to_string(),
            operation: operation.to_string(),
            user_message: Self::generate_fallback_message(component),
            technical_details: None,
            suggestion: None,
            severity: ErrorSeverity::Error,
        }
    }

    fn generate_fallback_message(component: &str) -> String {
        format!("An error occurred in {component}. Please try again.")
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.user_message = message.to_string();
        self
    }

    pub fn with_technical_details(mut self, details: &str) -> Self {
        self.technical_details = Some(details.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ContextualError {
    pub error: AppError,
    pub context: ErrorContext,
}

impl ContextualError {
    pub fn new(error: AppError, context: ErrorContext) -> Self {
        Self { error, context }
    }
}

impl Display for ContextualError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.context.user_message, self.error)
    }
}

/// Logs errors with their context and forwards them to the main loop so the
/// notice popup can show them.
///
/// Cloneable, so background tasks can hold their own reporter.
#[derive(Clone)]
pub struct ErrorReporter {
    tx: Sender<Msg>,
}

impl ErrorReporter {
    pub fn new(tx: Sender<Msg>) -> Self {
        Self { tx }
    }

    pub fn report_simple(&self, error: AppError, component: &str, operation: &str) {
        let context =
            ErrorContext::new(component, operation).with_technical_details(&error.to_string());
        self.report(error, context);
    }

    pub fn report_warning(&self, error: AppError, component: &str, operation: &str) {
        let context = ErrorContext::new(component, operation)
            .with_technical_details(&error.to_string())
            .with_severity(ErrorSeverity::Warning);
        self.report(error, context);
    }

    pub fn report_critical_and_exit(
        &self,
        error: AppError,
        component: &str,
        operation: &str,
        user_message: &str,
    ) {
        let context = ErrorContext::new(component, operation)
            .with_message(user_message)
            .with_severity(ErrorSeverity::Critical)
            .with_suggestion("The application will terminate. Please fix the issue and restart.");
        self.report(error, context);
    }

    pub fn report_error(&self, error: AppError) {
        self.report_simple(error, "Application", "operation");
    }

    pub fn report(&self, error: AppError, context: ErrorContext) {
        let contextual_error = ContextualError::new(error.clone(), context.clone());

        match context.severity {
            ErrorSeverity::Warning => {
                log::warn!(
                    "[{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    self.format_additional_context(&context)
                );
            }
            ErrorSeverity::Error => {
                log::error!(
                    "[{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    self.format_additional_context(&context)
                );
            }
            ErrorSeverity::Critical => {
                log::error!(
                    "[CRITICAL] [{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    self.format_additional_context(&context)
                );
            }
        }

        let popup_msg = match context.severity {
            ErrorSeverity::Warning => {
                Msg::PopupActivity(PopupActivityMsg::ShowWarning(self.format_user_message(&context)))
            }
            ErrorSeverity::Error | ErrorSeverity::Critical => Msg::PopupActivity(
                PopupActivityMsg::ShowError(self.create_formatted_error(&error, &context)),
            ),
        };
        if let Err(e) = self.tx.send(popup_msg) {
            log::error!("Failed to send popup message: {e}");
        }
    }

    fn format_additional_context(&self, context: &ErrorContext) -> String {
        let mut parts = Vec::new();

        if let Some(ref technical_details) = context.technical_details {
            parts.push(format!("Technical: {technical_details}"));
        }

        if let Some(ref suggestion) = context.suggestion {
            parts.push(format!("Suggestion: {suggestion}"));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!("\n{}", parts.join("\n"))
        }
    }

    fn format_user_message(&self, context: &ErrorContext) -> String {
        let mut message = context.user_message.clone();

        if let Some(ref suggestion) = context.suggestion {
            message.push_str(&format!("\n\nSuggestion: {suggestion}"));
        }

        message
    }

    fn create_formatted_error(&self, error: &AppError, context: &ErrorContext) -> AppError {
        let mut formatted_message = self.get_error_title(error).to_string();
        formatted_message.push_str(&format!("\n\n{}", context.user_message));

        if let Some(ref technical) = context.technical_details {
            formatted_message.push_str(&format!("\n\nDetails: {technical}"));
        }

        if let Some(ref suggestion) = context.suggestion {
            formatted_message.push_str(&format!("\n\nSuggestion: {suggestion}"));
        }

        match error {
            AppError::Config(_) => AppError::Config(formatted_message),
            AppError::Component(_) => AppError::Component(formatted_message),
            AppError::State(_) => AppError::State(formatted_message),
            AppError::Catalog(_) => AppError::Catalog(formatted_message),
            AppError::Theme(_) => AppError::Theme(formatted_message),
        }
    }

    fn get_error_title(&self, error: &AppError) -> &'static str {
        match error {
            AppError::Config(_) => "Configuration Error",
            AppError::Component(_) => "Component Error",
            AppError::State(_) => "Application State Error",
            AppError::Catalog(_) => "Catalog Error",
            AppError::Theme(_) => "Theme Error",
        }
    }

    pub fn report_mount_error(&self, component: &str, operation: &str, error: impl Display) {
        let app_error = AppError::Component(format!("Failed to {operation} {component}: {error}"));
        self.report_simple(app_error, component, operation);
    }

    pub fn report_send_error(&self, context: &str, error: impl Display) {
        let app_error = AppError::Component(format!("Failed to send {context}: {error}"));
        self.report_simple(app_error, "MessageChannel", "send_message");
    }

    /// Theme setup problems never stop the app; they are shown as warnings.
    pub fn report_theme_error(&self, operation: &str, error: impl Display) {
        let details = error.to_string();
        let context = ErrorContext::new("ThemeStore", operation)
            .with_message(&details)
            .with_technical_details(&details)
            .with_suggestion("Check the [theme] section of config.toml")
            .with_severity(ErrorSeverity::Warning);

        self.report(AppError::Theme(details), context);
    }
}
