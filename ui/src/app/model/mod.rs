use crate::app::catalog_state::CatalogState;
use crate::app::contact_state::ContactState;
use crate::app::managers::StateManager;
use crate::app::task_manager::TaskManager;
use crate::components::common::{ComponentId, Msg, ThemeActivityMsg};
use crate::components::help_bar::HelpBar;
use crate::config::AppConfig;
use crate::error::ErrorReporter;
use crate::theme::ThemeContext;
use engine::{ThemeSnapshot, ThemeStore};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use tokio::sync::watch;
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{TerminalAdapter, TerminalBridge};
use tuirealm::{Application, Update};

// Submodules
mod initialization;
mod mounting;
mod state_management;
mod update_handler;

/// Application model
pub struct Model<T>
where
    T: TerminalAdapter,
{
    /// Application
    pub app: Application<ComponentId, Msg, NoUserEvent>,
    /// Used to draw to terminal
    pub terminal: TerminalBridge<T>,

    pub config: Arc<AppConfig>,
    pub store: ThemeStore,
    /// Store state as of the last remount
    pub theme_rx: watch::Receiver<ThemeSnapshot>,
    /// Theme handed to every mounted component
    pub ctx: ThemeContext,

    pub catalog: CatalogState,
    pub contact: ContactState,
    pub state_manager: StateManager,
    pub help_bar: HelpBar,
    /// Rows of the mounted notice popup
    pub notice_height: Option<u16>,

    pub tx_to_main: Sender<Msg>,
    pub rx_to_main: Receiver<Msg>,

    // Enhanced error reporting system
    pub error_reporter: ErrorReporter,

    // Task manager for consistent async operations
    pub task_manager: TaskManager,
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_outside_msg(&mut self) {
        // Handle messages sent from background tasks
        while let Ok(msg) = self.rx_to_main.try_recv() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = self.update(msg);
            }
        }

        // Theme store transitions happen on the task pool
        if self.theme_rx.has_changed().unwrap_or(false) {
            let snapshot = self.theme_rx.borrow_and_update().clone();
            let mut msg = Some(Msg::ThemeActivity(ThemeActivityMsg::StateChanged(snapshot)));
            while msg.is_some() {
                msg = self.update(msg);
            }
        }
    }

    pub fn set_quit(&mut self, quit: bool) {
        self.state_manager.quit = quit;
    }

    /// Shutdown the application and clean up resources
    pub fn shutdown(&mut self) {
        log::info!("Shutting down application");

        self.store.cancel_pending();
        self.task_manager.shutdown();
        self.state_manager.shutdown();
    }
}

impl<T> Update<Msg> for Model<T>
where
    T: TerminalAdapter,
{
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        self.handle_update(msg)
    }
}
