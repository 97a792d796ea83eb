use super::Model;
use crate::app::catalog_state::CatalogState;
use crate::app::contact_state::ContactState;
use crate::app::managers::StateManager;
use crate::app::task_manager::TaskManager;
use crate::components::common::{CatalogActivityMsg, ComponentId, Msg};
use crate::components::global_key_watcher::GlobalKeyWatcher;
use crate::components::help_bar::HelpBar;
use crate::config::{AppConfig, UIConfig};
use crate::error::{AppError, AppResult, ErrorReporter};
use crate::theme::ThemeContext;
use engine::ThemeStore;
use engine::taskpool::TaskPool;
use std::sync::Arc;
use std::sync::mpsc;
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{CrosstermTerminalAdapter, TerminalAdapter, TerminalBridge};
use tuirealm::{Application, EventListenerCfg, Sub, SubClause, SubEventClause};

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    fn init_app(ui: &UIConfig) -> AppResult<Application<ComponentId, Msg, NoUserEvent>> {
        let mut app: Application<ComponentId, Msg, NoUserEvent> = Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(
                    ui.crossterm_input_listener_interval(),
                    ui.crossterm_input_listener_retries(),
                )
                .poll_timeout(ui.poll_timeout())
                .tick_interval(ui.tick_interval()),
        );

        // Global shortcuts are off while a popup owns the keyboard
        let popup_open = SubClause::Or(
            Box::new(SubClause::IsMounted(ComponentId::ThemePicker)),
            Box::new(SubClause::IsMounted(ComponentId::NoticePopup)),
        );
        app.mount(
            ComponentId::GlobalKeyWatcher,
            Box::new(GlobalKeyWatcher::default()),
            vec![Sub::new(SubEventClause::Any, SubClause::Not(Box::new(popup_open)))],
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(app)
    }
}

impl Model<CrosstermTerminalAdapter> {
    pub async fn new(config: Arc<AppConfig>, store: ThemeStore) -> AppResult<Self> {
        let (tx_to_main, rx_to_main) = mpsc::channel();
        let taskpool = TaskPool::new(config.ui().worker_tasks());

        // Create error reporter for enhanced error handling
        let error_reporter = ErrorReporter::new(tx_to_main.clone());

        // Create task manager for consistent async operations
        let task_manager = TaskManager::new(taskpool, tx_to_main.clone(), error_reporter.clone());

        let mut theme_rx = store.subscribe();
        let snapshot = theme_rx.borrow_and_update().clone();
        let ctx = ThemeContext::for_snapshot(
            store.registry(),
            &snapshot,
            config.ui().cell_width_px(),
        );
        let catalog = CatalogState::new(
            config.catalog().default_view(),
            config.catalog().default_sort(),
        );

        let mut model = Self {
            app: Self::init_app(config.ui())?,
            terminal: TerminalBridge::init_crossterm()
                .map_err(|e| AppError::Component(e.to_string()))?,
            config,
            store,
            theme_rx,
            ctx,
            catalog,
            contact: ContactState::new(),
            state_manager: StateManager::new(),
            help_bar: HelpBar::new(),
            notice_height: None,
            tx_to_main,
            rx_to_main,
            error_reporter,
            task_manager,
        };

        model.remount_all()?;

        // First load goes through the same path as F5
        if let Err(e) = model
            .tx_to_main
            .send(Msg::CatalogActivity(CatalogActivityMsg::Reload))
        {
            model.error_reporter.report_send_error("initial catalog load", e);
        }

        Ok(model)
    }
}
