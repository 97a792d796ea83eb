use crate::app::model::Model;
use crate::components::common::{CatalogActivityMsg, Msg};
use engine::catalog::{self, CatalogFeed};
use std::path::PathBuf;
use std::time::Duration;
use tuirealm::terminal::TerminalAdapter;

const CATALOG_LOAD_OPERATION: &str = "catalog_load";

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_catalog(&mut self, msg: CatalogActivityMsg) -> Option<Msg> {
        match msg {
            CatalogActivityMsg::Reload => self.handle_reload(),
            CatalogActivityMsg::Loaded(feed) => self.handle_loaded(feed),
            other => {
                self.apply_catalog_input(other);
                self.refresh_page().err().map(Msg::Error)
            }
        }
    }

    /// Start a product load, superseding one still in flight.
    fn handle_reload(&mut self) -> Option<Msg> {
        self.catalog.begin_loading();
        if let Err(e) = self.refresh_page() {
            return Some(Msg::Error(e));
        }

        let path = self.config.catalog().products_path().to_path_buf();
        let timeout = Duration::from_secs(self.config.catalog().load_timeout_secs());
        self.task_manager
            .execute(CATALOG_LOAD_OPERATION, async move {
                let feed = fetch_feed(path, timeout).await;
                Ok(Msg::CatalogActivity(CatalogActivityMsg::Loaded(feed)))
            });
        None
    }

    fn handle_loaded(&mut self, feed: CatalogFeed) -> Option<Msg> {
        // The home page shows the failure inline
        if let Some(error) = &feed.error {
            log::warn!("Catalog load failed: {error}");
        }
        self.catalog.set_feed(feed);
        self.refresh_page().err().map(Msg::Error)
    }

    fn apply_catalog_input(&mut self, msg: CatalogActivityMsg) {
        match msg {
            CatalogActivityMsg::SearchInput(c) => self.catalog.push_search(c),
            CatalogActivityMsg::SearchBackspace => self.catalog.pop_search(),
            CatalogActivityMsg::SearchClear => self.catalog.clear_search(),
            CatalogActivityMsg::NextCategory => self.catalog.next_category(),
            CatalogActivityMsg::PreviousCategory => self.catalog.previous_category(),
            CatalogActivityMsg::NextSort => self.catalog.next_sort(),
            CatalogActivityMsg::PreviousSort => self.catalog.previous_sort(),
            CatalogActivityMsg::ToggleViewMode => self.catalog.toggle_view(),
            CatalogActivityMsg::FocusNext => self.catalog.focus_next(),
            CatalogActivityMsg::FocusPrevious => self.catalog.focus_previous(),
            CatalogActivityMsg::SelectNext(step) => self.catalog.select_next(step),
            CatalogActivityMsg::SelectPrevious(step) => self.catalog.select_previous(step),
            CatalogActivityMsg::Reload | CatalogActivityMsg::Loaded(_) => {}
        }
    }
}

/// Load the product file, turning a slow read into a failed feed.
pub async fn fetch_feed(path: PathBuf, timeout: Duration) -> CatalogFeed {
    match tokio::time::timeout(timeout, catalog::load_products(&path)).await {
        Ok(result) => CatalogFeed::from_result(result),
        Err(_) => {
            log::warn!(
                "Loading {} timed out after {}s",
                path.display(),
                timeout.as_secs()
            );
            CatalogFeed::failed(format!(
                "Timed out after {}s reading {}",
                timeout.as_secs(),
                path.display()
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_fetch_feed_loads_products() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "title": "Lamp", "price": 20.5, "category": "home", "description": "Warm light", "image": "lamp.png"}}]"#
        )
        .unwrap();

        let feed = fetch_feed(file.path().to_path_buf(), Duration::from_secs(5)).await;

        assert!(!feed.loading);
        assert_none!(&feed.error);
        assert_eq!(feed.items.len(), 1);
        assert_eq!(feed.items[0].title, "Lamp");
    }

    #[tokio::test]
    async fn test_fetch_feed_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let feed = fetch_feed(dir.path().join("missing.json"), Duration::from_secs(5)).await;

        assert!(feed.items.is_empty());
        let error = assert_some!(feed.error);
        assert!(error.contains("missing.json"));
    }
}
