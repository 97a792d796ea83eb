use claims::*;
use engine::taskpool::TaskPool;
use std::io::Write;
use std::sync::mpsc;
use std::time::Duration;
use tokio::time::sleep;
use vitrine::app::task_manager::TaskManager;
use vitrine::app::updates::catalog::fetch_feed;
use vitrine::components::common::{CatalogActivityMsg, PopupActivityMsg};
use vitrine::error::ErrorReporter;
use vitrine::{AppError, Msg};

// Helper modules for integration tests
mod helpers {
    use super::*;

    pub fn create_test_setup() -> (TaskManager, mpsc::Receiver<Msg>) {
        let taskpool = TaskPool::new(4);
        let (tx, rx) = mpsc::channel();
        let error_reporter = ErrorReporter::new(tx.clone());
        let task_manager = TaskManager::new(taskpool, tx, error_reporter);
        (task_manager, rx)
    }

    // Collect messages until `expected_count` arrived or the timeout passed
    pub fn collect_messages_with_timeout(
        rx: &mpsc::Receiver<Msg>,
        expected_count: usize,
        timeout_ms: u64,
    ) -> Vec<Msg> {
        let mut messages = Vec::new();
        let start = std::time::Instant::now();

        while messages.len() < expected_count && start.elapsed().as_millis() < timeout_ms as u128 {
            match rx.recv_timeout(Duration::from_millis(50)) {
                Ok(msg) => messages.push(msg),
                Err(mpsc::RecvTimeoutError::Timeout) => continue,
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        }
        messages
    }

    pub fn products_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{json}").unwrap();
        file
    }
}

use helpers::*;

const TWO_PRODUCTS: &str = r#"[
  {"id": 1, "title": "Desk Lamp", "price": 39.99, "description": "Warm light", "category": "home", "image": "https://example.com/lamp.png"},
  {"id": 2, "title": "Backpack", "price": 89, "description": "Water resistant", "category": "bags", "image": "", "discount": 15}
]"#;

#[tokio::test]
async fn test_catalog_load_complete_flow() {
    let (task_manager, rx) = create_test_setup();
    let file = products_file(TWO_PRODUCTS);
    let path = file.path().to_path_buf();

    task_manager.execute("catalog_load", async move {
        let feed = fetch_feed(path, Duration::from_secs(5)).await;
        Ok(Msg::CatalogActivity(CatalogActivityMsg::Loaded(feed)))
    });

    let messages = tokio::task::spawn_blocking(move || collect_messages_with_timeout(&rx, 1, 2000))
        .await
        .unwrap();
    assert_eq!(messages.len(), 1);
    let Msg::CatalogActivity(CatalogActivityMsg::Loaded(feed)) = &messages[0] else {
        panic!("expected a loaded feed, got {:?}", messages[0]);
    };
    assert_none!(&feed.error);
    assert_eq!(feed.items.len(), 2);
    assert_eq!(feed.items[1].discount_label(), Some("15% OFF".to_string()));
}

#[tokio::test]
async fn test_catalog_parse_failure_becomes_failed_feed() {
    let (task_manager, rx) = create_test_setup();
    let file = products_file(r#"[{"id": 1, "title": "Broken""#);
    let path = file.path().to_path_buf();

    task_manager.execute("catalog_load", async move {
        let feed = fetch_feed(path, Duration::from_secs(5)).await;
        Ok(Msg::CatalogActivity(CatalogActivityMsg::Loaded(feed)))
    });

    let messages = tokio::task::spawn_blocking(move || collect_messages_with_timeout(&rx, 1, 2000))
        .await
        .unwrap();
    assert_matches!(
        &messages[..],
        [Msg::CatalogActivity(CatalogActivityMsg::Loaded(feed))]
            if feed.items.is_empty() && feed.error.as_deref().is_some_and(|e| e.contains("parse"))
    );
}

#[tokio::test]
async fn test_operation_error_is_reported_through_popup() {
    let (task_manager, rx) = create_test_setup();

    task_manager.execute("failing", async {
        Err(AppError::Catalog("catalog unavailable".to_string()))
    });

    let messages = tokio::task::spawn_blocking(move || collect_messages_with_timeout(&rx, 1, 2000))
        .await
        .unwrap();
    assert_matches!(
        &messages[..],
        [Msg::PopupActivity(PopupActivityMsg::ShowError(_))]
    );
}

#[tokio::test]
async fn test_reload_supersedes_slow_load() {
    let (task_manager, rx) = create_test_setup();

    task_manager.execute("catalog_load", async {
        sleep(Duration::from_millis(300)).await;
        Ok(Msg::ForceRedraw)
    });
    task_manager.execute("catalog_load", async {
        Ok(Msg::CatalogActivity(CatalogActivityMsg::Reload))
    });

    sleep(Duration::from_millis(500)).await;
    let messages: Vec<Msg> = rx.try_iter().collect();
    assert_eq!(
        messages,
        vec![Msg::CatalogActivity(CatalogActivityMsg::Reload)]
    );
}

#[tokio::test]
async fn test_shutdown_cancels_running_operations() {
    let (task_manager, rx) = create_test_setup();

    task_manager.execute("slow", async {
        sleep(Duration::from_millis(200)).await;
        Ok(Msg::ForceRedraw)
    });
    task_manager.shutdown();

    sleep(Duration::from_millis(300)).await;
    assert!(task_manager.active_operations().is_empty());
    assert_err!(rx.try_recv());
}
