use crate::components::common::Msg;
use crate::error::{AppError, ErrorReporter};
use engine::taskpool::TaskPool;
use std::collections::HashMap;
use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

/// Runs async operations on the task pool and routes their outcome back to the
/// main loop: `Ok(msg)` is sent as is, `Err` goes through the [`ErrorReporter`].
///
/// Operations are keyed by id. Starting an operation cancels a still running
/// one with the same id, so a repeated reload never races an older one.
#[derive(Clone)]
pub struct TaskManager {
    taskpool: TaskPool,
    tx_to_main: Sender<Msg>,
    error_reporter: ErrorReporter,
    /// Running operations with the generation that started them
    active_operations: Arc<Mutex<HashMap<String, (u64, CancellationToken)>>>,
    generation: Arc<AtomicU64>,
}

impl TaskManager {
    pub fn new(taskpool: TaskPool, tx_to_main: Sender<Msg>, error_reporter: ErrorReporter) -> Self {
        Self {
            taskpool,
            tx_to_main,
            error_reporter,
            active_operations: Arc::new(Mutex::new(HashMap::new())),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Run `operation` under `operation_id`, replacing any running operation
    /// with the same id.
    pub fn execute<F>(&self, operation_id: impl Display, operation: F)
    where
        F: Future<Output = Result<Msg, AppError>> + Send + 'static,
    {
        let operation_id = operation_id.to_string();
        let generation = self.generation.fetch_add(1, Ordering::Relaxed);
        let cancel_token = CancellationToken::new();

        if let Ok(mut operations) = self.active_operations.lock() {
            if let Some((_, previous)) =
                operations.insert(operation_id.clone(), (generation, cancel_token.clone()))
            {
                log::debug!("Superseding running operation '{operation_id}'");
                previous.cancel();
            }
        }

        let tx_to_main = self.tx_to_main.clone();
        let error_reporter = self.error_reporter.clone();
        let active_operations = self.active_operations.clone();

        self.taskpool.execute_with_token(
            async move {
                let result = operation.await;

                // Only the generation that registered the entry may clear it
                if let Ok(mut operations) = active_operations.lock() {
                    if operations
                        .get(&operation_id)
                        .is_some_and(|(current, _)| *current == generation)
                    {
                        operations.remove(&operation_id);
                    }
                }

                match result {
                    Ok(msg) => Self::send_message_or_report_error(
                        &tx_to_main,
                        msg,
                        &operation_id,
                        &error_reporter,
                    ),
                    Err(error) => error_reporter.report_simple(error, "TaskManager", &operation_id),
                }
            },
            cancel_token,
        );
    }

    /// Helper method to send a message to the main thread or report error if it fails
    pub fn send_message_or_report_error(
        tx: &Sender<Msg>,
        msg: Msg,
        context: &str,
        error_reporter: &ErrorReporter,
    ) {
        if let Err(e) = tx.send(msg) {
            error_reporter.report_send_error(context, e);
        }
    }

    /// Cancel an active operation by ID
    pub fn cancel_operation(&self, operation_id: &str) {
        if let Ok(mut operations) = self.active_operations.lock() {
            if let Some((_, token)) = operations.remove(operation_id) {
                token.cancel();
                log::info!("Cancelled operation: {operation_id}");
            }
        }
    }

    pub fn active_operations(&self) -> Vec<String> {
        self.active_operations
            .lock()
            .map(|operations| operations.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Cancel every operation and stop the pool from starting new ones.
    pub fn shutdown(&self) {
        if let Ok(mut operations) = self.active_operations.lock() {
            for (_, (_, token)) in operations.drain() {
                token.cancel();
            }
        }
        self.taskpool.close();
    }
}
