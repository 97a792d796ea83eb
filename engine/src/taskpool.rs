use std::sync::Arc;

use futures_util::Future;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

/// Bounded spawner for background work.
///
/// At most `n_tasks` futures run at once; the rest wait for a permit. Every
/// spawned future is also raced against a pool-wide token, so [`cancel_all`]
/// stops queued and running work alike. Clones share the same permits and token.
///
/// [`cancel_all`]: TaskPool::cancel_all
#[derive(Clone)]
pub struct TaskPool {
    semaphore: Arc<Semaphore>,
    cancel_token: CancellationToken,
}

impl TaskPool {
    pub fn new(n_tasks: usize) -> TaskPool {
        let semaphore = Arc::new(Semaphore::new(n_tasks.max(1)));
        let cancel_token = CancellationToken::new();

        TaskPool {
            semaphore,
            cancel_token,
        }
    }

    pub fn execute<F, T>(&self, func: F)
    where
        F: Future<Output = T> + Send + 'static,
        T: Send,
    {
        self.execute_with_token(func, CancellationToken::new());
    }

    /// Like [`execute`](TaskPool::execute) but also aborts when `token` fires.
    pub fn execute_with_token<F, T>(&self, func: F, token: CancellationToken)
    where
        F: Future<Output = T> + Send + 'static,
        T: Send,
    {
        let semaphore = self.semaphore.clone();
        let pool_token = self.cancel_token.clone();
        tokio::spawn(async move {
            let main = async {
                let Ok(_permit) = semaphore.acquire().await else {
                    return;
                };
                func.await;
            };

            tokio::select! {
                () = main => {},
                () = pool_token.cancelled() => {},
                () = token.cancelled() => {}
            }
        });
    }

    pub fn cancel_all(&self) {
        log::debug!("Cancelling all pooled tasks");
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    /// Closes the semaphore so queued work never starts, then cancels running work.
    pub fn close(&self) {
        self.semaphore.close();
        self.cancel_token.cancel();
    }

    pub fn available_permits(&self) -> usize {
        self.semaphore.available_permits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_execute_runs_task() {
        let pool = TaskPool::new(2);
        let counter = Arc::new(AtomicUsize::new(0));

        let c = counter.clone();
        pool.execute(async move {
            c.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_stops_pending_work() {
        let pool = TaskPool::new(1);
        let counter = Arc::new(AtomicUsize::new(0));

        let c = counter.clone();
        pool.execute(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            c.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(10)).await;
        pool.cancel_all();
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert!(pool.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_token_cancels_only_its_task() {
        let pool = TaskPool::new(4);
        let counter = Arc::new(AtomicUsize::new(0));
        let token = CancellationToken::new();

        for cancellable in [true, false] {
            let c = counter.clone();
            let task_token = if cancellable {
                token.clone()
            } else {
                CancellationToken::new()
            };
            pool.execute_with_token(
                async move {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    c.fetch_add(1, Ordering::SeqCst);
                },
                task_token,
            );
        }

        token.cancel();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_permits_bound_concurrency() {
        let pool = TaskPool::new(1);
        let counter = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let c = counter.clone();
            pool.execute(async move {
                tokio::time::sleep(Duration::from_millis(100)).await;
                c.fetch_add(1, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }
}
