//! 命令执行器

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::Command;
use crate::message::Outcome;
use crate::model::Session;

/// Runs commands on the tokio runtime and collects their outcomes
pub struct Executor {
    runtime: Handle,
    tx: UnboundedSender<Outcome>,
    rx: UnboundedReceiver<Outcome>,
    in_flight: Arc<AtomicUsize>,
}

impl Executor {
    pub fn new(runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            runtime,
            tx,
            rx,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Start every command in the background.
    ///
    /// The session's client is cloned at dispatch time, so a command keeps the
    /// server it was issued against even if the session changes later.
    pub fn dispatch(&self, commands: Vec<Command>, session: &Session) {
        for command in commands {
            log::debug!("[executor] dispatch {command:?}");
            let client = session.client();
            let tx = self.tx.clone();
            let in_flight = Arc::clone(&self.in_flight);
            in_flight.fetch_add(1, Ordering::SeqCst);

            self.runtime.spawn(async move {
                let outcome = command.run(&client).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
                if tx.send(outcome).is_err() {
                    log::debug!("[executor] UI is gone, dropping outcome");
                }
            });
        }
    }

    /// Next finished outcome, without waiting
    pub fn try_next(&mut self) -> Option<Outcome> {
        self.rx.try_recv().ok()
    }

    /// Number of commands still running
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn outcome_comes_back_through_the_channel() {
        let Ok(runtime) = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        else {
            panic!("runtime should build");
        };
        let Ok(session) = Session::new(Some("http://127.0.0.1:9".into()), "") else {
            panic!("session should build");
        };

        let mut executor = Executor::new(runtime.handle().clone());
        assert!(executor.try_next().is_none());

        executor.dispatch(vec![Command::ListTokens], &session);
        let outcome = runtime.block_on(async {
            tokio::time::timeout(Duration::from_secs(15), executor.rx.recv()).await
        });

        assert!(matches!(outcome, Ok(Some(Outcome::Failure(_)))), "got {outcome:?}");
        assert_eq!(executor.in_flight(), 0);
    }
}
