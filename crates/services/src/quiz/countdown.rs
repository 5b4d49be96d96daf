use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::controller::RoundToken;

/// Repeating countdown for one question round.
///
/// Sends the round token once per period on the returned channel. Dropping the
/// guard aborts the task, which closes the channel, so holding at most one guard
/// and replacing it on every round change leaves no tick behind.
#[derive(Debug)]
pub struct ScopedCountdown {
    token: RoundToken,
    task: JoinHandle<()>,
}

impl ScopedCountdown {
    /// Start ticking for `token`; the first tick arrives one `period` from now.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn start(
        token: RoundToken,
        period: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<RoundToken>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if sender.send(token).is_err() {
                    break;
                }
            }
        });
        (Self { token, task }, receiver)
    }

    /// One tick per second.
    #[must_use]
    pub fn every_second(token: RoundToken) -> (Self, mpsc::UnboundedReceiver<RoundToken>) {
        Self::start(token, Duration::from_secs(1))
    }

    #[must_use]
    pub fn token(&self) -> RoundToken {
        self.token
    }
}

impl Drop for ScopedCountdown {
    fn drop(&mut self) {
        self.task.abort();
    }
}
