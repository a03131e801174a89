use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use eddy_client::error::{self, Result};
use tokio::sync::oneshot;

use crate::capture::Capture;

pub(crate) type Completer = oneshot::Sender<Result<Capture>>;

/// The outcome of one dispatch, completed exactly once.
///
/// Await it for the [`Capture`], or use [`capture`](Completion::capture) to retrieve the
/// value as a concrete type. Dropping a completion does not cancel the in-flight call.
#[derive(Debug)]
#[must_use = "a completion does nothing unless awaited or joined"]
pub struct Completion {
    receiver: oneshot::Receiver<Result<Capture>>,
}

impl Completion {
    pub(crate) fn channel() -> (Completer, Completion) {
        let (sender, receiver) = oneshot::channel();
        (sender, Completion { receiver })
    }

    /// A completion that has already failed with `error`.
    pub fn failed(error: eddy_client::Error) -> Self {
        let (sender, completion) = Self::channel();
        sender.send(Err(error)).ok();
        completion
    }

    /// Wait for the outcome and take the captured value as a `T`.
    ///
    /// # Errors
    ///
    /// The dispatch error, or [`Kind::TypeMismatch`](eddy_client::Kind::TypeMismatch) if the
    /// captured value is not a `T`.
    pub async fn capture<T: 'static>(self) -> Result<Option<T>> {
        self.await?.into_value()
    }

    /// Wait at most `duration` for the outcome.
    ///
    /// Expiry gives up waiting only; the request keeps running and its outcome is discarded.
    ///
    /// # Errors
    ///
    /// The dispatch error, or [`Kind::Timeout`](eddy_client::Kind::Timeout) on expiry.
    pub async fn timeout(self, duration: Duration) -> Result<Capture> {
        match tokio::time::timeout(duration, self).await {
            Ok(outcome) => outcome,
            Err(_) => Err(error::timeout()),
        }
    }

    /// Block the current thread until the outcome is available.
    ///
    /// # Errors
    ///
    /// The dispatch error, or [`Kind::Canceled`](eddy_client::Kind::Canceled) if the dispatch
    /// task went away without completing.
    ///
    /// # Panics
    ///
    /// Panics when called from within an asynchronous execution context.
    pub fn join(self) -> Result<Capture> {
        self.receiver.blocking_recv().map_err(error::canceled)?
    }
}

impl Future for Completion {
    type Output = Result<Capture>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|received| received.map_err(error::canceled)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_pending, assert_ready, task};

    #[test]
    fn completes_exactly_once() {
        let (sender, completion) = Completion::channel();
        let mut completion = task::spawn(completion);

        assert_pending!(completion.poll());
        sender
            .send(Ok(Capture::value_of(3_u8)))
            .expect("receiver alive");

        let capture = assert_ready!(completion.poll()).expect("success");
        assert_eq!(capture.into_value::<u8>().expect("u8"), Some(3));
    }

    #[test]
    fn dropped_sender_cancels() {
        let (sender, completion) = Completion::channel();
        drop(sender);

        assert!(completion.join().unwrap_err().is_canceled());
    }

    #[tokio::test]
    async fn failed_completion_reports_its_error() {
        let outcome = Completion::failed(error::builder("bad tree")).await;

        assert!(outcome.unwrap_err().is_builder());
    }

    #[tokio::test]
    async fn timeout_gives_up_waiting() {
        let (_sender, completion) = Completion::channel();

        let error = completion
            .timeout(Duration::from_millis(10))
            .await
            .unwrap_err();

        assert!(error.is_timeout());
    }
}
