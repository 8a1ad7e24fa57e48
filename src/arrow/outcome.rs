//! `Outcome` - the result of running an [`Arrow`](super::Arrow).
//!
//! Running a synchronous arrow produces its value immediately; running an
//! asynchronous arrow produces a deferred computation. `Outcome` carries
//! either one behind a single type:
//!
//! - callers that know the arrow is synchronous take the value with
//!   [`Outcome::into_ready`] without any executor
//! - any caller can `.await` the outcome, which completes at once for a ready
//!   value and drives the deferred computation otherwise
//!
//! `Outcome` never polls anything on its own. Dropping it cancels a deferred
//! computation.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::BoxFuture;
use pin_project_lite::pin_project;

pin_project! {
    /// The value or deferred computation produced by [`Arrow::run`](super::Arrow::run).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arrowlet::arrow::Arrow;
    ///
    /// let double = Arrow::from_fn(|x: i32| x * 2);
    /// assert_eq!(double.run(4).into_ready().ok(), Some(8));
    ///
    /// # futures::executor::block_on(async {
    /// let delayed = Arrow::from_async_fn(|x: i32| async move { x * 2 });
    /// let outcome = delayed.run(4);
    /// assert!(!outcome.is_ready());
    /// assert_eq!(outcome.await, 8);
    /// # });
    /// ```
    #[must_use = "an outcome does nothing unless its value is taken or it is awaited"]
    pub struct Outcome<B> {
        #[pin]
        state: OutcomeState<B>,
    }
}

pin_project! {
    #[project = OutcomeStateProj]
    enum OutcomeState<B> {
        Ready {
            value: Option<B>,
        },
        Deferred {
            #[pin]
            future: BoxFuture<'static, B>,
        },
    }
}

impl<B> Outcome<B> {
    pub(crate) const fn ready(value: B) -> Self {
        Self {
            state: OutcomeState::Ready { value: Some(value) },
        }
    }

    pub(crate) fn deferred(future: BoxFuture<'static, B>) -> Self {
        Self {
            state: OutcomeState::Deferred { future },
        }
    }

    /// Returns `true` if the value is available without awaiting.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, OutcomeState::Ready { .. })
    }

    /// Takes the value if it is available, or gives the outcome back.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` when the outcome is a deferred computation that
    /// still has to be awaited.
    ///
    /// # Panics
    ///
    /// Panics if the outcome was already awaited to completion.
    pub fn into_ready(self) -> Result<B, Self> {
        match self.state {
            OutcomeState::Ready { value } => Ok(value.expect(
                "Outcome internal error: ready value was already consumed. \
                 This indicates the Outcome was polled after completion.",
            )),
            state @ OutcomeState::Deferred { .. } => Err(Self { state }),
        }
    }
}

impl<B> Future for Outcome<B> {
    type Output = B;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project().state.project() {
            OutcomeStateProj::Ready { value } => Poll::Ready(value.take().expect(
                "Outcome internal error: ready value was already consumed. \
                 This indicates the Outcome was polled after completion.",
            )),
            OutcomeStateProj::Deferred { future } => future.poll(context),
        }
    }
}

impl<B> fmt::Debug for Outcome<B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_ready() { "Ready" } else { "Deferred" };
        formatter
            .debug_struct("Outcome")
            .field("state", &state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use rstest::rstest;

    static_assertions::assert_impl_all!(Outcome<i32>: Send, Unpin);

    #[rstest]
    fn ready_outcome_yields_value_without_executor() {
        let outcome = Outcome::ready("done");
        assert!(outcome.is_ready());
        assert_eq!(outcome.into_ready().ok(), Some("done"));
    }

    #[rstest]
    fn deferred_outcome_is_handed_back() {
        let outcome = Outcome::deferred(async { 3 }.boxed());
        assert!(!outcome.is_ready());

        let returned = outcome.into_ready().unwrap_err();
        assert!(!returned.is_ready());
    }

    #[rstest]
    #[tokio::test]
    async fn ready_outcome_can_be_awaited() {
        assert_eq!(Outcome::ready(11).await, 11);
    }

    #[rstest]
    #[tokio::test]
    async fn deferred_outcome_drives_the_future() {
        let outcome = Outcome::deferred(
            async {
                tokio::task::yield_now().await;
                "finished".to_string()
            }
            .boxed(),
        );
        assert_eq!(outcome.await, "finished");
    }

    #[rstest]
    fn debug_reports_state() {
        assert_eq!(
            format!("{:?}", Outcome::ready(1)),
            "Outcome { state: \"Ready\" }"
        );
        assert_eq!(
            format!("{:?}", Outcome::deferred(async { 1 }.boxed())),
            "Outcome { state: \"Deferred\" }"
        );
    }
}
