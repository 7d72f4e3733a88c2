//! wrap turns operations that may panic into operations that return a [Result](result::Result).
//!
//! * [wrap](crate::wrap) adapts a synchronous callable of any arity.
//! * [attempt](crate::attempt) runs a closure once, right away.
//! * [wrap_async](crate::wrap_async) adapts a future that has already been created.
//! * [wrap_async_fn](crate::wrap_async_fn) adapts a callable that creates futures.
//!
//! A panic inside the wrapped operation never escapes. It is captured and handed back as
//! `Err(Panic)` with its payload untouched. Values are never flattened: wrapping something
//! that already returns a `Result` yields a `Result` of a `Result`.

pub mod callable;
pub mod env;
pub mod hook;

pub use callable::Callable;
pub use error::Panic;
pub use result::Result;

use futures_util::future::poll_fn;
use futures_util::{pin_mut, FutureExt};
use hook::Scope;
use log::debug;
use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

/// wrap takes any synchronous callable and returns a callable with the same argument list
/// (packed into a tuple, see [Callable](crate::Callable)) that returns a
/// [Result](result::Result) instead of panicking.
///
/// The callable is invoked exactly once per call to the returned closure. Callables that
/// mutate their captured state are accepted, which makes the returned closure an
/// [FnMut](std::ops::FnMut).
///
/// ```
/// use wrap::wrap;
///
/// let mut divide = wrap(|a: u32, b: u32| a / b);
/// assert_eq!(5, divide((10, 2)).unwrap());
///
/// let err = divide((10, 0)).unwrap_err();
/// assert_eq!(Some("attempt to divide by zero"), err.message());
/// ```
///
/// Methods keep their receiver, whether it is captured by a closure or passed explicitly.
///
/// ```
/// use wrap::wrap;
///
/// struct Tester {
///     key: String,
/// }
///
/// impl Tester {
///     fn key(&self) -> String {
///         self.key.clone()
///     }
/// }
///
/// let tester = Tester { key: "abc123".to_string() };
/// assert_eq!("abc123", wrap(|| tester.key())(()).unwrap());
/// assert_eq!("abc123", wrap(Tester::key)((&tester,)).unwrap());
/// ```
pub fn wrap<F, Args>(mut f: F) -> impl FnMut(Args) -> Result<F::Output>
where
    F: Callable<Args>,
{
    move |args| capture(|| f.call_with(args))
}

/// attempt runs the given closure once, immediately, and returns its outcome as a
/// [Result](result::Result). It is the single-shot sibling of [wrap](crate::wrap) and, since
/// it only ever runs once, it accepts an [FnOnce](std::ops::FnOnce).
///
/// ```
/// use wrap::attempt;
///
/// let result = attempt(|| serde_json::to_string(&serde_json::json!({"test": "value "})).unwrap());
/// assert_eq!(r#"{"test":"value "}"#, result.unwrap());
///
/// let err = attempt(|| serde_json::from_str::<serde_json::Value>("nonsense").unwrap()).unwrap_err();
/// assert!(err.message().unwrap().contains("expected ident"));
/// ```
pub fn attempt<F, R>(f: F) -> Result<R>
where
    F: FnOnce() -> R,
{
    capture(f)
}

/// wrap_async takes a future that has already been created and returns a future that
/// resolves to a [Result](result::Result) once the original settles. A panic while polling
/// the original resolves the returned future to `Err(Panic)` rather than unwinding through
/// the caller.
///
/// The original future is polled only until it settles (a panic counts) and is never
/// polled again afterwards. No timeout is applied: if the original never settles, neither
/// does the returned future.
///
/// ```
/// use wrap::wrap_async;
///
/// async fn identity(arg: &str) -> &str {
///     arg
/// }
///
/// async fn oops(_: &str) -> &str {
///     panic!("oops")
/// }
///
/// tokio_test::block_on(async {
///     assert_eq!("test", wrap_async(identity("test")).await.unwrap());
///     let err = wrap_async(oops("test")).await.unwrap_err();
///     assert_eq!(Some("oops"), err.message());
/// })
/// ```
pub async fn wrap_async<Fut>(future: Fut) -> Result<Fut::Output>
where
    Fut: Future,
{
    pin_mut!(future);
    let scoped = poll_fn(move |cx| {
        let _scope = Scope::enter();
        future.as_mut().poll(cx)
    });
    AssertUnwindSafe(scoped)
        .catch_unwind()
        .await
        .map_err(captured)
}

/// wrap_async_fn takes a callable that creates futures (typically an `async fn`) and returns
/// a [WrappedAsync](crate::WrappedAsync) whose [call](crate::WrappedAsync::call) resolves to a
/// [Result](result::Result).
///
/// A panic is captured both while the callable creates its future and while that future
/// is polled.
///
/// ```
/// use wrap::wrap_async_fn;
///
/// async fn add(a: u32, b: u32) -> u32 {
///     a + b
/// }
///
/// let mut add = wrap_async_fn(add);
/// tokio_test::block_on(async {
///     assert_eq!(3, add.call((1, 2)).await.unwrap());
/// })
/// ```
pub fn wrap_async_fn<F>(f: F) -> WrappedAsync<F> {
    WrappedAsync { f }
}

/// The future creating callable adapted by [wrap_async_fn](crate::wrap_async_fn).
pub struct WrappedAsync<F> {
    f: F,
}

impl<F> WrappedAsync<F> {
    /// Invokes the callable exactly once with the given arguments. The returned future
    /// resolves to `Ok` with the output of the created future, or `Err(Panic)` if either
    /// the creation or the future itself panicked.
    pub fn call<Args>(
        &mut self,
        args: Args,
    ) -> impl Future<Output = Result<<F::Output as Future>::Output>>
    where
        F: Callable<Args>,
        F::Output: Future,
    {
        let created = capture(|| self.f.call_with(args));
        async move {
            match created {
                Ok(future) => wrap_async(future).await,
                Err(panic) => Err(panic),
            }
        }
    }
}

fn capture<F, R>(f: F) -> Result<R>
where
    F: FnOnce() -> R,
{
    let _scope = Scope::enter();
    // Any state the callable left half-updated is visible to the caller through the Err.
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(captured)
}

fn captured(payload: Box<dyn Any + Send>) -> Panic {
    let panic = Panic::from(payload);
    debug!("Captured a panic from a wrapped call: {}", panic);
    panic
}
