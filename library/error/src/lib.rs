use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::panic;

pub use thiserror;
pub use thiserror::Error;

const NON_STRING_PAYLOAD: &str = "panic with a non-string payload";

/// A Panic is the failure half of a wrapped call. It owns the payload that the failed
/// operation panicked with, exactly as it was raised.
///
/// Most panics carry a textual payload (`panic!("...")` produces either a `&'static str`
/// or a `String`) which is available through [message](crate::Panic::message) and is
/// also used as the [display](std::fmt::Display) for this type.
///
/// ```
/// use error::Panic;
///
/// let panic = std::panic::catch_unwind(|| panic!("oops")).map_err(Panic::from).unwrap_err();
/// assert_eq!(Some("oops"), panic.message());
/// assert_eq!("oops", format!("{}", panic));
/// ```
///
/// Payloads of any other type are NOT coerced into a string. They can be recovered,
/// verbatim, via [downcast](crate::Panic::downcast).
///
/// ```
/// use error::Panic;
///
/// #[derive(Debug, PartialEq)]
/// struct Teapot(u16);
///
/// let panic = std::panic::catch_unwind(|| std::panic::panic_any(Teapot(418)))
///     .map_err(Panic::from)
///     .unwrap_err();
/// assert_eq!(None, panic.message());
/// assert_eq!(Teapot(418), panic.downcast::<Teapot>().unwrap());
/// ```
#[derive(Error)]
#[error("{description}")]
pub struct Panic {
    payload: Box<dyn Any + Send>,
    description: String,
}

impl Panic {
    /// Builds a Panic around an arbitrary value without ever unwinding. This is useful
    /// for constructing a failed `Result` by hand.
    pub fn new<T: Any + Send>(value: T) -> Self {
        Self::from(Box::new(value) as Box<dyn Any + Send>)
    }

    /// The textual description of this panic, if its payload is a `&str` or a `String`.
    pub fn message(&self) -> Option<&str> {
        describe(&*self.payload)
    }

    /// Returns true if the payload is of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Attempts to take the payload out as a `T`. If the payload is of some other type
    /// then the Panic is handed back unchanged.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let Panic {
            payload,
            description,
        } = self;
        match payload.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(payload) => Err(Panic {
                payload,
                description,
            }),
        }
    }

    /// Gives up the raw payload, as it would have been handed to
    /// [catch_unwind](std::panic::catch_unwind).
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Continues unwinding with the original payload. This is the way out for callers
    /// that inspected a failure and decided that it should propagate after all.
    ///
    /// Note that, unlike [panic!](std::panic!), this does NOT invoke the panic hook.
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

/// This conversion accepts the payload exactly as it is handed out by
/// [catch_unwind](std::panic::catch_unwind).
impl From<Box<dyn Any + Send>> for Panic {
    fn from(payload: Box<dyn Any + Send>) -> Self {
        let description = describe(&*payload)
            .unwrap_or(NON_STRING_PAYLOAD)
            .to_string();
        Self {
            payload,
            description,
        }
    }
}

impl Debug for Panic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Panic")
            .field("message", &self.message())
            .finish()
    }
}

fn describe(payload: &(dyn Any + Send)) -> Option<&str> {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        Some(message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        Some(message.as_str())
    } else {
        None
    }
}
