/// A type that implements Callable can be invoked with its arguments packed into a
/// tuple. This is what lets [wrap](crate::wrap) accept functions of any arity while
/// handing back a callable with the very same argument list.
///
/// A blanket implementation exists for every [FnMut](std::ops::FnMut) taking between zero
/// and eight arguments, so callables that mutate their captured state qualify as well.
///
/// ```
/// use wrap::Callable;
///
/// let mut add = |a: i32, b: i32| a + b;
/// assert_eq!(5, add.call_with((2, 3)));
///
/// let mut count = 0;
/// let mut next = || {
///     count += 1;
///     count
/// };
/// assert_eq!(1, next.call_with(()));
/// assert_eq!(2, next.call_with(()));
/// ```
///
/// Methods are called with their receiver as the first element of the tuple, just as
/// if the method were called directly.
///
/// ```
/// use wrap::Callable;
///
/// struct Tester {
///     key: String,
/// }
///
/// impl Tester {
///     fn key(&self) -> &str {
///         &self.key
///     }
/// }
///
/// let tester = Tester { key: "abc123".to_string() };
/// assert_eq!("abc123", Tester::key.call_with((&tester,)));
/// ```
pub trait Callable<Args> {
    type Output;

    fn call_with(&mut self, args: Args) -> Self::Output;
}

macro_rules! impl_callable {
    ($($arg:ident),*) => {
        impl<Func, Out, $($arg),*> Callable<($($arg,)*)> for Func
        where
            Func: FnMut($($arg),*) -> Out,
        {
            type Output = Out;

            #[allow(non_snake_case)]
            fn call_with(&mut self, ($($arg,)*): ($($arg,)*)) -> Out {
                (self)($($arg),*)
            }
        }
    };
}

impl_callable!();
impl_callable!(A);
impl_callable!(A, B);
impl_callable!(A, B, C);
impl_callable!(A, B, C, D);
impl_callable!(A, B, C, D, E);
impl_callable!(A, B, C, D, E, F);
impl_callable!(A, B, C, D, E, F, G);
impl_callable!(A, B, C, D, E, F, G, H);
