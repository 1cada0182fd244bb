use core::any::Any;
use core::fmt;

use crate::slot::Slot;

/// Container for the outcome of a fallible operation.
///
/// `Outcome<V, E>` holds exactly one of a success value of type `V` or an error
/// of type `E`. It never changes after construction: every combinator consumes
/// the receiver and hands back a new container.
///
/// Chaining combinators come in three shapes, picked by name at the call site:
///
/// | argument                          | success side            | error side               |
/// |-----------------------------------|-------------------------|--------------------------|
/// | closure returning an `Outcome`    | [`on_ok`](Self::on_ok)  | [`on_err`](Self::on_err) |
/// | closure returning a plain payload | [`on_ok_map`](Self::on_ok_map) | [`on_err_map`](Self::on_err_map) |
/// | plain replacement payload         | [`on_ok_value`](Self::on_ok_value) | [`on_err_value`](Self::on_err_value) |
///
/// Closures that return an `Outcome` are flattened, so a chain of any length
/// still ends in a single-level container.
///
/// # Type Parameters
///
/// * `V` - The success value type
/// * `E` - The error type
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// fn parse(input: &str) -> Outcome<i32, String> {
///     match input.parse() {
///         Ok(n) => Outcome::ok(n),
///         Err(_) => Outcome::err(format!("not a number: {input}")),
///     }
/// }
///
/// let doubled = parse("21").on_ok_map(|n| n * 2);
/// assert_eq!(doubled, Outcome::ok(42));
///
/// let failed = parse("x").on_ok_map(|n| n * 2);
/// assert_eq!(failed.error_or(String::new()), "not a number: x");
/// ```
#[must_use]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<V, E> {
    /// Success, holding the value.
    Ok(V),
    /// Failure, holding the error.
    Err(E),
}

impl<V, E> Outcome<V, E> {
    /// Creates a success container.
    ///
    /// The value is stored as given, even when it is itself an `Outcome`;
    /// use [`flatten`](Self::flatten) to collapse such a value explicitly.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let ok = Outcome::<_, &str>::ok("content");
    /// assert!(ok.is_success());
    /// ```
    #[inline]
    pub const fn ok(value: V) -> Self {
        Self::Ok(value)
    }

    /// Creates a failure container.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let err = Outcome::<i32, _>::err("something went wrong");
    /// assert!(err.is_error());
    /// ```
    #[inline]
    pub const fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// Returns `true` if the container holds a value.
    #[must_use]
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the container holds an error.
    #[must_use]
    #[inline]
    pub const fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Returns the value, or `default` when the container holds an error.
    ///
    /// # Arguments
    ///
    /// * `default` - Value returned for an `Err` container
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<_, &str>::ok(3).value_or(0), 3);
    /// assert_eq!(Outcome::<i32, _>::err("boom").value_or(0), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn value_or(self, default: V) -> V {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the error, or `default` when the container holds a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, _>::err("boom").error_or("none"), "boom");
    /// assert_eq!(Outcome::<_, &str>::ok(3).error_or("none"), "none");
    /// ```
    #[must_use]
    #[inline]
    pub fn error_or(self, default: E) -> E {
        match self {
            Self::Ok(_) => default,
            Self::Err(error) => error,
        }
    }

    /// Returns the value, computing a fallback from the error otherwise.
    ///
    /// `f` runs only for an `Err` container.
    #[must_use]
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    /// Returns the error, computing a fallback from the value otherwise.
    #[must_use]
    #[inline]
    pub fn error_or_else<F>(self, f: F) -> E
    where
        F: FnOnce(V) -> E,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => error,
        }
    }

    /// Extracts the value slot.
    ///
    /// Returns `Some(value)` for `Ok`, the absent slot for `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// // A value that is itself `None` is still present.
    /// let ok = Outcome::<Option<i32>, &str>::ok(None);
    /// assert_eq!(ok.into_value(), Some(None));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Slot<V> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Extracts the error slot.
    ///
    /// Returns `Some(error)` for `Err`, the absent slot for `Ok`.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Slot<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Splits the container into its value and error slots.
    ///
    /// Exactly one of the two slots is present.
    #[must_use]
    #[inline]
    pub fn slots(self) -> (Slot<V>, Slot<E>) {
        match self {
            Self::Ok(value) => (Some(value), None),
            Self::Err(error) => (None, Some(error)),
        }
    }

    /// Borrows the payload, producing an `Outcome<&V, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&V, &E> {
        match *self {
            Self::Ok(ref value) => Outcome::Ok(value),
            Self::Err(ref error) => Outcome::Err(error),
        }
    }

    /// Mutably borrows the payload, producing an `Outcome<&mut V, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut V, &mut E> {
        match *self {
            Self::Ok(ref mut value) => Outcome::Ok(value),
            Self::Err(ref mut error) => Outcome::Err(error),
        }
    }

    /// Hands both slots to `handler` and returns whatever it returns.
    ///
    /// The handler is called exactly once whatever the variant; the inactive
    /// side arrives as the absent slot. This lets callers build their own
    /// fallback logic without the success-biased or error-biased combinators.
    ///
    /// # Arguments
    ///
    /// * `handler` - Receives `(value_slot, error_slot)`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn read_remote() -> Outcome<String, &'static str> {
    ///     Outcome::err("data does not exist")
    /// }
    ///
    /// let content = read_remote().handle(|value, _error| {
    ///     let mut content = value.unwrap_or_else(|| "local copy".to_string());
    ///     content.push_str(" (checked)");
    ///     content
    /// });
    /// assert_eq!(content, "local copy (checked)");
    /// ```
    #[inline]
    pub fn handle<R, F>(self, handler: F) -> R
    where
        F: FnOnce(Slot<V>, Slot<E>) -> R,
    {
        let (value, error) = self.slots();
        handler(value, error)
    }

    /// Chains a fallible step onto a success.
    ///
    /// For `Ok(v)` this returns `f(v)`; the container `f` produces becomes the
    /// result directly, so nesting never builds up. For `Err` the error is
    /// propagated and `f` is not called.
    ///
    /// # Arguments
    ///
    /// * `f` - The next step, producing the next container
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let result = Outcome::<i32, &str>::ok(1)
    ///     .on_ok(|x| Outcome::ok(x + 1))
    ///     .on_ok(|x| Outcome::ok(x * 2));
    /// assert_eq!(result, Outcome::ok(4));
    ///
    /// let failed = Outcome::<i32, &str>::ok(1)
    ///     .on_ok(|_| Outcome::<i32, _>::err("boom"))
    ///     .on_ok(|x| Outcome::ok(x * 2));
    /// assert_eq!(failed, Outcome::err("boom"));
    /// ```
    ///
    /// A handler is mandatory; there is no way to pass "nothing":
    ///
    /// ```compile_fail
    /// use outcome_rail::Outcome;
    ///
    /// let _ = Outcome::<i32, &str>::ok(1).on_ok(None);
    /// ```
    #[inline]
    pub fn on_ok<W, F>(self, f: F) -> Outcome<W, E>
    where
        F: FnOnce(V) -> Outcome<W, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms a success value with a plain function.
    ///
    /// The result of `f` is wrapped as the new `Ok`. Errors pass through and
    /// `f` is not called.
    #[inline]
    pub fn on_ok_map<W, F>(self, f: F) -> Outcome<W, E>
    where
        F: FnOnce(V) -> W,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Replaces a success value, discarding the previous one.
    ///
    /// Errors pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(1).on_ok_value("done"), Outcome::ok("done"));
    /// assert_eq!(Outcome::<i32, &str>::err("e").on_ok_value("done"), Outcome::err("e"));
    /// ```
    #[inline]
    pub fn on_ok_value<W>(self, value: W) -> Outcome<W, E> {
        match self {
            Self::Ok(_) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Chains a fallible step onto a failure.
    ///
    /// Mirror of [`on_ok`](Self::on_ok): for `Err(e)` this returns `f(e)`,
    /// which may recover into `Ok` or fail with a new error type. Successes
    /// pass through and `f` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let read_api = || Outcome::<i32, &str>::err("not found in API");
    /// let read_cache = || Outcome::<i32, &str>::ok(20);
    ///
    /// let value = Outcome::<i32, &str>::err("not found in DB")
    ///     .on_err(|_| read_api())
    ///     .on_err(|_| read_cache());
    /// assert_eq!(value.merge_with(|n| n, |_| 0), 20);
    /// ```
    #[inline]
    pub fn on_err<G, F>(self, f: F) -> Outcome<V, G>
    where
        F: FnOnce(E) -> Outcome<V, G>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => f(error),
        }
    }

    /// Transforms an error with a plain function.
    ///
    /// The result of `f` becomes the new `Err`.
    #[inline]
    pub fn on_err_map<G, F>(self, f: F) -> Outcome<V, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Replaces an error, discarding the previous one.
    #[inline]
    pub fn on_err_value<G>(self, error: G) -> Outcome<V, G> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => Outcome::Err(error),
        }
    }

    /// Total pattern match where both arms produce a container.
    ///
    /// Exactly one arm runs. Its container is the result, so an `Ok` arm may
    /// fail and an `Err` arm may recover.
    ///
    /// # Arguments
    ///
    /// * `on_ok` - Runs for a success value
    /// * `on_err` - Runs for an error
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn fetch_from_api(_id: u32) -> Outcome<Vec<&'static str>, String> {
    ///     Outcome::ok(vec!["one", "two"])
    /// }
    ///
    /// let tokens = Outcome::<Vec<&str>, String>::err("not in DB".to_string())
    ///     .match_with(
    ///         |tokens| Outcome::ok(tokens.join(", ")),
    ///         |_err| fetch_from_api(21).on_ok_map(|tokens| tokens.join(", ")),
    ///     );
    /// assert_eq!(tokens, Outcome::ok("one, two".to_string()));
    /// ```
    ///
    /// Both arms are required:
    ///
    /// ```compile_fail
    /// use outcome_rail::Outcome;
    ///
    /// let _ = Outcome::<i32, &str>::ok(1).match_with(|v| Outcome::<i32, &str>::ok(v));
    /// ```
    #[inline]
    pub fn match_with<W, G, OnOk, OnErr>(self, on_ok: OnOk, on_err: OnErr) -> Outcome<W, G>
    where
        OnOk: FnOnce(V) -> Outcome<W, G>,
        OnErr: FnOnce(E) -> Outcome<W, G>,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Total pattern match where both arms produce a plain payload.
    ///
    /// The variant is kept: `Ok(v)` becomes `Ok(on_ok(v))` and `Err(e)`
    /// becomes `Err(on_err(e))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let handled = Outcome::<&str, &str>::err("e")
    ///     .bimap(|_| "ok".to_string(), |e| format!("handled:{e}"))
    ///     .merge();
    /// assert_eq!(handled, "handled:e");
    /// ```
    #[inline]
    pub fn bimap<W, G, OnOk, OnErr>(self, on_ok: OnOk, on_err: OnErr) -> Outcome<W, G>
    where
        OnOk: FnOnce(V) -> W,
        OnErr: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(on_ok(value)),
            Self::Err(error) => Outcome::Err(on_err(error)),
        }
    }

    /// Collapses both sides into one type.
    ///
    /// Like [`merge`](Self::merge) for containers whose sides differ in type.
    #[must_use]
    #[inline]
    pub fn merge_with<T, OnOk, OnErr>(self, on_ok: OnOk, on_err: OnErr) -> T
    where
        OnOk: FnOnce(V) -> T,
        OnErr: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Alias of [`on_ok_map`](Self::on_ok_map).
    #[inline]
    pub fn map<W, F>(self, f: F) -> Outcome<W, E>
    where
        F: FnOnce(V) -> W,
    {
        self.on_ok_map(f)
    }

    /// Alias of [`on_err_map`](Self::on_err_map).
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<V, G>
    where
        F: FnOnce(E) -> G,
    {
        self.on_err_map(f)
    }

    /// Alias of [`on_ok`](Self::on_ok).
    #[inline]
    pub fn and_then<W, F>(self, f: F) -> Outcome<W, E>
    where
        F: FnOnce(V) -> Outcome<W, E>,
    {
        self.on_ok(f)
    }

    /// Alias of [`on_err`](Self::on_err).
    #[inline]
    pub fn or_else<G, F>(self, f: F) -> Outcome<V, G>
    where
        F: FnOnce(E) -> Outcome<V, G>,
    {
        self.on_err(f)
    }
}

impl<V: 'static, E: 'static> Outcome<V, E> {
    /// Returns `true` if `value` is an `Outcome<V, E>`.
    ///
    /// Useful when an API hands back either a container or a raw value behind
    /// `dyn Any`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::any::Any;
    /// use outcome_rail::Outcome;
    ///
    /// let wrapped: Box<dyn Any> = Box::new(Outcome::<i32, String>::ok(1));
    /// let raw: Box<dyn Any> = Box::new(1);
    ///
    /// assert!(Outcome::<i32, String>::is_instance(&*wrapped));
    /// assert!(!Outcome::<i32, String>::is_instance(&*raw));
    /// ```
    #[must_use]
    #[inline]
    pub fn is_instance(value: &dyn Any) -> bool {
        value.is::<Self>()
    }
}

impl<T> Outcome<T, T> {
    /// Returns whichever payload is present.
    ///
    /// Only defined when both sides share a type; see
    /// [`merge_with`](Self::merge_with) otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let recovered: Outcome<i32, i32> = Outcome::<i32, &str>::err("e").on_err(|_| Outcome::ok(5));
    /// assert_eq!(recovered.merge(), 5);
    /// ```
    ///
    /// ```compile_fail
    /// use outcome_rail::Outcome;
    ///
    /// let _ = Outcome::<i32, &str>::ok(1).merge();
    /// ```
    #[must_use]
    #[inline]
    pub fn merge(self) -> T {
        match self {
            Self::Ok(value) | Self::Err(value) => value,
        }
    }
}

impl<V, E> Outcome<Outcome<V, E>, E> {
    /// Removes one level of nesting from a container built around a container.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let nested = Outcome::<_, &str>::ok(Outcome::<i32, &str>::err("inner"));
    /// assert_eq!(nested.flatten(), Outcome::err("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<V, E> {
        self.on_ok(|inner| inner)
    }
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for Outcome<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "Ok({value})"),
            Self::Err(error) => write!(f, "Err({error})"),
        }
    }
}
