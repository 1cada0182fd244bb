use crate::outcome::core::Outcome;

/// Borrowing iterator over the success value, yielding at most one item.
pub struct Iter<'a, V> {
    inner: Option<&'a V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

/// Mutable iterator over the success value, yielding at most one item.
pub struct IterMut<'a, V> {
    inner: Option<&'a mut V>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

/// Owning iterator over the success value, yielding at most one item.
pub struct IntoIter<V> {
    inner: Option<V>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<V, E> IntoIterator for Outcome<V, E> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_value() }
    }
}

impl<'a, V, E> IntoIterator for &'a Outcome<V, E> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V, E> IntoIterator for &'a mut Outcome<V, E> {
    type Item = &'a mut V;
    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<V, E> Outcome<V, E> {
    /// Iterates over the success value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(7).iter().next(), Some(&7));
    /// assert_eq!(Outcome::<i32, &str>::err("e").iter().next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { inner: self.as_ref().into_value() }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut { inner: self.as_mut().into_value() }
    }
}

/// Collects a sequence of outcomes, stopping at the first error.
///
/// Items after the first `Err` are not pulled from the source iterator, the
/// same way an [`on_ok`](Outcome::on_ok) chain stops at its first failure.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let steps = vec![Outcome::ok(1), Outcome::ok(2), Outcome::ok(3)];
/// let all: Outcome<Vec<i32>, &str> = steps.into_iter().collect();
/// assert_eq!(all, Outcome::ok(vec![1, 2, 3]));
///
/// let steps = vec![Outcome::ok(1), Outcome::err("second"), Outcome::err("third")];
/// let all: Outcome<Vec<i32>, &str> = steps.into_iter().collect();
/// assert_eq!(all, Outcome::err("second"));
/// ```
impl<V, E, C> FromIterator<Outcome<V, E>> for Outcome<C, E>
where
    C: FromIterator<V>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<V, E>>>(iter: I) -> Self {
        let mut failure = None;
        let collected = iter
            .into_iter()
            .map_while(|step| match step {
                Outcome::Ok(value) => Some(value),
                Outcome::Err(error) => {
                    failure = Some(error);
                    None
                }
            })
            .collect::<C>();

        match failure {
            Some(error) => Outcome::Err(error),
            None => Outcome::Ok(collected),
        }
    }
}
