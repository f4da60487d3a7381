use crate::outcome::core::Outcome;
use crate::outcome::traits::Combine;

pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

pub struct IterMut<'a, T> {
    inner: Option<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_success() }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut Outcome<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, E> Outcome<T, E> {
    /// Iterates over the success value, yielding nothing on failure.
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Outcome::Success(value) => Iter { inner: Some(value) },
            Outcome::Failure(_) => Iter { inner: None },
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        match self {
            Outcome::Success(value) => IterMut { inner: Some(value) },
            Outcome::Failure(_) => IterMut { inner: None },
        }
    }
}

/// Collects outcomes, keeping every failure's errors in iteration order.
///
/// The result is a success only if every item succeeded.
///
/// # Examples
///
/// ```
/// use check_rail::Outcome;
///
/// let items = vec![
///     Outcome::success(1),
///     Outcome::failure(vec!["bad"]),
///     Outcome::failure(vec!["worse"]),
/// ];
/// let collected: Outcome<Vec<i32>, Vec<&str>> = items.into_iter().collect();
/// assert_eq!(collected, Outcome::Failure(vec!["bad", "worse"]));
/// ```
impl<T, E, C> FromIterator<Outcome<T, E>> for Outcome<C, E>
where
    E: Combine,
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        let mut values = crate::types::alloc_type::Vec::new();
        let mut errors: Option<E> = None;

        for outcome in iter {
            match outcome {
                Outcome::Success(value) => values.push(value),
                Outcome::Failure(error) => {
                    errors = Some(match errors.take() {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                },
            }
        }

        match errors {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(values.into_iter().collect()),
        }
    }
}
