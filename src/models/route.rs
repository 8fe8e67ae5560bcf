//! Closed visiting order over a location set.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Index of the location every route starts from and returns to.
pub const START: usize = 0;

/// An ordered sequence of location indices forming a closed loop.
///
/// A valid route for `n` locations has `n + 1` entries, begins and ends at
/// [`START`] and visits each of `1..n` exactly once in between.
///
/// # Examples
///
/// ```
/// use delivery_route::models::Route;
///
/// let route = Route::from_indices(vec![0, 2, 1, 0]);
/// assert_eq!(route.len(), 4);
/// assert_eq!(route.stops(), &[2, 1]);
/// assert!(route.validate(3).is_ok());
/// assert!(route.validate(4).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Route {
    indices: Vec<usize>,
}

impl Route {
    /// Wraps a raw index sequence without checking it; see [`Route::validate`].
    pub fn from_indices(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// All indices in visit order, including both ends of the loop.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Interior stops, i.e. the indices between the start and the return.
    pub fn stops(&self) -> &[usize] {
        match self.indices.len() {
            0..=2 => &[],
            len => &self.indices[1..len - 1],
        }
    }

    /// Number of entries, including the closing return to the start.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the route holds no indices at all.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Consecutive `(from, to)` legs of the route.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.indices.windows(2).map(|w| (w[0], w[1]))
    }

    /// The same loop travelled in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            indices: self.indices.iter().rev().copied().collect(),
        }
    }

    /// Checks the closed-loop invariants for a location set of size `n`.
    pub fn validate(&self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(Error::EmptyLocations);
        }
        if self.indices.len() != n + 1 {
            return Err(Error::invalid_route(format!(
                "expected {} entries for {n} locations, got {}",
                n + 1,
                self.indices.len()
            )));
        }
        if self.indices.first() != Some(&START) || self.indices.last() != Some(&START) {
            return Err(Error::invalid_route("route must start and end at index 0"));
        }

        let mut seen = vec![false; n];
        for &idx in self.stops() {
            if idx == START || idx >= n {
                return Err(Error::invalid_route(format!("index {idx} out of range")));
            }
            if seen[idx] {
                return Err(Error::invalid_route(format!("index {idx} visited twice")));
            }
            seen[idx] = true;
        }
        Ok(())
    }
}

impl AsRef<[usize]> for Route {
    fn as_ref(&self) -> &[usize] {
        &self.indices
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for idx in &self.indices {
            if !first {
                f.write_str(" -> ")?;
            }
            write!(f, "{idx}")?;
            first = false;
        }
        Ok(())
    }
}
