//! Random delivery location generation.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::models::{Bounds, Point};

/// Largest location set the generator will produce.
pub const MAX_LOCATIONS: usize = 100;

/// Returns a seeded generator, or one seeded from OS entropy when `seed` is
/// `None`.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Samples `count` points uniformly inside `bounds`.
///
/// Latitude and longitude are drawn independently, latitude first for each
/// point.
///
/// # Errors
///
/// Returns [`Error::InvalidCount`] unless `1 <= count <= MAX_LOCATIONS`, and
/// [`Error::InvalidBounds`] for a malformed rectangle.
///
/// # Examples
///
/// ```
/// use delivery_route::generation::{generate_locations, seeded_rng};
/// use delivery_route::models::Bounds;
///
/// let bounds = Bounds::default();
/// let points = generate_locations(5, &bounds, &mut seeded_rng(Some(7))).unwrap();
/// assert_eq!(points.len(), 5);
/// assert!(points.iter().all(|p| bounds.contains(p)));
/// ```
pub fn generate_locations<R: Rng>(
    count: usize,
    bounds: &Bounds,
    rng: &mut R,
) -> Result<Vec<Point>> {
    if count == 0 || count > MAX_LOCATIONS {
        return Err(Error::InvalidCount {
            count,
            max: MAX_LOCATIONS,
        });
    }
    bounds.validate()?;

    let points: Vec<Point> = (0..count)
        .map(|_| {
            let lat = rng.random_range(bounds.min_lat..=bounds.max_lat);
            let lon = rng.random_range(bounds.min_lon..=bounds.max_lon);
            Point::new(lat, lon)
        })
        .collect();

    debug!("generated {} locations within {:?}", points.len(), bounds);
    Ok(points)
}
