use crate::{error::InputError, shape::Point, Float};

/// Type alias to the underlying type for PointId.
/// Indices are written out as 32-bit integers, so the vertex count is capped
/// at `i32::MAX` and `u32` holds every valid id with room for the sentinel.
type NumType = u32;

/// new type for point id, the index of the vertex in input order
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PointId(pub(crate) NumType);

impl PointId {
    pub const INVALID: PointId = PointId(NumType::MAX);

    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index <= Points::MAX_POINTS);
        Self(index as NumType)
    }

    /// whether id is invalid
    pub fn invalid(&self) -> bool {
        self.0 == Self::INVALID.0
    }

    /// Get the inner value as usize
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    /// Get the inner value as u32
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn into_option(self) -> Option<Self> {
        if self.invalid() {
            None
        } else {
            Some(self)
        }
    }
}

/// Validated vertex store, in counter-clockwise polygon order
#[derive(Clone, Debug, Default)]
pub struct Points {
    points: Vec<Point>,
}

impl Points {
    pub const MAX_POINTS: usize = i32::MAX as usize;

    pub fn new(points: Vec<Point>) -> Result<Self, InputError> {
        if points.len() > Self::MAX_POINTS {
            return Err(InputError::TooManyPoints {
                count: points.len(),
                max: Self::MAX_POINTS,
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(InputError::NonFinite { index });
        }
        check_extent(&points)?;

        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// get point for id
    pub fn get_point(&self, point_id: PointId) -> Option<Point> {
        self.points.get(point_id.as_usize()).cloned()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// iter all points
    pub fn iter(&self) -> impl Iterator<Item = (PointId, &Point)> {
        self.points
            .iter()
            .enumerate()
            .map(|(idx, p)| (PointId::from_index(idx), p))
    }

    /// distance between two vertices, both indices must be in range
    #[inline(always)]
    pub(crate) fn distance(&self, i: usize, j: usize) -> Float {
        self.points[i].distance(&self.points[j])
    }
}

/// Every squared pairwise distance is bounded by the squared bounding-box
/// diagonal, and every triangulation cost by `3 * n` diagonals. Both must be
/// finite for the table to hold finite values.
fn check_extent(points: &[Point]) -> Result<(), InputError> {
    let Some(first) = points.first() else {
        return Ok(());
    };
    let (mut min, mut max) = (*first, *first);
    for p in points {
        min = Point::new(min.x.min(p.x), min.y.min(p.y));
        max = Point::new(max.x.max(p.x), max.y.max(p.y));
    }

    let dx = max.x - min.x;
    let dy = max.y - min.y;
    let extent_squared = dx * dx + dy * dy;
    let cost_bound = extent_squared.sqrt() * 3. * points.len() as Float;
    if !extent_squared.is_finite() || !cost_bound.is_finite() {
        return Err(InputError::Overflow);
    }
    Ok(())
}
