use crate::error::TriangulateError;
use crate::extract::extract;
use crate::points::Points;
use crate::solver::{self, Executor, Observer};
use crate::table::CostTable;
use crate::{utils, Float, Point, Triangle};

/// Triangulation Builder
///
/// # Example
/// ```rust
///    use convex_mwt::{Builder, Point};
///
///    let triangulator = Builder::new(vec![
///        Point::new(0., 0.),
///        Point::new(1., 0.),
///        Point::new(1., 1.),
///        Point::new(0., 1.),
///    ])
///    .threads(2)
///    .build()
///    .unwrap();
///    let triangulation = triangulator.triangulate().unwrap();
///    assert_eq!(triangulation.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
    points: Vec<Point>,
    threads: Option<usize>,
    check_convex: bool,
}

impl Builder {
    /// Create a new Builder with the polygon's vertices in counter-clockwise order
    pub fn new(polygon: impl Into<Vec<Point>>) -> Self {
        Self {
            points: polygon.into(),
            threads: None,
            check_convex: false,
        }
    }

    /// Run on a dedicated pool with `threads` workers instead of rayon's global pool
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Reject polygons that are not convex counter-clockwise at build time.
    /// Collinear consecutive vertices are accepted.
    pub fn check_convex(mut self, check: bool) -> Self {
        self.check_convex = check;
        self
    }

    /// validate the points and build the triangulator
    pub fn build(self) -> Result<Triangulator, TriangulateError> {
        let points = Points::new(self.points)?;
        if self.check_convex {
            utils::check_convex_ccw(points.as_slice(), false)?;
        }
        let executor = Executor::new(self.threads)?;

        Ok(Triangulator { points, executor })
    }
}

/// Main interface, user should grab a new Triangulator by [`Builder::build`]
pub struct Triangulator {
    points: Points,
    executor: Executor,
}

impl Triangulator {
    pub fn points(&self) -> &Points {
        &self.points
    }

    /// Fill and return the cost table without extracting triangles
    pub fn solve(&self) -> CostTable {
        self.solve_with_observer(&mut ())
    }

    pub fn solve_with_observer(&self, observer: &mut dyn Observer) -> CostTable {
        solver::solve(&self.points, &self.executor, observer)
    }

    /// Run triangulate with dummy observer
    pub fn triangulate(&self) -> Result<Triangulation, TriangulateError> {
        self.triangulate_with_observer(&mut ())
    }

    /// Run triangulate with observer
    pub fn triangulate_with_observer(
        &self,
        observer: &mut dyn Observer,
    ) -> Result<Triangulation, TriangulateError> {
        let table = self.solve_with_observer(observer);
        let triangles = extract(&table)?;
        let triangulation = Triangulation {
            cost: table.cost(),
            triangles,
        };
        observer.extracted(&triangulation);

        Ok(triangulation)
    }
}

/// Triangulate `points` with default settings
pub fn triangulate(points: &[Point]) -> Result<Triangulation, TriangulateError> {
    Builder::new(points).build()?.triangulate()
}

/// The result of triangulate
#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation {
    /// sum of the perimeters of all triangles
    cost: Float,
    /// triangles in extraction pre-order
    triangles: Vec<Triangle>,
}

impl Triangulation {
    pub fn cost(&self) -> Float {
        self.cost
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triangle> {
        self.triangles.iter()
    }

    /// Get indices. Each three indices construct an triangle
    /// Point's order is the same as input.
    pub fn triangle_list_indices(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.triangles.len() * 3);
        for t in &self.triangles {
            result.extend_from_slice(&t.indices());
        }
        result
    }

    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }
}

impl<'a> IntoIterator for &'a Triangulation {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
