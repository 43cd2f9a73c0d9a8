use crate::{error::InputError, shape::Point, Float};

#[derive(Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Clock Wise
    ///
    ///  a     b
    ///             c
    ///
    CW,
    /// Counter Clock Wise
    ///             c
    ///  a     b
    CCW,
    /// Collinear
    ///  a     b    c
    Collinear,
}

impl Orientation {
    pub fn is_cw(&self) -> bool {
        matches!(self, Self::CW)
    }

    pub fn is_ccw(&self) -> bool {
        matches!(self, Self::CCW)
    }

    pub fn is_collinear(&self) -> bool {
        matches!(self, Self::Collinear)
    }
}

/// Exact orientation of the turn `a -> b -> c`
pub fn orient_2d(a: Point, b: Point, c: Point) -> Orientation {
    let val = robust::orient2d(coord(a), coord(b), coord(c));

    if val > 0. {
        Orientation::CCW
    } else if val < 0. {
        Orientation::CW
    } else {
        Orientation::Collinear
    }
}

fn coord(p: Point) -> robust::Coord<f64> {
    robust::Coord {
        x: p.x.into(),
        y: p.y.into(),
    }
}

/// Signed turn from edge `prev -> o` to edge `o -> next`
#[derive(Debug, Clone, Copy)]
pub struct Angle {
    dy: Float,
    dx: Float,
}

impl Angle {
    pub fn turn(prev: Point, o: Point, next: Point) -> Self {
        let ux = o.x - prev.x;
        let uy = o.y - prev.y;
        let vx = next.x - o.x;
        let vy = next.y - o.y;
        Angle {
            dy: ux * vy - uy * vx,
            dx: ux * vx + uy * vy,
        }
    }

    /// turn in radians, in `(-pi, pi]`, 0 for a zero-length edge
    pub fn radians(&self) -> Float {
        if self.dx == 0. && self.dy == 0. {
            0.
        } else {
            self.dy.atan2(self.dx)
        }
    }
}

/// Check that `points` forms a convex polygon listed counter-clockwise.
///
/// Every cyclic turn must be counter-clockwise, or collinear unless `strict`,
/// and the turns must add up to a single revolution, which rules out
/// star-shaped vertex orders whose turns are all locally left. Fewer than
/// three points always pass.
pub fn check_convex_ccw(points: &[Point], strict: bool) -> Result<(), InputError> {
    let n = points.len();
    if n < 3 {
        return Ok(());
    }

    let mut total_turn: Float = 0.;
    for index in 0..n {
        let prev = points[(index + n - 1) % n];
        let o = points[index];
        let next = points[(index + 1) % n];

        match orient_2d(prev, o, next) {
            Orientation::CW => return Err(InputError::NotConvex { index }),
            Orientation::Collinear if strict => return Err(InputError::NotConvex { index }),
            _ => {}
        }
        total_turn += Angle::turn(prev, o, next).radians();
    }

    // a convex polygon turns exactly once, a pentagram twice
    let pi = std::f64::consts::PI as Float;
    if total_turn > 3. * pi || total_turn < pi {
        return Err(InputError::NotConvex { index: 0 });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0., 0.),
            Point::new(1., 0.),
            Point::new(1., 1.),
            Point::new(0., 1.),
        ]
    }

    #[test]
    fn test_orient_2d() {
        assert_eq!(
            orient_2d(Point::new(0., 0.), Point::new(0., 1.), Point::new(0., 2.)),
            Orientation::Collinear
        );

        assert_eq!(
            orient_2d(Point::new(0., 0.), Point::new(1., 1.), Point::new(2., 2.)),
            Orientation::Collinear
        );

        let flat = orient_2d(Point::new(0., 0.), Point::new(2., 0.), Point::new(4., 0.));
        assert!(flat.is_collinear());
        assert!(orient_2d(Point::new(0., 0.), Point::new(1., 1.), Point::new(2., 3.)).is_ccw());
        assert!(orient_2d(Point::new(0., 0.), Point::new(1., 1.), Point::new(2., 1.)).is_cw());
    }

    #[test]
    fn test_angle() {
        let left = Angle::turn(Point::new(0., 0.), Point::new(1., 0.), Point::new(1., 1.));
        assert!((left.radians() - std::f64::consts::FRAC_PI_2 as Float).abs() < 1e-6);

        let right = Angle::turn(Point::new(0., 0.), Point::new(1., 0.), Point::new(1., -1.));
        assert!(right.radians() < 0.);

        let straight = Angle::turn(Point::new(0., 0.), Point::new(1., 0.), Point::new(2., 0.));
        assert_eq!(straight.radians(), 0.);

        let degenerate = Angle::turn(Point::new(1., 0.), Point::new(1., 0.), Point::new(2., 0.));
        assert_eq!(degenerate.radians(), 0.);
    }

    #[test]
    fn test_convex_ccw() {
        assert_eq!(check_convex_ccw(&square(), true), Ok(()));
        assert_eq!(check_convex_ccw(&[], true), Ok(()));
        assert_eq!(check_convex_ccw(&square()[..2], true), Ok(()));
    }

    #[test]
    fn test_clockwise_rejected() {
        let mut points = square();
        points.reverse();
        assert!(matches!(
            check_convex_ccw(&points, false),
            Err(InputError::NotConvex { .. })
        ));
    }

    #[test]
    fn test_reflex_vertex_rejected() {
        let points = vec![
            Point::new(0., 0.),
            Point::new(2., 0.),
            Point::new(1., 0.5),
            Point::new(2., 2.),
            Point::new(0., 2.),
        ];
        assert_eq!(
            check_convex_ccw(&points, false),
            Err(InputError::NotConvex { index: 2 })
        );
    }

    #[test]
    fn test_collinear_only_rejected_when_strict() {
        let points = vec![
            Point::new(0., 0.),
            Point::new(1., 0.),
            Point::new(2., 0.),
            Point::new(2., 2.),
            Point::new(0., 2.),
        ];
        assert_eq!(check_convex_ccw(&points, false), Ok(()));
        assert_eq!(
            check_convex_ccw(&points, true),
            Err(InputError::NotConvex { index: 1 })
        );
    }

    #[test]
    fn test_pentagram_rejected() {
        let pi = std::f64::consts::PI as Float;
        let star = (0..5)
            .map(|idx| {
                let theta = (idx * 2 % 5) as Float * 2. * pi / 5.;
                Point::new(theta.cos(), theta.sin())
            })
            .collect::<Vec<_>>();
        for i in 0..5 {
            assert!(orient_2d(star[i], star[(i + 1) % 5], star[(i + 2) % 5]).is_ccw());
        }
        assert_eq!(
            check_convex_ccw(&star, false),
            Err(InputError::NotConvex { index: 0 })
        );
    }
}
