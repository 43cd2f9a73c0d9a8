use crate::{points::PointId, Float, Points};

/// One triangle of the result, as `(i, apex, j)` vertex ids with `i < apex < j`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Triangle {
    pub points: [PointId; 3],
}

impl Triangle {
    pub(crate) fn new(i: usize, apex: usize, j: usize) -> Self {
        Self {
            points: [
                PointId::from_index(i),
                PointId::from_index(apex),
                PointId::from_index(j),
            ],
        }
    }

    /// Build from raw indices, e.g. read back from a result file
    pub fn from_indices(indices: [u32; 3]) -> Self {
        Self {
            points: indices.map(PointId),
        }
    }

    pub fn indices(&self) -> [u32; 3] {
        self.points.map(|p| p.as_u32())
    }

    /// Sum of the three edge lengths, `None` if an id is not in `points`
    pub fn perimeter(&self, points: &Points) -> Option<Float> {
        let [a, b, c] = self.points;
        let a = points.get_point(a)?;
        let b = points.get_point(b)?;
        let c = points.get_point(c)?;
        Some(a.distance(&b) + b.distance(&c) + a.distance(&c))
    }
}
