use crate::{error::InvariantViolation, table::CostTable, Triangle};

/// Walk the back-pointers from the root span `(0, n - 1)` and collect the
/// chosen triangles.
///
/// Emission is pre-order: a span's own triangle, then everything under its
/// left sub-span, then its right sub-span. An explicit stack replaces
/// recursion, fan-shaped results would otherwise recurse `n` deep.
pub fn extract(table: &CostTable) -> Result<Vec<Triangle>, InvariantViolation> {
    let n = table.vertices();
    if n < 3 {
        return Ok(vec![]);
    }

    let mut triangles = Vec::with_capacity(n - 2);
    let mut stack = Vec::with_capacity(n);
    stack.push((0, n - 1));

    while let Some((i, j)) = stack.pop() {
        if j < i + 2 {
            continue;
        }

        let cell = table.cell(i, j);
        if !cell.is_filled() {
            return Err(InvariantViolation::Unfilled { i, j });
        }
        let Some(apex) = cell.apex.into_option() else {
            return Err(InvariantViolation::MissingApex { i, j });
        };
        let k = apex.as_usize();
        if k <= i || k >= j {
            return Err(InvariantViolation::ApexOutOfRange { i, j, k });
        }

        triangles.push(Triangle::new(i, k, j));
        // right pushed first so the left span pops next
        stack.push((k, j));
        stack.push((i, k));
    }

    if triangles.len() != n - 2 {
        return Err(InvariantViolation::TriangleCount {
            expected: n - 2,
            found: triangles.len(),
        });
    }

    Ok(triangles)
}
