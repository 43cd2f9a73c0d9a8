/// Input rejected before the table is allocated.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{count} points exceed the supported maximum of {max}")]
    TooManyPoints { count: usize, max: usize },
    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    #[error("coordinates span too wide a range, distances or costs would overflow")]
    Overflow,
    #[error("polygon is not convex counter-clockwise at vertex {index}")]
    NotConvex { index: usize },
}

/// The filled table does not describe a valid triangulation. Always a solver defect.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    #[error("cell ({i}, {j}) was never filled")]
    Unfilled { i: usize, j: usize },
    #[error("cell ({i}, {j}) spans at least three vertices but has no apex")]
    MissingApex { i: usize, j: usize },
    #[error("apex {k} of cell ({i}, {j}) lies outside the open range")]
    ApexOutOfRange { i: usize, j: usize, k: usize },
    #[error("expected {expected} triangles, extracted {found}")]
    TriangleCount { expected: usize, found: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum TriangulateError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("internal error: {0}")]
    Internal(#[from] InvariantViolation),
    #[error("failed to build thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
