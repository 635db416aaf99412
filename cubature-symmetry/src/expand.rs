use crate::{Error, NdOrbit, Numeric, PlaneOrbit, Point, Rule, SpaceOrbit, Symmetry, TetrahedronOrbit, TriangleOrbit};

/// Selects the orbit family used to resolve string tags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Family {
    /// [`PlaneOrbit`], two Cartesian coordinates.
    Plane,
    /// [`SpaceOrbit`], three Cartesian coordinates.
    Space,
    /// [`NdOrbit`] with the given number of Cartesian coordinates.
    Cartesian(usize),
    /// [`TriangleOrbit`], three barycentric coordinates.
    Triangle,
    /// [`TetrahedronOrbit`], four barycentric coordinates.
    Tetrahedron,
}

impl Family {
    /// The number of coordinates of the points produced by the family.
    pub fn dim(&self) -> usize {
        match self {
            Self::Plane => 2,
            Self::Space | Self::Triangle => 3,
            Self::Tetrahedron => 4,
            Self::Cartesian(n) => *n,
        }
    }

    /// The natural family for Cartesian points in the given dimension.
    pub fn cartesian(dim: usize) -> Self {
        match dim {
            2 => Self::Plane,
            3 => Self::Space,
            n => Self::Cartesian(n),
        }
    }
}

/// Expands a single orbit.
pub fn expand<T: Numeric, O: Symmetry<T>>(orbit: &O) -> Vec<Point<T>> {
    let points = orbit.expand();
    debug_assert_eq!(points.len(), orbit.orbit_size());
    points
}

/// Resolves a tag in the given family and expands it.
pub fn expand_tag<T: Numeric>(family: Family, tag: &str, params: &[T]) -> Result<Vec<Point<T>>, Error> {
    let dim = family.dim();
    let points = match family {
        Family::Plane => PlaneOrbit::from_tag(dim, tag, params)?.expand(),
        Family::Space => SpaceOrbit::from_tag(dim, tag, params)?.expand(),
        Family::Cartesian(_) => NdOrbit::from_tag(dim, tag, params)?.expand(),
        Family::Triangle => TriangleOrbit::from_tag(dim, tag, params)?.expand(),
        Family::Tetrahedron => TetrahedronOrbit::from_tag(dim, tag, params)?.expand(),
    };
    Ok(points)
}

/// Expands `(weight, orbit)` entries into a rule.
///
/// Each weight is repeated once for every point in its orbit, and the entries are concatenated in
/// iteration order.
///
/// # Errors
///
/// Returns [`Error::EmptyScheme`] if the entries produce no points.
pub fn expand_all<T, O>(entries: impl IntoIterator<Item = (T, O)>) -> Result<Rule<T>, Error>
where
    T: Numeric,
    O: Symmetry<T>,
{
    let mut weights = Vec::new();
    let mut points = Vec::new();
    for (weight, orbit) in entries {
        let orbit_points = expand(&orbit);
        weights.extend(std::iter::repeat(weight).take(orbit_points.len()));
        points.extend(orbit_points);
    }

    if points.is_empty() {
        Err(Error::EmptyScheme)
    } else {
        Ok((weights, points))
    }
}

/// Expands tag-keyed generator rows into a rule.
///
/// Every entry is a tag together with its rows, and each row is `[weight, params...]`. Entries are
/// expanded in the given order, and rows within an entry in row order.
pub fn expand_tagged<T, S>(family: Family, entries: &[(S, Vec<Vec<T>>)]) -> Result<Rule<T>, Error>
where
    T: Numeric,
    S: AsRef<str>,
{
    let mut weights = Vec::new();
    let mut points = Vec::new();
    for (tag, rows) in entries {
        let tag = tag.as_ref();
        for row in rows {
            let (weight, params) = row.split_first().ok_or_else(|| Error::MissingWeight {
                tag: tag.to_string(),
            })?;
            let orbit_points = expand_tag(family, tag, params)?;
            weights.extend(std::iter::repeat(weight.clone()).take(orbit_points.len()));
            points.extend(orbit_points);
        }
    }

    if points.is_empty() {
        Err(Error::EmptyScheme)
    } else {
        Ok((weights, points))
    }
}

/// Approximates the integral of `f` with the given rule, without any scaling.
pub fn integrate<F>(rule: &Rule<f64>, mut f: F) -> f64
where
    F: FnMut(&[f64]) -> f64,
{
    let (weights, points) = rule;
    weights
        .iter()
        .zip(points)
        .map(|(w, point)| w * f(point))
        .sum()
}
