use super::{check_dim, take_params, Symmetry};
use crate::{Error, Numeric, Point};
use itertools::Itertools;

/// Orbits of the reference triangle, in barycentric coordinates.
///
/// Generator parameters are barycentric values; the remaining coordinate is determined by the
/// requirement that barycentric coordinates sum to one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriangleOrbit<T> {
    /// `(1/3, 1/3, 1/3)` (`centroid`).
    Centroid,
    /// The three vertices (`vertex`).
    Vertex,
    /// `(1-2a, a, a)` and its rotations (`d3_aa`, 3 points).
    D3Aa(T),
    /// All permutations of `(a, b, 1-a-b)` (`d3_ab`, 6 points).
    D3Ab(T, T),
}

/// Orbits of the reference tetrahedron, in barycentric coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TetrahedronOrbit<T> {
    /// `(1/4, 1/4, 1/4, 1/4)` (`centroid`).
    Centroid,
    /// The four vertices (`vertex`).
    Vertex,
    /// `(1-3a, a, a, a)` and its rotations (`s31`, 4 points).
    S31(T),
    /// `(a, a, b, b)` with `b = 1/2 - a`, over all placements of the pair (`s22`, 6 points).
    S22(T),
    /// `(a, a, b, c)` with `c = 1 - 2a - b`, over all placements (`s211`, 12 points).
    S211(T, T),
}

fn unit_vectors<T: Numeric>(n: usize) -> Vec<Point<T>> {
    (0..n)
        .map(|i| {
            let mut point = vec![T::zero(); n];
            point[i] = T::one();
            point
        })
        .collect()
}

/// `value` in slot `i` and `other` in all remaining slots, for each `i`.
fn rolled<T: Numeric>(n: usize, value: &T, other: &T) -> Vec<Point<T>> {
    (0..n)
        .map(|i| {
            let mut point = vec![other.clone(); n];
            point[i] = value.clone();
            point
        })
        .collect()
}

impl<T: Numeric> Symmetry<T> for TriangleOrbit<T> {
    fn tag(&self) -> &'static str {
        match self {
            Self::Centroid => "centroid",
            Self::Vertex => "vertex",
            Self::D3Aa(_) => "d3_aa",
            Self::D3Ab(_, _) => "d3_ab",
        }
    }

    fn ambient_dim(&self) -> usize {
        3
    }

    fn arity(&self) -> usize {
        match self {
            Self::Centroid | Self::Vertex => 0,
            Self::D3Aa(_) => 1,
            Self::D3Ab(_, _) => 2,
        }
    }

    fn orbit_size(&self) -> usize {
        match self {
            Self::Centroid => 1,
            Self::Vertex | Self::D3Aa(_) => 3,
            Self::D3Ab(_, _) => 6,
        }
    }

    fn expand(&self) -> Vec<Point<T>> {
        match self {
            Self::Centroid => vec![vec![T::from_ratio(1, 3); 3]],
            Self::Vertex => unit_vectors(3),
            Self::D3Aa(a) => {
                let b = T::one() - a.clone() - a.clone();
                rolled(3, &b, a)
            }
            Self::D3Ab(a, b) => {
                let c = T::one() - a.clone() - b.clone();
                let (a, b) = (a.clone(), b.clone());
                vec![
                    vec![a.clone(), b.clone(), c.clone()],
                    vec![c.clone(), a.clone(), b.clone()],
                    vec![b.clone(), c.clone(), a.clone()],
                    vec![b.clone(), a.clone(), c.clone()],
                    vec![c.clone(), b.clone(), a.clone()],
                    vec![a, c, b],
                ]
            }
        }
    }

    fn from_tag(dim: usize, tag: &str, params: &[T]) -> Result<Self, Error> {
        check_dim(tag, dim, 3)?;
        let orbit = match tag {
            "centroid" => {
                let [] = take_params::<_, 0>(tag, params)?;
                Self::Centroid
            }
            "vertex" => {
                let [] = take_params::<_, 0>(tag, params)?;
                Self::Vertex
            }
            "d3_aa" => {
                let [a] = take_params::<_, 1>(tag, params)?;
                Self::D3Aa(a.clone())
            }
            "d3_ab" => {
                let [a, b] = take_params::<_, 2>(tag, params)?;
                Self::D3Ab(a.clone(), b.clone())
            }
            _ => {
                return Err(Error::UnknownSymmetryTag {
                    tag: tag.to_string(),
                    dim,
                })
            }
        };
        Ok(orbit)
    }
}

impl<T: Numeric> Symmetry<T> for TetrahedronOrbit<T> {
    fn tag(&self) -> &'static str {
        match self {
            Self::Centroid => "centroid",
            Self::Vertex => "vertex",
            Self::S31(_) => "s31",
            Self::S22(_) => "s22",
            Self::S211(_, _) => "s211",
        }
    }

    fn ambient_dim(&self) -> usize {
        4
    }

    fn arity(&self) -> usize {
        match self {
            Self::Centroid | Self::Vertex => 0,
            Self::S31(_) | Self::S22(_) => 1,
            Self::S211(_, _) => 2,
        }
    }

    fn orbit_size(&self) -> usize {
        match self {
            Self::Centroid => 1,
            Self::Vertex | Self::S31(_) => 4,
            Self::S22(_) => 6,
            Self::S211(_, _) => 12,
        }
    }

    fn expand(&self) -> Vec<Point<T>> {
        match self {
            Self::Centroid => vec![vec![T::from_ratio(1, 4); 4]],
            Self::Vertex => unit_vectors(4),
            Self::S31(a) => {
                let b = T::one() - T::from_usize(3) * a.clone();
                rolled(4, &b, a)
            }
            Self::S22(a) => {
                let b = T::from_ratio(1, 2) - a.clone();
                (0..4)
                    .combinations(2)
                    .map(|pair| {
                        let mut point = vec![b.clone(); 4];
                        for i in pair {
                            point[i] = a.clone();
                        }
                        point
                    })
                    .collect()
            }
            Self::S211(a, b) => {
                let c = T::one() - T::from_usize(2) * a.clone() - b.clone();
                (0..4)
                    .combinations(2)
                    .flat_map(|pair| {
                        let rest: Vec<usize> = (0..4).filter(|i| !pair.contains(i)).collect();
                        let (k, l) = (rest[0], rest[1]);
                        [(b.clone(), c.clone()), (c.clone(), b.clone())]
                            .into_iter()
                            .map(move |(at_k, at_l)| {
                                let mut point = vec![a.clone(); 4];
                                point[k] = at_k;
                                point[l] = at_l;
                                point
                            })
                            .collect::<Vec<_>>()
                    })
                    .collect()
            }
        }
    }

    fn from_tag(dim: usize, tag: &str, params: &[T]) -> Result<Self, Error> {
        check_dim(tag, dim, 4)?;
        let orbit = match tag {
            "centroid" => {
                let [] = take_params::<_, 0>(tag, params)?;
                Self::Centroid
            }
            "vertex" => {
                let [] = take_params::<_, 0>(tag, params)?;
                Self::Vertex
            }
            "s31" => {
                let [a] = take_params::<_, 1>(tag, params)?;
                Self::S31(a.clone())
            }
            "s22" => {
                let [a] = take_params::<_, 1>(tag, params)?;
                Self::S22(a.clone())
            }
            "s211" => {
                let [a, b] = take_params::<_, 2>(tag, params)?;
                Self::S211(a.clone(), b.clone())
            }
            _ => {
                return Err(Error::UnknownSymmetryTag {
                    tag: tag.to_string(),
                    dim,
                })
            }
        };
        Ok(orbit)
    }
}
