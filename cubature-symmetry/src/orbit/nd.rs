use super::{sign_combinations, take_params, Symmetry};
use crate::{Error, Numeric, Point};
use itertools::Itertools;

/// Largest dimension for which orbits with all sign combinations are expanded.
///
/// Such orbits have `2^n` points per generator.
const MAX_SIGN_DIM: usize = 24;

/// Dimension-parametric orbit shapes under the hyperoctahedral group and its subgroups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NdShape<T> {
    /// The origin (`zero`).
    Zero,
    /// `±r` on a single axis, zero elsewhere (`fsd_r`, `2n` points).
    FsdR(T),
    /// `±r` on two distinct axes, zero elsewhere (`fsd_rr`, `2n(n-1)` points).
    FsdRR(T),
    /// `±r` on one axis and `±s` on another, for every ordered pair of distinct axes
    /// (`fsd_rs`, `4n(n-1)` points).
    FsdRS(T, T),
    /// `±r` on every axis (`pm_all`, `2^n` points).
    PmAll(T),
    /// `±r` on one axis and `±s` on all others (`rs_all`, `n 2^n` points).
    RsAll(T, T),
    /// `±r` on the given axis only (`pm_axis_<k>`, 2 points).
    PmAxis(T, usize),
}

/// An orbit of [`NdShape`] in a given dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdOrbit<T> {
    dim: usize,
    shape: NdShape<T>,
}

impl<T> NdShape<T> {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::FsdR(_) => "fsd_r",
            Self::FsdRR(_) => "fsd_rr",
            Self::FsdRS(_, _) => "fsd_rs",
            Self::PmAll(_) => "pm_all",
            Self::RsAll(_, _) => "rs_all",
            Self::PmAxis(_, _) => "pm_axis",
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Self::Zero => 0,
            Self::FsdR(_) | Self::FsdRR(_) | Self::PmAll(_) | Self::PmAxis(_, _) => 1,
            Self::FsdRS(_, _) | Self::RsAll(_, _) => 2,
        }
    }

    fn supports_dim(&self, dim: usize) -> bool {
        match self {
            Self::Zero | Self::FsdR(_) => dim >= 1,
            Self::FsdRR(_) | Self::FsdRS(_, _) => dim >= 2,
            Self::PmAll(_) | Self::RsAll(_, _) => dim >= 1 && dim <= MAX_SIGN_DIM,
            Self::PmAxis(_, axis) => *axis < dim,
        }
    }
}

impl<T: Numeric> NdOrbit<T> {
    /// Creates an orbit of the given shape in dimension `dim`.
    ///
    /// Fails if the shape needs more axes than the dimension provides.
    pub fn new(dim: usize, shape: NdShape<T>) -> Result<Self, Error> {
        if shape.supports_dim(dim) {
            Ok(Self { dim, shape })
        } else {
            Err(Error::UnsupportedDimension {
                tag: shape.tag().to_string(),
                dim,
            })
        }
    }
}

impl<T: Numeric> Symmetry<T> for NdOrbit<T> {
    fn tag(&self) -> &'static str {
        self.shape.tag()
    }

    fn ambient_dim(&self) -> usize {
        self.dim
    }

    fn arity(&self) -> usize {
        self.shape.arity()
    }

    fn orbit_size(&self) -> usize {
        let n = self.dim;
        match self.shape {
            NdShape::Zero => 1,
            NdShape::FsdR(_) => 2 * n,
            NdShape::FsdRR(_) => 2 * n * (n - 1),
            NdShape::FsdRS(_, _) => 4 * n * (n - 1),
            NdShape::PmAll(_) => 1 << n,
            NdShape::RsAll(_, _) => n << n,
            NdShape::PmAxis(_, _) => 2,
        }
    }

    fn expand(&self) -> Vec<Point<T>> {
        let n = self.dim;
        match &self.shape {
            NdShape::Zero => vec![origin(n)],
            NdShape::FsdR(r) => fsd_r(n, r),
            NdShape::FsdRR(r) => axis_pairs(n, r, r, false),
            NdShape::FsdRS(r, s) => axis_pairs(n, r, s, true),
            NdShape::PmAll(r) => sign_combinations(&vec![r.clone(); n]),
            NdShape::RsAll(r, s) => (0..n)
                .flat_map(|i| {
                    let mut values = vec![s.clone(); n];
                    values[i] = r.clone();
                    sign_combinations(&values)
                })
                .collect(),
            NdShape::PmAxis(r, axis) => [r.clone(), -r.clone()]
                .into_iter()
                .map(|value| {
                    let mut point = origin(n);
                    point[*axis] = value;
                    point
                })
                .collect(),
        }
    }

    /// Resolves `zero`, `fsd_r`, `fsd_rr`, `fsd_rs`, `pm_all`, `rs_all` and `pm_axis_<k>`,
    /// where `k` is the zero-based coordinate slot.
    fn from_tag(dim: usize, tag: &str, params: &[T]) -> Result<Self, Error> {
        let shape = match tag {
            "zero" => {
                let [] = take_params::<_, 0>(tag, params)?;
                NdShape::Zero
            }
            "fsd_r" => {
                let [r] = take_params::<_, 1>(tag, params)?;
                NdShape::FsdR(r.clone())
            }
            "fsd_rr" => {
                let [r] = take_params::<_, 1>(tag, params)?;
                NdShape::FsdRR(r.clone())
            }
            "fsd_rs" => {
                let [r, s] = take_params::<_, 2>(tag, params)?;
                NdShape::FsdRS(r.clone(), s.clone())
            }
            "pm_all" => {
                let [r] = take_params::<_, 1>(tag, params)?;
                NdShape::PmAll(r.clone())
            }
            "rs_all" => {
                let [r, s] = take_params::<_, 2>(tag, params)?;
                NdShape::RsAll(r.clone(), s.clone())
            }
            _ => match tag.strip_prefix("pm_axis_").and_then(|k| k.parse::<usize>().ok()) {
                Some(axis) => {
                    let [r] = take_params::<_, 1>(tag, params)?;
                    NdShape::PmAxis(r.clone(), axis)
                }
                None => {
                    return Err(Error::UnknownSymmetryTag {
                        tag: tag.to_string(),
                        dim,
                    })
                }
            },
        };
        Self::new(dim, shape)
    }
}

fn origin<T: Numeric>(dim: usize) -> Point<T> {
    vec![T::zero(); dim]
}

/// `±r` on each axis in turn.
pub(crate) fn fsd_r<T: Numeric>(dim: usize, r: &T) -> Vec<Point<T>> {
    (0..dim)
        .flat_map(|i| {
            [r.clone(), -r.clone()].into_iter().map(move |value| {
                let mut point = origin(dim);
                point[i] = value;
                point
            })
        })
        .collect()
}

/// `±r` at axis `i` and `±s` at axis `j`, for unordered (`i < j`) or ordered axis pairs.
pub(crate) fn axis_pairs<T: Numeric>(dim: usize, r: &T, s: &T, ordered: bool) -> Vec<Point<T>> {
    let pairs: Vec<Vec<usize>> = if ordered {
        (0..dim).permutations(2).collect()
    } else {
        (0..dim).combinations(2).collect()
    };

    pairs
        .into_iter()
        .flat_map(|pair| {
            let (i, j) = (pair[0], pair[1]);
            sign_combinations(&[r.clone(), s.clone()])
                .into_iter()
                .map(move |signed| {
                    let mut point = origin(dim);
                    point[i] = signed[0].clone();
                    point[j] = signed[1].clone();
                    point
                })
        })
        .collect()
}
