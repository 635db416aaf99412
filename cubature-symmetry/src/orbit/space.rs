use super::nd::{axis_pairs, fsd_r};
use super::{check_dim, sign_combinations, take_params, NdOrbit, NdShape, Symmetry};
use crate::{Error, Numeric, Point};

/// Orbits in three-dimensional space under the octahedral group and its subgroups.
///
/// Used for the hexahedron, the ball and the sphere. Tags that are not specific to three
/// dimensions are resolved as three-dimensional [`NdOrbit`] tags, so `zero` is accepted
/// alongside `zero3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceOrbit<T> {
    /// The origin (`zero3`).
    Zero3,
    /// `±r` on each axis (`symm_r00`, 6 points).
    SymmR00(T),
    /// `±r` on two of the three axes (`symm_rr0`, 12 points).
    SymmRR0(T),
    /// `(±r, ±r, ±r)` (`symm_rrr`, 8 points).
    SymmRRR(T),
    /// `r` in one coordinate slot and `s` in the other two, with every sign combination
    /// (`symm_rss_pm`, 24 points).
    SymmRssPm(T, T),
    /// Any three-dimensional orbit of the generic family.
    Nd(NdOrbit<T>),
}

impl<T: Numeric> Symmetry<T> for SpaceOrbit<T> {
    fn tag(&self) -> &'static str {
        match self {
            Self::Zero3 => "zero3",
            Self::SymmR00(_) => "symm_r00",
            Self::SymmRR0(_) => "symm_rr0",
            Self::SymmRRR(_) => "symm_rrr",
            Self::SymmRssPm(_, _) => "symm_rss_pm",
            Self::Nd(orbit) => orbit.tag(),
        }
    }

    fn ambient_dim(&self) -> usize {
        3
    }

    fn arity(&self) -> usize {
        match self {
            Self::Zero3 => 0,
            Self::SymmR00(_) | Self::SymmRR0(_) | Self::SymmRRR(_) => 1,
            Self::SymmRssPm(_, _) => 2,
            Self::Nd(orbit) => orbit.arity(),
        }
    }

    fn orbit_size(&self) -> usize {
        match self {
            Self::Zero3 => 1,
            Self::SymmR00(_) => 6,
            Self::SymmRR0(_) => 12,
            Self::SymmRRR(_) => 8,
            Self::SymmRssPm(_, _) => 24,
            Self::Nd(orbit) => orbit.orbit_size(),
        }
    }

    fn expand(&self) -> Vec<Point<T>> {
        match self {
            Self::Zero3 => vec![vec![T::zero(); 3]],
            Self::SymmR00(r) => fsd_r(3, r),
            Self::SymmRR0(r) => axis_pairs(3, r, r, false),
            Self::SymmRRR(r) => sign_combinations(&[r.clone(), r.clone(), r.clone()]),
            Self::SymmRssPm(r, s) => (0..3)
                .flat_map(|i| {
                    let mut values = [s.clone(), s.clone(), s.clone()];
                    values[i] = r.clone();
                    sign_combinations(&values)
                })
                .collect(),
            Self::Nd(orbit) => orbit.expand(),
        }
    }

    fn from_tag(dim: usize, tag: &str, params: &[T]) -> Result<Self, Error> {
        check_dim(tag, dim, 3)?;
        let orbit = match tag {
            "zero3" => {
                let [] = take_params::<_, 0>(tag, params)?;
                Self::Zero3
            }
            "symm_r00" => {
                let [r] = take_params::<_, 1>(tag, params)?;
                Self::SymmR00(r.clone())
            }
            "symm_rr0" => {
                let [r] = take_params::<_, 1>(tag, params)?;
                Self::SymmRR0(r.clone())
            }
            "symm_rrr" => {
                let [r] = take_params::<_, 1>(tag, params)?;
                Self::SymmRRR(r.clone())
            }
            "symm_rss_pm" => {
                let [r, s] = take_params::<_, 2>(tag, params)?;
                Self::SymmRssPm(r.clone(), s.clone())
            }
            _ => Self::Nd(NdOrbit::from_tag(3, tag, params)?),
        };
        Ok(orbit)
    }
}

impl<T: Numeric> SpaceOrbit<T> {
    /// The equivalent generic orbit, if the orbit has one.
    pub fn to_nd(&self) -> Result<NdOrbit<T>, Error> {
        let shape = match self {
            Self::Zero3 => NdShape::Zero,
            Self::SymmR00(r) => NdShape::FsdR(r.clone()),
            Self::SymmRR0(r) => NdShape::FsdRR(r.clone()),
            Self::SymmRRR(r) => NdShape::PmAll(r.clone()),
            Self::SymmRssPm(r, s) => NdShape::RsAll(r.clone(), s.clone()),
            Self::Nd(orbit) => return Ok(orbit.clone()),
        };
        NdOrbit::new(3, shape)
    }
}
