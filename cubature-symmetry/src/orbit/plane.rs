use super::nd::fsd_r;
use super::{check_dim, sign_combinations, take_params, NdOrbit, Symmetry};
use crate::{Error, Numeric, Point};

/// Orbits in the plane under the dihedral group `D4` of the square and its subgroups.
///
/// Used for the quadrilateral, the disk and the circle. Tags that are not plane-specific are
/// resolved as two-dimensional [`NdOrbit`] tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaneOrbit<T> {
    /// The origin (`zero`).
    Zero,
    /// `(a,0), (-a,0), (0,a), (0,-a)` (`d4_a0`, also tagged `symm_r0`).
    D4A0(T),
    /// `(a,a), (-a,a), (a,-a), (-a,-a)` (`d4_aa`).
    D4Aa(T),
    /// `(±a,±b)` followed by `(±b,±a)` (`d4_ab`).
    D4Ab(T, T),
    /// The rotations of `(a,b)` by multiples of a quarter turn (`c4`).
    C4(T, T),
    /// `(a,b), (-a,-b)` (`c2`).
    C2(T, T),
    /// Any two-dimensional orbit of the generic family.
    Nd(NdOrbit<T>),
}

impl<T: Numeric> Symmetry<T> for PlaneOrbit<T> {
    fn tag(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::D4A0(_) => "d4_a0",
            Self::D4Aa(_) => "d4_aa",
            Self::D4Ab(_, _) => "d4_ab",
            Self::C4(_, _) => "c4",
            Self::C2(_, _) => "c2",
            Self::Nd(orbit) => orbit.tag(),
        }
    }

    fn ambient_dim(&self) -> usize {
        2
    }

    fn arity(&self) -> usize {
        match self {
            Self::Zero => 0,
            Self::D4A0(_) | Self::D4Aa(_) => 1,
            Self::D4Ab(_, _) | Self::C4(_, _) | Self::C2(_, _) => 2,
            Self::Nd(orbit) => orbit.arity(),
        }
    }

    fn orbit_size(&self) -> usize {
        match self {
            Self::Zero => 1,
            Self::D4A0(_) | Self::D4Aa(_) | Self::C4(_, _) => 4,
            Self::D4Ab(_, _) => 8,
            Self::C2(_, _) => 2,
            Self::Nd(orbit) => orbit.orbit_size(),
        }
    }

    fn expand(&self) -> Vec<Point<T>> {
        match self {
            Self::Zero => vec![vec![T::zero(), T::zero()]],
            Self::D4A0(a) => fsd_r(2, a),
            Self::D4Aa(a) => sign_combinations(&[a.clone(), a.clone()]),
            Self::D4Ab(a, b) => {
                let mut points = sign_combinations(&[a.clone(), b.clone()]);
                points.extend(sign_combinations(&[b.clone(), a.clone()]));
                points
            }
            Self::C4(a, b) => vec![
                vec![a.clone(), b.clone()],
                vec![-b.clone(), a.clone()],
                vec![-a.clone(), -b.clone()],
                vec![b.clone(), -a.clone()],
            ],
            Self::C2(a, b) => vec![vec![a.clone(), b.clone()], vec![-a.clone(), -b.clone()]],
            Self::Nd(orbit) => orbit.expand(),
        }
    }

    fn from_tag(dim: usize, tag: &str, params: &[T]) -> Result<Self, Error> {
        check_dim(tag, dim, 2)?;
        let orbit = match tag {
            "zero" | "zero2" => {
                let [] = take_params::<_, 0>(tag, params)?;
                Self::Zero
            }
            "d4_a0" | "symm_r0" => {
                let [a] = take_params::<_, 1>(tag, params)?;
                Self::D4A0(a.clone())
            }
            "d4_aa" => {
                let [a] = take_params::<_, 1>(tag, params)?;
                Self::D4Aa(a.clone())
            }
            "d4_ab" => {
                let [a, b] = take_params::<_, 2>(tag, params)?;
                Self::D4Ab(a.clone(), b.clone())
            }
            "c4" => {
                let [a, b] = take_params::<_, 2>(tag, params)?;
                Self::C4(a.clone(), b.clone())
            }
            "c2" => {
                let [a, b] = take_params::<_, 2>(tag, params)?;
                Self::C2(a.clone(), b.clone())
            }
            _ => Self::Nd(NdOrbit::from_tag(2, tag, params)?),
        };
        Ok(orbit)
    }
}
