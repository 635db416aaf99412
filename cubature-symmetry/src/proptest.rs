//! Proptest strategies for orbits.
use crate::{NdOrbit, NdShape, PlaneOrbit, SpaceOrbit};
use proptest::prelude::*;

fn generator() -> impl Strategy<Value = f64> {
    // Generators of published rules lie in or near the reference domain
    -2.0..2.0
}

/// Arbitrary orbits are drawn in dimensions `1..=MAX_ARBITRARY_DIM`.
const MAX_ARBITRARY_DIM: usize = 6;

/// Shapes that are defined in the given dimension.
fn nd_shape(dim: usize) -> BoxedStrategy<NdShape<f64>> {
    let mut shapes = vec![
        Just(NdShape::Zero).boxed(),
        generator().prop_map(NdShape::FsdR).boxed(),
        generator().prop_map(NdShape::PmAll).boxed(),
        (generator(), generator())
            .prop_map(|(r, s)| NdShape::RsAll(r, s))
            .boxed(),
        (generator(), 0..dim)
            .prop_map(|(r, axis)| NdShape::PmAxis(r, axis))
            .boxed(),
    ];
    if dim >= 2 {
        shapes.push(generator().prop_map(NdShape::FsdRR).boxed());
        shapes.push(
            (generator(), generator())
                .prop_map(|(r, s)| NdShape::FsdRS(r, s))
                .boxed(),
        );
    }
    proptest::strategy::Union::new(shapes).boxed()
}

impl Arbitrary for NdOrbit<f64> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (1..=MAX_ARBITRARY_DIM)
            .prop_flat_map(|dim| nd_shape(dim).prop_map(move |shape| (dim, shape)))
            .prop_filter_map("shape must fit the dimension", |(dim, shape)| NdOrbit::new(dim, shape).ok())
            .boxed()
    }
}

impl Arbitrary for PlaneOrbit<f64> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let pair = || (generator(), generator());
        prop_oneof![
            Just(PlaneOrbit::Zero),
            generator().prop_map(PlaneOrbit::D4A0),
            generator().prop_map(PlaneOrbit::D4Aa),
            pair().prop_map(|(a, b)| PlaneOrbit::D4Ab(a, b)),
            pair().prop_map(|(a, b)| PlaneOrbit::C4(a, b)),
            pair().prop_map(|(a, b)| PlaneOrbit::C2(a, b)),
        ]
        .boxed()
    }
}

impl Arbitrary for SpaceOrbit<f64> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(SpaceOrbit::Zero3),
            generator().prop_map(SpaceOrbit::SymmR00),
            generator().prop_map(SpaceOrbit::SymmRR0),
            generator().prop_map(SpaceOrbit::SymmRRR),
            (generator(), generator()).prop_map(|(r, s)| SpaceOrbit::SymmRssPm(r, s)),
        ]
        .boxed()
    }
}
