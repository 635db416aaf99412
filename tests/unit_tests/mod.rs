use cubature::domain::Domain;
use cubature::Scheme;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;
use util::{eval_monomial, monomials};

mod domain;
mod registry;

/// The largest error over all monomials of the given total degree, relative to the measure of
/// the reference domain.
pub fn max_monomial_error<G: Domain>(scheme: &Scheme<G>, degree: usize, exact: fn(&[usize]) -> f64) -> f64 {
    let domain = scheme.domain();
    let measure = domain.reference_measure();
    monomials(domain.ambient_dim(), degree)
        .iter()
        .map(|alpha| {
            let approx = scheme.integrate_reference(|x| eval_monomial(alpha, x));
            ((approx - exact(alpha)) / measure).abs()
        })
        .fold(0.0, f64::max)
}

/// Checks that the scheme integrates all monomials up to its degree, and fails for some
/// monomial of the next degree.
pub fn assert_degree_is_tight<G: Domain>(scheme: &Scheme<G>, exact: fn(&[usize]) -> f64) {
    let tolerance = scheme.test_tolerance();
    for degree in 0..=scheme.degree() {
        let error = max_monomial_error(scheme, degree, exact);
        assert!(
            error <= tolerance,
            "{scheme}: error {error:e} for monomials of degree {degree}"
        );
    }
    let error = max_monomial_error(scheme, scheme.degree() + 1, exact);
    assert!(
        error > tolerance,
        "{scheme}: monomials of degree {} are integrated to {error:e}",
        scheme.degree() + 1
    );
}

thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

/// Records log messages in the thread that emits them, so that tests running in parallel do not
/// see each other's messages.
struct CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|captured| {
            captured
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;
static INSTALL_LOGGER: Once = Once::new();

/// Runs `f` and returns its result together with the messages it logged at `level`.
pub fn capture_logs<R>(level: Level, f: impl FnOnce() -> R) -> (R, Vec<String>) {
    INSTALL_LOGGER.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger is installed in the test binary");
        log::set_max_level(LevelFilter::Trace);
    });
    CAPTURED.with(|captured| captured.borrow_mut().clear());
    let result = f();
    let messages = CAPTURED.with(|captured| {
        captured
            .borrow_mut()
            .drain(..)
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    });
    (result, messages)
}
