use num::Float;

/// Fuzzy complement of a truth degree, `1 - a`.
pub fn not<F: Float>(a: F) -> F {
    F::one() - a
}

/// Zadeh conjunction, the pointwise minimum.
pub fn and<F: Float>(a: F, b: F) -> F {
    F::min(a, b)
}

/// Zadeh disjunction, the pointwise maximum.
pub fn or<F: Float>(a: F, b: F) -> F {
    F::max(a, b)
}

/// Kleene-Dienes implication, `max(1 - a, b)`.
///
/// Total over the reals; inputs outside [0, 1] are computed through
/// unchanged.
pub fn implication<F: Float>(a: F, b: F) -> F {
    F::max(F::one() - a, b)
}

/// Fuzzy biconditional: the conjunction of both-direction implications.
///
/// Symmetric in its arguments. Reaches 1 only when both sides are fully
/// certain, a property of the Kleene-Dienes implication it is built from.
pub fn equivalence<F: Float>(a: F, b: F) -> F {
    F::min(implication(a, b), implication(b, a))
}

#[cfg(test)]
const SAMPLES: [f64; 6] = [0.0, 0.1, 0.25, 0.5, 0.9, 1.0];

#[cfg(test)]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn test_double_negation() {
    for a in SAMPLES {
        assert!(approx_eq(not(not(a)), a));
    }
}

#[test]
fn test_commutativity() {
    for a in SAMPLES {
        for b in SAMPLES {
            assert_eq!(and(a, b), and(b, a));
            assert_eq!(or(a, b), or(b, a));
        }
    }
}

#[test]
fn test_conjunction_and_disjunction_bounds() {
    for a in SAMPLES {
        for b in SAMPLES {
            assert!(and(a, b) <= a && and(a, b) <= b);
            assert!(or(a, b) >= a && or(a, b) >= b);
        }
    }
}

#[test]
fn test_implication_from_certainty() {
    for b in SAMPLES {
        assert_eq!(implication(1.0, b), b);
        assert_eq!(implication(0.0, b), 1.0);
    }
}

#[test]
fn test_equivalence_symmetric() {
    for a in SAMPLES {
        for b in SAMPLES {
            assert_eq!(equivalence(a, b), equivalence(b, a));
        }
    }
}

#[test]
fn test_equivalence_of_identical_degrees() {
    // min of the two identical implications collapses to max(1 - a, a),
    // so full equivalence is only reached at the crisp endpoints.
    for a in SAMPLES {
        assert_eq!(equivalence(a, a), or(not(a), a));
    }
    assert_eq!(equivalence(0.0, 0.0), 1.0);
    assert_eq!(equivalence(1.0, 1.0), 1.0);
    assert_eq!(equivalence(0.5, 0.5), 0.5);
}
