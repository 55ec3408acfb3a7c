//! Property-based tests for polynomial arithmetic laws.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use monic_rings::Domain;

    use crate::Polynomial;

    // Strategy for generating coefficient lists (trailing zeros are
    // intentionally allowed; construction must strip them)
    fn coeff_list() -> impl Strategy<Value = Vec<i64>> {
        prop::collection::vec(-50i64..50i64, 0..8)
    }

    // Strategy for coefficient lists of non-zero polynomials
    fn non_zero_coeff_list() -> impl Strategy<Value = Vec<i64>> {
        coeff_list().prop_filter("polynomial must be non-zero", |values| {
            values.iter().any(|&v| v != 0)
        })
    }

    fn q(values: &[i64]) -> Polynomial {
        Polynomial::from_ints(values, Domain::Rational)
    }

    fn gf5(values: &[i64]) -> Polynomial {
        Polynomial::from_ints(values, Domain::Residue(5))
    }

    proptest! {
        // Abelian group laws

        #[test]
        fn add_commutative(a in coeff_list(), b in coeff_list()) {
            let p = q(&a);
            let r = q(&b);
            prop_assert_eq!(p.add(&r).unwrap(), r.add(&p).unwrap());
        }

        #[test]
        fn add_associative(a in coeff_list(), b in coeff_list(), c in coeff_list()) {
            let p = q(&a);
            let r = q(&b);
            let s = q(&c);
            prop_assert_eq!(
                p.add(&r).unwrap().add(&s).unwrap(),
                p.add(&r.add(&s).unwrap()).unwrap()
            );
        }

        #[test]
        fn additive_inverse(a in coeff_list()) {
            let p = q(&a);
            prop_assert!(p.add(&-&p).unwrap().is_zero());
        }

        // Normalization invariant

        #[test]
        fn no_trailing_zeros(a in coeff_list(), b in coeff_list()) {
            let results = [
                q(&a),
                q(&a).add(&q(&b)).unwrap(),
                q(&a).sub(&q(&b)).unwrap(),
                q(&a).mul(&q(&b)).unwrap(),
            ];
            for poly in results {
                if let Some(lead) = poly.leading_coeff() {
                    prop_assert!(!monic_rings::AbelianGroup::is_zero(lead));
                }
            }
        }

        #[test]
        fn construction_round_trip(a in coeff_list()) {
            let p = q(&a);
            let again = Polynomial::new(p.coeffs().to_vec(), p.domain()).unwrap();
            prop_assert_eq!(p, again);
        }

        // Euclidean division

        #[test]
        fn division_identity(a in coeff_list(), b in non_zero_coeff_list()) {
            let p = q(&a);
            let d = q(&b);
            let (quot, rem) = p.div_rem(&d).unwrap();

            prop_assert_eq!(d.mul(&quot).unwrap().add(&rem).unwrap(), p);
            prop_assert!(rem.is_zero() || rem.degree() < d.degree());
        }

        #[test]
        fn division_identity_gf5(a in coeff_list(), b in non_zero_coeff_list()) {
            let d = gf5(&b);
            // The divisor may vanish mod 5
            prop_assume!(!d.is_zero());
            let p = gf5(&a);
            let (quot, rem) = p.div_rem(&d).unwrap();

            prop_assert_eq!(d.mul(&quot).unwrap().add(&rem).unwrap(), p);
            prop_assert!(rem.is_zero() || rem.degree() < d.degree());
        }

        // Shift

        #[test]
        fn shift_adds_degree(a in non_zero_coeff_list(), n in 0i64..6i64) {
            let p = q(&a);
            prop_assert_eq!(p.shift(n).unwrap().degree(), p.degree() + n as isize);
        }

        // Monic normalization

        #[test]
        fn monic_leading_coefficient(a in non_zero_coeff_list()) {
            let p = q(&a).to_monic().unwrap();
            let lead = p.leading_coeff().cloned().unwrap();
            prop_assert!(monic_rings::Ring::is_one(&lead));
        }

        // Evaluation is a ring homomorphism at fixed x

        #[test]
        fn eval_additive(a in coeff_list(), b in coeff_list(), x in -20i64..20i64) {
            let p = q(&a);
            let r = q(&b);
            prop_assert_eq!(
                p.add(&r).unwrap().eval(x).unwrap(),
                p.eval(x).unwrap().add(&r.eval(x).unwrap()).unwrap()
            );
        }

        #[test]
        fn eval_multiplicative(a in coeff_list(), b in coeff_list(), x in -20i64..20i64) {
            let p = q(&a);
            let r = q(&b);
            prop_assert_eq!(
                p.mul(&r).unwrap().eval(x).unwrap(),
                p.eval(x).unwrap().mul(&r.eval(x).unwrap()).unwrap()
            );
        }
    }
}
