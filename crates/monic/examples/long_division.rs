//! Walks through the core operations: long division over Q, monic
//! normalization, arithmetic in GF(5), and Horner evaluation.

use monic::prelude::*;

fn main() -> Result<(), Error> {
    // (X^5 + 5X^3 + 6) divided by (X^2 + 2X + 3) over Q
    let num = Polynomial::from_ints(&[6, 0, 0, 5, 0, 1], Domain::Rational);
    let den = Polynomial::from_ints(&[3, 2, 1], Domain::Rational);

    let (quot, rem) = num.div_rem(&den)?;
    println!("({num}) / ({den})");
    println!("  quotient:  {quot}");
    println!("  remainder: {rem}");

    // The division identity: num == den * quot + rem
    assert_eq!(den.mul(&quot)?.add(&rem)?, num);

    // Monic normalization divides through by the leading coefficient
    let p = Polynomial::new(
        vec![Coeff::from(3i64), Coeff::from(Rational::from_i64(3, 2))],
        Domain::Rational,
    )?;
    println!("monic({p}) = {}", p.to_monic()?);

    // Residue arithmetic: (1 + 2X)(3X) over GF(5)
    let gf5 = Domain::residue(5)?;
    let prod = Polynomial::from_ints(&[1, 2], gf5).mul(&Polynomial::from_ints(&[0, 3], gf5))?;
    println!("(1 + 2X) * 3X = {prod} over {gf5}");

    // Horner evaluation at an integer point
    let p = Polynomial::from_ints(&[1, 2, 3, 4, 5], Domain::Rational);
    println!("({p}) at 10 = {}", p.eval(10)?);

    Ok(())
}
