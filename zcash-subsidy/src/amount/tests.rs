//! Fixed test vectors for amounts.

use color_eyre::eyre::Result;

use super::*;

#[test]
fn test_add_bare() -> Result<()> {
    let one: Amount = 1.try_into()?;
    let neg_one: Amount = (-1).try_into()?;

    let zero: Amount = Amount::zero();
    let new_zero = one + neg_one;

    assert_eq!(zero, new_zero?);

    Ok(())
}

#[test]
fn test_add_opt_lhs() -> Result<()> {
    let one: Amount = 1.try_into()?;
    let one = Ok(one);
    let neg_one: Amount = (-1).try_into()?;

    let zero: Amount = Amount::zero();
    let new_zero = one + neg_one;

    assert_eq!(zero, new_zero?);

    Ok(())
}

#[test]
fn test_add_assign() -> Result<()> {
    let one: Amount = 1.try_into()?;
    let neg_one: Amount = (-1).try_into()?;
    let mut neg_one = Ok(neg_one);

    let zero: Amount = Amount::zero();
    neg_one += one;
    let new_zero = neg_one;

    assert_eq!(Ok(zero), new_zero);

    Ok(())
}

#[test]
fn test_sub_assign() -> Result<()> {
    let one: Amount = 1.try_into()?;
    let zero: Amount = Amount::zero();
    let mut zero = Ok(zero);

    let neg_one: Amount = (-1).try_into()?;
    zero -= one;
    let new_neg_one = zero;

    assert_eq!(Ok(neg_one), new_neg_one);

    Ok(())
}

#[test]
fn test_neg() -> Result<()> {
    let one = Amount::<NonNegative>::try_from(1)?;
    let neg_one = Amount::<NegativeAllowed>::try_from(-1)?;

    assert_eq!(neg_one, -one);
    assert_eq!(one, (-neg_one).constrain::<NonNegative>()?);

    Ok(())
}

#[test]
fn test_sub_bare() -> Result<()> {
    let one: Amount = 1.try_into()?;
    let zero: Amount = Amount::zero();

    let neg_one: Amount = (-1).try_into()?;
    let new_neg_one = zero - one;

    assert_eq!(Ok(neg_one), new_neg_one);

    Ok(())
}

#[test]
fn add_with_diff_constraints() -> Result<()> {
    let one = Amount::<NonNegative>::try_from(1)?;
    let zero: Amount<NegativeAllowed> = Amount::zero();

    (zero - one.constrain())?;

    Ok(())
}

#[test]
fn test_sub_constraint() -> Result<()> {
    let one = Amount::<NonNegative>::try_from(1)?;
    let zero: Amount<NonNegative> = Amount::zero();

    // negative results are rejected by the NonNegative constraint
    let neg_one = zero - one;
    assert!(matches!(neg_one, Err(Error::Constraint { value: -1, .. })));

    let error = neg_one.expect_err("subtraction result should violate the constraint");
    assert_eq!(-1, error.invalid_value());

    Ok(())
}

#[test]
fn test_mul() -> Result<()> {
    let rate = Amount::<NonNegative>::try_from(62_500)?;

    assert_eq!(Amount::<NonNegative>::zero(), (rate * 0)?);
    assert_eq!(Amount::<NonNegative>::try_from(625_000_000)?, (rate * 10_000)?);

    // the same multiplication, with the operands swapped
    assert_eq!(Amount::<NonNegative>::try_from(625_000_000)?, (10_000 * rate)?);

    Ok(())
}

#[test]
fn test_mul_overflow() -> Result<()> {
    let max = Amount::<NonNegative>::try_from(MAX_MONEY)?;

    assert!(matches!(
        max * 2,
        Err(Error::MultiplicationOverflow { amount, multiplier: 2, .. }) if amount == MAX_MONEY,
    ));

    let error = (max * 2).expect_err("multiplication result should violate the constraint");
    assert_eq!(i128::from(MAX_MONEY) * 2, error.invalid_value());

    Ok(())
}

#[test]
fn test_div() -> Result<()> {
    let max_subsidy = Amount::<NonNegative>::try_from(1_250_000_000)?;

    assert_eq!(Amount::<NonNegative>::try_from(625_000_000)?, (max_subsidy / 2)?);

    // integer division truncates (rounds down)
    assert_eq!(Amount::<NonNegative>::try_from(416_666_666)?, (max_subsidy / 3)?);

    Ok(())
}

#[test]
fn test_div_by_zero() -> Result<()> {
    let one = Amount::<NonNegative>::try_from(1)?;

    assert_eq!(Err(Error::DivideByZero { amount: 1 }), one / 0);

    Ok(())
}

#[test]
fn test_sum() -> Result<()> {
    let one = Amount::<NonNegative>::try_from(1)?;
    let two = Amount::<NonNegative>::try_from(2)?;

    let sum: Result<Amount<NonNegative>, Error> = [one, two].into_iter().sum();
    assert_eq!(Amount::try_from(3), sum);

    // summing enough maximum values overflows the constraint
    let max = Amount::<NonNegative>::try_from(MAX_MONEY)?;
    let overflow: Result<Amount<NonNegative>, Error> = [max, max].into_iter().sum();
    assert!(matches!(overflow, Err(Error::SumOverflow { .. })));

    Ok(())
}

#[test]
fn constraint_bounds() -> Result<()> {
    assert!(Amount::<NonNegative>::try_from(-1).is_err());
    assert!(Amount::<NonNegative>::try_from(0).is_ok());
    assert!(Amount::<NonNegative>::try_from(MAX_MONEY).is_ok());
    assert!(Amount::<NonNegative>::try_from(MAX_MONEY + 1).is_err());

    assert!(Amount::<NegativeAllowed>::try_from(-MAX_MONEY).is_ok());
    assert!(Amount::<NegativeAllowed>::try_from(-MAX_MONEY - 1).is_err());

    Ok(())
}

#[test]
fn amounts_with_same_value_are_equal() -> Result<()> {
    let non_negative = Amount::<NonNegative>::try_from(42)?;
    let negative_allowed = Amount::<NegativeAllowed>::try_from(42)?;

    assert_eq!(non_negative, negative_allowed);
    assert_eq!(non_negative, 42i64);
    assert_eq!(42i64, negative_allowed);

    Ok(())
}

use proptest::prelude::*;

proptest! {
    #[test]
    fn add_zero_is_identity(amount in any::<Amount<NonNegative>>()) {
        prop_assert_eq!(Ok(amount), amount + Amount::zero());
    }

    #[test]
    fn mul_div_one_is_identity(amount in any::<Amount<NonNegative>>()) {
        prop_assert_eq!(Ok(amount), amount * 1);
        prop_assert_eq!(Ok(amount), amount / 1);
    }

    #[test]
    fn double_negation_is_identity(amount in any::<Amount<NegativeAllowed>>()) {
        prop_assert_eq!(Ok(amount), (-(-amount)).constrain());
    }

    #[test]
    fn ordering_matches_zatoshis(
        first in any::<Amount<NegativeAllowed>>(),
        second in any::<Amount<NegativeAllowed>>(),
    ) {
        prop_assert_eq!(first.zatoshis().cmp(&second.zatoshis()), first.cmp(&second));
    }
}
