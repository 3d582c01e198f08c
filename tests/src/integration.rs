use field::prelude::*;
use num_bigint::BigInt;
use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;

/// An element already reduced into `[0, MOD)`.
#[derive(Debug, Clone, Copy)]
struct Canonical(FieldElement);

impl Arbitrary for Canonical {
    fn arbitrary(g: &mut Gen) -> Self {
        Canonical(FieldElement::new(u64::arbitrary(g)))
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[quickcheck]
fn add_sub_mul_match_reference(a: Canonical, b: Canonical) -> bool {
    let a = a.0;
    let b = b.0;
    let (x, y) = (a.raw() as u128, b.raw() as u128);
    let m = MOD as u128;

    let mut sum = FieldElement::ZERO;
    let mut diff = FieldElement::ZERO;
    let mut product = FieldElement::ZERO;
    sum.set_add(a, b);
    diff.set_sub(a, b);
    product.set_mul(a, b);

    sum.raw() as u128 == (x + y) % m
        && diff.raw() as u128 == (x + m - y) % m
        && product.raw() as u128 == x * y % m
        && sum.is_canonical()
        && diff.is_canonical()
        && product.is_canonical()
}

#[quickcheck]
fn negation_is_an_involution(a: Canonical) -> bool {
    let a = a.0;
    let mut r = a;
    r.set_neg(r);
    let mut sum = FieldElement::ZERO;
    sum.set_add(a, r);
    r.set_neg(r);
    r == a && sum == FieldElement::ZERO
}

#[quickcheck]
fn inverse_cancels(a: Canonical) -> TestResult {
    let a = a.0;
    if a == FieldElement::ZERO {
        return TestResult::discard();
    }
    let mut inverse = FieldElement::ZERO;
    inverse.set_inv(a);
    let mut product = FieldElement::ZERO;
    product.set_mul(a, inverse);
    TestResult::from_bool(product == FieldElement::ONE)
}

#[quickcheck]
fn division_is_multiplication_by_inverse(
    a: Canonical,
    b: Canonical,
) -> TestResult {
    let a = a.0;
    let b = b.0;
    if b == FieldElement::ZERO {
        return TestResult::discard();
    }
    let mut quotient = FieldElement::ZERO;
    quotient.set_div(a, b);
    TestResult::from_bool(quotient == a * b.inv())
}

#[quickcheck]
fn zeroth_power_is_one(a: Canonical) -> bool {
    let a = a.0;
    let mut r = FieldElement::ZERO;
    r.set_pow(a, FieldElement::ZERO);
    r == FieldElement::ONE
}

#[quickcheck]
fn decimal_text_round_trips(a: Canonical) -> bool {
    let a = a.0;
    let text = a.to_decimal_string();
    let mut parsed = FieldElement::ZERO;
    parsed.set_parse(&text, 10).is_ok() && parsed == a && text.len() < DECIMAL_BUFFER_LEN
}

#[quickcheck]
fn exactly_one_ordering_holds(a: Canonical, b: Canonical) -> bool {
    let a = a.0;
    let b = b.0;
    let mut lt = FieldElement::ZERO;
    let mut eq = FieldElement::ZERO;
    let mut gt = FieldElement::ZERO;
    lt.set_lt(a, b);
    eq.set_eq(a, b);
    gt.set_gt(a, b);
    [lt, eq, gt].iter().filter(|r| r.is_true()).count() == 1
}

#[quickcheck]
fn big_integer_round_trip_of_canonical_values(a: Canonical) -> bool {
    let a = a.0;
    FieldElement::from_big_int(&a.to_big_int()) == a
}

#[test]
fn shifting_one_left_reduces_every_step() {
    let mut r = FieldElement::ONE;
    let one = FieldElement::ONE;
    for _ in 0..31 {
        r.set_shl(r, one);
        assert!(r.is_canonical());
    }
    assert_eq!(FieldElement::ONE, r);

    // A single 64-bit shift would overflow; stepwise reduction gives 2^64 mod MOD.
    r.set_shl(FieldElement::ONE, fe!(64));
    assert_eq!(fe!(4), r);
}

#[test]
fn modulus_plus_one_parses_to_one() {
    init_logging();
    let mut r = FieldElement::ZERO;
    r.set_parse("2147483648", 10).unwrap();
    assert_eq!(FieldElement::ONE, r);
}

#[test]
fn parsing_matches_the_big_integer_floor_remainder() {
    init_logging();
    let text = "-123456789012345678901234567890";
    let expected: BigInt = text.parse::<BigInt>().unwrap() % BigInt::from(MOD);
    let expected = (expected + BigInt::from(MOD)) % BigInt::from(MOD);
    let parsed = FieldElement::parse_from_str(text, 10).unwrap();
    assert_eq!(expected, parsed.to_big_int());
}

#[test]
fn rejected_text_is_reported() {
    init_logging();
    let err = FieldElement::parse_from_str("0x10", 10).unwrap_err();
    assert_eq!(
        ParseFieldElementError::InvalidDigits {
            text: "0x10".to_owned(),
            radix: 10
        },
        err
    );
    let err: FieldError = FieldElement::parse_from_str("10", 0).unwrap_err().into();
    assert_eq!(FieldError::Parse(ParseFieldElementError::InvalidRadix(0)), err);
}

#[test]
fn prime_is_selected_by_name() {
    init_logging();
    let prime: Prime = PRIME_NAME.parse().unwrap();
    assert_eq!(MOD, prime.value());
    assert!("goldilocks".parse::<Prime>().is_err());
}

#[test]
fn non_canonical_results_are_preserved() {
    // complement of the full slot
    let mut r = FieldElement::ZERO;
    r.set_bnot(FieldElement::ZERO);
    assert_eq!(fe!(3), r);

    // a negative big integer keeps its sign through the truncating remainder
    let negative = FieldElement::from_big_int(&BigInt::from(-7));
    assert!(!negative.is_canonical());
    assert_eq!(-7, negative.to_int());
    assert_eq!("-7", negative.to_decimal_string());
}

#[test]
fn checked_variants_do_not_abort() {
    init_logging();
    let seven = fe!(7);
    assert_eq!(Err(FieldError::DivisionByZero), seven.checked_idiv(FieldElement::ZERO));
    assert_eq!(Err(FieldError::DivisionByZero), seven.checked_mod(FieldElement::ZERO));
    assert_eq!(
        Err(FieldError::NotInvertible(FieldElement::ZERO)),
        seven.checked_div(FieldElement::ZERO)
    );
}

// Integer division and remainder by a zero slot abort like native integer
// division. They are fatal, not values to assert on.

#[test]
#[should_panic]
fn idiv_by_zero_is_fatal() {
    let mut r = FieldElement::ZERO;
    r.set_idiv(fe!(7), fe!(0));
}

#[test]
#[should_panic]
fn mod_by_zero_is_fatal() {
    let mut r = FieldElement::ZERO;
    r.set_mod(fe!(7), fe!(0));
}

#[test]
#[should_panic]
fn inverse_of_zero_is_fatal() {
    let mut r = FieldElement::ZERO;
    r.set_inv(FieldElement::ZERO);
}

#[test]
#[should_panic]
fn negative_exponent_is_fatal() {
    let mut r = FieldElement::ZERO;
    r.set_pow(fe!(3), FieldElement::from_raw(1 << 63));
}

#[test]
fn copyn_moves_a_block_of_wires() {
    let signals = fe_vec![10, 20, 30, 40];
    let mut component = fe_vec![0; 4];
    copyn(&mut component[1..], &signals, 3);
    assert_eq!(fe_vec![0, 10, 20, 30], component);
}
