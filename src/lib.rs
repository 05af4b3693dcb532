use log::debug;
use nom::{
    character::complete::{multispace0, multispace1},
    error::{FromExternalError, ParseError},
    sequence::{delimited, separated_pair},
    IResult,
};
use nom_supreme::error::ErrorTree;
use num::{bigint::ParseBigIntError, pow, BigUint, ToPrimitive, Zero};
use util::{parse_biguint, parse_nice, parse_padded_biguint, InputError, Span};

pub fn digit_sum(x: &BigUint) -> u64 {
    x.to_radix_be(10).into_iter().map(u64::from).sum()
}

/// Largest power of ten not exceeding `n`, or 1 when `n` is 0.
///
/// Same value as growing a power of ten while it is `<= n / 10`: for a
/// number with `d` digits that loop stops at `10^(d-1)`.
pub fn split_point(n: &BigUint) -> BigUint {
    let digits = n.to_radix_be(10).len();

    pow(BigUint::from(10u32), digits - 1)
}

/// Splits `n` into `(a, b)` with `a + b == n`, where `a` is the all-nines
/// number one digit shorter than `n`. Single digits split into `(0, n)`.
pub fn split(n: &BigUint) -> (BigUint, BigUint) {
    if *n < BigUint::from(10u32) {
        return (BigUint::zero(), n.clone());
    }

    let a = split_point(n) - 1u32;
    let b = n - &a;

    (a, b)
}

/// Best `digit_sum(a) + digit_sum(b)` over all `a + b == n`.
pub fn max_digit_sum(n: &BigUint) -> u64 {
    let (a, b) = split(n);
    debug!("split {n} into {a} + {b}");

    digit_sum(&a) + digit_sum(&b)
}

pub fn check_answer(n: &BigUint, claimed: &BigUint) -> bool {
    let expected = max_digit_sum(n);
    debug!("expected {expected}, got {claimed}");

    claimed.to_u64() == Some(expected)
}

fn parse_claim_pair<'a, E>(i: Span<'a>) -> IResult<Span<'a>, (BigUint, BigUint), E>
where
    E: ParseError<Span<'a>> + FromExternalError<Span<'a>, ParseBigIntError>,
{
    delimited(
        multispace0,
        separated_pair(parse_biguint, multispace1, parse_biguint),
        multispace0,
    )(i)
}

pub fn parse_number(line: &str) -> Result<BigUint, InputError> {
    parse_nice(line, parse_padded_biguint::<ErrorTree<Span>>)
}

/// `n` followed by a claimed answer, separated by any whitespace.
pub fn parse_claim(input: &str) -> Result<(BigUint, BigUint), InputError> {
    parse_nice(input, parse_claim_pair::<ErrorTree<Span>>)
}
