/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use nom::{
    self,
    branch::alt,
    character::complete::{digit0, digit1, one_of, space0},
    combinator::{map, map_res, not, opt, recognize, value, verify},
    error::ErrorKind,
    multi::{fold_many0, fold_many1},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

use crate::prefix::{FracPrefix, Prefix, SiPrefix};
use crate::shape::{Atom, Shape};
use crate::{
    AtomicUnit, BaseDimension, CurrentUnit, Dimension, DimensionlessUnit,
    LengthUnit, Magnitude, MassUnit, ScientificValue, TemperatureUnit,
    TimeUnit, Unit, UnitError, VolumeUnit, NEUTRAL_UNIT,
};

/// Powers beyond this are rejected, since they expand to a product
/// with one factor per unit of power.
const MAX_POWER: i32 = 16;

/// Parses a unit expression such as `kg⋅m/s^2` or `1/(m⋅s)`.
pub fn parse_unit(input: &str) -> Result<Unit, UnitError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(NEUTRAL_UNIT);
    }
    complete(shape(unit, input))
}

/// Parses a dimension expression such as `L/T` or `M⋅L/T²`.
pub fn parse_dimension(input: &str) -> Result<Dimension, UnitError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Dimension::neutral());
    }
    complete(shape(base_dimension, input))
}

/// Parses a value: a number, optionally followed by a unit
/// expression (`10 m/s`, `2.5e3 kg`, `42`).
pub fn parse_value<M: Magnitude>(
    input: &str,
) -> Result<ScientificValue<M>, UnitError> {
    let (number, unit) = complete(tuple((
        terminated(number, space0),
        opt(|input| shape(unit, input)),
    ))(input.trim()))?;
    Ok(ScientificValue::new(
        M::parse_magnitude(number)?,
        unit.unwrap_or(NEUTRAL_UNIT),
    ))
}

fn complete<O>(result: IResult<&str, O>) -> Result<O, UnitError> {
    match result {
        Ok(("", o)) => Ok(o),
        Ok((r, _)) => {
            Err(UnitError::ParseError(format!("Leftover input: {}", r)))
        }
        Err(err) => Err(UnitError::ParseError(format!("{}", err))),
    }
}

/* Shape grammar, shared by units and dimensions:
 *
 *   shape   := factor (op factor)*      left-associative
 *   factor  := primary power?
 *   primary := '(' shape ')' | atom | '1'
 */

type AtomParser<A> = for<'a> fn(&'a str) -> IResult<&'a str, A>;

#[derive(Clone, Copy)]
enum Op {
    Times,
    Per,
}

fn shape<A: Atom>(
    atom: AtomParser<A>,
    input: &str,
) -> IResult<&str, Shape<A>> {
    let (input, first) = factor(atom, input)?;
    let mut first = Some(first);
    fold_many0(
        pair(
            delimited(space0, operator, space0),
            |input| factor(atom, input),
        ),
        move || first.take().unwrap_or_else(Shape::neutral),
        |acc, (op, rhs)| match op {
            Op::Times => acc.x(rhs),
            Op::Per => acc.per(rhs),
        },
    )(input)
}

fn operator(input: &str) -> IResult<&str, Op> {
    alt((
        value(Op::Times, one_of("*·⋅")),
        value(Op::Per, char('/')),
    ))(input)
}

fn factor<A: Atom>(
    atom: AtomParser<A>,
    input: &str,
) -> IResult<&str, Shape<A>> {
    let (input, base) = primary(atom, input)?;
    let (input, power) = opt(power)(input)?;
    match power {
        Some(n) => Ok((input, raise(base, n))),
        None => Ok((input, base)),
    }
}

fn primary<A: Atom>(
    atom: AtomParser<A>,
    input: &str,
) -> IResult<&str, Shape<A>> {
    alt((
        delimited(
            terminated(char('('), space0),
            |input| shape(atom, input),
            preceded(space0, char(')')),
        ),
        map(atom, Shape::Atomic),
        value(Shape::neutral(), terminated(char('1'), not(digit1))),
    ))(input)
}

fn raise<A: Atom>(base: Shape<A>, n: i32) -> Shape<A> {
    let product =
        (1..n.abs()).fold(base.clone(), |acc, _| acc.x(base.clone()));
    match n {
        0 => Shape::neutral(),
        n if n < 0 => product.reciprocal(),
        _ => product,
    }
}

fn power(input: &str) -> IResult<&str, i32> {
    verify(alt((hat_power, superscript_power)), |n: &i32| {
        n.abs() <= MAX_POWER
    })(input)
}

fn hat_power(input: &str) -> IResult<&str, i32> {
    let (input, (s, n)) = preceded(
        char('^'),
        tuple((opt(sign), map_res(digit1, |n: &str| n.parse::<i32>()))),
    )(input)?;
    Ok((input, s.unwrap_or(1) * n))
}

fn superscript_power(input: &str) -> IResult<&str, i32> {
    let (input, (s, n)) =
        tuple((opt(superscript_sign), superscript_digit1))(input)?;
    Ok((input, s.unwrap_or(1) * n))
}

fn superscript_sign(input: &str) -> IResult<&str, i32> {
    alt((value(-1, char('⁻')), value(1, char('⁺'))))(input)
}

fn superscript_digit1(input: &str) -> IResult<&str, i32> {
    fold_many1(
        superscript_digit,
        || 0,
        |n: i32, i| n.saturating_mul(10).saturating_add(i),
    )(input)
}

fn superscript_digit(input: &str) -> IResult<&str, i32> {
    alt((
        value(0, char('⁰')),
        value(1, char('¹')),
        value(2, char('²')),
        value(3, char('³')),
        value(4, char('⁴')),
        value(5, char('⁵')),
        value(6, char('⁶')),
        value(7, char('⁷')),
        value(8, char('⁸')),
        value(9, char('⁹')),
    ))(input)
}

fn sign(input: &str) -> IResult<&str, i32> {
    alt((value(-1, char('-')), value(1, char('+'))))(input)
}

/// A decimal number in plain or scientific notation.
fn number(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        digit1,
        opt(pair(char('.'), digit0)),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

/* Macro's used to build the unit parser. */

macro_rules! units {
    ( $input:ident, [ $($unit:expr, $parser:expr),+ ] ) => {
	$(match terminated($parser, unit_end)($input) {
	    Err(nom::Err::Error(_)) => {},
	    Ok((input, _)) => return Ok((input, $unit)),
	    Err(err) => return Err(err)
	})*;
	return Err(nom::Err::Error(nom::error::Error {
	    input: $input,
	    code: ErrorKind::Alt,
	}))
    }
}

/// Parser for atomic units.
pub fn unit(input: &str) -> IResult<&str, AtomicUnit> {
    alt((
        nonprefixed_unit,
        prefixed::<SiPrefix>(si_unit),
        prefixed::<FracPrefix>(frac_unit),
    ))(input)
}

fn nonprefixed_unit(input: &str) -> IResult<&str, AtomicUnit> {
    units!(
        input,
        [
            AtomicUnit::Time(TimeUnit::Minute),
            alt((tag("minutes"), tag("minute"), tag("min"))),
            AtomicUnit::Time(TimeUnit::Hour),
            alt((tag("hours"), tag("hour"), tag("h"))),
            AtomicUnit::Time(TimeUnit::Day),
            alt((tag("days"), tag("day"))),
            AtomicUnit::Time(TimeUnit::Week),
            alt((tag("weeks"), tag("week"))),
            AtomicUnit::Length(LengthUnit::Inch),
            tag("in"),
            AtomicUnit::Length(LengthUnit::Foot),
            tag("ft"),
            AtomicUnit::Length(LengthUnit::Yard),
            tag("yd"),
            AtomicUnit::Length(LengthUnit::Mile),
            tag("mi"),
            AtomicUnit::Mass(MassUnit::Pound),
            tag("lb"),
            AtomicUnit::Mass(MassUnit::Ounce),
            tag("oz"),
            AtomicUnit::Mass(MassUnit::Stone),
            tag("st"),
            AtomicUnit::Mass(MassUnit::LongTon),
            tag("ton_uk"),
            AtomicUnit::Mass(MassUnit::ShortTon),
            tag("ton_us"),
            AtomicUnit::Mass(MassUnit::Tonne),
            char('t'),
            AtomicUnit::Volume(VolumeUnit::ImperialGallon),
            tag("gal_imp"),
            AtomicUnit::Volume(VolumeUnit::UsGallon),
            tag("gal_us"),
            AtomicUnit::Volume(VolumeUnit::ImperialPint),
            tag("pt_imp"),
            AtomicUnit::Volume(VolumeUnit::UsPint),
            tag("pt_us"),
            AtomicUnit::Temperature(TemperatureUnit::Kelvin),
            char('K'),
            AtomicUnit::Temperature(TemperatureUnit::Celsius),
            tag("°C"),
            AtomicUnit::Temperature(TemperatureUnit::Fahrenheit),
            tag("°F"),
            AtomicUnit::Dimensionless(DimensionlessUnit::Percent),
            char('%'),
            AtomicUnit::Dimensionless(DimensionlessUnit::Permille),
            char('‰')
        ]
    );
}

fn si_unit(input: &str, prefix: SiPrefix) -> IResult<&str, AtomicUnit> {
    units!(
        input,
        [
            AtomicUnit::Length(LengthUnit::Meter(prefix)),
            char('m'),
            AtomicUnit::Mass(MassUnit::Gram(prefix)),
            char('g'),
            AtomicUnit::Current(CurrentUnit::Ampere(prefix)),
            char('A'),
            AtomicUnit::Volume(VolumeUnit::Liter(prefix)),
            char('L')
        ]
    );
}

fn frac_unit(input: &str, prefix: FracPrefix) -> IResult<&str, AtomicUnit> {
    units!(input, [AtomicUnit::Time(TimeUnit::Second(prefix)), char('s')]);
}

/// Tries every prefix of the scale, longest symbol first, and falls
/// back to the unprefixed unit. The unit parser is retried after
/// each prefix so that a failed prefix does not consume input.
fn prefixed<P: Prefix + Copy>(
    unit: fn(&str, P) -> IResult<&str, AtomicUnit>,
) -> impl Fn(&str) -> IResult<&str, AtomicUnit> {
    move |input| {
        let mut scale = P::SCALE
            .iter()
            .filter(|p| !p.prefix().is_empty())
            .collect::<Vec<_>>();
        scale.sort_by_key(|p| std::cmp::Reverse(p.prefix().len()));
        for prefix in scale {
            let rest = match prefix.prefix() {
                "µ" => input.strip_prefix('µ').or(input.strip_prefix('μ')),
                symbol => input.strip_prefix(symbol),
            };
            if let Some(rest) = rest {
                match unit(rest, *prefix) {
                    Err(nom::Err::Error(_)) => {}
                    res => return res,
                }
            }
        }
        unit(input, P::UNIT)
    }
}

/// Parser for base dimensions.
pub fn base_dimension(input: &str) -> IResult<&str, BaseDimension> {
    terminated(
        alt((
            value(BaseDimension::Length, char('L')),
            value(BaseDimension::Mass, char('M')),
            value(BaseDimension::Time, char('T')),
            value(BaseDimension::Temperature, char('Θ')),
            value(BaseDimension::Current, char('I')),
            value(BaseDimension::Volume, char('V')),
        )),
        unit_end,
    )(input)
}

/* Verify that all unit characters have been consumed. */
fn unit_end(input: &str) -> IResult<&str, ()> {
    match input.chars().next().map_or(false, |c| c.is_alphabetic()) {
        true => Err(nom::Err::Error(nom::error::Error {
            input,
            code: ErrorKind::Eof,
        })),
        false => Ok((input, ())),
    }
}

/* Monomorphised versions of char and tag. */

fn char<'r>(t: char) -> impl Fn(&'r str) -> IResult<&'r str, char> {
    nom::character::complete::char(t)
}

fn tag<'r>(t: &'static str) -> impl Fn(&'r str) -> IResult<&'r str, &'r str> {
    nom::bytes::complete::tag(t)
}
