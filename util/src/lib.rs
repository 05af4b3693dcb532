use std::io::{self, BufRead, Read};

use miette::GraphicalReportHandler;
use nom::{
    character::complete::{digit1, multispace0},
    combinator::map_res,
    error::{FromExternalError, ParseError},
    sequence::delimited,
    IResult,
};
use nom_locate::LocatedSpan;
use nom_supreme::{
    error::{BaseErrorKind, ErrorTree, GenericErrorTree},
    final_parser::final_parser,
};
use num::{bigint::ParseBigIntError, BigUint};

pub type Span<'a> = LocatedSpan<&'a str>;

type ErrorKind = BaseErrorKind<&'static str, Box<dyn std::error::Error + Send + Sync + 'static>>;

#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("no input")]
    Empty,

    #[error("unable to read input")]
    Io(#[from] io::Error),

    #[error("bad input\n{0}")]
    Malformed(String),
}

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
#[error("bad input")]
struct BadInput<'a> {
    #[source_code]
    src: &'a str,

    #[label("{kind}")]
    bad_bit: miette::SourceSpan,

    kind: BaseErrorKind<&'a str, Box<dyn std::error::Error + Send + Sync>>,
}

/// Unsigned decimal integer of any length. Signs are not accepted.
pub fn parse_biguint<'a, E>(i: Span<'a>) -> IResult<Span<'a>, BigUint, E>
where
    E: ParseError<Span<'a>> + FromExternalError<Span<'a>, ParseBigIntError>,
{
    map_res(digit1, |i: Span<'a>| i.fragment().parse::<BigUint>())(i)
}

/// [`parse_biguint`] with optional whitespace on both sides.
pub fn parse_padded_biguint<'a, E>(i: Span<'a>) -> IResult<Span<'a>, BigUint, E>
where
    E: ParseError<Span<'a>> + FromExternalError<Span<'a>, ParseBigIntError>,
{
    delimited(multispace0, parse_biguint, multispace0)(i)
}

/// Runs `parse_fun` over the whole of `l`. Leftover input is an error, and
/// failures come back with a rendered report pointing at the bad spot.
pub fn parse_nice<'a, T, F>(l: &'a str, parse_fun: F) -> Result<T, InputError>
where
    F: FnMut(Span<'a>) -> IResult<Span<'a>, T, ErrorTree<Span<'a>>>,
{
    let line_span = Span::new(l);
    let line: Result<_, ErrorTree<Span>> = final_parser(parse_fun)(line_span);
    line.map_err(|e| InputError::Malformed(render_bad_input(l, e)))
}

fn failure_location(e: ErrorTree<Span>) -> Option<(Span, ErrorKind)> {
    match e {
        GenericErrorTree::Base { location, kind } => Some((location, kind)),
        GenericErrorTree::Stack { base, .. } => failure_location(*base),
        GenericErrorTree::Alt(alts) => alts
            .into_iter()
            .filter_map(failure_location)
            .max_by_key(|(location, _)| location.location_offset()),
    }
}

fn render_bad_input(src: &str, e: ErrorTree<Span>) -> String {
    let Some((location, kind)) = failure_location(e) else {
        return "no parse error location".to_string();
    };

    let offset = location.location_offset();
    let err = BadInput {
        src,
        bad_bit: miette::SourceSpan::new(offset.into(), 0.into()),
        kind,
    };

    let mut s = String::new();
    match GraphicalReportHandler::new().render_report(&mut s, &err) {
        Ok(()) => s,
        Err(_) => format!("{err}: {} at offset {offset}", err.kind),
    }
}

/// First line of `reader`, without its line terminator.
pub fn read_first_line(reader: impl BufRead) -> Result<String, InputError> {
    let line = reader.lines().next().ok_or(InputError::Empty)??;

    Ok(line)
}

pub fn read_input_as_string(mut reader: impl Read) -> Result<String, InputError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;

    Ok(input)
}
