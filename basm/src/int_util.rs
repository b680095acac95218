use pest::iterators::Pair;

use crate::error::{Error, Result};
use crate::parser::Rule;

/// Extracts a signed integer from an `int` pair, honouring the radix prefix
/// (`0x`, `0o`, `0b`) and an optional leading minus.
pub fn process_int(pair: Pair<Rule>) -> Result<i64> {
    let mut inner = pair.into_inner();
    let first = inner.next().unwrap();
    if first.as_rule() == Rule::neg {
        Ok(-process_uint(inner.next().unwrap())?)
    } else {
        process_uint(first)
    }
}

fn process_uint(pair: Pair<Rule>) -> Result<i64> {
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::bin_uint => process_num_lit(inner.into_inner().next().unwrap(), 2),
        Rule::oct_uint => process_num_lit(inner.into_inner().next().unwrap(), 8),
        Rule::hex_uint => process_num_lit(inner.into_inner().next().unwrap(), 16),
        Rule::dec_uint => process_num_lit(inner, 10),
        _ => unreachable!(),
    }
}

fn process_num_lit(pair: Pair<Rule>, base: u32) -> Result<i64> {
    let span = pair.as_span();
    i64::from_str_radix(span.as_str(), base).map_err(|_| Error::bad_immediate(&span, span.as_str()))
}
