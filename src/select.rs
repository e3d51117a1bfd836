use crate::error::SelectionError;
use chrono::NaiveDate;
use nom::{
    character::complete::{digit1, multispace0, multispace1},
    combinator::{all_consuming, map_res},
    multi::separated_list1,
    sequence::delimited,
    IResult,
};
use std::collections::HashSet;

/// The user's resolved choices: a commodity subset, a contiguous
/// inclusive date range, and a location subset. Subsets keep the order
/// the user typed them in.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub commodities: Vec<String>,
    pub dates: Vec<NaiveDate>,
    pub locations: Vec<String>,
}

/// Grammar for one selection line: whitespace-separated unsigned
/// integers, nothing else.
fn index_list(input: &str) -> IResult<&str, Vec<usize>> {
    all_consuming(delimited(
        multispace0,
        separated_list1(multispace1, map_res(digit1, str::parse::<usize>)),
        multispace0,
    ))(input)
}

/// Parse a raw selection line into indices. Signs, separators other
/// than whitespace, and values too large for usize all reject the whole
/// line.
pub fn parse_indices(input: &str) -> Result<Vec<usize>, SelectionError> {
    match index_list(input) {
        Ok((_, indices)) => Ok(indices),
        Err(_) => Err(SelectionError::Malformed(input.trim().to_string())),
    }
}

/// Resolve an index line against a domain listing.
///
/// Duplicate indices collapse to their first occurrence, so the result
/// has at most as many items as the line has tokens and never repeats a
/// value. Order follows the line, not the domain.
pub fn resolve_subset<T: Clone>(input: &str, domain: &[T]) -> Result<Vec<T>, SelectionError> {
    let indices = parse_indices(input)?;
    let mut seen: HashSet<usize> = HashSet::new();
    let mut picked = Vec::with_capacity(indices.len());
    for index in indices {
        if index >= domain.len() {
            return Err(SelectionError::OutOfRange {
                index,
                len: domain.len(),
            });
        }
        if seen.insert(index) {
            picked.push(domain[index].clone());
        }
    }
    Ok(picked)
}

/// Resolve a start/end index pair into the inclusive run of dates it
/// spans. Exactly two indices, start not after end; equal indices give
/// a single-day range.
pub fn resolve_date_range(
    input: &str,
    dates: &[NaiveDate],
) -> Result<Vec<NaiveDate>, SelectionError> {
    let indices = parse_indices(input)?;
    if indices.len() != 2 {
        return Err(SelectionError::NotAPair {
            found: indices.len(),
        });
    }
    let (start, end) = (indices[0], indices[1]);
    for index in [start, end] {
        if index >= dates.len() {
            return Err(SelectionError::OutOfRange {
                index,
                len: dates.len(),
            });
        }
    }
    if start > end {
        return Err(SelectionError::BackwardsRange { start, end });
    }
    Ok(dates[start..=end].to_vec())
}
