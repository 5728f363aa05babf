use std::{collections::VecDeque, io::BufRead, io::Write, str::FromStr};

use held_karp_core::{CostMatrix, Error, Location, Problem, Result};
use held_karp_solver::config::MAX_SUPPORTED_LOCATIONS;

/// Whitespace-separated tokens pulled from a reader one line at a time,
/// so prompts can be interleaved with interactive input.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self, what: &str) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(Error::invalid_input(format!(
                    "unexpected end of input while reading {what}"
                )));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    pub fn parse<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let token = self.next_token(what)?;
        token
            .parse()
            .map_err(|_| Error::invalid_input(format!("cannot parse {what} from '{token}'")))
    }
}

/// Reads `n`, then `n * n` costs row by row, then the 1-based start location.
///
/// Prompts go to `prompt`; pass [`std::io::sink`] when stdin is not a terminal.
/// `inf` marks a missing edge. Counts above [`MAX_SUPPORTED_LOCATIONS`] are
/// rejected before any costs are read.
pub fn read_problem<R: BufRead, W: Write>(reader: R, prompt: &mut W) -> Result<Problem> {
    let mut tokens = TokenReader::new(reader);

    write!(prompt, "Enter the number of locations in the delivery route: ")?;
    prompt.flush()?;
    let size: usize = tokens.parse("the number of locations")?;
    if size == 0 {
        return Err(Error::invalid_dimension("at least one location is required"));
    }
    if size > MAX_SUPPORTED_LOCATIONS {
        return Err(Error::TooManyLocations {
            size,
            limit: MAX_SUPPORTED_LOCATIONS,
        });
    }

    writeln!(prompt, "Enter the distance matrix (space-separated row-wise):")?;
    let mut costs = Vec::with_capacity(size * size);
    for i in 1..=size {
        for j in 1..=size {
            write!(prompt, "Enter time for [{i}][{j}]: ")?;
            prompt.flush()?;
            costs.push(tokens.parse::<f64>(&format!("cost [{i}][{j}]"))?);
        }
    }
    let matrix = CostMatrix::from_flat(size, costs)?;

    write!(prompt, "Enter the starting location (1 to {size}): ")?;
    prompt.flush()?;
    let start = Location::checked(tokens.parse("the starting location")?, size)?;

    Ok(Problem::new(matrix, start))
}

#[cfg(test)]
mod tests {
    use std::io::{sink, Cursor};

    use super::*;

    #[test]
    fn reads_tokens_across_arbitrary_line_breaks() {
        let input = "3\n0 1 2\n1 0\n3 2 3 0\n2\n";
        let problem = read_problem(Cursor::new(input), &mut sink()).unwrap();
        assert_eq!(problem.matrix.size(), 3);
        assert_eq!(problem.matrix.cost(1, 2), 3.0);
        assert_eq!(problem.matrix.cost(2, 1), 3.0);
        assert_eq!(problem.start, Location::new(2));
    }

    #[test]
    fn prompts_with_one_based_indices() {
        let mut prompt = Vec::new();
        read_problem(Cursor::new("2 0 5 5 0 1"), &mut prompt).unwrap();
        let prompt = String::from_utf8(prompt).unwrap();
        assert!(prompt.starts_with("Enter the number of locations in the delivery route: "));
        assert!(prompt.contains("Enter time for [1][1]: "));
        assert!(prompt.contains("Enter time for [2][2]: "));
        assert!(prompt.ends_with("Enter the starting location (1 to 2): "));
    }

    #[test]
    fn inf_marks_a_missing_edge() {
        let problem = read_problem(Cursor::new("2 0 inf 1 0 1"), &mut sink()).unwrap();
        assert!(!problem.matrix.is_complete());
    }

    #[test]
    fn reports_truncated_and_malformed_input() {
        let err = read_problem(Cursor::new("2 0 5 5"), &mut sink()).unwrap_err();
        assert!(err.to_string().contains("cost [2][2]"));

        let err = read_problem(Cursor::new("two"), &mut sink()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn rejects_huge_location_count_before_reading_costs() {
        assert!(matches!(
            read_problem(Cursor::new("5000000000\n"), &mut sink()),
            Err(Error::TooManyLocations { .. })
        ));
        assert!(matches!(
            read_problem(Cursor::new("200000\n"), &mut sink()),
            Err(Error::TooManyLocations { size: 200_000, limit: MAX_SUPPORTED_LOCATIONS })
        ));
    }

    #[test]
    fn rejects_zero_locations_and_bad_start() {
        assert!(matches!(
            read_problem(Cursor::new("0"), &mut sink()),
            Err(Error::InvalidDimension(_))
        ));
        assert!(matches!(
            read_problem(Cursor::new("1 0 2"), &mut sink()),
            Err(Error::InvalidStart { start: 2, size: 1 })
        ));
    }
}
