use std::io::BufRead;

use crate::{
    misc::log::targets,
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// A formula read from some DIMACS input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    pub clauses: Vec<CClause>,

    /// The greater of the atom count of the problem line and the greatest atom of any clause.
    pub atom_count: Atom,

    /// The atom and clause counts stated by the problem line, if present.
    pub expected: Option<(usize, usize)>,
}

/// Reads a formula in DIMACS form.
///
/// ```rust
/// # use portfolio_sat::builder::dimacs::parse_dimacs;
/// # use std::io::Write;
/// let mut dimacs = vec![];
/// let _ = dimacs.write(b"
/// c An example
/// p cnf 4 4
///  1  2       0
///  1 -2 1     0
/// -1  2
///        3 -4 0
/// -1 -2  0
/// ");
///
/// let formula = parse_dimacs(dimacs.as_slice()).expect("well formed");
///
/// assert_eq!(formula.atom_count, 4);
/// assert_eq!(formula.expected, Some((4, 4)));
/// assert_eq!(formula.clauses, vec![vec![1, 2], vec![1, -2], vec![-1, 2, 3, -4], vec![-1, -2]]);
/// ```
///
/// - Lines beginning with `c` are comments.
/// - A clause is terminated by `0`, and may span lines.
/// - A line beginning with `%` ends the formula.
/// - Repeated literals in a clause are dropped.
/// - A clause without a terminating `0` at the end of the input is kept.
pub fn parse_dimacs(mut reader: impl BufRead) -> Result<Formula, ErrorKind> {
    let mut formula = Formula::default();
    let mut buffer = String::with_capacity(1024);
    let mut clause_buffer: CClause = Vec::default();

    let mut line_counter = 0;
    let mut in_preamble = true;

    'line_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter))),
        }

        match buffer.trim_start().chars().next() {
            None | Some('c') => continue,

            Some('%') => break 'line_loop,

            Some('p') if in_preamble => {
                formula.expected = Some(problem_line(&buffer)?);
                in_preamble = false;
                continue;
            }

            _ => in_preamble = false,
        }

        for item in buffer.split_whitespace() {
            let parsed = match item.parse::<i64>() {
                Ok(int) => int,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Literal(line_counter))),
            };

            match parsed {
                0 => formula.clauses.push(std::mem::take(&mut clause_buffer)),

                _ if parsed.unsigned_abs() > ATOM_MAX as u64 => {
                    return Err(err::ErrorKind::from(err::ParseError::Literal(line_counter)))
                }

                _ => {
                    let literal = CLiteral::new(parsed.unsigned_abs() as Atom, parsed > 0);
                    if !clause_buffer.contains(&literal) {
                        clause_buffer.push(literal);
                    }
                }
            }
        }
    }

    if !clause_buffer.is_empty() {
        formula.clauses.push(clause_buffer);
    }

    let seen_max = formula
        .clauses
        .iter()
        .flatten()
        .map(|literal| literal.atom())
        .max()
        .unwrap_or(0);
    let stated = formula
        .expected
        .map(|(atoms, _)| atoms.min(ATOM_MAX as usize) as Atom)
        .unwrap_or(0);
    formula.atom_count = seen_max.max(stated);

    if let Some((atoms, clauses)) = formula.expected {
        if clauses != formula.clauses.len() || atoms < seen_max as usize {
            log::warn!(target: targets::PREPROCESSING,
                "Expected {atoms} atoms and {clauses} clauses, read {seen_max} atoms and {} clauses",
                formula.clauses.len()
            );
        }
    }

    Ok(formula)
}

/// The atom and clause counts of a problem line `p cnf <atoms> <clauses>`.
fn problem_line(line: &str) -> Result<(usize, usize), ErrorKind> {
    let mut details = line.split_whitespace();

    if details.nth(1) != Some("cnf") {
        return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification));
    }

    let mut count = || -> Result<usize, ErrorKind> {
        match details.next().map(str::parse::<usize>) {
            Some(Ok(count)) => Ok(count),
            _ => Err(err::ErrorKind::from(err::ParseError::ProblemSpecification)),
        }
    };

    let atoms = count()?;
    let clauses = count()?;
    Ok((atoms, clauses))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_clause_is_kept() {
        let formula = parse_dimacs("p cnf 1 2\n1 0\n0\n".as_bytes()).expect("well formed");
        assert_eq!(formula.clauses, vec![vec![1], vec![]]);
    }

    #[test]
    fn percent_ends_the_formula() {
        let formula = parse_dimacs("p cnf 3 1\n1 -3 0\n%\n0\n2 0\n".as_bytes()).expect("well formed");
        assert_eq!(formula.clauses, vec![vec![1, -3]]);
        assert_eq!(formula.atom_count, 3);
    }

    #[test]
    fn stated_atoms_may_exceed_those_seen() {
        let formula = parse_dimacs("p cnf 9 1\n1 2 0\n".as_bytes()).expect("well formed");
        assert_eq!(formula.atom_count, 9);
    }

    #[test]
    fn bad_problem_line() {
        assert_eq!(
            parse_dimacs("p dnf 2 1\n".as_bytes()),
            Err(ErrorKind::from(err::ParseError::ProblemSpecification))
        );
        assert_eq!(
            parse_dimacs("p cnf two 1\n".as_bytes()),
            Err(ErrorKind::from(err::ParseError::ProblemSpecification))
        );
    }

    #[test]
    fn bad_literal_reports_line() {
        assert_eq!(
            parse_dimacs("p cnf 2 1\n1 2 0\n1 x 0\n".as_bytes()),
            Err(ErrorKind::from(err::ParseError::Literal(3)))
        );
    }
}
