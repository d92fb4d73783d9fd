/*!
Writing the result of a solve to a file.

The result file of some input `problem.cnf` (or `problem.cnf.xz`) is `problem.sat`, and for any other input the suffix `.sat` is appended.

A satisfiable result is written as:

```none
s SATISFIABLE
v 1 -2 3 0
```

And an unsatisfiable result as `s UNSATISFIABLE`.

Before a satisfiable result is written the valuation is checked against every original clause, and a valuation which fails to satisfy some clause is an error.

```rust
# use portfolio_sat::io::result::{format_result, result_path};
# use portfolio_sat::portfolio::Verdict;
# use std::path::{Path, PathBuf};
let clauses = vec![vec![1, 2], vec![-1]];
let verdict = Verdict::Satisfiable(vec![-1, 2]);

assert_eq!(format_result(&verdict, &clauses), Ok(String::from("s SATISFIABLE\nv -1 2 0\n")));
assert_eq!(result_path(Path::new("f/uf20.cnf")), PathBuf::from("f/uf20.sat"));
```
*/

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    misc::log::targets,
    portfolio::Verdict,
    structures::clause::{CClause, Clause},
    types::err::{self, ErrorKind},
};

/// The path of the result file for `input`.
pub fn result_path(input: &Path) -> PathBuf {
    let name = input.to_string_lossy();
    for suffix in [".cnf.xz", ".cnf"] {
        if let Some(stem) = name.strip_suffix(suffix) {
            return PathBuf::from(format!("{stem}.sat"));
        }
    }
    PathBuf::from(format!("{name}.sat"))
}

/// The contents of a result file for `verdict`, checked against `original` clauses.
pub fn format_result(verdict: &Verdict, original: &[CClause]) -> Result<String, ErrorKind> {
    match verdict {
        Verdict::Satisfiable(valuation) => {
            if let Some(index) = original
                .iter()
                .position(|clause| !clause.satisfied_by(valuation))
            {
                log::error!(target: targets::PORTFOLIO, "Valuation fails to satisfy original clause {index}");
                return Err(err::ErrorKind::from(err::WriteError::Unverified(index)));
            }
            Ok(format!("s SATISFIABLE\nv {}\n", valuation.as_dimacs(true)))
        }

        Verdict::Unsatisfiable => Ok(String::from("s UNSATISFIABLE\n")),
    }
}

/// Writes the result file for `verdict` to `path`.
pub fn write_result(path: &Path, verdict: &Verdict, original: &[CClause]) -> Result<(), ErrorKind> {
    let contents = format_result(verdict, original)?;

    let mut file = File::create(path).map_err(|_| err::WriteError::File)?;
    file.write_all(contents.as_bytes())
        .map_err(|_| err::WriteError::File)?;

    log::info!(target: targets::PORTFOLIO, "Result written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_paths() {
        assert_eq!(result_path(Path::new("a.cnf")), PathBuf::from("a.sat"));
        assert_eq!(result_path(Path::new("dir/a.cnf.xz")), PathBuf::from("dir/a.sat"));
        assert_eq!(result_path(Path::new("a.dimacs")), PathBuf::from("a.dimacs.sat"));
    }

    #[test]
    fn unverified_valuation_is_an_error() {
        let clauses = vec![vec![1, 2], vec![-2, 3]];
        let verdict = Verdict::Satisfiable(vec![1, 2, -3]);
        assert_eq!(
            format_result(&verdict, &clauses),
            Err(ErrorKind::from(err::WriteError::Unverified(1)))
        );
    }

    #[test]
    fn unsatisfiable_needs_no_valuation() {
        assert_eq!(
            format_result(&Verdict::Unsatisfiable, &[vec![1], vec![-1]]),
            Ok(String::from("s UNSATISFIABLE\n"))
        );
    }
}
