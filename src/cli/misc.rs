use std::{fs::File, io::BufReader, path::Path};

use portfolio_sat::{
    builder::dimacs::{parse_dimacs, Formula},
    types::err::{ErrorKind, ParseError},
};

/// Reads a formula from the DIMACS file at `path`, decompressing `.xz` files when built with the `xz` feature.
pub fn load_formula(path: &Path) -> Result<Formula, ErrorKind> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(ErrorKind::from(ParseError::NoFile)),
    };

    match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            parse_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        #[cfg(not(feature = "xz"))]
        Some(extension) if extension == "xz" => {
            println!("c Reading xz compressed files requires the 'xz' feature");
            std::process::exit(1);
        }

        _ => parse_dimacs(BufReader::new(&file)),
    }
}
