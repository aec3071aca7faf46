use std::{
    error,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader},
    num::ParseIntError,
    path::Path,
};

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    InvalidIntText(usize, String, ParseIntError),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
            Error::InvalidIntText(line_no, s, _) => write!(
                f,
                "Invalid text({}) at line #{}, expect a signed integer",
                s, line_no
            ),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(ioe) => Some(ioe),
            Error::InvalidIntText(_, _, pe) => Some(pe),
        }
    }
}

pub fn read_ints<P: AsRef<Path>>(path: P) -> Result<Vec<i64>, Error> {
    let file = File::open(path).map_err(Error::IOError)?;
    read_ints_from(BufReader::new(file))
}

pub fn read_ints_from<R: BufRead>(reader: R) -> Result<Vec<i64>, Error> {
    let ints = reader
        .lines()
        .enumerate()
        .map(|(ind, l)| {
            l.map_err(Error::IOError).and_then(|s| {
                let text = s.trim_end_matches(['\r', '\n']);
                text.parse::<i64>()
                    .map_err(|e| Error::InvalidIntText(ind + 1, text.to_string(), e))
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;
    log::debug!("Read {} integers from input.", ints.len());

    Ok(ints)
}
