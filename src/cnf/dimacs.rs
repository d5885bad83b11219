use std::io::BufRead;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseFile {
    pub declared_vars: Option<u32>,
    pub declared_clauses: Option<usize>,
    pub clauses: Vec<(i32, i32)>,
}

impl ClauseFile {
    pub fn max_var(&self) -> u32 {
        self.clauses
            .iter()
            .map(|&(a, b)| a.unsigned_abs().max(b.unsigned_abs()))
            .max()
            .unwrap_or(0)
    }

    pub fn num_vars(&self) -> u32 {
        self.declared_vars.unwrap_or(0).max(self.max_var())
    }
}

pub fn parse_dimacs_str(s: &str) -> Result<ClauseFile> {
    parse_dimacs_reader(std::io::Cursor::new(s.as_bytes()))
}

pub fn parse_dimacs_reader<R: BufRead>(r: R) -> Result<ClauseFile> {
    let mut file = ClauseFile::default();
    let mut pending = Vec::<i32>::with_capacity(3);
    let mut seen_preamble = false;
    let mut seen_clause_token = false;
    let mut last_line = 0usize;

    for (idx, line) in r.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;
        let line = line?;
        let clean = line.trim();
        if clean.is_empty() || clean.starts_with('c') {
            continue;
        }
        // satlib end marker
        if clean.starts_with('%') {
            break;
        }

        if clean.starts_with('p') {
            if seen_preamble || seen_clause_token {
                return Err(Error::malformed(line_no, "unexpected preamble line"));
            }
            let (vars, clauses) = parse_preamble(clean, line_no)?;
            file.declared_vars = Some(vars);
            // informational only, never used to size anything
            file.declared_clauses = Some(clauses);
            seen_preamble = true;
            continue;
        }

        for token in clean.split_whitespace() {
            let value = token.parse::<i32>().map_err(|_| {
                Error::malformed(line_no, format!("invalid literal token '{}'", token))
            })?;
            seen_clause_token = true;
            pending.push(value);
            if pending.len() == 3 {
                if pending[2] != 0 {
                    return Err(Error::malformed(
                        line_no,
                        "clause is too long or unterminated",
                    ));
                }
                // a zero in either half is forwarded; the solver rejects it
                file.clauses.push((pending[0], pending[1]));
                pending.clear();
            }
        }
    }

    if !pending.is_empty() {
        return Err(Error::malformed(
            last_line,
            format!("unterminated clause at end of input ({} tokens)", pending.len()),
        ));
    }

    Ok(file)
}

fn parse_preamble(line: &str, line_no: usize) -> Result<(u32, usize)> {
    let parts = line.split_whitespace().collect::<Vec<_>>();
    if parts.len() != 4 || parts[0] != "p" {
        return Err(Error::malformed(line_no, "invalid preamble, expected: p cnf V C"));
    }
    if parts[1] != "cnf" {
        return Err(Error::malformed(
            line_no,
            format!("unrecognized format '{}'", parts[1]),
        ));
    }
    let vars = parts[2]
        .parse::<u32>()
        .map_err(|_| Error::malformed(line_no, format!("invalid variable count '{}'", parts[2])))?;
    let clauses = parts[3]
        .parse::<usize>()
        .map_err(|_| Error::malformed(line_no, format!("invalid clause count '{}'", parts[3])))?;
    Ok((vars, clauses))
}

pub fn to_dimacs(file: &ClauseFile) -> String {
    let mut out = String::new();
    out.push_str(&format!("p cnf {} {}\n", file.num_vars(), file.clauses.len()));
    for &(a, b) in &file.clauses {
        out.push_str(&format!("{} {} 0\n", a, b));
    }
    out
}
