use anyhow::{Result, bail};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::dimacs::ClauseFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenOptions {
    pub vars: u32,
    pub clauses: usize,
    pub seed: u64,
    pub planted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedInstance {
    pub file: ClauseFile,
    /// Model the clauses were planted around, slot 0 unused.
    pub hidden: Option<Vec<bool>>,
}

pub fn generate_random_2sat(opts: GenOptions) -> Result<GeneratedInstance> {
    if opts.vars == 0 && opts.clauses > 0 {
        bail!("cannot generate {} clauses over 0 variables", opts.clauses);
    }
    if opts.vars > i32::MAX as u32 {
        bail!("vars must fit a signed literal, got {}", opts.vars);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(opts.seed);
    let hidden = if opts.planted {
        let mut model = vec![false; opts.vars as usize + 1];
        for slot in model.iter_mut().skip(1) {
            *slot = rng.random::<bool>();
        }
        Some(model)
    } else {
        None
    };

    let mut clauses = Vec::with_capacity(opts.clauses);
    for _ in 0..opts.clauses {
        let mut a = random_lit(&mut rng, opts.vars);
        let mut b = random_lit(&mut rng, opts.vars);
        if let Some(model) = &hidden {
            if !lit_true(a, model) && !lit_true(b, model) {
                // flip one half so the planted model satisfies the clause
                if rng.random::<bool>() {
                    a = -a;
                } else {
                    b = -b;
                }
            }
        }
        clauses.push((a, b));
    }

    Ok(GeneratedInstance {
        file: ClauseFile {
            declared_vars: Some(opts.vars),
            declared_clauses: Some(opts.clauses),
            clauses,
        },
        hidden,
    })
}

fn random_lit(rng: &mut ChaCha8Rng, vars: u32) -> i32 {
    let var = rng.random_range(1..=vars) as i32;
    if rng.random::<bool>() { var } else { -var }
}

fn lit_true(lit: i32, model: &[bool]) -> bool {
    let value = model[lit.unsigned_abs() as usize];
    if lit > 0 { value } else { !value }
}
