use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use twosat::cnf::dimacs::{ClauseFile, parse_dimacs_reader, to_dimacs};
use twosat::cnf::generate::{GenOptions, generate_random_2sat};
use twosat::solver::varisat::varisat_is_sat;
use twosat::{Outcome, TwoSatProblem};

#[derive(Debug, Parser)]
#[command(name = "twosat")]
#[command(about = "2-SAT solver based on strongly connected components")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Decide a formula and print a model when one exists
    Solve {
        path: String,
        #[arg(long)]
        cross_check: bool,
        #[arg(long)]
        dump_graph: bool,
        #[arg(long)]
        dump_sccs: bool,
    },
    /// Print graph and component sizes
    Stats { path: String },
    /// Write a random 2-SAT instance
    Gen {
        #[arg(long)]
        vars: u32,
        #[arg(long)]
        clauses: usize,
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Do not plant a model; the instance may be unsatisfiable
        #[arg(long)]
        unsat_allowed: bool,
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Cmd::Solve {
            path,
            cross_check,
            dump_graph,
            dump_sccs,
        } => solve_cmd(&path, cross_check, dump_graph, dump_sccs)?,
        Cmd::Stats { path } => stats_cmd(&path)?,
        Cmd::Gen {
            vars,
            clauses,
            seed,
            unsat_allowed,
            out,
        } => gen_cmd(vars, clauses, seed, !unsat_allowed, &out)?,
    }
    Ok(())
}

fn load(path: &str) -> Result<(ClauseFile, TwoSatProblem)> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path))?;
    let parsed = parse_dimacs_reader(BufReader::new(file))
        .with_context(|| format!("malformed clause file {}", path))?;
    let problem = TwoSatProblem::from_clause_file(&parsed);
    Ok((parsed, problem))
}

fn solve_cmd(path: &str, cross_check: bool, dump_graph: bool, dump_sccs: bool) -> Result<()> {
    let (parsed, mut problem) = load(path)?;

    if dump_graph {
        for (from, to) in problem.graph().edges() {
            println!("c edge {} -> {}", from, to);
        }
    }
    if dump_sccs {
        for (idx, component) in problem.solve().components().iter().enumerate() {
            let lits = component
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!("c scc {}: {}", idx, lits);
        }
    }

    let outcome = problem.outcome();
    if cross_check {
        let expected = varisat_is_sat(problem.builder().clauses())?;
        if expected != outcome.is_sat() {
            bail!(
                "cross-check failed: scc says {}, varisat says {}",
                outcome.is_sat(),
                expected
            );
        }
        info!("cross-check with varisat agrees");
    }

    match outcome {
        Outcome::Sat(assignment) => {
            println!("SATISFIABLE");
            if let Some(declared) = parsed.declared_vars {
                if declared > assignment.num_vars() {
                    info!(declared, seen = assignment.num_vars(), "trailing declared variables are free");
                }
            }
            println!("{}", assignment.to_bits(assignment.num_vars()));
        }
        Outcome::Unsat { var } => {
            info!(var, "variable and its negation share a component");
            println!("UNSATISFIABLE");
        }
    }
    Ok(())
}

fn stats_cmd(path: &str) -> Result<()> {
    let (parsed, mut problem) = load(path)?;
    let stats = problem.stats();
    let sccs = problem.solve();
    println!(
        "vars={} clauses={} literals={} implications={}",
        parsed.num_vars(),
        stats.num_clauses,
        stats.num_literals,
        stats.num_implications
    );
    println!(
        "components={} largest_component={}",
        sccs.len(),
        sccs.largest()
    );
    Ok(())
}

fn gen_cmd(vars: u32, clauses: usize, seed: u64, planted: bool, out: &str) -> Result<()> {
    let inst = generate_random_2sat(GenOptions {
        vars,
        clauses,
        seed,
        planted,
    })?;
    std::fs::write(out, to_dimacs(&inst.file))
        .with_context(|| format!("failed to write {}", out))?;
    println!(
        "GEN: wrote {} | vars={} clauses={} planted={}",
        out, vars, clauses, planted
    );
    Ok(())
}
