//! CLI surface, `clap`-derived, mapping 1:1 onto the original tool's
//! `getopt_long` flags.

use clap::Parser;

use crate::error::FilterError;

/// Filters cubic, 3-edge-connected graphs having Frank number 2.
///
/// Unless `-e` is given, correct output is only guaranteed for graphs that
/// are also cyclically 4-edge-connected. By default, a graph is written to
/// stdout when its Frank number is NOT 2; `-c` reverses this.
///
/// Graphs are read from stdin in graph6 format and written to stdout in
/// graph6 format. If an input graph carries a graph6 header, the output
/// line carries it too.
#[derive(Parser, Debug)]
#[command(name = "frank2", version, about, long_about = None)]
pub struct Cli {
    /// Only perform the heuristic algorithm, i.e. check whether the graph
    /// passes the sufficient condition. Only valid for cyclically
    /// 4-edge-connected graphs.
    #[arg(short = '2', long = "only-heuristic")]
    pub only_heuristic: bool,

    /// Whenever a graph is checked using the exact algorithm, apply the
    /// brute-force pairwise method instead of constraint propagation.
    #[arg(short = 'b', long = "brute-force")]
    pub brute_force: bool,

    /// Reverse the output predicate: emit exactly the graphs that would
    /// otherwise be skipped, and vice versa.
    #[arg(short = 'c', long = "complement")]
    pub complement: bool,

    /// Whenever a graph passes the sufficient condition, double-check the
    /// result by constructing the corresponding orientations.
    #[arg(short = 'd', long = "double-check")]
    pub double_check: bool,

    /// Only perform the exact algorithm, not the heuristic. Required for
    /// graphs that are not cyclically 4-edge-connected.
    #[arg(short = 'e', long = "only-exact")]
    pub only_exact: bool,

    /// Print the two orientations for graphs determined to have Frank
    /// number 2. Implies `-v`.
    #[arg(short = 'p', long = "print-orientation")]
    pub print_orientation: bool,

    /// Parallelize the exact method's search for a single graph. Use with
    /// a `res/mod` argument.
    #[arg(short = 's', long = "single-graph-parallel")]
    pub single_graph: bool,

    /// More detailed diagnostics on stderr.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Split the run into `mod` (not necessarily equal) parts; process only
    /// part `res`. Without `-s`, shards the input stream; with `-s`,
    /// shards the orientation search of the single input graph.
    #[arg(value_name = "res/mod")]
    pub shard: Option<String>,
}

/// Validated configuration built from [`Cli`]. Usage errors abort before
/// any graph is read.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub use_heuristic: bool,
    pub use_exact: bool,
    pub brute_force: bool,
    pub complement: bool,
    pub double_check: bool,
    pub print_orientation: bool,
    pub single_graph: bool,
    pub verbose: bool,
    pub remainder: u64,
    pub modulo: u64,
}

impl Cli {
    pub fn into_options(self) -> Result<Options, FilterError> {
        if self.only_heuristic && self.only_exact {
            return Err(FilterError::Usage("-2 and -e are mutually exclusive".to_string()));
        }

        let (remainder, modulo) = match &self.shard {
            Some(text) => parse_shard(text)?,
            None => (0, 1),
        };

        let print_orientation = if self.print_orientation && self.brute_force {
            false
        } else {
            self.print_orientation
        };

        Ok(Options {
            use_heuristic: !self.only_exact,
            use_exact: !self.only_heuristic,
            brute_force: self.brute_force,
            complement: self.complement,
            double_check: self.double_check,
            print_orientation,
            single_graph: self.single_graph,
            verbose: self.verbose || print_orientation,
            remainder,
            modulo,
        })
    }
}

fn parse_shard(text: &str) -> Result<(u64, u64), FilterError> {
    let (res_str, mod_str) = text
        .split_once('/')
        .ok_or_else(|| FilterError::Usage(format!("invalid res/mod pair: '{text}'")))?;
    let remainder: u64 = res_str
        .parse()
        .map_err(|_| FilterError::Usage(format!("invalid res/mod pair: '{text}'")))?;
    let modulo: u64 = mod_str
        .parse()
        .map_err(|_| FilterError::Usage(format!("invalid res/mod pair: '{text}'")))?;
    if modulo <= remainder {
        return Err(FilterError::Usage(format!(
            "invalid res/mod pair: '{text}' (need res < mod)"
        )));
    }
    Ok((remainder, modulo))
}
