use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use isodist::algorithm::isotopologue::{isotopologue_rows, molecule_distribution};
use isodist::chemistry::formula::SumFormula;
use isodist::data::abundance::{write_rows, AbundanceTable};
use isodist::error::IsodistError;

/// computes isotopologue mass shift abundances for a chemical compound
#[derive(Parser, Debug)]
#[command(name = "isodist", version)]
struct Args {
    /// empirical chemical formula, e.g. C5H10O2S
    #[arg(short, long)]
    formula: String,

    /// tab-delimited table with columns: element, isotope, mass shift, abundance
    #[arg(short, long)]
    abundance_table: PathBuf,

    /// output filename
    #[arg(short, long)]
    out: PathBuf,

    /// number of cpus for parallel processing
    #[arg(short = 'n', long, default_value_t = 1)]
    num_cpus: usize,
}

fn run(args: &Args) -> Result<(), IsodistError> {
    let formula = SumFormula::new(&args.formula)?;
    let table = AbundanceTable::from_tsv_path(&args.abundance_table)?;
    let contributions = table.contributions_for(&formula)?;

    log::info!(
        "computing isotopologue distribution for {} on {} cpu(s)",
        formula.formula,
        args.num_cpus
    );
    let distribution = molecule_distribution(&contributions, args.num_cpus)?;
    let rows = isotopologue_rows(&formula, &distribution)?;
    write_rows(&args.out, &rows)?;
    log::info!("wrote {} rows to {}", rows.len(), args.out.display());

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
