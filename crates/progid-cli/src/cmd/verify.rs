use std::process::ExitCode;

use anyhow::Result;
use progid_core::prelude::{verify, Outcome, VerifyConfig};

use crate::args::VerifyArgs;
use crate::cmd::{EXIT_FAILURE, EXIT_MISMATCH};
use crate::output;

pub fn run(args: &VerifyArgs) -> Result<ExitCode> {
    let cfg = VerifyConfig::new(&args.keypair, &args.source);
    let outcome = verify(&cfg);

    if output::is_json() {
        output::print(&outcome)?;
    } else {
        output::print_lines(&outcome.lines())?;
    }

    Ok(ExitCode::from(exit_status(&outcome, args.lenient)))
}

fn exit_status(outcome: &Outcome, lenient: bool) -> u8 {
    if lenient {
        return 0;
    }
    match outcome {
        Outcome::Match { .. } => 0,
        Outcome::Mismatch { .. } => EXIT_MISMATCH,
        Outcome::KeypairMissing { .. } | Outcome::Failed { .. } => EXIT_FAILURE,
    }
}
