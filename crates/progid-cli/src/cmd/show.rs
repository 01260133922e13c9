use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use progid_core::prelude::{Keypair, ProgramId};
use serde::Serialize;

use crate::output;

#[derive(Debug, Serialize)]
pub struct ShowOut {
    pub program_id: ProgramId,
    pub keypair: String,
}

pub fn run(keypair_path: &Path) -> Result<ExitCode> {
    let keypair = Keypair::load(keypair_path)?;
    let program_id = keypair.check_consistency()?;

    if output::is_json() {
        output::print(&ShowOut { program_id, keypair: keypair_path.display().to_string() })?;
    } else {
        println!("Program ID: {program_id}");
    }
    Ok(ExitCode::SUCCESS)
}
