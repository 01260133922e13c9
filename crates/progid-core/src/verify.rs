//! Program id verification.
//!
//! One pass: load the keypair, derive its program id, then look for that id in
//! the program source. Every failure is folded into an [`Outcome`] at a single
//! boundary, so [`verify`] itself cannot fail. The outcome keeps the derived id
//! when derivation succeeded before a later step failed, which lets renderers
//! reproduce the lines that were already due before the error.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::{validate_config, VerifyConfig};
use crate::declared::{find_declared_ids, DeclaredId};
use crate::errors::{ProgidError, ProgidResult};
use crate::keypair::Keypair;
use crate::program_id::ProgramId;

/// Result of one verification pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Match {
        program_id: ProgramId,
        source: String,
    },
    Mismatch {
        program_id: ProgramId,
        source: String,
        /// First `declare_id!` literal found in the source, if any.
        declared: Option<DeclaredId>,
    },
    KeypairMissing {
        path: PathBuf,
    },
    Failed {
        program_id: Option<ProgramId>,
        cause: String,
    },
}

impl Outcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }

    pub fn program_id(&self) -> Option<&ProgramId> {
        match self {
            Self::Match { program_id, .. } | Self::Mismatch { program_id, .. } => Some(program_id),
            Self::Failed { program_id, .. } => program_id.as_ref(),
            Self::KeypairMissing { .. } => None,
        }
    }

    /// Human-readable report, one entry per printed line.
    pub fn lines(&self) -> Vec<ReportLine> {
        let mut out = Vec::new();
        if let Some(id) = self.program_id() {
            out.push(ReportLine::success(format!("Program ID from keypair: {id}")));
        }

        match self {
            Self::Match { source, .. } => {
                out.push(ReportLine::success(format!("Program ID matches declare_id! in {source}")));
            }
            Self::Mismatch { program_id, source, declared } => {
                out.push(ReportLine::warning(format!(
                    "Program ID does NOT match declare_id! in {source}"
                )));
                if let Some(d) = declared {
                    out.push(ReportLine::detail(format!("Declared: {}", d.value)));
                }
                out.push(ReportLine::detail(format!("Please update declare_id! to: {program_id}")));
            }
            Self::KeypairMissing { .. } => {
                out.push(ReportLine::failure("Keypair file not found. Run 'anchor build' first!"));
            }
            Self::Failed { cause, .. } => {
                out.push(ReportLine::failure(format!("Error: {cause}")));
            }
        }
        out
    }
}

/// Status glyph class of a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Warning,
    Failure,
    /// Indented continuation of the previous line.
    Detail,
}

impl Status {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Warning => "⚠️ ",
            Self::Failure => "❌",
            Self::Detail => "  ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub status: Status,
    pub text: String,
}

impl ReportLine {
    fn new(status: Status, text: impl Into<String>) -> Self {
        Self { status, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Status::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Status::Warning, text)
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self::new(Status::Failure, text)
    }

    pub fn detail(text: impl Into<String>) -> Self {
        Self::new(Status::Detail, text)
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status.glyph(), self.text)
    }
}

/// Run one verification pass.
pub fn verify(cfg: &VerifyConfig) -> Outcome {
    let mut derived = None;
    match run(cfg, &mut derived) {
        Ok(outcome) => outcome,
        Err(ProgidError::KeypairMissing { path }) => {
            tracing::debug!(path = %path.display(), "keypair file missing");
            Outcome::KeypairMissing { path }
        }
        Err(e) => {
            tracing::debug!(error = %e, "verification failed");
            Outcome::Failed { program_id: derived, cause: e.to_string() }
        }
    }
}

fn run(cfg: &VerifyConfig, derived: &mut Option<ProgramId>) -> ProgidResult<Outcome> {
    validate_config(cfg)?;

    let keypair = Keypair::load(&cfg.keypair_path)?;
    let program_id = keypair.program_id();
    *derived = Some(program_id);
    tracing::debug!(%program_id, "derived program id");

    // Trailing bytes do not take part in derivation; only flag them.
    if let Err(e) = keypair.check_consistency() {
        tracing::warn!(error = %e, "keypair file carries a stale public key");
    }

    let content = fs::read_to_string(&cfg.source_path)
        .map_err(|e| ProgidError::io(&cfg.source_path, e))?;
    tracing::debug!(path = %cfg.source_path.display(), bytes = content.len(), "read program source");

    let source = cfg.source_label();
    if content.contains(&program_id.to_base58()) {
        return Ok(Outcome::Match { program_id, source });
    }

    let declared = find_declared_ids(&content).into_iter().next();
    Ok(Outcome::Mismatch { program_id, source, declared })
}
