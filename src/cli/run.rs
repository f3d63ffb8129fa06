use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;

use super::args::Arguments;
use super::exit_status::ExitStatus;
use crate::reconcile::{Outcome, reconcile};
use crate::report::Reporter;

/// Run one scan over the configured project.
///
/// A nonexistent project path is reported as a single error line and the run
/// ends without scanning; that is not an internal failure, so the exit
/// status stays `Success`. I/O and decode errors propagate to the caller.
pub fn run(args: Arguments) -> Result<ExitStatus> {
    let mut reporter = Reporter::new(args.max_warnings);

    if !args.project_path.exists() {
        reporter.error(
            Path::new(""),
            0,
            &format!("bad project path: {}", args.project_path.display()),
        );
        return Ok(ExitStatus::Success);
    }

    let exclude_dirs: HashSet<String> = args.exclude_dirs.iter().cloned().collect();
    let outcome = reconcile(
        &args.project_path,
        &exclude_dirs,
        &mut reporter,
        args.verbose,
    )?;

    if args.verbose {
        match outcome {
            Outcome::Completed => {
                eprintln!("done, {} warning(s)", reporter.warning_count());
            }
            Outcome::WarningCapReached => {
                eprintln!(
                    "stopped at warning cap ({} warning(s) emitted)",
                    reporter.warning_count()
                );
            }
        }
    }

    Ok(ExitStatus::Success)
}
