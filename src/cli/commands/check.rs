use std::io;

use anyhow::Result;

use super::super::{
    args::CheckCommand,
    exit_status::ExitStatus,
    report::{print_checked_to, print_conversion_error, print_summary},
};
use super::context::BuildContext;

/// Convert the source and report the resulting catalog without writing anything.
pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = BuildContext::new(&cmd.common)?;
    let source = ctx.source_path();
    let tree = ctx.load_source()?;

    let conversion = match ctx.convert(&tree) {
        Ok(conversion) => conversion,
        Err(err) => {
            print_conversion_error(&source, &err);
            return Ok(ExitStatus::Failure);
        }
    };

    print_summary(&conversion);
    print_checked_to(&source, &conversion, &mut io::stdout().lock());
    Ok(ExitStatus::Success)
}
