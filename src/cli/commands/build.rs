use std::io;

use anyhow::Result;

use super::super::{
    args::BuildCommand,
    exit_status::ExitStatus,
    report::{print_conversion_error, print_summary, print_written_to},
};
use super::context::BuildContext;
use crate::emit::{render_assets, write_assets};

/// Convert the source and write one `messages.json` per language.
///
/// With `--dry-run` the paths are reported but nothing is written.
pub fn build(cmd: BuildCommand) -> Result<ExitStatus> {
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

    let output_root = match &cmd.out_dir {
        Some(dir) => ctx.cwd.join(dir),
        None => ctx.output_root(),
    };
    let assets = render_assets(&conversion.catalog)?;

    let paths = if cmd.dry_run {
        assets.iter().map(|a| output_root.join(&a.path)).collect()
    } else {
        write_assets(&output_root, &assets)?
    };

    if ctx.verbose {
        print_summary(&conversion);
    }
    print_written_to(&paths, cmd.dry_run, &mut io::stdout().lock());
    Ok(ExitStatus::Success)
}
