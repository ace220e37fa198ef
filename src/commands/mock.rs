use anyhow::Result;
use tracing::info;

use crate::cli::MockArgs;
use crate::ocr::mock_fragments;
use crate::util::{print_json_pretty, write_json_pretty};

pub fn run(args: MockArgs) -> Result<()> {
    let fragments = mock_fragments();

    match &args.output {
        Some(path) => {
            write_json_pretty(path, &fragments)?;
            info!(
                path = %path.display(),
                fragments = fragments.len(),
                "wrote mock ocr fragments"
            );
        }
        None => print_json_pretty(&fragments)?,
    }

    Ok(())
}
