// crates/fpmap-cli/src/cmd/convert.rs

use fpmap_core::format;

use crate::cmd;
use crate::Cli;

/// Convert an existing '.fpm'/'.pbm' map to the opposite format (or to
/// whatever extension -o names). No regeneration happens here.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let overrides = cmd::overrides_from(cli)?;
    let loaded = format::load(&cli.inputs, &overrides)?;

    if !cli.quiet {
        println!("Converting '{}'", cli.inputs[0]);
        println!();
        println!(
            "Video mode : {}x{}",
            loaded.meta.width, loaded.meta.height
        );
        println!();
    }

    cmd::save_map(cli, &loaded.map, &loaded.meta, loaded.format.opposite())
}
