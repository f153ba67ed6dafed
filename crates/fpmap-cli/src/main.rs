// crates/fpmap-cli/src/main.rs

use std::path::Path;

use clap::Parser;

mod cmd;

#[derive(Parser)]
#[command(name = "fpmap")]
#[command(version, about = "Focus pixel map generator and converter for MLV raw video", long_about = None)]
pub struct Cli {
    /// Input files: '.mlv' to derive a map from its metadata blocks,
    /// '.fpm'/'.pbm' to convert to the opposite format (several '.pbm'
    /// inputs combine into one multi-pass map). With no input, a map is
    /// generated from --camera-name and --video-mode alone.
    pub inputs: Vec<String>,

    /// Output file name with '.fpm' or '.pbm' extension
    /// (auto generated as '<hexmodel>_<w>x<h>.<ext>' when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Camera name: EOSM, 100D, 650D, 700D
    #[arg(short = 'c', long = "camera-name")]
    pub camera_name: Option<String>,

    /// Video mode: mv720, mv1080, mv1080crop, zoom, croprec
    #[arg(short = 'm', long = "video-mode")]
    pub video_mode: Option<String>,

    /// Generate the denser unified map (for raw restricted to 8..12-bit lossless)
    #[arg(short, long)]
    pub unified: bool,

    /// Do not write the '#FPM' header line into '.fpm' output
    #[arg(short, long)]
    pub no_header: bool,

    /// Export a multi-pass map as one '.pbm' instead of one file per pass
    #[arg(short = '1', long)]
    pub one_pass_pbm: bool,

    /// Suppress informational output
    #[arg(short, long)]
    pub quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.inputs.first() {
        None => cmd::generate::run_explicit(&cli),
        Some(first) => {
            let is_mlv = Path::new(first)
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("mlv"))
                .unwrap_or(false);
            if is_mlv {
                cmd::generate::run_mlv(&cli, first)
            } else {
                cmd::convert::run(&cli)
            }
        }
    }
}
