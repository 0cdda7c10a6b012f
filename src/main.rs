use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod density;
mod icon_gen;
mod style;

use density::DensityTable;
use style::IconStyle;

#[derive(Debug, Parser)]
#[clap(
    name = "mipmap-gen",
    about = "Generate placeholder Android launcher icons for every density bucket"
)]
struct Args {
    /// Base resource directory receiving the mipmap-<density> folders.
    #[clap(short, long, value_name = "DIR", default_value = "./res")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_launcher_icons(&args.output, &DensityTable::default(), &IconStyle::default())
}
