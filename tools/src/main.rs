use anyhow::Result;
use clap::Parser;

use itl_tools::pack::{pack, PackArgs};
use itl_tools::unpack::{unpack, UnpackArgs};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
enum Cli {
    Pack(PackArgs),
    Unpack(UnpackArgs),
}

fn main() -> Result<()> {
    match Cli::parse_from(wild::args()) {
        Cli::Pack(args) => pack(&args),
        Cli::Unpack(args) => unpack(&args),
    }
}
