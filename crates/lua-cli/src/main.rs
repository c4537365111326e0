//! Logic Unit Array - bitstream generator CLI
//!
//! Assembles a configuration program (the built-in default or a JSON file)
//! and writes it as a binary image.

mod demo;

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{debug, info};

use lua_core::{AddressMode, Intent, LuaConfig, LuaResult, Program};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Output image path
    #[arg(short, long, default_value = demo::DEFAULT_IMAGE)]
    output: PathBuf,

    /// JSON program file; the default program is used when absent
    #[arg(short, long)]
    program: Option<PathBuf>,

    /// Reject addresses outside the 4x4 grid instead of truncating them
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Print every generated word
    #[arg(long, default_value_t = false)]
    dump: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> LuaResult<()> {
    let config = LuaConfig {
        address_mode: if args.strict { AddressMode::Strict } else { AddressMode::Mask },
        ..LuaConfig::new()
    };
    debug!(
        "grid {}x{}, address mode {:?}",
        config.grid_columns, config.grid_rows, config.address_mode
    );

    let program = match &args.program {
        Some(path) => {
            info!("loading program from {}", path.display());
            Program::from_json(&fs::read_to_string(path)?)?
        }
        None => demo::default_program(),
    };

    let seq = program.assemble(&config)?;

    if args.dump {
        for (idx, word) in seq.iter().enumerate() {
            let intent = format!("{:?}", Intent::classify(word));
            println!("{:3}  0x{:04X}  {:<40}  {}", idx, word.raw(), intent, word);
        }
    }

    lua_image::save_to_file(&seq, &args.output)?;
    println!("Instructions saved to {} as binary.", args.output.display());
    Ok(())
}
