mod program;
mod report;

use std::process;

use anyhow::Result;
use log::{debug, error, info};
use structopt::StructOpt;

use hash_code::HashCode;
use program::{Command, Options};

/// Run one command, returning the process exit code.
fn run(command: Command) -> Result<i32> {
    match command {
        Command::Inspect { code } => {
            debug!("inspecting {} bit hash code", code.bits());
            println!("{}", report::inspect(&code));
        }
        Command::FromInt { value } => {
            println!("{}", report::describe(&HashCode::from_int(value)));
        }
        Command::FromLong { value } => {
            println!("{}", report::describe(&HashCode::from_long(value)));
        }
        Command::Compare { left, right } => {
            if left.bits() != right.bits() {
                info!(
                    "comparing hash codes of different length: {} and {} bits",
                    left.bits(),
                    right.bits()
                );
            }
            if left == right {
                println!("equal");
            } else {
                println!("different");
                return Ok(1);
            }
        }
        Command::Write {
            code,
            size,
            offset,
            max_length,
        } => {
            debug!(
                "writing up to {} bytes at offset {} into {} byte buffer",
                max_length, offset, size
            );
            println!("{}", report::write_into(&code, size, offset, max_length)?);
        }
    }
    Ok(0)
}

fn main() {
    env_logger::init();
    let options = Options::from_args();
    match run(options.command) {
        Ok(code) => process::exit(code),
        Err(err) => {
            error!("{:#}", err);
            eprintln!("error: {:#}", err);
            process::exit(2);
        }
    }
}
