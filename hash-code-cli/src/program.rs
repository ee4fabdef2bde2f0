use hash_code::HashCode;
use structopt::clap::AppSettings;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "hash-code-cli",
    about = "Inspect, compare and convert hash codes. Set RUST_LOG for diagnostics."
)]
pub struct Options {
    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Print every view of a hex encoded hash code
    Inspect {
        #[structopt(name = "HEX")]
        code: HashCode,
    },
    /// Build a 32-bit hash code from an integer
    #[structopt(setting = AppSettings::AllowNegativeNumbers)]
    FromInt {
        #[structopt(name = "VALUE")]
        value: i32,
    },
    /// Build a 64-bit hash code from an integer
    #[structopt(setting = AppSettings::AllowNegativeNumbers)]
    FromLong {
        #[structopt(name = "VALUE")]
        value: i64,
    },
    /// Compare two hash codes in constant time, exits with 1 if they differ
    Compare {
        #[structopt(name = "LEFT")]
        left: HashCode,
        #[structopt(name = "RIGHT")]
        right: HashCode,
    },
    /// Write a hash code into a zeroed buffer and print the buffer
    Write {
        #[structopt(name = "HEX")]
        code: HashCode,
        /// buffer size in bytes
        #[structopt(long, default_value = "32")]
        size: usize,
        /// first byte to write
        #[structopt(long, default_value = "0")]
        offset: usize,
        /// upper bound on the bytes written
        #[structopt(long = "max-length", default_value = "32")]
        max_length: usize,
    },
}
