use max_digit_sum::{max_digit_sum, parse_number};
use util::read_first_line;

use std::io;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();

    let line = read_first_line(io::stdin().lock())?;
    let n = parse_number(&line)?;

    println!("{}", max_digit_sum(&n));

    Ok(())
}
