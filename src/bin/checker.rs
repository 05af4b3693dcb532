use max_digit_sum::{check_answer, parse_claim};
use util::read_input_as_string;

use std::{io, process::ExitCode};

use anyhow::Result;
use log::info;

fn main() -> Result<ExitCode> {
    env_logger::init();

    let (n, claimed) = parse_claim(&read_input_as_string(io::stdin().lock())?)?;

    if check_answer(&n, &claimed) {
        info!("accepted");
        Ok(ExitCode::SUCCESS)
    } else {
        info!("wrong answer for n = {n}: {claimed}");
        Ok(ExitCode::FAILURE)
    }
}
