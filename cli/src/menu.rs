use algolab_core::Algorithm;
use std::{
    error::Error,
    io::{BufRead, Write},
};
use tracing::{debug, warn};

use crate::app::LabApp;
use crate::display::{EXIT_OPTION, write_invalid_choice, write_menu, write_progress};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Algorithm),
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<usize>() {
            Ok(EXIT_OPTION) => MenuChoice::Exit,
            Ok(option) if (1..=Algorithm::ALL.len()).contains(&option) => {
                MenuChoice::Run(Algorithm::ALL[option - 1])
            }
            _ => MenuChoice::Invalid,
        }
    }
}

/// Interactive loop: show the menu, run the chosen algorithm, wait for Enter,
/// repeat until the user picks Exit or input ends. Returns how many
/// algorithms were run.
pub fn run_menu<R: BufRead, W: Write>(
    app: &mut LabApp,
    mut input: R,
    out: &mut W,
) -> Result<usize, Box<dyn Error>> {
    let mut runs = 0;

    loop {
        write_menu(out, app.colors())?;

        let Some(line) = read_line(&mut input)? else {
            debug!("input closed, leaving menu");
            writeln!(out)?;
            break;
        };

        match MenuChoice::parse(&line) {
            MenuChoice::Run(algorithm) => {
                app.run_once(algorithm, false, out)?;
                runs += 1;
                writeln!(out)?;
                read_line(&mut input)?;
            }
            MenuChoice::Exit => {
                write_progress(out, "logging out", app.config().delay)?;
                break;
            }
            MenuChoice::Invalid => {
                warn!(input = line.trim(), "invalid menu choice");
                write_invalid_choice(out, app.colors())?;
            }
        }
    }

    Ok(runs)
}

fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
