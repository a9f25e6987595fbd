use algolab_core::{Algorithm, ShortestPaths};
use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

use crate::colors::ColorScheme;
use crate::config::LabConfig;
use crate::runner::RunReport;
use crate::utils::{duration_ms, format_number};

pub const MENU_RULE: &str = "----------------------------------";
pub const MENU_PROMPT: &str = "Enter your chosen option number =====> ";
pub const EXIT_OPTION: usize = 5;
pub const INVALID_CHOICE_MESSAGE: &str = "Entered value is not valid.";

pub fn write_menu<W: Write>(out: &mut W, colors: &ColorScheme) -> io::Result<()> {
    writeln!(out, "{}", MENU_RULE)?;
    for (index, algorithm) in Algorithm::ALL.iter().enumerate() {
        writeln!(
            out,
            "{} {}",
            colors.option_number(&format!("{})", index + 1)),
            algorithm.display_name()
        )?;
    }
    writeln!(out, "{} Exit", colors.option_number(&format!("{})", EXIT_OPTION)))?;
    writeln!(out, "{}", MENU_RULE)?;
    write!(out, "{}", MENU_PROMPT)?;
    out.flush()
}

pub fn write_invalid_choice<W: Write>(out: &mut W, colors: &ColorScheme) -> io::Result<()> {
    writeln!(out, "{} {}", colors.error("Error:"), INVALID_CHOICE_MESSAGE)
}

/// Prints `label` followed by three dots, pausing `delay` around each one.
pub fn write_progress<W: Write>(out: &mut W, label: &str, delay: Duration) -> io::Result<()> {
    write!(out, "{}", label)?;
    out.flush()?;
    for _ in 0..3 {
        pause(delay);
        write!(out, ".")?;
        out.flush()?;
    }
    pause(delay);
    writeln!(out)
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

pub fn write_report<W: Write>(
    out: &mut W,
    report: &RunReport,
    config: &LabConfig,
    colors: &ColorScheme,
) -> io::Result<()> {
    match report {
        RunReport::Sort {
            input,
            sorted,
            stats,
            ..
        } => {
            if !config.quiet {
                writeln!(out, "{} {}", colors.heading("Unsorted list:"), format_list(input))?;
                writeln!(out)?;
            }
            writeln!(out, "{} {}", colors.heading("Sorted list:"), format_list(sorted))?;
            writeln!(out)?;
            writeln!(
                out,
                "Number of comparisons: {}",
                colors.number(&format_number(stats.comparisons))
            )?;
            writeln!(
                out,
                "Number of movements: {}",
                colors.number(&format_number(stats.movements))
            )?;
        }
        RunReport::AllPairs { distances, .. } => {
            writeln!(
                out,
                "{}",
                colors.heading(
                    "The following matrix shows the shortest distances between every pair of vertices:"
                )
            )?;
            for row in distances.rows() {
                writeln!(out, "{}", format_matrix_row(row, colors))?;
            }
        }
        RunReport::SingleSource { paths, .. } => {
            writeln!(
                out,
                "{}",
                colors.heading(&format!("Shortest distances from vertex {}:", paths.source))
            )?;
            for vertex in 0..paths.distances.len() {
                writeln!(out, "{}", format_vertex_line(paths, vertex, config, colors))?;
            }
        }
    }

    if config.show_timing {
        writeln!(out)?;
        writeln!(
            out,
            "{} {} finished in {} ms",
            colors.stats("⏱"),
            report.algorithm().display_name(),
            colors.number(&format!("{:.3}", duration_ms(report.elapsed())))
        )?;
    }

    Ok(())
}

pub fn format_list(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" - ")
}

pub fn format_distance(distance: Option<i64>) -> String {
    match distance {
        Some(value) => value.to_string(),
        None => "INF".to_string(),
    }
}

/// One matrix row with every cell right-aligned to three columns.
pub fn format_matrix_row(row: &[Option<i64>], colors: &ColorScheme) -> String {
    row.iter()
        .map(|&cell| {
            let padded = format!("{:>3}", format_distance(cell));
            match cell {
                Some(_) => colors.value(&padded).to_string(),
                None => colors.infinity(&padded).to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_vertex_line(
    paths: &ShortestPaths,
    vertex: usize,
    config: &LabConfig,
    colors: &ColorScheme,
) -> String {
    let distance = paths.distance_to(vertex);
    let distance_text = match distance {
        Some(_) => colors.number(&format_distance(distance)),
        None => colors.infinity(&format_distance(distance)),
    };
    let mut line = format!("Vertex {}: {}", vertex, distance_text);

    if !config.quiet && vertex != paths.source {
        if let Some(path) = paths.path_to(vertex) {
            let route = path
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(" → ");
            line.push_str(&format!("  ({})", route));
        }
    }

    line
}
