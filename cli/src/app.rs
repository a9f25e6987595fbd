use algolab_core::Algorithm;
use std::{error::Error, io::Write};

use crate::colors::ColorScheme;
use crate::config::LabConfig;
use crate::demo::ListGenerator;
use crate::display::{write_progress, write_report};
use crate::json_output::{create_json_output, to_json_string};
use crate::runner::{RunReport, run_algorithm};

pub struct LabApp {
    config: LabConfig,
    colors: ColorScheme,
    generator: ListGenerator,
}

impl LabApp {
    pub fn new(config: LabConfig) -> Self {
        let colors = ColorScheme::new(config.use_colors);
        let generator = ListGenerator::new(config.list_size, config.max_value, config.seed);

        Self {
            config,
            colors,
            generator,
        }
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    pub fn colors(&self) -> &ColorScheme {
        &self.colors
    }

    /// Runs `algorithm` on fresh demo input. Sorters get the list-creation
    /// animation first.
    pub fn execute<W: Write>(
        &mut self,
        algorithm: Algorithm,
        out: &mut W,
    ) -> Result<RunReport, Box<dyn Error>> {
        if algorithm.is_sort() {
            write_progress(out, "Creating a random list", self.config.delay)?;
        }
        run_algorithm(algorithm, &mut self.generator)
    }

    pub fn run_once<W: Write>(
        &mut self,
        algorithm: Algorithm,
        json: bool,
        out: &mut W,
    ) -> Result<(), Box<dyn Error>> {
        if json {
            let report = run_algorithm(algorithm, &mut self.generator)?;
            let json_string = to_json_string(&create_json_output(&report))?;
            writeln!(out, "{}", json_string)?;
        } else {
            let report = self.execute(algorithm, out)?;
            write_report(out, &report, &self.config, &self.colors)?;
        }
        Ok(())
    }
}
