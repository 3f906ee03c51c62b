use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::warn;

use crate::data::model::Statistic;
use crate::error::DataError;
use crate::state::AppState;

const LOAD_FIRST: &str = "Please enter the load Data option first!";
const NUMBERS_ONLY: &str = "Please only enter a number, thank you!";
const NOT_ON_MENU: &str = "This number is not on the menu.";

/// Text menu over an [`AppState`], reading choices from `input`.
pub struct Menu<R, W> {
    state: AppState,
    header: String,
    data_path: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(header: String, data_path: PathBuf, input: R, output: W) -> Self {
        Self {
            state: AppState::default(),
            header,
            data_path,
            input,
            output,
        }
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", self.header)?;
            self.print_menu()?;
            let Some(line) = self.prompt("Which option would you like to pick up? ")? else {
                break;
            };
            let Ok(choice) = line.parse::<i64>() else {
                writeln!(self.output, "{NUMBERS_ONLY}")?;
                continue;
            };
            match choice {
                1 => self.show_table(Statistic::Avg)?,
                2 => self.show_table(Statistic::Min)?,
                3 => self.show_table(Statistic::Max)?,
                4 => self.manage_filters()?,
                5 => self.load()?,
                9 => break,
                _ => writeln!(self.output, "{NOT_ON_MENU}")?,
            }
        }
        writeln!(self.output, "Goodbye! Thank you for using the data system.")
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Main Menu")?;
        for (n, stat) in [(1, Statistic::Avg), (2, Statistic::Min), (3, Statistic::Max)] {
            writeln!(
                self.output,
                "{n} - Print {stat} Particulate Concentration by Zip Code and time"
            )?;
        }
        writeln!(self.output, "4 - Adjust Zip Code Filters")?;
        writeln!(self.output, "5 - Load Data")?;
        writeln!(self.output, "9 - Quit")
    }

    /// Print `text` and read one trimmed line; `None` on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn show_table(&mut self, stat: Statistic) -> io::Result<()> {
        match self.state.render(stat) {
            Ok(table) => write!(self.output, "{table}"),
            Err(DataError::EmptyDataset) => writeln!(self.output, "{LOAD_FIRST}"),
            Err(e) => writeln!(self.output, "{e}"),
        }
    }

    fn load(&mut self) -> io::Result<()> {
        match self.state.load(&self.data_path) {
            Ok(count) => writeln!(self.output, "There are {count} lines loaded"),
            Err(e) => {
                let e = anyhow::Error::from(e);
                writeln!(self.output, "Could not load {}: {e:#}", self.data_path.display())
            }
        }
    }

    fn manage_filters(&mut self) -> io::Result<()> {
        if !self.state.is_loaded() {
            return writeln!(self.output, "{LOAD_FIRST}");
        }
        loop {
            let labels = match self.state.zip_labels() {
                Ok(labels) => labels,
                Err(e) => return writeln!(self.output, "{e}"),
            };
            writeln!(self.output, "The following labels are in the dataset: ")?;
            for label in &labels {
                let flag = if label.active { "ACTIVE" } else { "INACTIVE" };
                writeln!(self.output, "{}: {:10}{flag}", label.index, label.zip)?;
            }
            let Some(line) = self.prompt(
                "Please choose an item to toggle or press enter/return if you are finished.",
            )?
            else {
                return Ok(());
            };
            if line.is_empty() {
                return Ok(());
            }
            let Ok(index) = line.parse::<i64>() else {
                writeln!(self.output, "{NUMBERS_ONLY}")?;
                continue;
            };
            if let Err(e) = self.state.toggle_index(index) {
                warn!("toggle failed: {e}");
                writeln!(self.output, "{NOT_ON_MENU}")?;
            }
        }
    }
}
