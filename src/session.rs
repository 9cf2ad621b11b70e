//! Line-oriented console session.
//!
//! A session asks for a role, then either loops over customer reviews or
//! serves the executive menu until the user exits or input runs out. Every
//! file failure is reported on the console and the session carries on.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::error::{Result, ToolError};
use crate::io::csv_write::{ExportSummary, format_price};
use crate::model::{ProductId, parse_price};
use crate::roles::Customer;

/// Role picked at the start of a session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Role {
    Customer,
    Executive,
}

impl Role {
    /// Matches the first non-blank character, ignoring case.
    pub fn parse(input: &str) -> Option<Self> {
        match first_char(input)?.to_ascii_uppercase() {
            'C' => Some(Self::Customer),
            'E' => Some(Self::Executive),
            _ => None,
        }
    }
}

/// Entries of the executive menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuOption {
    ViewProducts,
    ChangePrice,
    CompetitorContent,
    Exit,
}

impl MenuOption {
    pub fn parse(input: &str) -> Option<Self> {
        match first_char(input)? {
            '1' => Some(Self::ViewProducts),
            '2' => Some(Self::ChangePrice),
            '3' => Some(Self::CompetitorContent),
            '4' => Some(Self::Exit),
            _ => None,
        }
    }
}

fn first_char(input: &str) -> Option<char> {
    input.trim_start().chars().next()
}

/// Drives a [`Catalog`] from a line-based reader, writing prompts and results
/// to `output`.
pub struct Session<R, W> {
    catalog: Catalog,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(catalog: Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    /// Runs until the chosen role finishes or input is exhausted. Blank answers
    /// to the role question are skipped.
    pub fn run(&mut self) -> Result<()> {
        let answer = loop {
            let Some(answer) = self.prompt("Are you a Customer or an Executive? (C/E): ")? else {
                return Ok(());
            };
            if !answer.trim().is_empty() {
                break answer;
            }
        };

        match Role::parse(&answer) {
            Some(Role::Customer) => {
                info!("customer session started");
                self.run_customer()
            }
            Some(Role::Executive) => {
                info!("executive session started");
                self.run_executive()
            }
            None => {
                writeln!(self.output, "Invalid user type. Exiting...")?;
                Ok(())
            }
        }
    }

    fn run_customer(&mut self) -> Result<()> {
        loop {
            let Some(name) = self.prompt("Enter customer name: ")? else {
                return Ok(());
            };
            let customer = Customer::new(name);

            let Some(review) = self.prompt("Enter review: ")? else {
                return Ok(());
            };

            let Some(product) = self.choose_product()? else {
                return Ok(());
            };

            customer.write_review(&mut self.catalog.store, product, &review)?;
            self.export()?;

            let Some(again) = self.prompt("Do you want to add another review? (Y/N): ")? else {
                return Ok(());
            };
            if !matches!(first_char(&again), Some('Y' | 'y')) {
                return Ok(());
            }
        }
    }

    fn run_executive(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "Choose an option:")?;
            writeln!(self.output, "1. View products")?;
            writeln!(self.output, "2. Change product price")?;
            writeln!(self.output, "3. Print competitor's content")?;
            writeln!(self.output, "4. Exit")?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };

            match MenuOption::parse(&choice) {
                Some(MenuOption::ViewProducts) => {
                    let catalog = &self.catalog;
                    catalog.executive.view_products(&catalog.store, &mut self.output)?;
                }
                Some(MenuOption::ChangePrice) => {
                    if !self.change_price()? {
                        return Ok(());
                    }
                }
                Some(MenuOption::CompetitorContent) => {
                    let Some(base) = self.prompt("Enter competitor's CSV filename: ")? else {
                        return Ok(());
                    };
                    self.print_competitor(&base)?;
                }
                Some(MenuOption::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                None => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                }
            }
        }
    }

    /// Returns `false` when input ran out mid-dialogue.
    fn change_price(&mut self) -> Result<bool> {
        let Some(product) = self.choose_product()? else {
            return Ok(false);
        };
        let Some(price) = self.prompt_price()? else {
            return Ok(false);
        };

        let change = self
            .catalog
            .executive
            .change_price(&mut self.catalog.store, product, price)?;
        writeln!(
            self.output,
            "Price of {} has been changed to ${}",
            change.name,
            format_price(change.price)
        )?;
        self.report_export(change.export)?;
        Ok(true)
    }

    fn print_competitor(&mut self, base: &str) -> Result<()> {
        match self.catalog.executive.competitor_content(base) {
            Ok(content) => content.echo(&mut self.output),
            Err(error) => self.report_failure(&error),
        }
    }

    fn export(&mut self) -> Result<()> {
        let catalog = &self.catalog;
        let outcome = catalog
            .executive
            .write_data_to_csv(&catalog.store, catalog.executive.export_path());
        self.report_export(outcome)
    }

    fn report_export(&mut self, outcome: Result<ExportSummary>) -> Result<()> {
        match outcome {
            Ok(summary) => {
                writeln!(
                    self.output,
                    "Data has been written to {}",
                    summary.path.display()
                )?;
                Ok(())
            }
            Err(error) => self.report_failure(&error),
        }
    }

    fn report_failure(&mut self, error: &ToolError) -> Result<()> {
        warn!(%error, "file operation failed");
        if error.is_file_open() {
            writeln!(self.output, "Error opening file!")?;
        } else {
            writeln!(self.output, "Error: {error}")?;
        }
        Ok(())
    }

    /// Asks for a 1-based position in the executive's list until a valid one
    /// is entered.
    fn choose_product(&mut self) -> Result<Option<ProductId>> {
        let available = self.catalog.product_ids().len();
        if available == 0 {
            writeln!(self.output, "No products available.")?;
            return Ok(None);
        }

        let label = product_range_label(available);
        loop {
            let Some(answer) = self.prompt(&format!("Enter product number ({label}): "))? else {
                return Ok(None);
            };
            let chosen = answer
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|number| self.catalog.product_at(number).ok());
            match chosen {
                Some(id) => return Ok(Some(id)),
                None => writeln!(self.output, "Invalid input. Please enter {label}.")?,
            }
        }
    }

    fn prompt_price(&mut self) -> Result<Option<f64>> {
        loop {
            let Some(answer) = self.prompt("Enter new price: $")? else {
                return Ok(None);
            };
            match parse_price(&answer) {
                Ok(price) => return Ok(Some(price)),
                Err(_) => writeln!(self.output, "Invalid price. Please enter a number.")?,
            }
        }
    }

    /// Writes `text` and reads one line without its terminator. `None` means
    /// end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// `1`, `1 or 2`, or `1-N`, depending on how many products are on offer.
pub fn product_range_label(count: usize) -> String {
    match count {
        1 => "1".to_string(),
        2 => "1 or 2".to_string(),
        n => format!("1-{n}"),
    }
}
