//! Interactive text menu.
//!
//! Drives registration and lookups over any `BufRead`/`Write` pair so the
//! binary can use stdin/stdout and tests can use in-memory buffers.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::debug;

use crate::application::handlers::{
    GetRecommendationsHandler, GetRecommendationsQuery, ProfileInput, RegisterProfileCommand,
    RegisterProfileHandler,
};
use crate::domain::cycle::Preferences;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::recommendation::RecommendationResult;
use crate::domain::user::parse_start_date;
use crate::ports::ProfileRegistry;

/// Errors that end a menu session.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Input reached end of file.
    #[error("input closed")]
    InputClosed,
}

/// Menu choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    CreateUser,
    LoadUser,
    Exit,
}

impl MenuOption {
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::CreateUser),
            "2" => Some(Self::LoadUser),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    register_handler: RegisterProfileHandler,
    recommendations_handler: GetRecommendationsHandler,
    reference_day: Option<NaiveDate>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(registry: Arc<dyn ProfileRegistry>, input: R, output: W) -> Self {
        Self {
            input,
            output,
            register_handler: RegisterProfileHandler::new(registry.clone()),
            recommendations_handler: GetRecommendationsHandler::new(registry),
            reference_day: None,
        }
    }

    /// Pins the day recommendations are computed for; today otherwise.
    pub fn with_reference_day(mut self, day: NaiveDate) -> Self {
        self.reference_day = Some(day);
        self
    }

    /// Consumes the menu, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user exits or input ends.
    pub async fn run(&mut self) -> Result<(), MenuError> {
        match self.run_loop().await {
            Err(MenuError::InputClosed) => {
                debug!("Input closed, leaving menu");
                Ok(())
            }
            other => other,
        }
    }

    async fn run_loop(&mut self) -> Result<(), MenuError> {
        loop {
            writeln!(self.output, "\n=== NutriCycle App ===")?;
            writeln!(self.output, "1. Create a new user")?;
            writeln!(self.output, "2. Load existing user")?;
            writeln!(self.output, "3. Exit")?;
            let choice = self.prompt("Choose an option (1/2/3): ")?;

            match MenuOption::parse(&choice) {
                Some(MenuOption::CreateUser) => self.create_user().await?,
                Some(MenuOption::LoadUser) => self.load_user().await?,
                Some(MenuOption::Exit) => {
                    writeln!(self.output, "Exiting the app. Goodbye!")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Invalid option. Please enter 1, 2, or 3.")?,
            }
        }
    }

    async fn create_user(&mut self) -> Result<(), MenuError> {
        let name = self.confirmed("Enter your name: ", |raw| {
            let name = raw.trim();
            if name.is_empty() {
                Err("Name cannot be empty.".to_string())
            } else {
                Ok((name.to_string(), name.to_string()))
            }
        })?;

        let cycle_start =
            self.confirmed("Enter your last period start date (DD-MM-YYYY): ", |raw| {
                let date = raw.trim();
                parse_start_date(date)
                    .map(|_| (date.to_string(), date.to_string()))
                    .map_err(|_| "Please use the DD-MM-YYYY format.".to_string())
            })?;

        let cycle_length =
            self.confirmed("Enter your cycle length in days: ", parse_positive_days)?;
        let period_length =
            self.confirmed("How many days does your period last? ", parse_positive_days)?;

        let allergens = self.confirmed(
            "Enter any food allergies, separated by commas (or press enter if none): ",
            |raw| {
                let preferences = Preferences::from_comma_separated(raw);
                let shown = if preferences.is_empty() {
                    "None".to_string()
                } else {
                    preferences.allergens().collect::<Vec<_>>().join(", ")
                };
                Ok((raw.to_string(), shown))
            },
        )?;

        let cmd = RegisterProfileCommand {
            input: ProfileInput {
                name,
                cycle_start,
                cycle_length,
                period_length,
                allergens,
            },
        };

        match self.register_handler.handle(cmd).await {
            Ok(result) => {
                let name = result.profile.name().to_string();
                self.show_recommendations(&name).await
            }
            Err(e) if e.code == ErrorCode::InternalError => Err(e.into()),
            Err(e) => {
                writeln!(self.output, "Could not create user: {}", e.message())?;
                Ok(())
            }
        }
    }

    async fn load_user(&mut self) -> Result<(), MenuError> {
        let name = self.prompt("Enter the name of the user to load: ")?;
        self.show_recommendations(name.trim()).await
    }

    async fn show_recommendations(&mut self, name: &str) -> Result<(), MenuError> {
        let query = GetRecommendationsQuery {
            name: name.to_string(),
            reference_day: self
                .reference_day
                .unwrap_or_else(|| Local::now().date_naive()),
        };

        match self.recommendations_handler.handle(query).await {
            Ok(result) => self.print_result(&result),
            Err(e) if e.code == ErrorCode::ProfileNotFound => {
                writeln!(
                    self.output,
                    "User not found. Try again or create a new user."
                )?;
                Ok(())
            }
            Err(e) if e.code == ErrorCode::InternalError => Err(e.into()),
            Err(e) => {
                writeln!(self.output, "{}", e.message())?;
                Ok(())
            }
        }
    }

    fn print_result(&mut self, result: &RecommendationResult) -> Result<(), MenuError> {
        writeln!(self.output)?;
        for line in result.render_lines() {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    /// Prompts until `parse` accepts the value and the user answers "yes".
    ///
    /// `parse` returns the value plus the text echoed back for confirmation.
    fn confirmed<T, F>(&mut self, message: &str, parse: F) -> Result<T, MenuError>
    where
        F: Fn(&str) -> Result<(T, String), String>,
    {
        loop {
            let raw = self.prompt(message)?;
            let (value, shown) = match parse(&raw) {
                Ok(parsed) => parsed,
                Err(reason) => {
                    writeln!(self.output, "Invalid input. {reason}")?;
                    continue;
                }
            };
            let answer =
                self.prompt(&format!("You entered: {shown}. Is this correct? (yes/no): "))?;
            if answer.trim().eq_ignore_ascii_case("yes") {
                return Ok(value);
            }
        }
    }

    fn prompt(&mut self, message: &str) -> Result<String, MenuError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

fn parse_positive_days(raw: &str) -> Result<(u32, String), String> {
    match raw.trim().parse::<u32>() {
        Ok(days) if days > 0 => Ok((days, days.to_string())),
        _ => Err("Please enter a whole number of days greater than zero.".to_string()),
    }
}
