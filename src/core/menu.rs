use crate::core::etl::EtlEngine;
use crate::domain::filter::VacancyFilter;
use crate::domain::model::VacancyRecord;
use crate::domain::ports::{ListingSource, VacancyStorage};
use crate::utils::error::{Result, VacancyError};
use std::io::{BufRead, Write};

const MENU: &str = "\nChoose an action:
1. Search vacancies
2. Show top N vacancies by salary
3. Show vacancies with a keyword in the description
4. Keep only vacancies mentioning a keyword
0. Exit";

/// Numbered text menu driving the engine and the store.
pub struct InteractiveMenu<'a, L: ListingSource, S: VacancyStorage> {
    engine: &'a EtlEngine<L>,
    storage: &'a mut S,
}

impl<'a, L: ListingSource, S: VacancyStorage> InteractiveMenu<'a, L, S> {
    pub fn new(engine: &'a EtlEngine<L>, storage: &'a mut S) -> Self {
        Self { engine, storage }
    }

    /// Runs until `0` is chosen or the input ends. Failed actions are reported and
    /// the menu keeps going.
    pub async fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<()> {
        loop {
            writeln!(output, "{}", MENU)?;
            let choice = prompt(&mut input, &mut output, "Enter the action number: ")?;
            let Some(choice) = choice else {
                break;
            };

            let outcome = match choice.as_str() {
                "1" => self.search(&mut input, &mut output).await,
                "2" => self.top(&mut input, &mut output),
                "3" => self.in_description(&mut input, &mut output),
                "4" => self.prune(&mut input, &mut output),
                "0" => break,
                _ => {
                    writeln!(output, "Unknown choice. Please try again.")?;
                    Ok(())
                }
            };

            if let Err(e) = outcome {
                tracing::error!("Action {} failed: {}", choice, e);
                writeln!(output, "❌ {}", e.user_friendly_message())?;
                writeln!(output, "💡 {}", e.recovery_suggestion())?;
            }
        }

        tracing::debug!("Leaving interactive menu");
        Ok(())
    }

    async fn search<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<()> {
        let Some(query) = prompt(input, output, "Enter a search query: ")? else {
            return Ok(());
        };
        let count = self.engine.run(&mut *self.storage, &query).await?;
        writeln!(output, "Added {} vacancies.", count)?;
        Ok(())
    }

    fn top<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let Some(raw) = prompt(input, output, "How many vacancies to show: ")? else {
            return Ok(());
        };
        let n = parse_count(&raw)?;
        write_vacancies(output, &self.storage.query(&VacancyFilter::top(n)))
    }

    fn in_description<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<()> {
        let Some(keyword) = prompt(input, output, "Enter a keyword: ")? else {
            return Ok(());
        };
        write_description_matches(output, &*self.storage, &keyword)
    }

    fn prune<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let Some(keyword) = prompt(input, output, "Enter a keyword to keep: ")? else {
            return Ok(());
        };

        let before = self.storage.len();
        self.storage.remove_where(&VacancyFilter::keyword(keyword))?;
        writeln!(
            output,
            "Removed {} vacancies, {} left.",
            before - self.storage.len(),
            self.storage.len()
        )?;
        Ok(())
    }
}

/// Writes the prompt and reads one trimmed line. `None` means the input ended.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn parse_count(raw: &str) -> Result<usize> {
    raw.trim().parse().map_err(|_| VacancyError::InvalidInput {
        message: format!("'{}' is not a non-negative whole number", raw),
    })
}

/// Prints the vacancies whose description mentions `keyword`, or every stored
/// vacancy when none does.
pub fn write_description_matches<W: Write, S: VacancyStorage + ?Sized>(
    output: &mut W,
    storage: &S,
    keyword: &str,
) -> Result<()> {
    let found = storage.query(&VacancyFilter::keyword(keyword).in_description());
    if found.is_empty() {
        writeln!(output, "Nothing matched your query.")?;
        writeln!(output, "Available vacancies:")?;
        write_vacancies(output, storage.vacancies())
    } else {
        writeln!(output, "Found {} vacancies:", found.len())?;
        write_vacancies(output, &found)
    }
}

pub fn write_vacancies<W: Write>(output: &mut W, records: &[VacancyRecord]) -> Result<()> {
    for record in records {
        writeln!(output, "{}", record)?;
    }
    Ok(())
}
