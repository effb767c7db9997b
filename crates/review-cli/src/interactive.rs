//! Interactive review mode.
//!
//! A line-oriented loop over a [`ReviewSession`]. A line made only of `j`
//! and `k` is replayed as navigation key presses; anything else is a command.
//! While `code` prompts for field values the input has text focus, so `j`
//! and `k` typed there are ordinary text.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info, warn};

use review_core::{DateStyle, Focus, NEXT_KEY, PREV_KEY, ReviewError, ReviewSession};
use review_model::{
    CodingDraft, DocId, FilterCriteria, PrivilegeCode, PrivilegeLabel, ResponsivenessCode,
    ResponsivenessLabel,
};
use review_store::{BlobStore, Clock, ResetOutcome};

use crate::logging::redact_value;
use crate::render::{document_detail, document_table, facets_table, status_line};

const PROMPT: &str = "review> ";

/// Entered at a text prompt to empty the field.
const CLEAR_FIELD: &str = "-";

/// Filterable fields, as typed after `filter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Query,
    Custodian,
    Doctype,
    Tag,
    Privilege,
    Responsive,
}

impl FilterField {
    fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "query" | "q" => Some(Self::Query),
            "custodian" => Some(Self::Custodian),
            "doctype" | "type" => Some(Self::Doctype),
            "tag" => Some(Self::Tag),
            "privilege" | "priv" => Some(Self::Privilege),
            "responsive" | "resp" => Some(Self::Responsive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewCommand {
    /// Navigation key presses, in order.
    Keys(Vec<char>),
    Open(String),
    Show,
    List,
    /// Set one filter field; an empty value clears it.
    Filter { field: FilterField, value: String },
    Clear,
    Code,
    Export(Option<PathBuf>),
    Reset,
    Stats,
    Facets,
    Help,
    Quit,
}

impl ReviewCommand {
    /// Parse one input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        if line.chars().all(|c| c == NEXT_KEY || c == PREV_KEY) {
            return Ok(Some(Self::Keys(line.chars().collect())));
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let command = match word.to_ascii_lowercase().as_str() {
            "open" | "o" if rest.is_empty() => return Err("usage: open <DOC-ID>".to_string()),
            "open" | "o" => Self::Open(rest.to_string()),
            "show" | "s" => Self::Show,
            "list" | "ls" => Self::List,
            "filter" | "f" => {
                let (name, value) = match rest.split_once(char::is_whitespace) {
                    Some((name, value)) => (name, value.trim()),
                    None => (rest, ""),
                };
                let field = FilterField::parse(name).ok_or_else(|| {
                    format!(
                        "unknown filter field {name:?} (query, custodian, doctype, tag, privilege, responsive)"
                    )
                })?;
                Self::Filter {
                    field,
                    value: value.to_string(),
                }
            }
            "clear" => Self::Clear,
            "code" | "c" => Self::Code,
            "export" => Self::Export((!rest.is_empty()).then(|| PathBuf::from(rest))),
            "reset" => Self::Reset,
            "stats" => Self::Stats,
            "facets" => Self::Facets,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(format!("unknown command {other:?}, type 'help' for commands")),
        };
        Ok(Some(command))
    }
}

/// Interactive loop reading commands from `input` and writing to `output`.
pub struct ReviewLoop<R, W> {
    input: R,
    output: W,
    date_style: DateStyle,
    export_dir: PathBuf,
}

impl<R: BufRead, W: Write> ReviewLoop<R, W> {
    pub fn new(input: R, output: W, date_style: DateStyle, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            input,
            output,
            date_style,
            export_dir: export_dir.into(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `quit` or end of input.
    pub fn run<B: BlobStore, C: Clock>(&mut self, session: &mut ReviewSession<B, C>) -> Result<()> {
        writeln!(self.output, "Document review: {}", session.stats())?;
        writeln!(self.output, "Type 'help' for commands, j/k to move.")?;
        writeln!(self.output, "{}", status_line(session))?;

        loop {
            let Some(line) = self.prompt(PROMPT)? else {
                break;
            };
            let command = match ReviewCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(message) => {
                    writeln!(self.output, "{message}")?;
                    continue;
                }
            };
            debug!(?command, "interactive command");
            if command == ReviewCommand::Quit {
                break;
            }
            self.dispatch(session, command)?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn dispatch<B: BlobStore, C: Clock>(
        &mut self,
        session: &mut ReviewSession<B, C>,
        command: ReviewCommand,
    ) -> Result<()> {
        match command {
            ReviewCommand::Keys(keys) => {
                for key in keys {
                    session.handle_key(key, Focus::Document);
                }
                writeln!(self.output, "{}", status_line(session))?;
            }
            ReviewCommand::Open(raw) => self.open(session, &raw)?,
            ReviewCommand::Show => self.show(session)?,
            ReviewCommand::List => {
                writeln!(self.output, "{}", document_table(session, self.date_style))?;
                writeln!(self.output, "{}", session.stats())?;
            }
            ReviewCommand::Filter { field, value } => {
                match apply_filter(session.criteria().clone(), field, &value) {
                    Ok(criteria) => {
                        session.set_criteria(criteria);
                        writeln!(self.output, "{}", session.stats())?;
                        writeln!(self.output, "{}", status_line(session))?;
                    }
                    Err(message) => writeln!(self.output, "{message}")?,
                }
            }
            ReviewCommand::Clear => {
                session.clear_criteria();
                writeln!(self.output, "Filters cleared. {}", session.stats())?;
            }
            ReviewCommand::Code => self.code(session)?,
            ReviewCommand::Export(target) => self.export(session, target)?,
            ReviewCommand::Reset => self.reset(session)?,
            ReviewCommand::Stats => writeln!(self.output, "{}", session.stats())?,
            ReviewCommand::Facets => writeln!(self.output, "{}", facets_table(&session.facets()))?,
            ReviewCommand::Help => self.help()?,
            ReviewCommand::Quit => {}
        }
        Ok(())
    }

    fn open<B: BlobStore, C: Clock>(&mut self, session: &mut ReviewSession<B, C>, raw: &str) -> Result<()> {
        let selected = DocId::new(raw)
            .map_err(ReviewError::from)
            .and_then(|id| session.select(Some(&id)));
        match selected {
            Ok(()) => self.show(session),
            Err(error) => {
                writeln!(self.output, "error: {}", error.user_message())?;
                Ok(())
            }
        }
    }

    fn show<B: BlobStore, C: Clock>(&mut self, session: &ReviewSession<B, C>) -> Result<()> {
        match session.selected_document() {
            Some(doc) => {
                let detail = document_detail(doc, session.coding_for(&doc.id), self.date_style);
                writeln!(self.output, "{detail}")?;
            }
            None => writeln!(self.output, "No document selected.")?,
        }
        Ok(())
    }

    /// Prompt for every coding field, prefilled from the saved record.
    fn code<B: BlobStore, C: Clock>(&mut self, session: &mut ReviewSession<B, C>) -> Result<()> {
        let (Some(id), Some(form)) = (session.selected_id().cloned(), session.form_for_selection())
        else {
            writeln!(self.output, "No document selected.")?;
            return Ok(());
        };
        writeln!(self.output, "Coding {id}. Enter keeps the value in brackets, '-' empties text.")?;

        let Some(responsiveness) = self.prompt_code(
            "Responsiveness",
            form.responsiveness,
            &ResponsivenessCode::ALL.map(|code| code.as_str()),
        )?
        else {
            return self.cancelled();
        };
        let Some(privilege) = self.prompt_code(
            "Privilege",
            form.privilege,
            &PrivilegeCode::ALL.map(|code| code.as_str()),
        )?
        else {
            return self.cancelled();
        };
        let Some(issues) = self.prompt_text("Issues", &form.issues)? else {
            return self.cancelled();
        };
        let Some(notes) = self.prompt_text("Notes", &form.notes)? else {
            return self.cancelled();
        };

        let draft = CodingDraft::new(responsiveness, privilege)
            .with_issues(issues)
            .with_notes(notes);
        match session.save_coding(draft) {
            Ok(Some(record)) => {
                debug!(
                    doc_id = %id,
                    issues = redact_value(&record.issues),
                    notes = redact_value(&record.notes),
                    "coding entered interactively"
                );
                writeln!(self.output, "Saved {id}: {}", record.summary())?;
            }
            Ok(None) => writeln!(self.output, "No document selected.")?,
            Err(error) => {
                warn!(doc_id = %id, %error, "interactive save failed");
                writeln!(self.output, "error: {}", error.user_message())?;
            }
        }
        Ok(())
    }

    fn export<B: BlobStore, C: Clock>(
        &mut self,
        session: &ReviewSession<B, C>,
        target: Option<PathBuf>,
    ) -> Result<()> {
        let target = target.unwrap_or_else(|| self.export_dir.clone());
        let written = session
            .export_csv()
            .and_then(|export| Ok((export.write_to(&target)?, export.rows)));
        match written {
            Ok((path, rows)) => {
                writeln!(self.output, "Exported {rows} documents to {}", path.display())?;
            }
            Err(error) => writeln!(self.output, "error: {}", error.user_message())?,
        }
        Ok(())
    }

    fn reset<B: BlobStore, C: Clock>(&mut self, session: &mut ReviewSession<B, C>) -> Result<()> {
        let outcome = session.reset_all(|| {
            self.confirm("Clear ALL saved coding? This cannot be undone. [y/N] ")
        });
        match outcome {
            Ok(ResetOutcome::Declined) => writeln!(self.output, "Reset cancelled.")?,
            Ok(ResetOutcome::Cleared { removed }) => {
                info!(removed, "coding reset from interactive session");
                writeln!(self.output, "Cleared coding for {removed} documents.")?;
            }
            Err(error) => writeln!(self.output, "error: {}", error.user_message())?,
        }
        Ok(())
    }

    fn help(&mut self) -> Result<()> {
        let lines = [
            "Commands:",
            "  j / k                      next / previous document (e.g. 'jjj')",
            "  open <DOC-ID>              select and show a document",
            "  show                       show the selected document",
            "  list                       list the filtered documents",
            "  filter <field> [value]     set or clear a filter field",
            "                             fields: query, custodian, doctype, tag,",
            "                             privilege, responsive",
            "  clear                      clear all filters",
            "  code                       code the selected document",
            "  export [path]              write the coding CSV",
            "  reset                      clear all saved coding",
            "  stats                      shown / total / coded counts",
            "  facets                     available filter values",
            "  help                       this help",
            "  quit                       leave review mode",
        ];
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn cancelled(&mut self) -> Result<()> {
        writeln!(self.output, "Coding cancelled.")?;
        Ok(())
    }

    /// Write `label`, then read one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt_code<T>(&mut self, label: &str, current: T, choices: &[&str]) -> Result<Option<T>>
    where
        T: std::str::FromStr + std::fmt::Display + Copy,
    {
        loop {
            let Some(answer) = self.prompt(&format!("{label} [{current}]: "))? else {
                return Ok(None);
            };
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(Some(current));
            }
            match answer.parse::<T>() {
                Ok(code) => return Ok(Some(code)),
                Err(_) => writeln!(self.output, "Choose one of: {}", choices.join(", "))?,
            }
        }
    }

    fn prompt_text(&mut self, label: &str, current: &str) -> Result<Option<String>> {
        let Some(answer) = self.prompt(&format!("{label} [{current}]: "))? else {
            return Ok(None);
        };
        let answer = answer.trim();
        let value = if answer.is_empty() {
            current.to_string()
        } else if answer == CLEAR_FIELD {
            String::new()
        } else {
            answer.to_string()
        };
        Ok(Some(value))
    }

    /// Read a yes/no answer. Anything but `y`/`yes`, including end of input,
    /// is a no.
    fn confirm(&mut self, question: &str) -> bool {
        match self.prompt(question) {
            Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(error) => {
                warn!(%error, "could not read confirmation");
                false
            }
        }
    }
}

/// Criteria with `field` set to `value`, or cleared when `value` is empty.
pub fn apply_filter(
    mut criteria: FilterCriteria,
    field: FilterField,
    value: &str,
) -> Result<FilterCriteria, String> {
    let text = (!value.is_empty()).then(|| value.to_string());
    match field {
        FilterField::Query => criteria.query = value.to_string(),
        FilterField::Custodian => criteria.custodian = text,
        FilterField::Doctype => criteria.doctype = text,
        FilterField::Tag => criteria.tag = text,
        FilterField::Privilege => {
            criteria.privilege = text
                .map(|v| v.parse::<PrivilegeLabel>())
                .transpose()
                .map_err(|error| error.to_string())?;
        }
        FilterField::Responsive => {
            criteria.responsiveness = text
                .map(|v| v.parse::<ResponsivenessLabel>())
                .transpose()
                .map_err(|error| error.to_string())?;
        }
    }
    Ok(criteria)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_lines_become_key_presses() {
        assert_eq!(
            ReviewCommand::parse("jjk"),
            Ok(Some(ReviewCommand::Keys(vec!['j', 'j', 'k'])))
        );
        assert_eq!(ReviewCommand::parse("   "), Ok(None));
    }

    #[test]
    fn filter_takes_rest_of_line_as_value() {
        assert_eq!(
            ReviewCommand::parse("filter tag Litigation Hold"),
            Ok(Some(ReviewCommand::Filter {
                field: FilterField::Tag,
                value: "Litigation Hold".to_string(),
            }))
        );
        assert_eq!(
            ReviewCommand::parse("f custodian"),
            Ok(Some(ReviewCommand::Filter {
                field: FilterField::Custodian,
                value: String::new(),
            }))
        );
        assert!(ReviewCommand::parse("filter colour red").is_err());
    }

    #[test]
    fn open_requires_an_id() {
        assert!(ReviewCommand::parse("open").is_err());
        assert_eq!(
            ReviewCommand::parse("open doc-0002"),
            Ok(Some(ReviewCommand::Open("doc-0002".to_string())))
        );
    }

    #[test]
    fn unknown_commands_are_reported() {
        assert!(ReviewCommand::parse("jump").is_err());
    }

    #[test]
    fn apply_filter_sets_and_clears_fields() {
        let criteria = apply_filter(FilterCriteria::new(), FilterField::Privilege, "not privileged")
            .unwrap();
        assert_eq!(criteria.privilege, Some(PrivilegeLabel::NotPrivileged));

        let criteria = apply_filter(criteria, FilterField::Privilege, "").unwrap();
        assert_eq!(criteria.privilege, None);

        assert!(apply_filter(FilterCriteria::new(), FilterField::Responsive, "maybe").is_err());
    }
}
