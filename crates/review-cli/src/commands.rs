use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use review_cli::interactive::ReviewLoop;
use review_cli::logging::redact_value;
use review_cli::render::{document_detail, document_table, facets_table};
use review_core::{DateStyle, ReviewError, ReviewSession};
use review_model::{CodingDraft, DocId};
use review_store::{BlobStore, Clock, ResetOutcome};

use crate::cli::{CodeArgs, ExportArgs, FilterArgs, ResetArgs, ShowArgs};

pub fn run_list<B: BlobStore, C: Clock>(
    session: &mut ReviewSession<B, C>,
    args: &FilterArgs,
    style: DateStyle,
) -> Result<()> {
    session.set_criteria(args.criteria());
    println!("{}", document_table(session, style));
    println!("{}", session.stats());
    Ok(())
}

pub fn run_show<B: BlobStore, C: Clock>(
    session: &mut ReviewSession<B, C>,
    args: &ShowArgs,
    style: DateStyle,
) -> Result<()> {
    let id = parse_id(&args.id)?;
    session.select(Some(&id)).map_err(user_error)?;
    let doc = session
        .selected_document()
        .ok_or_else(|| anyhow!("document {id} is not in the corpus"))?;
    println!("{}", document_detail(doc, session.coding_for(&id), style));
    Ok(())
}

pub fn run_code<B: BlobStore, C: Clock>(
    session: &mut ReviewSession<B, C>,
    args: &CodeArgs,
) -> Result<()> {
    let id = parse_id(&args.id)?;
    let span = info_span!("code", doc_id = %id);
    let _guard = span.enter();

    session.select(Some(&id)).map_err(user_error)?;
    let draft = CodingDraft::new(args.resp.into(), args.privilege.into())
        .with_issues(args.issues.as_str())
        .with_notes(args.notes.as_str());
    let record = session
        .save_coding(draft)
        .map_err(user_error)?
        .ok_or_else(|| anyhow!("document {id} could not be selected"))?;
    info!(
        issues = redact_value(&record.issues),
        notes = redact_value(&record.notes),
        "coding saved from command line"
    );
    println!("Saved {id}: {}", record.summary());
    Ok(())
}

pub fn run_stats<B: BlobStore, C: Clock>(
    session: &mut ReviewSession<B, C>,
    args: &FilterArgs,
) -> Result<()> {
    session.set_criteria(args.criteria());
    println!("{}", session.stats());
    Ok(())
}

pub fn run_facets<B: BlobStore, C: Clock>(session: &ReviewSession<B, C>) -> Result<()> {
    println!("{}", facets_table(&session.facets()));
    Ok(())
}

pub fn run_export<B: BlobStore, C: Clock>(
    session: &ReviewSession<B, C>,
    args: &ExportArgs,
) -> Result<PathBuf> {
    let export = session.export_csv().map_err(user_error)?;
    let target = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
    let path = export
        .write_to(&target)
        .with_context(|| format!("write export to {}", target.display()))?;
    println!("Exported {} documents to {}", export.rows, path.display());
    Ok(path)
}

pub fn run_reset<B: BlobStore, C: Clock>(
    session: &mut ReviewSession<B, C>,
    args: &ResetArgs,
) -> Result<()> {
    let coded = session.stats().coded;
    let outcome = session
        .reset_all(|| {
            args.yes
                || confirm_on_stdin(&format!(
                    "Clear saved coding for {coded} documents? This cannot be undone. [y/N] "
                ))
        })
        .map_err(user_error)?;
    match outcome {
        ResetOutcome::Declined => println!("Reset cancelled."),
        ResetOutcome::Cleared { removed } => println!("Cleared coding for {removed} documents."),
    }
    Ok(())
}

pub fn run_review<B: BlobStore, C: Clock>(
    session: &mut ReviewSession<B, C>,
    style: DateStyle,
    export_dir: &Path,
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut review = ReviewLoop::new(stdin.lock(), stdout.lock(), style, export_dir);
    review.run(session)
}

fn parse_id(raw: &str) -> Result<DocId> {
    DocId::new(raw).with_context(|| format!("invalid document id {raw:?}"))
}

fn user_error(error: ReviewError) -> anyhow::Error {
    let message = error.user_message();
    anyhow::Error::new(error).context(message)
}

fn confirm_on_stdin(question: &str) -> bool {
    print!("{question}");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(0) | Err(_) => false,
        Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
    }
}
