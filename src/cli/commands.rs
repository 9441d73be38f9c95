use std::future::Future;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use license_admin::config::FormConfig;
use license_admin::{AppError, AppResult, FormFields, MutationWorkflow, Registry};
use super::OutputFormat;

/// Field values given on the command line; `None` leaves the form value alone.
pub struct FieldEdits {
    pub hwid: Option<String>,
    pub expire_date: Option<String>,
    pub message: Option<String>,
}

impl FieldEdits {
    fn apply(self, fields: &mut FormFields) {
        if let Some(hwid) = self.hwid {
            fields.hwid = hwid;
        }
        if let Some(expire_date) = self.expire_date {
            fields.expire_date = expire_date;
        }
        if let Some(message) = self.message {
            fields.footer_message = message;
        }
    }
}

pub async fn list<R: Registry + ?Sized>(
    workflow: &MutationWorkflow<R>,
    format: OutputFormat,
) -> AppResult<()> {
    workflow.refresh().await?;
    format.print(&workflow.controller().snapshot());
    Ok(())
}

pub async fn create<R: Registry + ?Sized>(
    workflow: &MutationWorkflow<R>,
    defaults: &FormConfig,
    user_id: String,
    edits: FieldEdits,
    format: OutputFormat,
) -> AppResult<()> {
    let mut fields = FormFields { user_id, ..FormFields::for_create(defaults) };
    edits.apply(&mut fields);

    workflow.submit_create(&fields).await?;
    format.print(&workflow.controller().snapshot());
    Ok(())
}

pub async fn edit<R: Registry + ?Sized>(
    workflow: &MutationWorkflow<R>,
    user_id: &str,
    edits: FieldEdits,
    format: OutputFormat,
) -> AppResult<()> {
    let records = workflow.controller().refresh().await?;
    let record = records
        .iter()
        .find(|r| r.user_id == user_id)
        .ok_or_else(|| AppError::UnknownUser(user_id.to_string()))?;

    let mut fields = FormFields::for_edit(record);
    edits.apply(&mut fields);

    workflow.submit_edit(&record.user_id, &fields).await?;
    format.print(&workflow.controller().snapshot());
    Ok(())
}

/// A failed delete is only logged, matching the panel this tool replaces.
pub async fn delete<R: Registry + ?Sized>(
    workflow: &MutationWorkflow<R>,
    user_id: &str,
    assume_yes: bool,
    format: OutputFormat,
) -> AppResult<()> {
    delete_with(workflow, user_id, format, |prompt| async move {
        if assume_yes {
            return Ok(true);
        }
        ask(&prompt).await
    })
    .await
}

async fn delete_with<R, F, Fut>(
    workflow: &MutationWorkflow<R>,
    user_id: &str,
    format: OutputFormat,
    confirm: F,
) -> AppResult<()>
where
    R: Registry + ?Sized,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = AppResult<bool>>,
{
    let confirmation = workflow.request_delete(user_id);

    if !confirm(confirmation.prompt()).await? {
        workflow.decline_delete(confirmation);
        return Ok(());
    }

    match workflow.confirm_delete(confirmation).await {
        Ok(()) => format.print(&workflow.controller().snapshot()),
        // TODO: decide whether a failed delete should be shown to the operator
        Err(e) if e.is_registry_unavailable() => {}
        Err(e) => return Err(e),
    }
    Ok(())
}

async fn ask(prompt: &str) -> AppResult<bool> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("{} [y/N] ", prompt).as_bytes()).await?;
    stdout.flush().await?;

    let mut answer = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut answer).await?;
    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
