use std::collections::BTreeMap;
use std::path::Path;

use tracheo_core::models::field::FieldValues;
use tracheo_core::models::section::SectionId;
use tracheo_wizard::controller::{Advance, WizardController};
use tracheo_wizard::error::WizardError;

/// Answers keyed by section slug, e.g. `{"child": {"child_name": "..."}}`.
pub type Answers = BTreeMap<SectionId, FieldValues>;

pub fn load_answers(path: &Path) -> eyre::Result<Answers> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read answers at {}: {e}", path.display()))?;
    Ok(serde_json::from_str(&contents)?)
}

/// Feed each section its answers and advance until the registration is
/// submitted. Sections already committed by a restored draft keep their data.
///
/// On a validation failure the draft is flushed so a corrected answers file
/// picks up from the stored input.
pub async fn run(wizard: &mut WizardController, answers: &Answers) -> eyre::Result<String> {
    loop {
        let section = wizard.active_section();
        if let Some(fields) = answers.get(&section) {
            for (field_id, value) in fields {
                let cleared = wizard.set_field(field_id, value.clone())?;
                for dependent in cleared {
                    tracing::info!(field = dependent, "answer cleared by {field_id}");
                }
            }
        }

        let progress = wizard.progress();
        tracing::debug!(
            section = %section,
            filled = progress.filled,
            required = progress.required,
            "section filled"
        );

        match wizard.advance().await {
            Ok(Advance::Moved(next)) => {
                tracing::debug!(section = %next, "moved on");
            }
            Ok(Advance::Submitted { record_id }) => return Ok(record_id),
            Err(WizardError::Validation { section, errors }) => {
                wizard.flush_draft().await;
                let detail = errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(eyre::eyre!("section {section} is invalid: {detail}"));
            }
            Err(e) => {
                wizard.flush_draft().await;
                return Err(e.into());
            }
        }
    }
}
