use std::collections::BTreeSet;
use std::sync::Arc;

use tracheo_core::catalog;
use tracheo_core::models::draft::DraftRecord;
use tracheo_core::models::field::{FieldValue, FieldValues};
use tracheo_core::models::record::IntakeRecord;
use tracheo_core::models::section::SectionId;
use tracheo_core::models::section_data::CommittedSections;
use tracheo_rules::error::RulesError;
use tracheo_rules::progress::{self, Completion};
use tracheo_rules::validation::{ValidationContext, ValidationError};
use tracheo_storage::store::KeyValueStore;

use crate::config::{DraftScope, WizardConfig};
use crate::draft::DraftStore;
use crate::error::WizardError;
use crate::record_store::RecordStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Submitted { record_id: String },
}

/// Navigation and commit state. Only the controller mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub active: SectionId,
    /// Validated data per section. Never holds a section whose last
    /// validation failed.
    pub committed: CommittedSections,
    pub completed: BTreeSet<SectionId>,
    pub phase: Phase,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            active: SectionId::FIRST,
            committed: CommittedSections::new(),
            completed: BTreeSet::new(),
            phase: Phase::InProgress,
        }
    }
}

/// Result of a successful [`WizardController::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Moved(SectionId),
    Submitted { record_id: String },
}

/// Drives one intake from section 1 to submission.
///
/// The field buffer holds the active section's in-progress values. It is
/// never the source of truth for committed data: advancing copies the
/// validated values into `committed`, and entering a section reloads the
/// buffer from there.
pub struct WizardController {
    state: WizardState,
    buffer: FieldValues,
    drafts: DraftStore,
    records: Arc<dyn RecordStore>,
    reference_date: Option<jiff::civil::Date>,
}

impl WizardController {
    pub fn new(
        config: &WizardConfig,
        draft_store: Arc<dyn KeyValueStore>,
        records: Arc<dyn RecordStore>,
    ) -> Self {
        Self {
            state: WizardState::default(),
            buffer: FieldValues::new(),
            drafts: DraftStore::new(draft_store, config),
            records,
            reference_date: None,
        }
    }

    /// Create a wizard and restore the stored draft, if any.
    pub async fn mount(
        config: &WizardConfig,
        draft_store: Arc<dyn KeyValueStore>,
        records: Arc<dyn RecordStore>,
    ) -> Self {
        let mut wizard = Self::new(config, draft_store, records);
        if let Some(draft) = wizard.drafts.load().await {
            wizard.restore(draft);
        }
        wizard
    }

    /// Pin "today" for age and future-date rules instead of the system clock.
    pub fn with_reference_date(mut self, date: jiff::civil::Date) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn active_section(&self) -> SectionId {
        self.state.active
    }

    pub fn values(&self) -> &FieldValues {
        &self.buffer
    }

    pub fn committed(&self) -> &CommittedSections {
        &self.state.committed
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.state.phase, Phase::Submitted { .. })
    }

    pub fn has_pending_draft(&self) -> bool {
        self.drafts.has_pending()
    }

    /// Live completion indicator for the active section.
    pub fn progress(&self) -> Completion {
        progress::completion(self.state.active, &self.buffer)
    }

    /// Set a field of the active section.
    ///
    /// Dependent fields whose trigger no longer matches are reset to their
    /// empty value in the same step; their ids are returned. A draft write is
    /// scheduled.
    pub fn set_field(
        &mut self,
        field_id: &str,
        value: FieldValue,
    ) -> Result<Vec<&'static str>, WizardError> {
        self.ensure_in_progress()?;
        let def = catalog::field(field_id)
            .ok_or_else(|| RulesError::UnknownField(field_id.to_string()))?;
        if !catalog::section(self.state.active).contains(def.id) {
            return Err(RulesError::FieldNotInSection {
                field_id: field_id.to_string(),
                section: self.state.active,
            }
            .into());
        }

        let cleared = tracheo_rules::conditional::on_field_changed(def.id, &value, &self.buffer);
        for &dependent in &cleared {
            if let Some(dep) = catalog::field(dependent) {
                self.buffer
                    .insert(dependent.to_string(), dep.field_type.empty_value());
            }
        }
        self.buffer.insert(def.id.to_string(), value);
        if !cleared.is_empty() {
            tracing::debug!(field = def.id, cleared = ?cleared, "dependent fields cleared");
        }

        self.schedule_draft();
        Ok(cleared)
    }

    /// Errors for one field of the active section, for live feedback.
    pub fn validate_field(&self, field_id: &str) -> Result<Vec<ValidationError>, WizardError> {
        let ctx = ValidationContext::new(&self.state.committed, self.today());
        let rules = tracheo_rules::rules_for(self.state.active);
        Ok(rules.validate_field(field_id, &self.buffer, &ctx)?)
    }

    /// Validate and commit the active section, then move to the next one.
    /// On the last section this submits the registration.
    pub async fn advance(&mut self) -> Result<Advance, WizardError> {
        self.ensure_in_progress()?;
        self.commit_active()?;

        match self.state.active.next() {
            Some(next) => {
                self.enter(next);
                if self.drafts.scope() == DraftScope::WholeWizard {
                    self.schedule_draft();
                }
                Ok(Advance::Moved(next))
            }
            None => {
                let record_id = self.submit().await?;
                Ok(Advance::Submitted { record_id })
            }
        }
    }

    /// Move back one section without committing the active one.
    pub fn retreat(&mut self) -> Result<SectionId, WizardError> {
        self.ensure_in_progress()?;
        let prev = self.state.active.prev().ok_or(WizardError::FirstSection)?;
        self.enter(prev);
        if self.drafts.scope() == DraftScope::WholeWizard {
            self.schedule_draft();
        }
        Ok(prev)
    }

    /// Validate the last section and submit the merged registration.
    ///
    /// On failure the wizard stays on the last section with its buffer
    /// intact, so calling this again retries.
    pub async fn finalize(&mut self) -> Result<String, WizardError> {
        self.ensure_in_progress()?;
        if self.state.active != SectionId::LAST {
            return Err(WizardError::NotOnLastSection(self.state.active));
        }
        self.commit_active()?;
        self.submit().await
    }

    /// Stop without submitting. A draft write still waiting on its debounce
    /// is dropped, not flushed.
    pub fn abandon(mut self) {
        self.drafts.cancel();
        tracing::debug!(section = %self.state.active, "wizard abandoned");
    }

    /// Wait for the scheduled draft write to land.
    pub async fn flush_draft(&mut self) {
        self.drafts.flush().await;
    }

    fn today(&self) -> jiff::civil::Date {
        self.reference_date
            .unwrap_or_else(|| jiff::Zoned::now().date())
    }

    fn ensure_in_progress(&self) -> Result<(), WizardError> {
        match self.state.phase {
            Phase::InProgress => Ok(()),
            Phase::Submitted { .. } => Err(WizardError::AlreadySubmitted),
        }
    }

    /// Validate the buffer against the active section's rules and store the
    /// result. A failure evicts any earlier commit of this section.
    fn commit_active(&mut self) -> Result<(), WizardError> {
        let active = self.state.active;
        let ctx = ValidationContext::new(&self.state.committed, self.today());
        match tracheo_rules::validate(active, &self.buffer, &ctx) {
            Ok(data) => {
                self.state.committed.insert(active, data);
                self.state.completed.insert(active);
                tracing::info!(section = %active, "section committed");
                Ok(())
            }
            Err(errors) => {
                if self.state.committed.remove(&active).is_some() {
                    self.state.completed.remove(&active);
                    tracing::debug!(section = %active, "stale commit evicted");
                }
                Err(WizardError::Validation {
                    section: active,
                    errors,
                })
            }
        }
    }

    async fn submit(&mut self) -> Result<String, WizardError> {
        let missing: Vec<SectionId> = SectionId::ALL
            .into_iter()
            .filter(|id| !self.state.committed.contains_key(id))
            .collect();
        if !missing.is_empty() {
            return Err(WizardError::IncompleteSections(missing));
        }

        let record = IntakeRecord::merge(&self.state.committed, jiff::Timestamp::now());
        match self.records.submit(&record).await {
            Ok(record_id) => {
                tracing::info!(record_id = %record_id, fields = record.fields.len(), "registration submitted");
                self.drafts.clear().await;
                self.buffer.clear();
                self.state.phase = Phase::Submitted {
                    record_id: record_id.clone(),
                };
                Ok(record_id)
            }
            Err(e) => {
                tracing::warn!(error = %e, "registration submission failed");
                Err(e.into())
            }
        }
    }

    /// Make `section` active and load its committed data, if any.
    fn enter(&mut self, section: SectionId) {
        self.state.active = section;
        self.buffer = self
            .state
            .committed
            .get(&section)
            .map(|data| data.fields.clone())
            .unwrap_or_default();
        tracing::debug!(section = %section, prefilled = self.buffer.len(), "section entered");
    }

    fn schedule_draft(&mut self) {
        self.drafts
            .save(self.state.active, &self.buffer, &self.state.committed);
    }

    fn restore(&mut self, draft: DraftRecord) {
        match self.drafts.scope() {
            DraftScope::ActiveSection => {
                // Only the buffer survives; it always lands in section 1.
                self.state.active = SectionId::FIRST;
                self.buffer = draft.captured_fields;
            }
            DraftScope::WholeWizard => {
                self.state.completed = draft.committed_sections.keys().copied().collect();
                self.state.committed = draft.committed_sections;
                let first_gap = SectionId::ALL
                    .into_iter()
                    .find(|id| !self.state.committed.contains_key(id));
                match first_gap {
                    Some(gap) if gap < draft.section => self.enter(gap),
                    _ => {
                        self.state.active = draft.section;
                        self.buffer = draft.captured_fields;
                    }
                }
            }
        }
        tracing::info!(section = %self.state.active, fields = self.buffer.len(), "draft restored");
    }
}
