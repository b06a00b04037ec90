mod common;

use std::sync::Arc;

use tracheo_core::catalog::field;
use tracheo_core::models::field::FieldValue;
use tracheo_core::models::section::SectionId;
use tracheo_rules::error::RulesError;
use tracheo_storage::memory::MemoryStore;
use tracheo_wizard::config::WizardConfig;
use tracheo_wizard::controller::{Advance, Phase};
use tracheo_wizard::error::{SubmitError, WizardError};

use common::{fill, mount, text, valid_answers, walk_to_last, ScriptedRecords};

#[tokio::test]
async fn starts_on_the_first_section_with_nothing_committed() {
    let wizard = mount(
        &WizardConfig::default(),
        Arc::new(MemoryStore::new()),
        Arc::new(ScriptedRecords::default()),
    )
    .await;
    assert_eq!(wizard.active_section(), SectionId::Child);
    assert!(wizard.values().is_empty());
    assert!(wizard.committed().is_empty());
    assert_eq!(wizard.state().phase, Phase::InProgress);
    assert_eq!(wizard.progress().filled, 0);
    assert_eq!(wizard.progress().required, 4);
}

#[tokio::test]
async fn failed_advance_stays_put_and_can_be_repeated() {
    let mut wizard = mount(
        &WizardConfig::default(),
        Arc::new(MemoryStore::new()),
        Arc::new(ScriptedRecords::default()),
    )
    .await;
    fill(&mut wizard, SectionId::Child);
    wizard.set_field(field::HEALTH_ID, text("123456789012345")).unwrap();

    for _ in 0..2 {
        let err = wizard.advance().await.unwrap_err();
        let errors = err.validation_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field_id, field::HEALTH_ID);
        assert_eq!(wizard.active_section(), SectionId::Child);
        assert!(wizard.committed().is_empty());
        assert_eq!(wizard.values().len(), 4);
    }

    wizard.set_field(field::HEALTH_ID, text("123456789012348")).unwrap();
    assert_eq!(wizard.advance().await.unwrap(), Advance::Moved(SectionId::Birth));
    assert!(wizard.committed().contains_key(&SectionId::Child));
    assert!(wizard.state().completed.contains(&SectionId::Child));
    assert!(wizard.values().is_empty());
}

#[tokio::test]
async fn retreat_reloads_committed_data() {
    let mut wizard = mount(
        &WizardConfig::default(),
        Arc::new(MemoryStore::new()),
        Arc::new(ScriptedRecords::default()),
    )
    .await;
    assert!(matches!(wizard.retreat(), Err(WizardError::FirstSection)));

    fill(&mut wizard, SectionId::Child);
    wizard.advance().await.unwrap();
    fill(&mut wizard, SectionId::Birth);
    wizard.advance().await.unwrap();
    assert_eq!(wizard.active_section(), SectionId::Guardian);
    let birth_before = wizard.committed()[&SectionId::Birth].clone();

    assert_eq!(wizard.retreat().unwrap(), SectionId::Birth);
    assert_eq!(wizard.values().get(field::BIRTH_WEIGHT), Some(&text("3200")));
    assert!(wizard.progress().is_complete());

    // Advancing again without edits re-commits the same data.
    assert_eq!(wizard.advance().await.unwrap(), Advance::Moved(SectionId::Guardian));
    assert_eq!(wizard.committed()[&SectionId::Birth], birth_before);
    assert_eq!(birth_before.fields.len(), 3);
    assert_eq!(wizard.committed().len(), 2);
}

#[tokio::test]
async fn invalidating_a_committed_section_evicts_it() {
    let mut wizard = mount(
        &WizardConfig::default(),
        Arc::new(MemoryStore::new()),
        Arc::new(ScriptedRecords::default()),
    )
    .await;
    fill(&mut wizard, SectionId::Child);
    wizard.advance().await.unwrap();
    wizard.retreat().unwrap();

    wizard.set_field(field::CHILD_NAME, text("Ana")).unwrap();
    let err = wizard.advance().await.unwrap_err();
    assert!(matches!(err, WizardError::Validation { section: SectionId::Child, .. }));
    assert!(!wizard.committed().contains_key(&SectionId::Child));
    assert!(!wizard.state().completed.contains(&SectionId::Child));
}

#[tokio::test]
async fn guardian_age_gap_uses_the_committed_child() {
    let mut wizard = mount(
        &WizardConfig::default(),
        Arc::new(MemoryStore::new()),
        Arc::new(ScriptedRecords::default()),
    )
    .await;
    fill(&mut wizard, SectionId::Child);
    wizard.advance().await.unwrap();
    fill(&mut wizard, SectionId::Birth);
    wizard.advance().await.unwrap();

    fill(&mut wizard, SectionId::Guardian);
    wizard
        .set_field(field::GUARDIAN_BIRTH_DATE, text("01/06/2011"))
        .unwrap();
    let live = wizard.validate_field(field::GUARDIAN_BIRTH_DATE).unwrap();
    assert_eq!(live.len(), 1);
    assert!(live[0].message.contains("14 years older"));
    assert!(wizard.advance().await.is_err());

    wizard
        .set_field(field::GUARDIAN_BIRTH_DATE, text("01/01/2000"))
        .unwrap();
    assert!(wizard.validate_field(field::GUARDIAN_BIRTH_DATE).unwrap().is_empty());
    assert_eq!(wizard.advance().await.unwrap(), Advance::Moved(SectionId::Address));
}

#[tokio::test]
async fn changing_a_trigger_clears_its_dependents() {
    let mut wizard = mount(
        &WizardConfig::default(),
        Arc::new(MemoryStore::new()),
        Arc::new(ScriptedRecords::default()),
    )
    .await;
    fill(&mut wizard, SectionId::Child);
    wizard.advance().await.unwrap();

    wizard.set_field(field::NICU_STAY, text("yes")).unwrap();
    wizard.set_field(field::NICU_DAYS, text("12")).unwrap();
    let cleared = wizard.set_field(field::NICU_STAY, text("no")).unwrap();
    assert_eq!(cleared, vec![field::NICU_DAYS]);
    assert!(wizard.values()[field::NICU_DAYS].is_empty());
    assert_eq!(wizard.values()[field::NICU_STAY], text("no"));

    // Switching back does not bring the old answer back.
    assert!(wizard.set_field(field::NICU_STAY, text("yes")).unwrap().is_empty());
    assert!(wizard.values()[field::NICU_DAYS].is_empty());
}

#[tokio::test]
async fn fields_outside_the_active_section_are_rejected() {
    let mut wizard = mount(
        &WizardConfig::default(),
        Arc::new(MemoryStore::new()),
        Arc::new(ScriptedRecords::default()),
    )
    .await;
    let err = wizard.set_field(field::PHONE, text("(11) 91234-5678")).unwrap_err();
    assert!(matches!(
        err,
        WizardError::Rules(RulesError::FieldNotInSection { section: SectionId::Child, .. })
    ));
    let err = wizard.set_field("nickname", text("Aninha")).unwrap_err();
    assert!(matches!(err, WizardError::Rules(RulesError::UnknownField(_))));
    assert!(wizard.values().is_empty());
}

#[tokio::test]
async fn finalize_is_only_offered_on_the_last_section() {
    let mut wizard = mount(
        &WizardConfig::default(),
        Arc::new(MemoryStore::new()),
        Arc::new(ScriptedRecords::default()),
    )
    .await;
    fill(&mut wizard, SectionId::Child);
    assert!(matches!(
        wizard.finalize().await,
        Err(WizardError::NotOnLastSection(SectionId::Child))
    ));
    assert!(wizard.committed().is_empty());
}

#[tokio::test]
async fn full_walk_submits_one_merged_record() {
    let records = Arc::new(ScriptedRecords::default());
    let mut wizard = mount(&WizardConfig::default(), Arc::new(MemoryStore::new()), records.clone()).await;

    walk_to_last(&mut wizard).await;
    fill(&mut wizard, SectionId::Services);
    let outcome = wizard.advance().await.unwrap();
    assert_eq!(
        outcome,
        Advance::Submitted {
            record_id: "rec-1".to_string()
        }
    );
    assert!(wizard.is_submitted());
    assert_eq!(records.submissions(), 1);

    let received = records.received.lock().unwrap();
    let record = &received[0];
    let expected: usize = SectionId::ALL.iter().map(|s| valid_answers(*s).len()).sum();
    assert_eq!(record.fields.len(), expected);
    assert_eq!(record.get(field::HEALTH_ID), Some(&text("123456789012348")));
    assert_eq!(record.get(field::CONSENT), Some(&text("accepted")));
    assert_eq!(
        record.get(field::INDICATIONS),
        Some(&FieldValue::tags(["neurological"]))
    );
}

#[tokio::test]
async fn submitted_wizard_refuses_further_input() {
    let mut wizard = mount(
        &WizardConfig::default(),
        Arc::new(MemoryStore::new()),
        Arc::new(ScriptedRecords::default()),
    )
    .await;
    walk_to_last(&mut wizard).await;
    fill(&mut wizard, SectionId::Services);
    assert_eq!(wizard.finalize().await.unwrap(), "rec-1");

    assert!(matches!(
        wizard.set_field(field::CONSENT, text("declined")),
        Err(WizardError::AlreadySubmitted)
    ));
    assert!(matches!(wizard.finalize().await, Err(WizardError::AlreadySubmitted)));
    assert!(matches!(wizard.retreat(), Err(WizardError::AlreadySubmitted)));
}

#[tokio::test]
async fn duplicate_submission_keeps_the_last_section_for_retry() {
    let records = Arc::new(ScriptedRecords::failing_with(vec![SubmitError::Duplicate]));
    let mut wizard = mount(&WizardConfig::default(), Arc::new(MemoryStore::new()), records.clone()).await;
    walk_to_last(&mut wizard).await;
    fill(&mut wizard, SectionId::Services);

    let err = wizard.finalize().await.unwrap_err();
    assert!(matches!(err, WizardError::Submit(SubmitError::Duplicate)));
    assert_eq!(err.to_string(), "submission failed: a duplicate identifier already exists");
    assert_eq!(wizard.active_section(), SectionId::Services);
    assert_eq!(wizard.values().len(), 3);
    assert!(!wizard.is_submitted());

    assert_eq!(wizard.finalize().await.unwrap(), "rec-2");
    assert_eq!(records.submissions(), 2);
}

#[tokio::test]
async fn rejected_submission_surfaces_the_reason() {
    let records = Arc::new(ScriptedRecords::failing_with(vec![SubmitError::Rejected(
        "service unavailable".to_string(),
    )]));
    let mut wizard = mount(&WizardConfig::default(), Arc::new(MemoryStore::new()), records).await;
    walk_to_last(&mut wizard).await;
    fill(&mut wizard, SectionId::Services);

    let err = wizard.advance().await.unwrap_err();
    assert!(err.to_string().contains("service unavailable"));
    assert_eq!(wizard.active_section(), SectionId::Services);
    assert_eq!(wizard.committed().len(), 8);
}

#[tokio::test]
async fn invalid_last_section_is_never_submitted() {
    let records = Arc::new(ScriptedRecords::default());
    let mut wizard = mount(&WizardConfig::default(), Arc::new(MemoryStore::new()), records.clone()).await;
    walk_to_last(&mut wizard).await;
    fill(&mut wizard, SectionId::Services);
    wizard.set_field(field::CONSENT, text("declined")).unwrap();

    let err = wizard.finalize().await.unwrap_err();
    assert_eq!(err.validation_errors()[0].field_id, field::CONSENT);
    assert_eq!(records.submissions(), 0);
}
