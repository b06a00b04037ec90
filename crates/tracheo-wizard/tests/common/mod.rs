#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tracheo_core::catalog::field;
use tracheo_core::models::field::FieldValue;
use tracheo_core::models::record::IntakeRecord;
use tracheo_core::models::section::SectionId;
use tracheo_storage::error::StorageError;
use tracheo_storage::memory::MemoryStore;
use tracheo_storage::store::{BoxFuture, KeyValueStore};
use tracheo_wizard::config::WizardConfig;
use tracheo_wizard::controller::WizardController;
use tracheo_wizard::error::SubmitError;
use tracheo_wizard::record_store::RecordStore;

pub fn today() -> jiff::civil::Date {
    jiff::civil::date(2026, 10, 19)
}

pub fn text(s: &str) -> FieldValue {
    FieldValue::text(s)
}

/// Record store that replays scripted outcomes, then accepts everything.
#[derive(Default)]
pub struct ScriptedRecords {
    outcomes: Mutex<Vec<Result<String, SubmitError>>>,
    pub received: Mutex<Vec<IntakeRecord>>,
}

impl ScriptedRecords {
    pub fn failing_with(errors: Vec<SubmitError>) -> Self {
        Self {
            outcomes: Mutex::new(errors.into_iter().map(Err).rev().collect()),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn submissions(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

impl RecordStore for ScriptedRecords {
    fn submit<'a>(&'a self, record: &'a IntakeRecord) -> BoxFuture<'a, Result<String, SubmitError>> {
        Box::pin(async move {
            self.received.lock().unwrap().push(record.clone());
            let scripted = self.outcomes.lock().unwrap().pop();
            scripted.unwrap_or_else(|| Ok(format!("rec-{}", self.submissions())))
        })
    }
}

/// Memory store that counts writes.
#[derive(Default)]
pub struct CountingStore {
    pub inner: MemoryStore,
    writes: AtomicUsize,
}

impl CountingStore {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for CountingStore {
    fn write<'a>(&'a self, key: &'a str, blob: Vec<u8>) -> BoxFuture<'a, Result<(), StorageError>> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.write(key, blob)
    }

    fn read<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<Vec<u8>>, StorageError>> {
        self.inner.read(key)
    }

    fn delete<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<(), StorageError>> {
        self.inner.delete(key)
    }
}

/// Store whose every operation fails.
pub struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn write<'a>(&'a self, key: &'a str, _blob: Vec<u8>) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            Err(StorageError::Write {
                key: key.to_string(),
                source: std::io::Error::other("disk full"),
            })
        })
    }

    fn read<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<Vec<u8>>, StorageError>> {
        Box::pin(async move {
            Err(StorageError::Read {
                key: key.to_string(),
                source: std::io::Error::other("unreadable"),
            })
        })
    }

    fn delete<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            Err(StorageError::Delete {
                key: key.to_string(),
                source: std::io::Error::other("read-only"),
            })
        })
    }
}

/// Valid answers for every section, for a child born 15/03/2024.
pub fn valid_answers(section: SectionId) -> Vec<(&'static str, FieldValue)> {
    match section {
        SectionId::Child => vec![
            (field::CHILD_NAME, text("Ana Souza")),
            (field::BIRTH_DATE, text("15/03/2024")),
            (field::SEX, text("female")),
            (field::HEALTH_ID, text("123456789012348")),
        ],
        SectionId::Birth => vec![
            (field::GESTATIONAL_AGE, text("37_41")),
            (field::BIRTH_WEIGHT, text("3200")),
            (field::NICU_STAY, text("no")),
        ],
        SectionId::Guardian => vec![
            (field::GUARDIAN_NAME, text("Maria Souza")),
            (field::GUARDIAN_BIRTH_DATE, text("01/01/2000")),
            (field::RELATIONSHIP, text("mother")),
            (field::PHONE, text("(11) 91234-5678")),
        ],
        SectionId::Address => vec![
            (field::POSTAL_CODE, text("01310-100")),
            (field::STREET, text("Avenida Paulista")),
            (field::NUMBER, text("1000")),
            (field::CITY, text("São Paulo")),
            (field::STATE, text("SP")),
        ],
        SectionId::Tracheostomy => vec![
            (field::PROCEDURE_AGE, text("first_month")),
            (field::INDICATIONS, FieldValue::tags(["neurological"])),
            (field::CANNULA_TYPE, text("silicone")),
            (field::CANNULA_SIZE, text("3.5")),
        ],
        SectionId::Respiratory => vec![
            (field::VENTILATION, text("none")),
            (field::OXYGEN_USE, text("no")),
        ],
        SectionId::Care => vec![
            (field::CAREGIVERS, FieldValue::tags(["mother"])),
            (field::SUCTION_FREQUENCY, text("5_to_10_daily")),
            (field::HOME_CARE, text("no")),
        ],
        SectionId::Services => vec![
            (field::FOLLOW_UP, FieldValue::tags(["pulmonology"])),
            (field::REFERENCE_HOSPITAL, text("Hospital das Clínicas")),
            (field::CONSENT, text("accepted")),
        ],
    }
}

pub fn fill(wizard: &mut WizardController, section: SectionId) {
    for (id, value) in valid_answers(section) {
        wizard.set_field(id, value).unwrap();
    }
}

pub async fn mount(
    config: &WizardConfig,
    store: Arc<dyn KeyValueStore>,
    records: Arc<dyn RecordStore>,
) -> WizardController {
    WizardController::mount(config, store, records)
        .await
        .with_reference_date(today())
}

/// Fill and commit sections 1 through 7, leaving the wizard on section 8.
pub async fn walk_to_last(wizard: &mut WizardController) {
    for section in SectionId::ALL {
        if section == SectionId::LAST {
            break;
        }
        fill(wizard, section);
        wizard.advance().await.unwrap();
    }
    assert_eq!(wizard.active_section(), SectionId::LAST);
}
