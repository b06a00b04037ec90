//! The field catalog.
//!
//! Every field of the intake wizard, its section, type, options, and whether
//! it is required regardless of other answers. Conditional requiredness lives
//! in `tracheo-rules`; this table is the only place static requiredness is
//! declared.

use crate::error::CoreError;
use crate::models::field::{FieldDefinition, FieldType};
use crate::models::section::{Section, SectionId};

/// Field ids.
pub mod field {
    // 1. child
    pub const CHILD_NAME: &str = "child_name";
    pub const BIRTH_DATE: &str = "birth_date";
    pub const SEX: &str = "sex";
    pub const HEALTH_ID: &str = "health_id";

    // 2. birth
    pub const GESTATIONAL_AGE: &str = "gestational_age";
    pub const BIRTH_WEIGHT: &str = "birth_weight";
    pub const NICU_STAY: &str = "nicu_stay";
    pub const NICU_DAYS: &str = "nicu_days";

    // 3. guardian
    pub const GUARDIAN_NAME: &str = "guardian_name";
    pub const GUARDIAN_BIRTH_DATE: &str = "guardian_birth_date";
    pub const RELATIONSHIP: &str = "relationship";
    pub const RELATIONSHIP_OTHER: &str = "relationship_other";
    pub const PHONE: &str = "phone";
    pub const EMAIL: &str = "email";

    // 4. address
    pub const POSTAL_CODE: &str = "postal_code";
    pub const STREET: &str = "street";
    pub const NUMBER: &str = "number";
    pub const COMPLEMENT: &str = "complement";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";

    // 5. tracheostomy
    pub const PROCEDURE_AGE: &str = "procedure_age";
    pub const INDICATIONS: &str = "indications";
    pub const INDICATION_OTHER: &str = "indication_other";
    pub const CANNULA_TYPE: &str = "cannula_type";
    pub const CANNULA_SIZE: &str = "cannula_size";

    // 6. respiratory
    pub const VENTILATION: &str = "ventilation";
    pub const VENTILATOR_MODEL: &str = "ventilator_model";
    pub const OXYGEN_USE: &str = "oxygen_use";
    pub const OXYGEN_FLOW: &str = "oxygen_flow";

    // 7. care
    pub const CAREGIVERS: &str = "caregivers";
    pub const CAREGIVER_OTHER: &str = "caregiver_other";
    pub const SUCTION_FREQUENCY: &str = "suction_frequency";
    pub const HOME_CARE: &str = "home_care";
    pub const HOME_CARE_PROVIDER: &str = "home_care_provider";

    // 8. services
    pub const FOLLOW_UP: &str = "follow_up";
    pub const FOLLOW_UP_OTHER: &str = "follow_up_other";
    pub const REFERENCE_HOSPITAL: &str = "reference_hospital";
    pub const CONSENT: &str = "consent";
}

/// Option tags shared by enum and multi-enum fields.
pub mod options {
    pub const YES: &str = "yes";
    pub const NO: &str = "no";
    pub const OTHER: &str = "other";
    pub const ACCEPTED: &str = "accepted";

    pub const YES_NO: &[&str] = &[YES, NO];
    pub const SEX: &[&str] = &["female", "male"];

    pub const GESTATION_UNDER_28: &str = "menos_28";
    pub const GESTATION_28_33: &str = "28_33";
    pub const GESTATION_34_36: &str = "34_36";
    pub const GESTATION_37_41: &str = "37_41";
    pub const GESTATIONAL_AGE: &[&str] = &[
        GESTATION_UNDER_28,
        GESTATION_28_33,
        GESTATION_34_36,
        GESTATION_37_41,
    ];

    pub const RELATIONSHIP: &[&str] = &["mother", "father", "grandparent", "sibling", OTHER];

    pub const STATES: &[&str] = &[
        "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB",
        "PR", "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
    ];

    pub const FIRST_MONTH: &str = "first_month";
    pub const ONE_TO_SIX_MONTHS: &str = "one_to_six_months";
    pub const SIX_TO_TWELVE_MONTHS: &str = "six_to_twelve_months";
    pub const OVER_ONE_YEAR: &str = "over_one_year";
    pub const PROCEDURE_AGE: &[&str] = &[
        FIRST_MONTH,
        ONE_TO_SIX_MONTHS,
        SIX_TO_TWELVE_MONTHS,
        OVER_ONE_YEAR,
    ];

    pub const INDICATIONS: &[&str] = &[
        "airway_obstruction",
        "prolonged_ventilation",
        "neurological",
        "craniofacial",
        OTHER,
    ];

    pub const CANNULA_TYPE: &[&str] = &["plastic", "silicone", "metal"];

    pub const VENTILATION_NONE: &str = "none";
    pub const VENTILATION_NIGHT_ONLY: &str = "night_only";
    pub const VENTILATION_CONTINUOUS: &str = "continuous";
    pub const VENTILATION: &[&str] = &[
        VENTILATION_NONE,
        VENTILATION_NIGHT_ONLY,
        VENTILATION_CONTINUOUS,
    ];

    pub const CAREGIVERS: &[&str] = &["mother", "father", "grandparent", "nurse", OTHER];

    pub const SUCTION_FREQUENCY: &[&str] = &["up_to_4_daily", "5_to_10_daily", "over_10_daily"];

    pub const FOLLOW_UP: &[&str] = &[
        "pulmonology",
        "otolaryngology",
        "speech_therapy",
        "physiotherapy",
        "nutrition",
        OTHER,
    ];

    pub const CONSENT: &[&str] = &[ACCEPTED, "declined"];
}

const fn def(
    id: &'static str,
    section: SectionId,
    label: &'static str,
    field_type: FieldType,
    statically_required: bool,
    options: &'static [&'static str],
) -> FieldDefinition {
    FieldDefinition {
        id,
        section,
        label,
        field_type,
        statically_required,
        options,
    }
}

const NONE: &[&str] = &[];

static FIELDS: [FieldDefinition; 38] = {
    use FieldType::{Date, Enum, MultiEnum, Text};
    use SectionId::*;
    [
        def(field::CHILD_NAME, Child, "Child's full name", Text, true, NONE),
        def(field::BIRTH_DATE, Child, "Date of birth", Date, true, NONE),
        def(field::SEX, Child, "Sex", Enum, true, options::SEX),
        def(field::HEALTH_ID, Child, "National health card number", Text, true, NONE),
        def(field::GESTATIONAL_AGE, Birth, "Gestational age at birth", Enum, true, options::GESTATIONAL_AGE),
        def(field::BIRTH_WEIGHT, Birth, "Birth weight (g)", Text, true, NONE),
        def(field::NICU_STAY, Birth, "Neonatal ICU stay", Enum, true, options::YES_NO),
        def(field::NICU_DAYS, Birth, "Days in neonatal ICU", Text, false, NONE),
        def(field::GUARDIAN_NAME, Guardian, "Guardian's full name", Text, true, NONE),
        def(field::GUARDIAN_BIRTH_DATE, Guardian, "Guardian's date of birth", Date, true, NONE),
        def(field::RELATIONSHIP, Guardian, "Relationship to the child", Enum, true, options::RELATIONSHIP),
        def(field::RELATIONSHIP_OTHER, Guardian, "Relationship (describe)", Text, false, NONE),
        def(field::PHONE, Guardian, "Phone", Text, true, NONE),
        def(field::EMAIL, Guardian, "Email", Text, false, NONE),
        def(field::POSTAL_CODE, Address, "Postal code", Text, true, NONE),
        def(field::STREET, Address, "Street", Text, true, NONE),
        def(field::NUMBER, Address, "Number", Text, true, NONE),
        def(field::COMPLEMENT, Address, "Complement", Text, false, NONE),
        def(field::CITY, Address, "City", Text, true, NONE),
        def(field::STATE, Address, "State", Enum, true, options::STATES),
        def(field::PROCEDURE_AGE, Tracheostomy, "Age at tracheostomy", Enum, true, options::PROCEDURE_AGE),
        def(field::INDICATIONS, Tracheostomy, "Indications", MultiEnum, true, options::INDICATIONS),
        def(field::INDICATION_OTHER, Tracheostomy, "Other indication", Text, false, NONE),
        def(field::CANNULA_TYPE, Tracheostomy, "Cannula type", Enum, true, options::CANNULA_TYPE),
        def(field::CANNULA_SIZE, Tracheostomy, "Cannula size", Text, true, NONE),
        def(field::VENTILATION, Respiratory, "Mechanical ventilation", Enum, true, options::VENTILATION),
        def(field::VENTILATOR_MODEL, Respiratory, "Ventilator model", Text, false, NONE),
        def(field::OXYGEN_USE, Respiratory, "Supplemental oxygen", Enum, true, options::YES_NO),
        def(field::OXYGEN_FLOW, Respiratory, "Oxygen flow (L/min)", Text, false, NONE),
        def(field::CAREGIVERS, Care, "Caregivers", MultiEnum, true, options::CAREGIVERS),
        def(field::CAREGIVER_OTHER, Care, "Other caregiver", Text, false, NONE),
        def(field::SUCTION_FREQUENCY, Care, "Suction frequency", Enum, true, options::SUCTION_FREQUENCY),
        def(field::HOME_CARE, Care, "Home care service", Enum, true, options::YES_NO),
        def(field::HOME_CARE_PROVIDER, Care, "Home care provider", Text, false, NONE),
        def(field::FOLLOW_UP, Services, "Follow-up services", MultiEnum, true, options::FOLLOW_UP),
        def(field::FOLLOW_UP_OTHER, Services, "Other follow-up service", Text, false, NONE),
        def(field::REFERENCE_HOSPITAL, Services, "Reference hospital", Text, true, NONE),
        def(field::CONSENT, Services, "Consent to data use", Enum, true, options::CONSENT),
    ]
};

static SECTIONS: [Section; 8] = [
    Section {
        id: SectionId::Child,
        title: "Child identification",
        field_names: &[field::CHILD_NAME, field::BIRTH_DATE, field::SEX, field::HEALTH_ID],
    },
    Section {
        id: SectionId::Birth,
        title: "Birth history",
        field_names: &[
            field::GESTATIONAL_AGE,
            field::BIRTH_WEIGHT,
            field::NICU_STAY,
            field::NICU_DAYS,
        ],
    },
    Section {
        id: SectionId::Guardian,
        title: "Guardian",
        field_names: &[
            field::GUARDIAN_NAME,
            field::GUARDIAN_BIRTH_DATE,
            field::RELATIONSHIP,
            field::RELATIONSHIP_OTHER,
            field::PHONE,
            field::EMAIL,
        ],
    },
    Section {
        id: SectionId::Address,
        title: "Address",
        field_names: &[
            field::POSTAL_CODE,
            field::STREET,
            field::NUMBER,
            field::COMPLEMENT,
            field::CITY,
            field::STATE,
        ],
    },
    Section {
        id: SectionId::Tracheostomy,
        title: "Tracheostomy",
        field_names: &[
            field::PROCEDURE_AGE,
            field::INDICATIONS,
            field::INDICATION_OTHER,
            field::CANNULA_TYPE,
            field::CANNULA_SIZE,
        ],
    },
    Section {
        id: SectionId::Respiratory,
        title: "Respiratory support",
        field_names: &[
            field::VENTILATION,
            field::VENTILATOR_MODEL,
            field::OXYGEN_USE,
            field::OXYGEN_FLOW,
        ],
    },
    Section {
        id: SectionId::Care,
        title: "Care routine",
        field_names: &[
            field::CAREGIVERS,
            field::CAREGIVER_OTHER,
            field::SUCTION_FREQUENCY,
            field::HOME_CARE,
            field::HOME_CARE_PROVIDER,
        ],
    },
    Section {
        id: SectionId::Services,
        title: "Health services",
        field_names: &[
            field::FOLLOW_UP,
            field::FOLLOW_UP_OTHER,
            field::REFERENCE_HOSPITAL,
            field::CONSENT,
        ],
    },
];

/// All field definitions, in wizard order.
pub fn fields() -> &'static [FieldDefinition] {
    &FIELDS
}

pub fn sections() -> &'static [Section] {
    &SECTIONS
}

pub fn section(id: SectionId) -> &'static Section {
    &SECTIONS[usize::from(id.ordinal() - 1)]
}

/// Look up a field by id.
pub fn field(id: &str) -> Option<&'static FieldDefinition> {
    FIELDS.iter().find(|f| f.id == id)
}

pub fn require_field(id: &str) -> Result<&'static FieldDefinition, CoreError> {
    field(id).ok_or_else(|| CoreError::UnknownField(id.to_string()))
}

/// Field definitions of one section, in display order.
pub fn section_fields(id: SectionId) -> impl Iterator<Item = &'static FieldDefinition> {
    section(id).field_names.iter().filter_map(|name| field(name))
}
