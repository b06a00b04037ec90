use tracheo_core::models::section::SectionId;

use crate::SectionRules;

/// Section 7: daily care routine. Only the shared checks and the conditional
/// "other caregiver" / "home care provider" requirements apply.
pub struct CareRules;

impl SectionRules for CareRules {
    fn id(&self) -> SectionId {
        SectionId::Care
    }
}
