pub mod draft;
pub mod field;
pub mod record;
pub mod section;
pub mod section_data;
