pub mod external;
pub mod integrity;
pub mod source_record;
