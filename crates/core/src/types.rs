/// All database primary keys are UUIDs, generated by the database on insert.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Business dates (event dates, invoice dates, ledger dates) carry no time
/// component.
pub type BusinessDate = chrono::NaiveDate;
