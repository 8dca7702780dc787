/// All database primary keys are SQLite INTEGER PRIMARY KEY (rowid).
pub type DbId = i64;

/// All timestamps are UTC wall-clock values with no offset.
///
/// Deadlines in particular carry no implied timezone, so the whole
/// schema uses naive datetimes rather than `DateTime<Utc>`.
pub type Timestamp = chrono::NaiveDateTime;
