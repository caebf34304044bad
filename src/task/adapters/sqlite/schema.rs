//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tarefas (id) {
        /// Auto-incremented task identifier.
        id -> Integer,
        /// Task title.
        title -> Text,
        /// Task description.
        description -> Text,
        /// Creation timestamp, stored as UTC.
        created_at -> Timestamp,
    }
}
