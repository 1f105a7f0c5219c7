//! Diesel table definitions.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered users.
    ///
    /// `email` carries a unique index; comparisons are byte-exact, so
    /// uniqueness is case-sensitive.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Display name, never blank.
        name -> Varchar,
        /// Contact email, unique across the table.
        email -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}
