//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Colours fetched from the hexbot.
    colours (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Colour value exactly as fetched; never empty.
        hex -> Text,
        /// Insert timestamp, defaulted by the database.
        created_at -> Timestamptz,
    }
}
