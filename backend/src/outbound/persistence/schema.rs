//! Diesel table definitions for the booking document store.
//!
//! Bookings are stored whole as JSONB documents keyed by id. `created_at` is
//! lifted out of the document so listing can order and page in SQL.

diesel::table! {
    hotel_booking.mt_doc_booking (id) {
        id -> Uuid,
        data -> Jsonb,
        created_at -> Timestamptz,
        mt_last_modified -> Timestamptz,
    }
}

diesel::table! {
    hotel_booking.mt_events (seq_id) {
        seq_id -> Int8,
        id -> Uuid,
        stream_id -> Uuid,
        #[sql_name = "type"]
        event_type -> Text,
        data -> Jsonb,
        timestamp -> Timestamptz,
    }
}
