//! Diesel schema for board persistence.

diesel::table! {
    /// Task cards.
    tasks (id) {
        /// Store-assigned identifier.
        id -> Uuid,
        /// Task text.
        content -> Text,
        /// Status wire value.
        #[max_length = 20]
        status -> Varchar,
        /// Priority wire value.
        #[max_length = 20]
        priority -> Varchar,
        /// Insertion timestamp, used for stable ordering.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Comments attached to task cards.
    comments (id) {
        /// Store-assigned identifier.
        id -> Uuid,
        /// Comment text.
        content -> Text,
        /// Owning task.
        task_id -> Uuid,
        /// Creation instant.
        timestamp -> Timestamptz,
    }
}

diesel::joinable!(comments -> tasks (task_id));
diesel::allow_tables_to_appear_in_same_query!(tasks, comments);
