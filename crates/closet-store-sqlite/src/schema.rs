//! SQL schema for the Closet SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS items (
    item_id     TEXT PRIMARY KEY,
    owner_id    TEXT NOT NULL,
    name        TEXT NOT NULL,
    category    TEXT NOT NULL,   -- snake_case GarmentCategory
    color       TEXT NOT NULL,
    formality   TEXT NOT NULL,   -- JSON: a single level or a non-empty array
    status      TEXT NOT NULL DEFAULT 'clean',
    image_ref   TEXT,
    created_at  TEXT NOT NULL    -- RFC 3339 UTC, nanosecond fixed width
);

-- Messages are append-only; `seq` breaks ties between equal timestamps.
CREATE TABLE IF NOT EXISTS messages (
    seq         INTEGER PRIMARY KEY AUTOINCREMENT,
    message_id  TEXT NOT NULL UNIQUE,
    owner_id    TEXT NOT NULL,
    role        TEXT NOT NULL,   -- 'user' | 'assistant'
    content     TEXT NOT NULL,
    outfit      TEXT,            -- JSON array of items, NULL on user messages
    sent_at     TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS items_owner_idx    ON items(owner_id, created_at);
CREATE INDEX IF NOT EXISTS messages_owner_idx ON messages(owner_id, sent_at);

PRAGMA user_version = 1;
";
