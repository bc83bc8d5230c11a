//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema includes:
/// - `experiences` table (one professional experience per row)
/// - `skills` table (name + fixed category label)
/// - `about` table (singleton content block)
/// - `users` table (owner credentials)
pub const SQLITE_INIT: &str = r#"
-- ---------------------------------------------------------------------------
-- Experiences
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS experiences (
    id TEXT PRIMARY KEY NOT NULL, -- UUID v4
    title TEXT NOT NULL,
    company TEXT NOT NULL,
    period TEXT NOT NULL,
    description TEXT NOT NULL,
    created_at TEXT NOT NULL, -- RFC3339
    updated_at TEXT NOT NULL -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_experiences_created_at ON experiences(created_at);

-- ---------------------------------------------------------------------------
-- Skills
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS skills (
    id TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    category TEXT NOT NULL CHECK (category IN ('Backend', 'Database', 'DevOps', 'Frontend')),
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_skills_category ON skills(category);

-- ---------------------------------------------------------------------------
-- About (at most one row: `singleton` is always 1 and unique)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS about (
    id TEXT PRIMARY KEY NOT NULL,
    singleton INTEGER NOT NULL DEFAULT 1 UNIQUE CHECK (singleton = 1),
    content TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- ---------------------------------------------------------------------------
-- Users (credential store)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY NOT NULL,
    email TEXT NOT NULL UNIQUE,
    name TEXT NULL,
    password_hash TEXT NOT NULL, -- Argon2 PHC string
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;
