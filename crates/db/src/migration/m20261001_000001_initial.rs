//! Initial database migration.
//!
//! Creates the entry enums, the users table and the entries table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(ENUMS_SQL).await?;
        db.execute_unprepared(USERS_SQL).await?;
        db.execute_unprepared(ENTRIES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

const ENUMS_SQL: &str = r"
CREATE TYPE entry_kind AS ENUM ('INCOME', 'EXPENSE');

CREATE TYPE entry_status AS ENUM ('PENDING', 'SETTLED', 'CANCELLED');
";

const USERS_SQL: &str = r"
CREATE TABLE users (
    id UUID PRIMARY KEY,
    name VARCHAR(150) NOT NULL,
    email VARCHAR(255) NOT NULL,
    password_hash VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_users_email UNIQUE (email)
);
";

const ENTRIES_SQL: &str = r"
CREATE TABLE entries (
    id UUID PRIMARY KEY,
    description VARCHAR(255) NOT NULL,
    month INTEGER NOT NULL,
    year INTEGER NOT NULL,
    amount NUMERIC(19, 4) NOT NULL,
    kind entry_kind NOT NULL,
    status entry_status NOT NULL DEFAULT 'PENDING',
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_entries_month CHECK (month BETWEEN 1 AND 12),
    CONSTRAINT chk_entries_year CHECK (year BETWEEN 1000 AND 9999),
    CONSTRAINT chk_entries_amount_positive CHECK (amount > 0)
);

-- Search and balance always filter by owner
CREATE INDEX idx_entries_user ON entries(user_id, created_at, id);

-- Settled sums per owner and kind
CREATE INDEX idx_entries_balance ON entries(user_id, kind) WHERE status = 'SETTLED';
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS entries CASCADE;
DROP TABLE IF EXISTS users CASCADE;
DROP TYPE IF EXISTS entry_status;
DROP TYPE IF EXISTS entry_kind;
";
