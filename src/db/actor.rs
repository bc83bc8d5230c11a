use crate::db::models::{DbAbout, DbExperience, DbSkill, DbUser};
use crate::db::patch::{AboutPatch, DbPatchable, ExperiencePatch, SkillPatch, UserCreate};
use crate::db::schema::SQLITE_INIT;
use crate::error::FolioError;
use chrono::Utc;
use folio_schema::{NewExperience, NewSkill};
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::info;
use uuid::Uuid;

type Reply<T> = RpcReplyPort<Result<T, FolioError>>;

#[derive(Debug)]
pub enum DbActorMessage {
    /// List experiences, newest first.
    ListExperiences(Reply<Vec<DbExperience>>),
    CreateExperience(NewExperience, Reply<DbExperience>),
    PatchExperience(ExperiencePatch, Reply<DbExperience>),
    DeleteExperience(String, Reply<()>),

    /// List skills ordered by category, then name.
    ListSkills(Reply<Vec<DbSkill>>),
    CreateSkill(NewSkill, Reply<DbSkill>),
    PatchSkill(SkillPatch, Reply<DbSkill>),
    DeleteSkill(String, Reply<()>),

    /// Fetch the singleton about row, if any.
    GetAbout(Reply<Option<DbAbout>>),
    /// Insert the about row; fails with `AboutExists` when one is already stored.
    CreateAbout(String, Reply<DbAbout>),
    PatchAbout(AboutPatch, Reply<DbAbout>),
    /// Insert or overwrite the about content in one statement.
    UpsertAbout(String, Reply<DbAbout>),

    FindUserByEmail(String, Reply<Option<DbUser>>),
    /// Insert a user unless the email is taken; `None` means it already existed.
    CreateUserIfAbsent(UserCreate, Reply<Option<DbUser>>),
}

#[derive(Clone)]
pub struct DbActorHandle {
    actor: ActorRef<DbActorMessage>,
}

fn rpc_failed(op: &str, e: impl std::fmt::Display) -> FolioError {
    FolioError::RactorError(format!("DbActor {op} RPC failed: {e}"))
}

impl DbActorHandle {
    pub async fn list_experiences(&self) -> Result<Vec<DbExperience>, FolioError> {
        ractor::call!(self.actor, DbActorMessage::ListExperiences)
            .map_err(|e| rpc_failed("ListExperiences", e))?
    }

    pub async fn create_experience(
        &self,
        create: NewExperience,
    ) -> Result<DbExperience, FolioError> {
        ractor::call!(self.actor, DbActorMessage::CreateExperience, create)
            .map_err(|e| rpc_failed("CreateExperience", e))?
    }

    pub async fn patch_experience(
        &self,
        patch: ExperiencePatch,
    ) -> Result<DbExperience, FolioError> {
        ractor::call!(self.actor, DbActorMessage::PatchExperience, patch)
            .map_err(|e| rpc_failed("PatchExperience", e))?
    }

    pub async fn delete_experience(&self, id: String) -> Result<(), FolioError> {
        ractor::call!(self.actor, DbActorMessage::DeleteExperience, id)
            .map_err(|e| rpc_failed("DeleteExperience", e))?
    }

    pub async fn list_skills(&self) -> Result<Vec<DbSkill>, FolioError> {
        ractor::call!(self.actor, DbActorMessage::ListSkills)
            .map_err(|e| rpc_failed("ListSkills", e))?
    }

    pub async fn create_skill(&self, create: NewSkill) -> Result<DbSkill, FolioError> {
        ractor::call!(self.actor, DbActorMessage::CreateSkill, create)
            .map_err(|e| rpc_failed("CreateSkill", e))?
    }

    pub async fn patch_skill(&self, patch: SkillPatch) -> Result<DbSkill, FolioError> {
        ractor::call!(self.actor, DbActorMessage::PatchSkill, patch)
            .map_err(|e| rpc_failed("PatchSkill", e))?
    }

    pub async fn delete_skill(&self, id: String) -> Result<(), FolioError> {
        ractor::call!(self.actor, DbActorMessage::DeleteSkill, id)
            .map_err(|e| rpc_failed("DeleteSkill", e))?
    }

    pub async fn get_about(&self) -> Result<Option<DbAbout>, FolioError> {
        ractor::call!(self.actor, DbActorMessage::GetAbout)
            .map_err(|e| rpc_failed("GetAbout", e))?
    }

    pub async fn create_about(&self, content: String) -> Result<DbAbout, FolioError> {
        ractor::call!(self.actor, DbActorMessage::CreateAbout, content)
            .map_err(|e| rpc_failed("CreateAbout", e))?
    }

    pub async fn patch_about(&self, patch: AboutPatch) -> Result<DbAbout, FolioError> {
        ractor::call!(self.actor, DbActorMessage::PatchAbout, patch)
            .map_err(|e| rpc_failed("PatchAbout", e))?
    }

    pub async fn upsert_about(&self, content: String) -> Result<DbAbout, FolioError> {
        ractor::call!(self.actor, DbActorMessage::UpsertAbout, content)
            .map_err(|e| rpc_failed("UpsertAbout", e))?
    }

    pub async fn find_user_by_email(&self, email: String) -> Result<Option<DbUser>, FolioError> {
        ractor::call!(self.actor, DbActorMessage::FindUserByEmail, email)
            .map_err(|e| rpc_failed("FindUserByEmail", e))?
    }

    pub async fn create_user_if_absent(
        &self,
        create: UserCreate,
    ) -> Result<Option<DbUser>, FolioError> {
        ractor::call!(self.actor, DbActorMessage::CreateUserIfAbsent, create)
            .map_err(|e| rpc_failed("CreateUserIfAbsent", e))?
    }
}

struct DbActorState {
    pool: SqlitePool,
}

struct DbActor;

#[ractor::async_trait]
impl Actor for DbActor {
    type Msg = DbActorMessage;
    type State = DbActorState;
    type Arguments = String;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        database_url: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let connect_opts = SqliteConnectOptions::from_str(database_url.as_str())
            .map_err(|e| ActorProcessingErr::from(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&pool)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        info!("DbActor initialized");
        Ok(DbActorState { pool })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        let pool = &state.pool;
        match message {
            DbActorMessage::ListExperiences(reply) => {
                let _ = reply.send(self.list_experiences(pool).await);
            }
            DbActorMessage::CreateExperience(create, reply) => {
                let _ = reply.send(self.create_experience(pool, create).await);
            }
            DbActorMessage::PatchExperience(patch, reply) => {
                let _ = reply.send(patch.apply_patch(pool).await);
            }
            DbActorMessage::DeleteExperience(id, reply) => {
                let _ = reply.send(self.delete_by_id(pool, Table::Experiences, id).await);
            }
            DbActorMessage::ListSkills(reply) => {
                let _ = reply.send(self.list_skills(pool).await);
            }
            DbActorMessage::CreateSkill(create, reply) => {
                let _ = reply.send(self.create_skill(pool, create).await);
            }
            DbActorMessage::PatchSkill(patch, reply) => {
                let _ = reply.send(patch.apply_patch(pool).await);
            }
            DbActorMessage::DeleteSkill(id, reply) => {
                let _ = reply.send(self.delete_by_id(pool, Table::Skills, id).await);
            }
            DbActorMessage::GetAbout(reply) => {
                let _ = reply.send(self.get_about(pool).await);
            }
            DbActorMessage::CreateAbout(content, reply) => {
                let _ = reply.send(self.create_about(pool, content).await);
            }
            DbActorMessage::PatchAbout(patch, reply) => {
                let _ = reply.send(patch.apply_patch(pool).await);
            }
            DbActorMessage::UpsertAbout(content, reply) => {
                let _ = reply.send(self.upsert_about(pool, content).await);
            }
            DbActorMessage::FindUserByEmail(email, reply) => {
                let _ = reply.send(self.find_user_by_email(pool, email).await);
            }
            DbActorMessage::CreateUserIfAbsent(create, reply) => {
                let _ = reply.send(self.create_user_if_absent(pool, create).await);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Table {
    Experiences,
    Skills,
}

impl Table {
    fn entity(self) -> &'static str {
        match self {
            Table::Experiences => "experience",
            Table::Skills => "skill",
        }
    }

    fn delete_sql(self) -> &'static str {
        match self {
            Table::Experiences => "DELETE FROM experiences WHERE id = ?",
            Table::Skills => "DELETE FROM skills WHERE id = ?",
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl DbActor {
    async fn list_experiences(&self, pool: &SqlitePool) -> Result<Vec<DbExperience>, FolioError> {
        let rows = sqlx::query_as::<_, DbExperience>(
            r#"
        SELECT id, title, company, period, description, created_at, updated_at
        FROM experiences
        ORDER BY created_at DESC, rowid DESC
        "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn create_experience(
        &self,
        pool: &SqlitePool,
        create: NewExperience,
    ) -> Result<DbExperience, FolioError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, DbExperience>(
            r#"
        INSERT INTO experiences (id, title, company, period, description, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id, title, company, period, description, created_at, updated_at
        "#,
        )
        .bind(new_id())
        .bind(create.title)
        .bind(create.company)
        .bind(create.period)
        .bind(create.description)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    async fn list_skills(&self, pool: &SqlitePool) -> Result<Vec<DbSkill>, FolioError> {
        let rows = sqlx::query_as::<_, DbSkill>(
            r#"
        SELECT id, name, category, created_at, updated_at
        FROM skills
        ORDER BY category ASC, name ASC, rowid ASC
        "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn create_skill(
        &self,
        pool: &SqlitePool,
        create: NewSkill,
    ) -> Result<DbSkill, FolioError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, DbSkill>(
            r#"
        INSERT INTO skills (id, name, category, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, name, category, created_at, updated_at
        "#,
        )
        .bind(new_id())
        .bind(create.name)
        .bind(create.category.as_str())
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    async fn delete_by_id(
        &self,
        pool: &SqlitePool,
        table: Table,
        id: String,
    ) -> Result<(), FolioError> {
        let res = sqlx::query(table.delete_sql())
            .bind(&id)
            .execute(pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(FolioError::not_found(table.entity(), id));
        }
        Ok(())
    }

    async fn get_about(&self, pool: &SqlitePool) -> Result<Option<DbAbout>, FolioError> {
        let row = sqlx::query_as::<_, DbAbout>(
            r#"
        SELECT id, content, created_at, updated_at
        FROM about
        LIMIT 1
        "#,
        )
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    async fn create_about(
        &self,
        pool: &SqlitePool,
        content: String,
    ) -> Result<DbAbout, FolioError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, DbAbout>(
            r#"
        INSERT INTO about (id, singleton, content, created_at, updated_at)
        VALUES (?, 1, ?, ?, ?)
        ON CONFLICT(singleton) DO NOTHING
        RETURNING id, content, created_at, updated_at
        "#,
        )
        .bind(new_id())
        .bind(content)
        .bind(now)
        .bind(now)
        .fetch_optional(pool)
        .await?;

        row.ok_or(FolioError::AboutExists)
    }

    async fn upsert_about(
        &self,
        pool: &SqlitePool,
        content: String,
    ) -> Result<DbAbout, FolioError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, DbAbout>(
            r#"
        INSERT INTO about (id, singleton, content, created_at, updated_at)
        VALUES (?, 1, ?, ?, ?)
        ON CONFLICT(singleton) DO UPDATE SET
            content = excluded.content,
            updated_at = excluded.updated_at
        RETURNING id, content, created_at, updated_at
        "#,
        )
        .bind(new_id())
        .bind(content)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    async fn find_user_by_email(
        &self,
        pool: &SqlitePool,
        email: String,
    ) -> Result<Option<DbUser>, FolioError> {
        let row = sqlx::query_as::<_, DbUser>(
            r#"
        SELECT id, email, name, password_hash, created_at, updated_at
        FROM users
        WHERE email = ?
        "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    async fn create_user_if_absent(
        &self,
        pool: &SqlitePool,
        create: UserCreate,
    ) -> Result<Option<DbUser>, FolioError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, DbUser>(
            r#"
        INSERT INTO users (id, email, name, password_hash, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        ON CONFLICT(email) DO NOTHING
        RETURNING id, email, name, password_hash, created_at, updated_at
        "#,
        )
        .bind(new_id())
        .bind(create.email)
        .bind(create.name)
        .bind(create.password_hash)
        .bind(now)
        .bind(now)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }
}

/// Spawn the database actor and return a cloneable handle.
pub async fn spawn(database_url: &str) -> Result<DbActorHandle, FolioError> {
    // Unnamed: the ractor registry is process-global and tests spawn one actor per database.
    let (actor, _jh) = ractor::Actor::spawn(None, DbActor, database_url.to_string())
        .await
        .map_err(|e| FolioError::RactorError(format!("failed to spawn DbActor: {e}")))?;

    Ok(DbActorHandle { actor })
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), FolioError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
