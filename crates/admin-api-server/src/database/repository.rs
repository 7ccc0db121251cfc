use super::models::{NewTenant, Tenant, UpdateTenant};
use super::DbPool;
use serde_json::Value;
use tracing::debug;

const TENANT_COLUMNS: &str =
    "id, name, domain, database_url, is_active, config, created_at, updated_at";

pub struct Repository {
    pub pool: DbPool,
}

impl Repository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create the tenants table and supporting index if missing.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        let pool = self.pool.get_pool();

        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS tenants (
                id           SERIAL PRIMARY KEY,
                name         VARCHAR(255) NOT NULL,
                domain       VARCHAR(255) NOT NULL UNIQUE,
                database_url VARCHAR(500) NOT NULL,
                is_active    BOOLEAN NOT NULL DEFAULT TRUE,
                config       JSONB NOT NULL DEFAULT '{}'::jsonb,
                created_at   TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at   TIMESTAMPTZ
            )"#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_tenants_name ON tenants(name)")
            .execute(pool)
            .await?;

        debug!("Tenant schema ensured");
        Ok(())
    }

    /// List tenants in insertion order, sliced by offset/limit.
    pub async fn list_tenants(&self, skip: i64, limit: i64) -> Result<Vec<Tenant>, sqlx::Error> {
        let tenants = sqlx::query_as::<_, Tenant>(&format!(
            "SELECT {TENANT_COLUMNS} FROM tenants ORDER BY id ASC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(skip)
        .fetch_all(self.pool.get_pool())
        .await?;

        debug!("Listed {} tenants (skip={}, limit={})", tenants.len(), skip, limit);
        Ok(tenants)
    }

    pub async fn get_tenant(&self, id: i32) -> Result<Option<Tenant>, sqlx::Error> {
        sqlx::query_as::<_, Tenant>(&format!(
            "SELECT {TENANT_COLUMNS} FROM tenants WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.get_pool())
        .await
    }

    /// Insert a tenant and return the persisted row.
    ///
    /// A colliding domain surfaces as a database unique violation; callers
    /// translate that into a conflict response. Concurrent creates with the
    /// same domain serialize on the constraint, so exactly one wins.
    pub async fn insert_tenant(&self, tenant: &NewTenant) -> Result<Tenant, sqlx::Error> {
        let created = sqlx::query_as::<_, Tenant>(&format!(
            r#"INSERT INTO tenants (name, domain, database_url, is_active, config)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING {TENANT_COLUMNS}"#
        ))
        .bind(&tenant.name)
        .bind(&tenant.domain)
        .bind(&tenant.database_url)
        .bind(tenant.is_active)
        .bind(Value::Object(tenant.config.clone()))
        .fetch_one(self.pool.get_pool())
        .await?;

        debug!("Created tenant {} ({})", created.id, created.domain);
        Ok(created)
    }

    /// Apply a partial update; absent fields keep their current value.
    ///
    /// `updated_at` is bumped on every successful update, even when the
    /// patch is empty. Returns `None` when the id does not exist.
    pub async fn update_tenant(
        &self,
        id: i32,
        patch: &UpdateTenant,
    ) -> Result<Option<Tenant>, sqlx::Error> {
        let updated = sqlx::query_as::<_, Tenant>(&format!(
            r#"UPDATE tenants SET
                   name         = COALESCE($2, name),
                   domain       = COALESCE($3, domain),
                   database_url = COALESCE($4, database_url),
                   is_active    = COALESCE($5, is_active),
                   config       = COALESCE($6, config),
                   updated_at   = NOW()
               WHERE id = $1
               RETURNING {TENANT_COLUMNS}"#
        ))
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.domain.as_deref())
        .bind(patch.database_url.as_deref())
        .bind(patch.is_active)
        .bind(patch.config.as_ref().map(|c| Value::Object(c.clone())))
        .fetch_optional(self.pool.get_pool())
        .await?;

        if let Some(tenant) = &updated {
            debug!("Updated tenant {}", tenant.id);
        }
        Ok(updated)
    }

    /// Hard delete. Returns `false` when the id does not exist.
    pub async fn delete_tenant(&self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tenants WHERE id = $1")
            .bind(id)
            .execute(self.pool.get_pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
