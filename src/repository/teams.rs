//! Teams repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::team::{CreateTeam, Team, TeamDetails, UpdateTeam},
};

#[derive(Clone)]
pub struct TeamsRepository {
    pool: Pool<Postgres>,
}

impl TeamsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all teams with their member ids
    pub async fn list(&self) -> AppResult<Vec<TeamDetails>> {
        let teams = sqlx::query_as::<_, TeamDetails>(
            r#"
            SELECT t.*, ARRAY_REMOVE(ARRAY_AGG(tm.user_id), NULL) AS members
            FROM teams t
            LEFT JOIN team_members tm ON tm.team_id = t.id
            GROUP BY t.id
            ORDER BY t.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(teams)
    }

    /// Get team by ID with member ids
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<TeamDetails> {
        sqlx::query_as::<_, TeamDetails>(
            r#"
            SELECT t.*, ARRAY_REMOVE(ARRAY_AGG(tm.user_id), NULL) AS members
            FROM teams t
            LEFT JOIN team_members tm ON tm.team_id = t.id
            WHERE t.id = $1
            GROUP BY t.id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))
    }

    /// Get bare team row by ID
    pub async fn get_row(&self, id: Uuid) -> AppResult<Team> {
        sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))
    }

    /// Create a team
    pub async fn create(&self, data: &CreateTeam) -> AppResult<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (name, department, description)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.department)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(team)
    }

    /// Update a team
    pub async fn update(&self, id: Uuid, data: &UpdateTeam) -> AppResult<Team> {
        sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams SET
                name = COALESCE($2, name),
                department = COALESCE($3, department),
                description = COALESCE($4, description)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.department)
        .bind(&data.description)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))
    }

    /// Delete a team; memberships cascade
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Team {} not found", id)));
        }
        Ok(())
    }

    /// Add a user to a team.
    ///
    /// The membership relation is the single source of truth for both the
    /// team's member list and the user's team list, so one insert keeps the
    /// two sides agreeing; the existence checks and the insert share a
    /// transaction. Adding an existing member is a no-op.
    pub async fn add_member(&self, team_id: Uuid, user_id: Uuid) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let team_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM teams WHERE id = $1)")
                .bind(team_id)
                .fetch_one(&mut *tx)
                .await?;
        if !team_exists {
            return Err(AppError::NotFound(format!("Team {} not found", team_id)));
        }

        let user_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(user_id)
                .fetch_one(&mut *tx)
                .await?;
        if !user_exists {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        sqlx::query(
            "INSERT INTO team_members (team_id, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(team_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Remove a user from a team. Removing a non-member is a no-op.
    pub async fn remove_member(&self, team_id: Uuid, user_id: Uuid) -> AppResult<()> {
        let team_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM teams WHERE id = $1)")
                .bind(team_id)
                .fetch_one(&self.pool)
                .await?;
        if !team_exists {
            return Err(AppError::NotFound(format!("Team {} not found", team_id)));
        }

        sqlx::query("DELETE FROM team_members WHERE team_id = $1 AND user_id = $2")
            .bind(team_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Team ids a user belongs to
    pub async fn team_ids_for_user(&self, user_id: Uuid) -> AppResult<Vec<Uuid>> {
        let ids: Vec<Uuid> =
            sqlx::query_scalar("SELECT team_id FROM team_members WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(ids)
    }

    /// Count all teams
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
