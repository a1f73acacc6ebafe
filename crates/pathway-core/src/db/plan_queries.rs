//! Plan CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, Row, params, types::Type};

use crate::{
    error::{DatabaseResultExt, PathwayError, Result},
    models::{FormData, Plan, Position, Step},
};

const INSERT_PLAN_SQL: &str = "INSERT INTO user_plans (title, steps, addictions, struggles, story, info, step_index, task_index, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, 0, ?7, ?8)";
const PLAN_COLUMNS: &str = "id, title, steps, addictions, struggles, story, info, step_index, task_index, created_at, updated_at";
const UPDATE_NARRATIVE_SQL: &str =
    "UPDATE user_plans SET story = ?1, info = ?2, updated_at = ?3 WHERE id = ?4";
const UPDATE_POSITION_SQL: &str =
    "UPDATE user_plans SET step_index = ?1, task_index = ?2, updated_at = ?3 WHERE id = ?4";
const DELETE_PLAN_SQL: &str = "DELETE FROM user_plans WHERE id = ?1";

/// Converts a text column into a parse failure rusqlite understands.
fn conversion_error<E>(column: usize, error: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(error))
}

fn plan_from_row(row: &Row<'_>) -> rusqlite::Result<Plan> {
    let steps: Vec<Step> =
        serde_json::from_str(&row.get::<_, String>(2)?).map_err(|e| conversion_error(2, e))?;

    Ok(Plan {
        id: row.get::<_, i64>(0)? as u64,
        title: row.get(1)?,
        steps,
        form: FormData {
            addictions: row.get(3)?,
            struggles: row.get(4)?,
        },
        story: row.get(5)?,
        info: row.get(6)?,
        position: Position::new(
            row.get::<_, i64>(7)? as usize,
            row.get::<_, i64>(8)? as usize,
        ),
        created_at: row
            .get::<_, String>(9)?
            .parse::<Timestamp>()
            .map_err(|e| conversion_error(9, e))?,
        updated_at: row
            .get::<_, String>(10)?
            .parse::<Timestamp>()
            .map_err(|e| conversion_error(10, e))?,
    })
}

impl super::Database {
    /// Stores a new plan positioned at its first task.
    pub fn create_plan(
        &mut self,
        title: &str,
        steps: &[Step],
        form: &FormData,
        story: Option<&str>,
        info: Option<&str>,
    ) -> Result<Plan> {
        let steps_json = serde_json::to_string(steps)?;
        let now = Timestamp::now();
        let now_str = now.to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                title,
                steps_json,
                form.addictions,
                form.struggles,
                story,
                info,
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert plan")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Plan {
            id,
            title: title.to_string(),
            steps: steps.to_vec(),
            form: form.clone(),
            story: story.map(String::from),
            info: info.map(String::from),
            position: Position::default(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a plan by its ID.
    pub fn get_plan(&self, id: u64) -> Result<Option<Plan>> {
        let sql = format!("SELECT {PLAN_COLUMNS} FROM user_plans WHERE id = ?1");
        self.connection
            .query_row(&sql, params![id as i64], plan_from_row)
            .optional()
            .db_context("Failed to query plan")
    }

    /// Lists all plans, newest first.
    pub fn list_plans(&self) -> Result<Vec<Plan>> {
        let sql = format!("SELECT {PLAN_COLUMNS} FROM user_plans ORDER BY id DESC");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare plan listing")?;

        let plans = stmt
            .query_map([], plan_from_row)
            .db_context("Failed to list plans")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read plan row")?;

        Ok(plans)
    }

    /// Stores generated story and info text for a plan.
    pub fn update_narrative(&mut self, id: u64, story: &str, info: &str) -> Result<()> {
        let updated = self
            .connection
            .execute(
                UPDATE_NARRATIVE_SQL,
                params![story, info, Timestamp::now().to_string(), id as i64],
            )
            .db_context("Failed to update plan narrative")?;

        if updated == 0 {
            return Err(PathwayError::PlanNotFound { id });
        }
        Ok(())
    }

    /// Saves the navigator position for a plan.
    pub fn update_position(&mut self, id: u64, position: Position) -> Result<()> {
        let updated = self
            .connection
            .execute(
                UPDATE_POSITION_SQL,
                params![
                    position.step_index as i64,
                    position.task_index as i64,
                    Timestamp::now().to_string(),
                    id as i64
                ],
            )
            .db_context("Failed to update plan position")?;

        if updated == 0 {
            return Err(PathwayError::PlanNotFound { id });
        }
        Ok(())
    }

    /// Permanently deletes a plan.
    pub fn delete_plan(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_PLAN_SQL, params![id as i64])
            .db_context("Failed to delete plan")?;

        if deleted == 0 {
            return Err(PathwayError::PlanNotFound { id });
        }
        Ok(())
    }
}
