use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    form_field::{
        event::{CreateFormField, DeleteFormField, UpdateFormField},
        FormField,
    },
    id::FormFieldId,
};
use kernel::repository::form_field::FormFieldRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::form_field::FormFieldRow, ConnectionPool};

#[derive(new)]
pub struct FormFieldRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl FormFieldRepository for FormFieldRepositoryImpl {
    async fn create(&self, event: CreateFormField) -> AppResult<FormFieldId> {
        let field_id = FormFieldId::new();
        sqlx::query(
            r#"
                INSERT INTO custom_form_fields (field_id, label, field_type)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(field_id)
        .bind(&event.label)
        .bind(event.field_type.as_ref())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(field_id)
    }

    async fn find_all(&self) -> AppResult<Vec<FormField>> {
        let rows: Vec<FormFieldRow> = sqlx::query_as(
            r#"
                SELECT field_id, label, field_type
                FROM custom_form_fields
                ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(FormField::try_from).collect()
    }

    async fn update(&self, event: UpdateFormField) -> AppResult<()> {
        // None の項目は COALESCE で現在値に据え置く
        let res = sqlx::query(
            r#"
                UPDATE custom_form_fields
                SET label = COALESCE($2, label),
                    field_type = COALESCE($3, field_type)
                WHERE field_id = $1
            "#,
        )
        .bind(event.field_id)
        .bind(event.label)
        .bind(event.field_type.map(|t| t.as_ref().to_string()))
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified form field not found".into(),
            ));
        }
        Ok(())
    }

    async fn delete(&self, event: DeleteFormField) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM custom_form_fields WHERE field_id = $1
            "#,
        )
        .bind(event.field_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified form field not found".into(),
            ));
        }
        Ok(())
    }
}
