use std::str::FromStr;

use kernel::model::{
    form_field::{FieldType, FormField},
    id::FormFieldId,
};
use shared::error::{AppError, AppResult};

#[derive(sqlx::FromRow)]
pub struct FormFieldRow {
    pub field_id: FormFieldId,
    pub label: String,
    pub field_type: String,
}

impl TryFrom<FormFieldRow> for FormField {
    type Error = AppError;

    fn try_from(value: FormFieldRow) -> AppResult<Self> {
        let FormFieldRow {
            field_id,
            label,
            field_type,
        } = value;
        let field_type = FieldType::from_str(&field_type).map_err(|_| {
            AppError::ConversionEntityError(format!("unknown field type: {field_type}"))
        })?;
        Ok(FormField {
            field_id,
            label,
            field_type,
        })
    }
}
