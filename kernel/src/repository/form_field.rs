use async_trait::async_trait;
use mockall::automock;
use shared::error::AppResult;

use crate::model::{
    form_field::{
        event::{CreateFormField, DeleteFormField, UpdateFormField},
        FormField,
    },
    id::FormFieldId,
};

#[automock]
#[async_trait]
pub trait FormFieldRepository: Send + Sync {
    async fn create(&self, event: CreateFormField) -> AppResult<FormFieldId>;
    async fn find_all(&self) -> AppResult<Vec<FormField>>;
    async fn update(&self, event: UpdateFormField) -> AppResult<()>;
    async fn delete(&self, event: DeleteFormField) -> AppResult<()>;
}
