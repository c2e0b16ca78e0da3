use derive_new::new;

use crate::model::{form_field::FieldType, id::FormFieldId};

#[derive(Debug, new)]
pub struct CreateFormField {
    pub label: String,
    pub field_type: FieldType,
}

/// 部分更新。None の項目は変更しない。
#[derive(Debug, new)]
pub struct UpdateFormField {
    pub field_id: FormFieldId,
    pub label: Option<String>,
    pub field_type: Option<FieldType>,
}

#[derive(Debug, new)]
pub struct DeleteFormField {
    pub field_id: FormFieldId,
}
