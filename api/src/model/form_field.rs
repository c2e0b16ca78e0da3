use derive_new::new;
use garde::Validate;
use kernel::model::{
    form_field::{
        event::{CreateFormField, UpdateFormField},
        FieldType, FormField,
    },
    id::FormFieldId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FieldTypeName {
    Text,
    Number,
    Date,
    Time,
    Select,
    Checkbox,
}

impl From<FieldType> for FieldTypeName {
    fn from(value: FieldType) -> Self {
        match value {
            FieldType::Text => Self::Text,
            FieldType::Number => Self::Number,
            FieldType::Date => Self::Date,
            FieldType::Time => Self::Time,
            FieldType::Select => Self::Select,
            FieldType::Checkbox => Self::Checkbox,
        }
    }
}

impl From<FieldTypeName> for FieldType {
    fn from(value: FieldTypeName) -> Self {
        match value {
            FieldTypeName::Text => Self::Text,
            FieldTypeName::Number => Self::Number,
            FieldTypeName::Date => Self::Date,
            FieldTypeName::Time => Self::Time,
            FieldTypeName::Select => Self::Select,
            FieldTypeName::Checkbox => Self::Checkbox,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormFieldRequest {
    #[garde(length(min = 1))]
    pub label: String,
    #[garde(skip)]
    pub field_type: FieldTypeName,
}

impl From<CreateFormFieldRequest> for CreateFormField {
    fn from(value: CreateFormFieldRequest) -> Self {
        let CreateFormFieldRequest { label, field_type } = value;
        Self {
            label,
            field_type: field_type.into(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFormFieldRequest {
    #[garde(inner(length(min = 1)))]
    pub label: Option<String>,
    #[garde(skip)]
    pub field_type: Option<FieldTypeName>,
}

#[derive(new)]
pub struct UpdateFormFieldRequestWithId(FormFieldId, UpdateFormFieldRequest);

impl From<UpdateFormFieldRequestWithId> for UpdateFormField {
    fn from(value: UpdateFormFieldRequestWithId) -> Self {
        let UpdateFormFieldRequestWithId(field_id, UpdateFormFieldRequest { label, field_type }) =
            value;
        Self {
            field_id,
            label,
            field_type: field_type.map(FieldType::from),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldsResponse {
    pub items: Vec<FormFieldResponse>,
}

impl From<Vec<FormField>> for FormFieldsResponse {
    fn from(value: Vec<FormField>) -> Self {
        Self {
            items: value.into_iter().map(FormFieldResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldResponse {
    pub field_id: FormFieldId,
    pub label: String,
    pub field_type: FieldTypeName,
}

impl From<FormField> for FormFieldResponse {
    fn from(value: FormField) -> Self {
        let FormField {
            field_id,
            label,
            field_type,
        } = value;
        Self {
            field_id,
            label,
            field_type: field_type.into(),
        }
    }
}
