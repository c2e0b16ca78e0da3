use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{form_field::event::DeleteFormField, id::FormFieldId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::form_field::{
        CreateFormFieldRequest, FormFieldsResponse, UpdateFormFieldRequest,
        UpdateFormFieldRequestWithId,
    },
};

/// カスタムフォーム項目の追加。管理者のみ
pub async fn register_form_field(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateFormFieldRequest>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    registry
        .form_field_repository()
        .create(req.into())
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn show_form_field_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<FormFieldsResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .form_field_repository()
        .find_all()
        .await
        .map(FormFieldsResponse::from)
        .map(Json)
}

pub async fn update_form_field(
    user: AuthorizedUser,
    Path(field_id): Path<FormFieldId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateFormFieldRequest>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let update = UpdateFormFieldRequestWithId::new(field_id, req);
    registry
        .form_field_repository()
        .update(update.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_form_field(
    user: AuthorizedUser,
    Path(field_id): Path<FormFieldId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .form_field_repository()
        .delete(DeleteFormField::new(field_id))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use kernel::model::{
        form_field::{FieldType, FormField},
        role::Role,
    };

    use super::*;
    use crate::handler::test_support::{authorized, TestRegistryBuilder};
    use crate::model::form_field::FieldTypeName;

    #[tokio::test]
    async fn only_admins_can_manage_fields() {
        let builder = TestRegistryBuilder::new();
        let registry = builder.build();

        let res = register_form_field(
            authorized(Role::User),
            State(registry.clone()),
            Json(CreateFormFieldRequest {
                label: "Preferred contact time".into(),
                field_type: FieldTypeName::Time,
            }),
        )
        .await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation)));

        let res = delete_form_field(
            authorized(Role::User),
            Path(FormFieldId::new()),
            State(registry),
        )
        .await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation)));
    }

    #[tokio::test]
    async fn a_blank_label_is_rejected() {
        let builder = TestRegistryBuilder::new();
        let registry = builder.build();

        let res = register_form_field(
            authorized(Role::Admin),
            State(registry),
            Json(CreateFormFieldRequest {
                label: "".into(),
                field_type: FieldTypeName::Text,
            }),
        )
        .await;
        assert!(matches!(res, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn registering_a_field_returns_created() {
        let mut builder = TestRegistryBuilder::new();
        builder
            .form_field
            .expect_create()
            .withf(|event| event.label == "Company name" && event.field_type == FieldType::Text)
            .returning(|_| Ok(FormFieldId::new()));
        let registry = builder.build();

        let res = register_form_field(
            authorized(Role::Admin),
            State(registry),
            Json(CreateFormFieldRequest {
                label: "Company name".into(),
                field_type: FieldTypeName::Text,
            }),
        )
        .await
        .unwrap();
        assert_eq!(res, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn listing_returns_fields_for_admins() {
        let mut builder = TestRegistryBuilder::new();
        builder.form_field.expect_find_all().returning(|| {
            Ok(vec![FormField {
                field_id: FormFieldId::new(),
                label: "Company name".into(),
                field_type: FieldType::Text,
            }])
        });
        let registry = builder.build();

        let res = show_form_field_list(authorized(Role::Admin), State(registry))
            .await
            .unwrap();
        assert_eq!(res.0.items.len(), 1);
        assert_eq!(res.0.items[0].label, "Company name");
    }

    #[tokio::test]
    async fn a_partial_update_forwards_only_changed_fields() {
        let field_id = FormFieldId::new();
        let mut builder = TestRegistryBuilder::new();
        builder
            .form_field
            .expect_update()
            .withf(move |event| {
                event.field_id == field_id
                    && event.label.as_deref() == Some("Billing company")
                    && event.field_type.is_none()
            })
            .returning(|_| Ok(()));
        let registry = builder.build();

        let res = update_form_field(
            authorized(Role::Admin),
            Path(field_id),
            State(registry),
            Json(UpdateFormFieldRequest {
                label: Some("Billing company".into()),
                field_type: None,
            }),
        )
        .await
        .unwrap();
        assert_eq!(res, StatusCode::OK);
    }

    #[tokio::test]
    async fn deleting_an_unknown_field_is_a_not_found() {
        let mut builder = TestRegistryBuilder::new();
        builder
            .form_field
            .expect_delete()
            .returning(|_| Err(AppError::EntityNotFound("form field not found".into())));
        let registry = builder.build();

        let res = delete_form_field(
            authorized(Role::Admin),
            Path(FormFieldId::new()),
            State(registry),
        )
        .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }
}
