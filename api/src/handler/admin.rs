use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::{
        admin::{DashboardResponse, ReservationSummaryResponse},
        form_field::FormFieldResponse,
        reservation::ReservationResponse,
    },
};

/// 管理ダッシュボード。予約サマリー・全予約・カスタム項目をまとめて返す
pub async fn show_dashboard(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<DashboardResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let summary = registry.reservation_repository().summary().await?;
    let reservations = registry
        .reservation_repository()
        .find_all_desc()
        .await?
        .into_iter()
        .map(ReservationResponse::from)
        .collect();
    let custom_fields = registry
        .form_field_repository()
        .find_all()
        .await?
        .into_iter()
        .map(FormFieldResponse::from)
        .collect();

    Ok(Json(DashboardResponse::new(
        ReservationSummaryResponse::from(summary),
        reservations,
        custom_fields,
    )))
}

#[cfg(test)]
mod tests {
    use kernel::model::{reservation::ReservationSummary, role::Role};

    use super::*;
    use crate::handler::test_support::{authorized, TestRegistryBuilder};

    #[tokio::test]
    async fn a_plain_user_cannot_open_the_dashboard() {
        let builder = TestRegistryBuilder::new();
        let registry = builder.build();

        let res = show_dashboard(authorized(Role::User), State(registry)).await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation)));
    }

    #[tokio::test]
    async fn an_admin_sees_summary_reservations_and_fields() {
        let mut builder = TestRegistryBuilder::new();
        builder.reservation.expect_summary().returning(|| {
            Ok(ReservationSummary {
                total: 3,
                pending: 1,
                paid: 2,
            })
        });
        builder
            .reservation
            .expect_find_all_desc()
            .returning(|| Ok(vec![]));
        builder.form_field.expect_find_all().returning(|| Ok(vec![]));
        let registry = builder.build();

        let res = show_dashboard(authorized(Role::Admin), State(registry))
            .await
            .unwrap();
        assert_eq!(res.0.summary.total, 3);
        assert_eq!(res.0.summary.pending, 1);
        assert_eq!(res.0.summary.paid, 2);
    }
}
