pub mod admin;
pub mod auth;
pub mod form_field;
pub mod health;
pub mod pages;
pub mod payment;
pub mod reservation;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use chrono::Utc;
    use kernel::model::{auth::AccessToken, id::UserId, role::Role, user::User};
    use kernel::repository::{
        auth::MockAuthRepository, form_field::MockFormFieldRepository,
        health::MockHealthCheckRepository, payment::MockPaymentRepository,
        reservation::MockReservationRepository, user::MockUserRepository,
    };
    use registry::AppRegistry;
    use shared::config::AdminConfig;

    use crate::extractor::AuthorizedUser;

    /// すべてモックのリポジトリで構成されたレジストリ。
    /// 期待を仕掛けたモックだけ差し替えて使う
    pub(crate) struct TestRegistryBuilder {
        pub user: MockUserRepository,
        pub auth: MockAuthRepository,
        pub reservation: MockReservationRepository,
        pub payment: MockPaymentRepository,
        pub form_field: MockFormFieldRepository,
    }

    impl TestRegistryBuilder {
        pub(crate) fn new() -> Self {
            Self {
                user: MockUserRepository::new(),
                auth: MockAuthRepository::new(),
                reservation: MockReservationRepository::new(),
                payment: MockPaymentRepository::new(),
                form_field: MockFormFieldRepository::new(),
            }
        }

        pub(crate) fn build(self) -> AppRegistry {
            AppRegistry::from_components(
                Arc::new(MockHealthCheckRepository::new()),
                Arc::new(self.user),
                Arc::new(self.auth),
                Arc::new(self.reservation),
                Arc::new(self.payment),
                Arc::new(self.form_field),
                admin_config(),
            )
        }
    }

    pub(crate) fn admin_config() -> AdminConfig {
        AdminConfig {
            username: "goparkadmin".into(),
            email: "goparkadmin@example.com".into(),
            password: "admin-pass".into(),
        }
    }

    pub(crate) fn authorized(role: Role) -> AuthorizedUser {
        AuthorizedUser {
            access_token: AccessToken("test-token".into()),
            user: User {
                user_id: UserId::new(),
                username: "tester".into(),
                email: "tester@example.com".into(),
                role,
                created_at: Utc::now(),
            },
        }
    }
}
