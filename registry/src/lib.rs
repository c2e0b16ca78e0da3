use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::redis::RedisClient;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::form_field::FormFieldRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::payment::PaymentRepositoryImpl;
use adapter::repository::reservation::ReservationRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use kernel::repository::auth::AuthRepository;
use kernel::repository::form_field::FormFieldRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::payment::PaymentRepository;
use kernel::repository::reservation::ReservationRepository;
use kernel::repository::user::UserRepository;
use shared::config::{AdminConfig, AppConfig};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
    payment_repository: Arc<dyn PaymentRepository>,
    form_field_repository: Arc<dyn FormFieldRepository>,
    admin_config: Arc<AdminConfig>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, redis_client: Arc<RedisClient>, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        let reservation_repository = Arc::new(ReservationRepositoryImpl::new(pool.clone()));
        let payment_repository = Arc::new(PaymentRepositoryImpl::new(pool.clone()));
        let form_field_repository = Arc::new(FormFieldRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            user_repository,
            auth_repository,
            reservation_repository,
            payment_repository,
            form_field_repository,
            admin_config: Arc::new(app_config.admin),
        }
    }

    /// リポジトリ実装を差し替えて構築する。ハンドラのテストで使う
    #[allow(clippy::too_many_arguments)]
    pub fn from_components(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        user_repository: Arc<dyn UserRepository>,
        auth_repository: Arc<dyn AuthRepository>,
        reservation_repository: Arc<dyn ReservationRepository>,
        payment_repository: Arc<dyn PaymentRepository>,
        form_field_repository: Arc<dyn FormFieldRepository>,
        admin_config: AdminConfig,
    ) -> Self {
        Self {
            health_check_repository,
            user_repository,
            auth_repository,
            reservation_repository,
            payment_repository,
            form_field_repository,
            admin_config: Arc::new(admin_config),
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn reservation_repository(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }

    pub fn payment_repository(&self) -> Arc<dyn PaymentRepository> {
        self.payment_repository.clone()
    }

    pub fn form_field_repository(&self) -> Arc<dyn FormFieldRepository> {
        self.form_field_repository.clone()
    }

    pub fn admin_config(&self) -> &AdminConfig {
        &self.admin_config
    }
}
