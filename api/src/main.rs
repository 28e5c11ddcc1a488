//! Authify API server binary

use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use authify_api::app::create_app;
use authify_api::routes::auth::AppState;
use authify_core::{AuthService, PasswordHasher, TokenService};
use authify_infra::database::{
    create_pool, MySqlAccountRepository, MySqlPendingRegistrationRepository,
};
use authify_infra::email::SendGridMailer;
use authify_infra::oauth::GoogleOAuthClient;
use authify_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Authify API server");

    let config = AppConfig::from_env();
    if config.auth.jwt.is_using_default_secret() {
        log::warn!("JWT_SECRET is not set; tokens are signed with the development default");
    }

    // Wire the storage, mail, and token layers
    let pool = create_pool(&config.database).await?;
    let accounts = Arc::new(MySqlAccountRepository::new(pool.clone()));
    let pending = Arc::new(MySqlPendingRegistrationRepository::new(pool));
    let mailer = Arc::new(SendGridMailer::new(config.mail.clone()));
    let token_service = Arc::new(TokenService::new(config.auth.jwt.clone()));
    let hasher = PasswordHasher::new(config.auth.bcrypt_cost);

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&accounts),
        pending,
        Arc::clone(&token_service),
        mailer,
        hasher,
        config.auth.lockout.clone(),
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        accounts,
        token_service,
        oauth_client: GoogleOAuthClient::new(config.oauth.clone()),
        oauth_config: config.oauth,
        frontend_origin: config.server.frontend_origin.clone(),
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
