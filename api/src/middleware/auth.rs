//! Bearer-token authentication gate
//!
//! Runs once per request, before any route. A missing or undecodable token
//! never rejects the request here: the gate fails open and leaves the
//! request unauthenticated, so public routes keep working and protected
//! routes reject through the [`Identity`] extractor instead. On a token
//! that decodes and verifies against a stored account, the resolved
//! identity is attached to the request extensions for the rest of the
//! pipeline.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::InternalError;
use actix_web::http::header;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, HttpResponse};
use futures_util::future::LocalBoxFuture;

use authify_core::{AccountRepository, DomainResult, Role, TokenService};

use crate::dto::ApiError;

/// Caller identity resolved from a verified bearer token
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Pull the bearer token out of the Authorization header, if present
pub fn extract_bearer_token(request: &HttpRequest) -> Option<String> {
    let header_value = request.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = header_value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Middleware factory wrapping the app in the authentication gate
pub struct IdentityGate<A> {
    accounts: Arc<A>,
    tokens: Arc<TokenService>,
}

impl<A> IdentityGate<A> {
    pub fn new(accounts: Arc<A>, tokens: Arc<TokenService>) -> Self {
        Self { accounts, tokens }
    }
}

impl<S, B, A> Transform<S, ServiceRequest> for IdentityGate<A>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    A: AccountRepository + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = IdentityGateMiddleware<S, A>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(IdentityGateMiddleware {
            service: Rc::new(service),
            accounts: Arc::clone(&self.accounts),
            tokens: Arc::clone(&self.tokens),
        }))
    }
}

pub struct IdentityGateMiddleware<S, A> {
    service: Rc<S>,
    accounts: Arc<A>,
    tokens: Arc<TokenService>,
}

impl<S, B, A> Service<ServiceRequest> for IdentityGateMiddleware<S, A>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    A: AccountRepository + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, request: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let accounts = Arc::clone(&self.accounts);
        let tokens = Arc::clone(&self.tokens);

        Box::pin(async move {
            if let Some(token) = extract_bearer_token(request.request()) {
                match resolve_identity(&token, accounts.as_ref(), &tokens).await {
                    Ok(Some(identity)) => {
                        request.extensions_mut().insert(identity);
                    }
                    Ok(None) => {}
                    Err(error) => {
                        log::warn!(
                            "Identity lookup failed, request continues unauthenticated: {}",
                            error
                        );
                    }
                }
            }

            service.call(request).await
        })
    }
}

/// Decode, look up, and verify; `Ok(None)` means "proceed unauthenticated"
async fn resolve_identity<A>(
    token: &str,
    accounts: &A,
    tokens: &TokenService,
) -> DomainResult<Option<Identity>>
where
    A: AccountRepository,
{
    let subject = match tokens.extract_subject(token) {
        Ok(subject) => subject,
        Err(_) => return Ok(None),
    };

    let account = match accounts.find_by_email(&subject).await? {
        Some(account) => account,
        None => return Ok(None),
    };

    if !tokens.verify(token, &account.email) {
        return Ok(None);
    }

    Ok(Some(Identity {
        id: account.id,
        name: account.name,
        email: account.email,
        role: account.role,
    }))
}

impl FromRequest for Identity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(request: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        if let Some(identity) = request.extensions().get::<Identity>() {
            return ready(Ok(identity.clone()));
        }

        let body = ApiError::new("Authentication required", "UNAUTHORIZED", request.path());
        let response = HttpResponse::Unauthorized().json(body);
        ready(Err(
            InternalError::from_response("authentication required", response).into(),
        ))
    }
}

/// Optional identity for routes that merely adapt to authenticated callers
#[derive(Debug, Clone)]
pub struct MaybeIdentity(pub Option<Identity>);

impl FromRequest for MaybeIdentity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(request: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(MaybeIdentity(
            request.extensions().get::<Identity>().cloned(),
        )))
    }
}
