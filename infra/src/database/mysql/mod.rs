//! MySQL repository implementations

mod account_repository_impl;
mod pending_registration_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use pending_registration_repository_impl::MySqlPendingRegistrationRepository;
