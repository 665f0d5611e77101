// --- File: crates/policyhub_policies/src/routes.rs ---

use axum::Router;
use policyhub_common::Policy;
use policyhub_db::Repository;

/// Creates a router containing all routes for the policies feature.
pub fn routes<R>(repository: R) -> Router
where
    R: Repository<Policy> + 'static,
{
    policyhub_crud::routes::<Policy, R>("/policies", "policy", repository)
}
