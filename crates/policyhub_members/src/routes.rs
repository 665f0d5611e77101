// --- File: crates/policyhub_members/src/routes.rs ---

use axum::Router;
use policyhub_common::Member;
use policyhub_db::Repository;

/// Creates a router containing all routes for the members feature.
pub fn routes<R>(repository: R) -> Router
where
    R: Repository<Member> + 'static,
{
    policyhub_crud::routes::<Member, R>("/members", "member", repository)
}
