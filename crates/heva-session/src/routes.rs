/*
[INPUT]:  User types and requested paths
[OUTPUT]: Landing routes and the role a path demands
[POS]:    Navigation layer - role-to-route mapping shared by UI and guard
[UPDATE]: When dashboards move or new role areas are added
*/

use crate::types::{RequiredRole, UserType};

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";
pub const CREATIVE_DASHBOARD_ROUTE: &str = "/creative/dashboard";
pub const AGENT_DASHBOARD_ROUTE: &str = "/agent/dashboard";
pub const ADMIN_ROUTE: &str = "/admin";
/// Older admin dashboard path, still linked from bookmarks
pub const LEGACY_ADMIN_ROUTE: &str = "/heva/dashboard";

/// Where a user lands after logging in
pub fn landing_route(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Creative => CREATIVE_DASHBOARD_ROUTE,
        UserType::FieldAgent => AGENT_DASHBOARD_ROUTE,
        UserType::Admin | UserType::HevaTeam => ADMIN_ROUTE,
    }
}

/// Role required by the area a path belongs to, if any
pub fn required_role_for_path(path: &str) -> Option<RequiredRole> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let area = path.trim_start_matches('/').split('/').next().unwrap_or("");

    match area {
        "creative" => Some(RequiredRole::Creative),
        "agent" => Some(RequiredRole::Agent),
        "admin" | "heva" => Some(RequiredRole::Admin),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(UserType::Creative, "/creative/dashboard")]
    #[case(UserType::FieldAgent, "/agent/dashboard")]
    #[case(UserType::Admin, "/admin")]
    #[case(UserType::HevaTeam, "/admin")]
    fn test_landing_route(#[case] user_type: UserType, #[case] expected: &str) {
        assert_eq!(landing_route(user_type), expected);
    }

    #[rstest]
    #[case("/creative/story", Some(RequiredRole::Creative))]
    #[case("/agent/reports?week=3", Some(RequiredRole::Agent))]
    #[case("/admin", Some(RequiredRole::Admin))]
    #[case(LEGACY_ADMIN_ROUTE, Some(RequiredRole::Admin))]
    #[case("/heva/stories#top", Some(RequiredRole::Admin))]
    #[case("/help", None)]
    #[case("/", None)]
    #[case("/creativity", None)]
    fn test_required_role_for_path(#[case] path: &str, #[case] expected: Option<RequiredRole>) {
        assert_eq!(required_role_for_path(path), expected);
    }
}
