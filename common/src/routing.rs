//! Role claims, dashboard destinations and navigation.
//!
//! The role claim comes from the identity profile and is parsed into `Role`;
//! an absent or unrecognised claim means the viewer is a student.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    FinanceHead,
    Principal,
    Hod,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Hod, Role::Principal, Role::FinanceHead];

    /// Canonical claim value written to the profile.
    pub fn claim(&self) -> &'static str {
        match self {
            Role::FinanceHead => "finance_head",
            Role::Principal => "principal",
            Role::Hod => "hod",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Role::FinanceHead => "Finance Head",
            Role::Principal => "Principal",
            Role::Hod => "HOD",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.claim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role claim `{}`", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    /// Accepts the canonical claims plus the labels older profiles were
    /// written with ("HOD", "Principal", "Finance").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "finance_head" | "finance-head" | "finance" => Ok(Role::FinanceHead),
            "principal" => Ok(Role::Principal),
            "hod" => Ok(Role::Hod),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

const FINANCE_HEAD_ONLY: &[Role] = &[Role::FinanceHead];
const PRINCIPAL_ONLY: &[Role] = &[Role::Principal];
const HOD_ONLY: &[Role] = &[Role::Hod];
const REVIEWERS: &[Role] = &[Role::Principal, Role::Hod];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    RoleSelection,
    FinanceHeadDashboard,
    FinanceHeadListAll,
    FinanceHeadFunds,
    FinanceHeadNotifications,
    PrincipalDashboard,
    PrincipalListAll,
    PrincipalFunds,
    PrincipalNotifications,
    HodDashboard,
    HodNotifications,
    StudentUpload,
    StudentTracking,
    StudentNotifications,
    NotFound,
}

impl Route {
    const ROUTABLE: [Route; 15] = [
        Route::Home,
        Route::RoleSelection,
        Route::FinanceHeadDashboard,
        Route::FinanceHeadListAll,
        Route::FinanceHeadFunds,
        Route::FinanceHeadNotifications,
        Route::PrincipalDashboard,
        Route::PrincipalListAll,
        Route::PrincipalFunds,
        Route::PrincipalNotifications,
        Route::HodDashboard,
        Route::HodNotifications,
        Route::StudentUpload,
        Route::StudentTracking,
        Route::StudentNotifications,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::RoleSelection => "/admin",
            Route::FinanceHeadDashboard => "/admin/finance-head",
            Route::FinanceHeadListAll => "/admin/finance-head/list-all",
            Route::FinanceHeadFunds => "/admin/finance-head/funds",
            Route::FinanceHeadNotifications => "/admin/finance-head/notification",
            Route::PrincipalDashboard => "/admin/principal",
            Route::PrincipalListAll => "/admin/principal/list-all",
            Route::PrincipalFunds => "/admin/principal/funds",
            Route::PrincipalNotifications => "/admin/principal/notification",
            Route::HodDashboard => "/admin/hod",
            Route::HodNotifications => "/admin/hod/notification",
            Route::StudentUpload => "/student/upload-documents",
            Route::StudentTracking => "/student/application-track",
            Route::StudentNotifications => "/student/notification",
            Route::NotFound => "/404",
        }
    }

    /// Parses a location path. Query strings, fragments and a trailing slash
    /// are ignored.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self::ROUTABLE
            .into_iter()
            .find(|route| route.path() == path)
            .unwrap_or(Route::NotFound)
    }

    /// Roles allowed to open the route. `None` means anyone.
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Route::FinanceHeadDashboard
            | Route::FinanceHeadListAll
            | Route::FinanceHeadFunds
            | Route::FinanceHeadNotifications => Some(FINANCE_HEAD_ONLY),
            Route::PrincipalDashboard | Route::PrincipalFunds | Route::PrincipalNotifications => {
                Some(PRINCIPAL_ONLY)
            }
            Route::PrincipalListAll => Some(REVIEWERS),
            Route::HodDashboard | Route::HodNotifications => Some(HOD_ONLY),
            _ => None,
        }
    }
}

/// Landing page for a role claim.
pub fn home_destination(role: Option<Role>) -> Route {
    match role {
        Some(Role::FinanceHead) => Route::FinanceHeadDashboard,
        Some(Role::Principal) => Route::PrincipalDashboard,
        Some(Role::Hod) => Route::HodDashboard,
        None => Route::Home,
    }
}

pub fn can_access(role: Option<Role>, route: Route) -> bool {
    match route.allowed_roles() {
        None => true,
        Some(roles) => role.is_some_and(|r| roles.contains(&r)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

const fn link(label: &'static str, route: Route) -> NavLink {
    NavLink { label, route }
}

const FINANCE_HEAD_LINKS: &[NavLink] = &[
    link("View All Applicants", Route::FinanceHeadListAll),
    link("Funds", Route::FinanceHeadFunds),
    link("Notifications", Route::FinanceHeadNotifications),
];

const PRINCIPAL_LINKS: &[NavLink] = &[
    link("View All Applicants", Route::PrincipalListAll),
    link("Funds", Route::PrincipalFunds),
    link("Notifications", Route::PrincipalNotifications),
];

const HOD_LINKS: &[NavLink] = &[
    link("View All Applicants", Route::PrincipalListAll),
    link("Notifications", Route::HodNotifications),
];

const STUDENT_LINKS: &[NavLink] = &[
    link("Apply For Scholarship", Route::StudentUpload),
    link("Track Status", Route::StudentTracking),
    link("Notification", Route::StudentNotifications),
];

pub fn nav_links(role: Option<Role>) -> &'static [NavLink] {
    match role {
        Some(Role::FinanceHead) => FINANCE_HEAD_LINKS,
        Some(Role::Principal) => PRINCIPAL_LINKS,
        Some(Role::Hod) => HOD_LINKS,
        None => STUDENT_LINKS,
    }
}

/// Mutations a role may trigger from its dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleActions {
    pub sanction_amounts: bool,
    pub decide_status: bool,
    pub post_notifications: bool,
    pub choose_audience: bool,
    pub upload_documents: bool,
}

pub fn permitted_actions(role: Option<Role>) -> RoleActions {
    match role {
        Some(Role::FinanceHead) => RoleActions {
            sanction_amounts: true,
            post_notifications: true,
            ..RoleActions::default()
        },
        Some(Role::Principal) => RoleActions {
            decide_status: true,
            post_notifications: true,
            choose_audience: true,
            ..RoleActions::default()
        },
        Some(Role::Hod) => RoleActions {
            post_notifications: true,
            choose_audience: true,
            ..RoleActions::default()
        },
        None => RoleActions {
            upload_documents: true,
            ..RoleActions::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_parse_case_insensitively_with_legacy_labels() {
        assert_eq!("finance_head".parse::<Role>(), Ok(Role::FinanceHead));
        assert_eq!("Finance".parse::<Role>(), Ok(Role::FinanceHead));
        assert_eq!("HOD".parse::<Role>(), Ok(Role::Hod));
        assert_eq!(" Principal ".parse::<Role>(), Ok(Role::Principal));
        assert!("dean".parse::<Role>().is_err());
    }

    #[test]
    fn every_role_has_a_fixed_home() {
        assert_eq!(home_destination(Some(Role::FinanceHead)).path(), "/admin/finance-head");
        assert_eq!(home_destination(Some(Role::Principal)).path(), "/admin/principal");
        assert_eq!(home_destination(Some(Role::Hod)).path(), "/admin/hod");
        assert_eq!(home_destination(None).path(), "/");
    }

    #[test]
    fn paths_round_trip_and_unknown_is_not_found() {
        for route in Route::ROUTABLE {
            assert_eq!(Route::from_path(route.path()), route);
        }
        assert_eq!(Route::from_path("/admin/hod/"), Route::HodDashboard);
        assert_eq!(Route::from_path("/student/notification?x=1"), Route::StudentNotifications);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/admin/dean"), Route::NotFound);
    }

    #[test]
    fn hod_navigation_points_at_principal_listing() {
        let labels: Vec<_> = nav_links(Some(Role::Hod)).iter().map(|l| l.route.path()).collect();
        assert_eq!(labels, ["/admin/principal/list-all", "/admin/hod/notification"]);
        assert!(can_access(Some(Role::Hod), Route::PrincipalListAll));
        assert!(!can_access(Some(Role::Hod), Route::PrincipalDashboard));
    }

    #[test]
    fn student_links_and_guards() {
        assert_eq!(nav_links(None).len(), 3);
        assert!(can_access(None, Route::StudentUpload));
        assert!(!can_access(None, Route::FinanceHeadFunds));
        assert!(can_access(Some(Role::FinanceHead), Route::FinanceHeadFunds));
    }

    #[test]
    fn every_claim_gets_its_navigation_set() {
        let expected: [(Option<Role>, &[(&str, &str)]); 4] = [
            (
                Some(Role::FinanceHead),
                &[
                    ("View All Applicants", "/admin/finance-head/list-all"),
                    ("Funds", "/admin/finance-head/funds"),
                    ("Notifications", "/admin/finance-head/notification"),
                ],
            ),
            (
                Some(Role::Principal),
                &[
                    ("View All Applicants", "/admin/principal/list-all"),
                    ("Funds", "/admin/principal/funds"),
                    ("Notifications", "/admin/principal/notification"),
                ],
            ),
            (
                Some(Role::Hod),
                &[
                    ("View All Applicants", "/admin/principal/list-all"),
                    ("Notifications", "/admin/hod/notification"),
                ],
            ),
            (
                None,
                &[
                    ("Apply For Scholarship", "/student/upload-documents"),
                    ("Track Status", "/student/application-track"),
                    ("Notification", "/student/notification"),
                ],
            ),
        ];
        for (role, links) in expected {
            let actual: Vec<_> = nav_links(role)
                .iter()
                .map(|l| (l.label, l.route.path()))
                .collect();
            assert_eq!(actual, links, "navigation for {role:?}");
            for link in nav_links(role) {
                assert!(can_access(role, link.route), "{role:?} cannot open {}", link.label);
            }
        }
    }

    #[test]
    fn only_finance_head_sanctions() {
        assert!(permitted_actions(Some(Role::FinanceHead)).sanction_amounts);
        assert!(!permitted_actions(Some(Role::Principal)).sanction_amounts);
        assert!(permitted_actions(Some(Role::Principal)).decide_status);
        assert!(!permitted_actions(None).post_notifications);
    }
}
