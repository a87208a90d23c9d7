use std::{fmt, str::FromStr};

use portal::StateValue;

use kv_log_macro as log;

/// Which landing area a user is sent to after signing in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoleId {
    #[default]
    Admin,
    CenterManager,
    Instructor,
    DataEntry,
}

/// Destination path for a role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteTarget(&'static str);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown role `{0}`")]
pub struct UnknownRole(pub String);

const fn nav(path: &'static str, label: &'static str) -> NavItem {
    NavItem { path, label }
}

const ADMIN_NAV: &[NavItem] = &[
    nav("/admin", "Overview"),
    nav("/admin/centers", "Centers"),
    nav("/admin/users", "Users"),
    nav("/admin/approvals", "Approvals"),
    nav("/admin/reports", "Reports"),
];

const MANAGER_NAV: &[NavItem] = &[
    nav("/manager", "Overview"),
    nav("/manager/courses", "Courses"),
    nav("/manager/students", "Students"),
    nav("/manager/instructors", "Instructors"),
];

const INSTRUCTOR_NAV: &[NavItem] = &[
    nav("/instructor", "My Courses"),
    nav("/instructor/students", "Students"),
    nav("/instructor/attendance", "Attendance"),
];

const DATA_ENTRY_NAV: &[NavItem] = &[
    nav("/data-entry", "Students"),
    nav("/data-entry/courses", "Courses"),
    nav("/data-entry/enrollments", "Enrollments"),
    nav("/data-entry/attendance", "Attendance"),
];

impl RoleId {
    pub const ALL: [RoleId; 4] = [
        RoleId::Admin,
        RoleId::CenterManager,
        RoleId::Instructor,
        RoleId::DataEntry,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RoleId::Admin => "admin",
            RoleId::CenterManager => "center_manager",
            RoleId::Instructor => "instructor",
            RoleId::DataEntry => "data_entry",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RoleId::Admin => "Head Office Admin",
            RoleId::CenterManager => "Center Manager",
            RoleId::Instructor => "Instructor",
            RoleId::DataEntry => "Data Entry Staff",
        }
    }

    pub fn route_target(self) -> RouteTarget {
        match self {
            RoleId::Admin => RouteTarget("/admin"),
            RoleId::CenterManager => RouteTarget("/manager"),
            RoleId::Instructor => RouteTarget("/instructor"),
            RoleId::DataEntry => RouteTarget("/data-entry"),
        }
    }

    /// Pattern for the pages below this role's landing route.
    pub fn section_pattern(self) -> &'static str {
        match self {
            RoleId::Admin => "/admin/:section",
            RoleId::CenterManager => "/manager/:section",
            RoleId::Instructor => "/instructor/:section",
            RoleId::DataEntry => "/data-entry/:section",
        }
    }

    pub fn nav_items(self) -> &'static [NavItem] {
        match self {
            RoleId::Admin => ADMIN_NAV,
            RoleId::CenterManager => MANAGER_NAV,
            RoleId::Instructor => INSTRUCTOR_NAV,
            RoleId::DataEntry => DATA_ENTRY_NAV,
        }
    }

    /// Reads a role out of untyped client state.
    ///
    /// A missing value is the default role. Anything that is not one of the
    /// four identifiers also lands on `Admin`.
    pub fn from_state(value: Option<&StateValue>) -> RoleId {
        let Some(value) = value else {
            return RoleId::default();
        };

        value.string().parse().unwrap_or_else(|err: UnknownRole| {
            log::warn!("Falling back to default role", { error: err.to_string() });
            RoleId::default()
        })
    }
}

impl FromStr for RoleId {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleId::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RouteTarget {
    pub fn path(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The four selectable roles with their display labels, in menu order.
pub fn role_options() -> Vec<(RoleId, &'static str)> {
    RoleId::ALL
        .into_iter()
        .map(|role| (role, role.label()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_targets() {
        assert_eq!(RoleId::Admin.route_target().path(), "/admin");
        assert_eq!(RoleId::CenterManager.route_target().path(), "/manager");
        assert_eq!(RoleId::Instructor.route_target().path(), "/instructor");
        assert_eq!(RoleId::DataEntry.route_target().path(), "/data-entry");
    }

    #[test]
    fn role_options_are_fixed() {
        assert_eq!(
            role_options(),
            vec![
                (RoleId::Admin, "Head Office Admin"),
                (RoleId::CenterManager, "Center Manager"),
                (RoleId::Instructor, "Instructor"),
                (RoleId::DataEntry, "Data Entry Staff"),
            ]
        );
    }

    #[test]
    fn parse_round_trips_identifiers() {
        for role in RoleId::ALL {
            assert_eq!(role.as_str().parse::<RoleId>(), Ok(role));
        }
        assert_eq!(
            "district_manager".parse::<RoleId>(),
            Err(UnknownRole("district_manager".to_string()))
        );
        assert!("Admin".parse::<RoleId>().is_err());
    }

    #[test]
    fn from_state_defaults_and_falls_back() {
        assert_eq!(RoleId::from_state(None), RoleId::Admin);
        assert_eq!(
            RoleId::from_state(Some(&StateValue::from("instructor"))),
            RoleId::Instructor
        );
        assert_eq!(
            RoleId::from_state(Some(&StateValue::from("superuser"))),
            RoleId::Admin
        );
        assert_eq!(
            RoleId::from_state(Some(&StateValue::Boolean(true))),
            RoleId::Admin
        );
    }

    #[test]
    fn nav_items_start_at_landing_route() {
        for role in RoleId::ALL {
            let items = role.nav_items();
            assert_eq!(items[0].path, role.route_target().path());
            for item in &items[1..] {
                assert!(item.path.starts_with(&format!("{}/", role.route_target())));
            }
        }
    }
}
