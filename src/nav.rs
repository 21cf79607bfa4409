//! Role-gated navigation. The entry lists are fixed per role and
//! ordered; a tab outside the current role's list is never reachable
//! through `Session::set_active_tab`.

use crate::session::{Role, Tab};

pub fn entries(role: Role) -> &'static [Tab] {
    match role {
        Role::Resident => &[Tab::Home, Tab::Map, Tab::Announcements, Tab::Marketplace],
        Role::Guest => &[
            Tab::Home,
            Tab::Map,
            Tab::Travel,
            Tab::RideShare,
            Tab::Marketplace,
        ],
    }
}

pub fn allows(role: Role, tab: Tab) -> bool {
    entries(role).contains(&tab)
}
