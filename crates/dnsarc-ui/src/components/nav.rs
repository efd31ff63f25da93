use leptos::prelude::*;
use leptos_router::hooks::use_location;

pub const DASH_HOME: &str = "/dash";

pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        href: DASH_HOME,
        label: "Home",
        icon: "\u{2302}",
    },
    NavItem {
        href: "/dash/zones",
        label: "Zones",
        icon: "\u{25A4}",
    },
    NavItem {
        href: "/dash/account",
        label: "Account",
        icon: "\u{263A}",
    },
];

/// Home would prefix-match every dashboard page, so it only lights up on an exact match.
pub fn is_nav_item_active(href: &str, pathname: &str) -> bool {
    if href == DASH_HOME {
        pathname == DASH_HOME || pathname == "/dash/"
    } else {
        pathname.starts_with(href)
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">
                <div class="brand-icon">"D"</div>
                <span class="brand-text">"DNSArc"</span>
            </div>
            <ul class="nav-links">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let href = item.href;
                        view! {
                            <li
                                class="nav-item"
                                class:active=move || {
                                    location.pathname.with(|path| is_nav_item_active(href, path))
                                }
                            >
                                <a href=href>
                                    <span class="nav-icon">{item.icon}</span>
                                    <span>{item.label}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_exact_match_only() {
        assert!(is_nav_item_active("/dash", "/dash"));
        assert!(is_nav_item_active("/dash", "/dash/"));
        assert!(!is_nav_item_active("/dash", "/dash/zones"));
        assert!(!is_nav_item_active("/dash", "/dash/account"));
    }

    #[test]
    fn other_items_match_by_prefix() {
        assert!(is_nav_item_active("/dash/zones", "/dash/zones"));
        assert!(!is_nav_item_active("/dash/zones", "/dash/zone/example.com"));
        assert!(is_nav_item_active("/dash/account", "/dash/account"));
        assert!(!is_nav_item_active("/dash/account", "/dash"));
    }
}
