pub const MENU_OPEN: &str = "menu_open";
pub const MENU_CLOSE_WINDOW: &str = "menu_close_window";
pub const MENU_RELOAD: &str = "menu_reload";
pub const MENU_TOGGLE_FULLSCREEN: &str = "menu_toggle_fullscreen";
pub const MENU_TOGGLE_DEVTOOLS: &str = "menu_toggle_devtools";
pub const MENU_HELP_LEARN_MORE: &str = "menu_help_learn_more";
pub const MENU_HELP_DOCUMENTATION: &str = "menu_help_documentation";
pub const MENU_HELP_COMMUNITY: &str = "menu_help_community";
pub const MENU_HELP_SEARCH_ISSUES: &str = "menu_help_search_issues";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpLink {
    LearnMore,
    Documentation,
    Community,
    SearchIssues,
}

impl HelpLink {
    pub fn url(self) -> &'static str {
        match self {
            Self::LearnMore => "https://v2.tauri.app/",
            Self::Documentation => "https://v2.tauri.app/start/",
            Self::Community => "https://github.com/tauri-apps/tauri/discussions",
            Self::SearchIssues => "https://github.com/tauri-apps/tauri/issues",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Open,
    CloseWindow,
    Reload,
    ToggleFullscreen,
    ToggleDevtools,
    OpenHelp(HelpLink),
}

pub fn action_from_menu_id(menu_id: &str) -> Option<MenuAction> {
    match menu_id {
        MENU_OPEN => Some(MenuAction::Open),
        MENU_CLOSE_WINDOW => Some(MenuAction::CloseWindow),
        MENU_RELOAD => Some(MenuAction::Reload),
        MENU_TOGGLE_FULLSCREEN => Some(MenuAction::ToggleFullscreen),
        MENU_TOGGLE_DEVTOOLS => Some(MenuAction::ToggleDevtools),
        MENU_HELP_LEARN_MORE => Some(MenuAction::OpenHelp(HelpLink::LearnMore)),
        MENU_HELP_DOCUMENTATION => Some(MenuAction::OpenHelp(HelpLink::Documentation)),
        MENU_HELP_COMMUNITY => Some(MenuAction::OpenHelp(HelpLink::Community)),
        MENU_HELP_SEARCH_ISSUES => Some(MenuAction::OpenHelp(HelpLink::SearchIssues)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_from_menu_id_maps_all_known_actions() {
        assert_eq!(action_from_menu_id(MENU_OPEN), Some(MenuAction::Open));
        assert_eq!(
            action_from_menu_id(MENU_CLOSE_WINDOW),
            Some(MenuAction::CloseWindow)
        );
        assert_eq!(action_from_menu_id(MENU_RELOAD), Some(MenuAction::Reload));
        assert_eq!(
            action_from_menu_id(MENU_TOGGLE_FULLSCREEN),
            Some(MenuAction::ToggleFullscreen)
        );
        assert_eq!(
            action_from_menu_id(MENU_TOGGLE_DEVTOOLS),
            Some(MenuAction::ToggleDevtools)
        );
        assert_eq!(
            action_from_menu_id(MENU_HELP_SEARCH_ISSUES),
            Some(MenuAction::OpenHelp(HelpLink::SearchIssues))
        );
    }

    #[test]
    fn action_from_menu_id_returns_none_for_unknown_menu_id() {
        assert_eq!(action_from_menu_id("unknown-menu"), None);
        assert_eq!(action_from_menu_id(""), None);
    }

    #[test]
    fn help_links_are_openable_urls() {
        for link in [
            HelpLink::LearnMore,
            HelpLink::Documentation,
            HelpLink::Community,
            HelpLink::SearchIssues,
        ] {
            assert!(crate::external_links::parse_openable_url(link.url()).is_ok());
        }
    }
}
