//! Static navigation menu.

/// One link of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationEntry {
    pub title: &'static str,
    pub href: &'static str,
    /// Only shown to signed-in users.
    pub auth: bool,
}

pub const RECIPES_HREF: &str = "/recipes";
pub const CART_HREF: &str = "/cart";

/// The menu, in display order.
pub const NAVIGATION: &[NavigationEntry] = &[
    NavigationEntry {
        title: "Recipes",
        href: RECIPES_HREF,
        auth: false,
    },
    NavigationEntry {
        title: "My subscriptions",
        href: "/subscriptions",
        auth: true,
    },
    NavigationEntry {
        title: "Create a recipe",
        href: "/recipes/create",
        auth: true,
    },
    NavigationEntry {
        title: "Favourites",
        href: "/favorites",
        auth: true,
    },
    NavigationEntry {
        title: "List of purchases",
        href: CART_HREF,
        auth: true,
    },
];

/// Entries visible for the given authentication state, order preserved.
pub fn visible_entries(
    entries: &[NavigationEntry],
    authenticated: bool,
) -> impl Iterator<Item = &NavigationEntry> {
    entries.iter().filter(move |entry| authenticated || !entry.auth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles<'a>(entries: impl Iterator<Item = &'a NavigationEntry>) -> Vec<&'static str> {
        entries.map(|e| e.title).collect()
    }

    #[test]
    fn test_anonymous_sees_public_entries_only() {
        assert_eq!(titles(visible_entries(NAVIGATION, false)), vec!["Recipes"]);
    }

    #[test]
    fn test_authenticated_sees_everything_in_order() {
        let visible: Vec<_> = visible_entries(NAVIGATION, true).copied().collect();
        assert_eq!(visible, NAVIGATION.to_vec());
    }

    #[test]
    fn test_order_is_preserved_for_interleaved_lists() {
        let entry = |title, href, auth| NavigationEntry { title, href, auth };
        let entries = [
            entry("a", "/a", true),
            entry("b", "/b", false),
            entry("c", "/c", true),
            entry("d", "/d", false),
            entry("e", "/e", false),
        ];
        assert_eq!(titles(visible_entries(&entries, false)), vec!["b", "d", "e"]);
        assert_eq!(
            titles(visible_entries(&entries, true)),
            vec!["a", "b", "c", "d", "e"]
        );
        assert_eq!(visible_entries(&[], true).count(), 0);
    }
}
