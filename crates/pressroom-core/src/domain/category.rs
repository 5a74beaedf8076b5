/// Category labels shown in site navigation, in display order.
///
/// Stores never validate against this list; a post may carry any string.
pub const CATEGORIES: [&str; 17] = [
    "Home",
    "Essays",
    "H&P",
    "Books",
    "YC",
    "Arc",
    "Bel",
    "Lisp",
    "Spam",
    "Responses",
    "FAQS",
    "RAQS",
    "Quotes",
    "R55",
    "Bio",
    "Twitter",
    "Mastodon",
];

/// Category assigned to a post created without one.
pub const DEFAULT_CATEGORY: &str = "Home";

/// Exact, case-sensitive membership in [`CATEGORIES`].
pub fn is_known_category(name: &str) -> bool {
    CATEGORIES.contains(&name)
}
