/// Joins the non-empty class names into one `class` attribute value.
///
/// ```
/// use bluechip_core::cn;
///
/// let active = true;
/// assert_eq!(cn(["nav-link", if active { "text-accent" } else { "" }]), "nav-link text-accent");
/// ```
pub fn cn<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    classes
        .into_iter()
        .map(str::trim)
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
