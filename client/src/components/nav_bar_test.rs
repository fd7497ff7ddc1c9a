use super::*;

#[test]
fn exact_path_is_active() {
    assert!(is_active_link("/products", "/products"));
    assert_eq!(nav_link_class("/spices", "/spices"), "nav__link nav__link--active");
}

#[test]
fn nested_path_is_active() {
    assert!(is_active_link("/products/12", "/products"));
}

#[test]
fn sibling_prefix_is_not_active() {
    assert!(!is_active_link("/products-archive", "/products"));
    assert!(!is_active_link("/spices", "/products"));
    assert_eq!(nav_link_class("/login", "/products"), "nav__link");
}

#[test]
fn nav_links_cover_both_entity_pages() {
    let hrefs: Vec<_> = NAV_LINKS.iter().map(|(href, _)| *href).collect();
    assert_eq!(hrefs, ["/products", "/spices"]);
}
