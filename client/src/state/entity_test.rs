use super::*;

fn saffron() -> Product {
    Product {
        id: 3,
        name: "Saffron".to_owned(),
        description: String::new(),
        price: 12.5,
        stock: 2,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn item_path_appends_identifier() {
    assert_eq!(Product::item_path(3), "/products/3");
    assert_eq!(SpiceCategory::item_path(11), "/spices/11");
}

#[test]
fn product_cells_format_price_and_blank_description() {
    assert_eq!(saffron().cells(), vec!["Saffron", "—", "$12.50", "2"]);
    assert_eq!(saffron().cells().len(), Product::COLUMNS.len());
}

#[test]
fn product_form_prefills_editable_fields() {
    let form = saffron().form();
    assert_eq!(form.name, "Saffron");
    assert_eq!(form.price, "12.5");
    assert_eq!(form.stock, "2");
    assert!(form.validate().is_ok());
}

#[test]
fn spice_cells_match_columns() {
    let spice = SpiceCategory {
        id: 1,
        name: "Cumin".to_owned(),
        description: "Earthy".to_owned(),
        created_at: None,
        updated_at: None,
    };
    assert_eq!(spice.cells(), vec!["Cumin", "Earthy"]);
    assert_eq!(spice.form().description, "Earthy");
}

#[test]
fn format_price_rounds_to_cents() {
    assert_eq!(format_price(4.0), "$4.00");
    assert_eq!(format_price(2.499), "$2.50");
}
