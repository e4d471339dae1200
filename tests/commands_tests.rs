use inventory_cli::cli::commands::{
    add_product, inventory_value, list_products, remove_product, search_product,
    update_product, CommandError, ProductUpdate,
};
use inventory_cli::models::inventory::{Inventory, InventoryError};
use inventory_cli::models::product::ProductError;

fn setup_inventory() -> Inventory {
    let mut inventory = Inventory::new();
    add_product(&mut inventory, "Pen", "1.50", "10").expect("add pen");
    add_product(&mut inventory, "Notebook", "3.00", "5").expect("add notebook");
    inventory
}

#[test]
fn test_add_product_reports_success() {
    let mut inventory = Inventory::new();
    let message = add_product(&mut inventory, "  Stapler ", "7.25", "2").unwrap();
    assert_eq!(message, "Product 'Stapler' added to the inventory");
    assert_eq!(inventory.len(), 1);
}

#[test]
fn test_add_product_surfaces_errors() {
    let mut inventory = setup_inventory();

    let err = add_product(&mut inventory, "PEN", "2", "2").unwrap_err();
    assert_eq!(
        err,
        CommandError::Inventory(InventoryError::DuplicateProduct("PEN".to_string()))
    );

    let err = add_product(&mut inventory, "Ruler", "cheap", "2").unwrap_err();
    assert!(matches!(
        err,
        CommandError::Product(ProductError::ValidationError(_))
    ));
    assert_eq!(inventory.len(), 2);
}

#[test]
fn test_search_product() {
    let inventory = setup_inventory();

    let detail = search_product(&inventory, "notebook", "$").unwrap();
    assert!(detail.contains("Notebook"));
    assert!(detail.contains("$3.00"));
    assert!(detail.contains("$15.00"));

    assert_eq!(
        search_product(&inventory, "   ", "$").unwrap_err(),
        CommandError::EmptyName
    );
    assert_eq!(
        search_product(&inventory, " Eraser ", "$").unwrap_err(),
        CommandError::NotFound("Eraser".to_string())
    );
}

#[test]
fn test_list_products() {
    let empty = Inventory::new();
    assert_eq!(list_products(&empty, "$"), "The inventory is empty");

    let inventory = setup_inventory();
    let listing = list_products(&inventory, "€");
    let pen_at = listing.find("Pen").expect("pen listed");
    let notebook_at = listing.find("Notebook").expect("notebook listed");
    assert!(pen_at < notebook_at);
    assert!(listing.contains("€30.00"));
    assert!(listing.contains("Total Value"));
}

#[test]
fn test_inventory_value() {
    let inventory = setup_inventory();
    let summary = inventory_value(&inventory, "$");
    assert!(summary.contains("$30.00"));
    assert!(summary.contains('2'));
}

#[test]
fn test_update_product_price_and_quantity() {
    let mut inventory = setup_inventory();

    let message = update_product(
        &mut inventory,
        "pen",
        ProductUpdate {
            price: Some("2".to_string()),
            quantity: Some("20".to_string()),
        },
    )
    .unwrap();
    assert_eq!(message, "Price updated to 2.00\nQuantity updated to 20 units");

    let pen = inventory.find("pen").unwrap();
    assert_eq!(pen.price(), 2.0);
    assert_eq!(pen.quantity(), 20);
    assert_eq!(inventory.total_value(), 55.0);
}

#[test]
fn test_rejected_update_changes_nothing() {
    let mut inventory = setup_inventory();

    let err = update_product(
        &mut inventory,
        "pen",
        ProductUpdate {
            price: Some("4".to_string()),
            quantity: Some("-1".to_string()),
        },
    )
    .unwrap_err();
    assert_eq!(
        err,
        CommandError::Product(ProductError::ValidationError(
            "Quantity cannot be negative".to_string()
        ))
    );

    let pen = inventory.find("pen").unwrap();
    assert_eq!(pen.price(), 1.5);
    assert_eq!(pen.quantity(), 10);
}

#[test]
fn test_update_missing_product_or_no_fields() {
    let mut inventory = setup_inventory();

    assert_eq!(
        update_product(&mut inventory, "glue", ProductUpdate::default()).unwrap_err(),
        CommandError::NotFound("glue".to_string())
    );
    assert_eq!(
        update_product(&mut inventory, "pen", ProductUpdate::default()).unwrap(),
        "No changes made"
    );
}

#[test]
fn test_remove_product() {
    let mut inventory = setup_inventory();

    assert_eq!(
        remove_product(&mut inventory, " notebook ").unwrap(),
        "Product 'notebook' removed from the inventory"
    );
    assert_eq!(inventory.len(), 1);

    assert_eq!(
        remove_product(&mut inventory, "notebook").unwrap_err(),
        CommandError::NotFound("notebook".to_string())
    );
    assert_eq!(
        remove_product(&mut inventory, "").unwrap_err(),
        CommandError::EmptyName
    );
}
