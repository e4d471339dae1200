pub mod grade;
pub mod inventory;
pub mod product;

pub use grade::{Grade, GradeError};
pub use inventory::{Inventory, InventoryError};
pub use product::{NewProductRequest, Product, ProductError};
