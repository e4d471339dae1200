use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    models::{
        grade::parse_score,
        inventory::{Inventory, InventoryError},
        product::{parse_price, parse_quantity, Product, ProductError},
    },
    services::GradeService,
    utils::{
        formatting::{
            format_grade_summary, format_inventory_summary, format_product_detail,
            format_product_table,
        },
        Config,
    },
};

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("Product name cannot be empty")]
    EmptyName,

    #[error("Product '{0}' not found in the inventory")]
    NotFound(String),
}

/// Raw replacement values for an existing product. `None` leaves the field as is.
#[derive(Debug, Default, Clone)]
pub struct ProductUpdate {
    pub price: Option<String>,
    pub quantity: Option<String>,
}

const MENU_ITEMS: [&str; 7] = [
    "Add product",
    "Search product",
    "List all products",
    "Inventory value",
    "Update product",
    "Remove product",
    "Exit",
];

const UPDATE_ITEMS: [&str; 3] = ["Price", "Quantity", "Both"];

fn require_name(name: &str) -> Result<&str, CommandError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CommandError::EmptyName);
    }
    Ok(name)
}

pub fn add_product(
    inventory: &mut Inventory,
    name: &str,
    price: &str,
    quantity: &str,
) -> Result<String, CommandError> {
    let product = Product::parse(name, price, quantity)?;
    let message = format!("Product '{}' added to the inventory", product.name());
    inventory.add(product)?;
    Ok(message)
}

pub fn search_product(
    inventory: &Inventory,
    name: &str,
    currency: &str,
) -> Result<String, CommandError> {
    let name = require_name(name)?;
    inventory
        .find(name)
        .map(|product| format_product_detail(product, currency))
        .ok_or_else(|| CommandError::NotFound(name.to_string()))
}

pub fn list_products(inventory: &Inventory, currency: &str) -> String {
    if inventory.is_empty() {
        return "The inventory is empty".to_string();
    }

    format!(
        "{}\n{}",
        format_product_table(inventory.list(), currency),
        format_inventory_summary(inventory, currency)
    )
}

pub fn inventory_value(inventory: &Inventory, currency: &str) -> String {
    format_inventory_summary(inventory, currency)
}

/// Applies price and/or quantity changes. Both values are validated before
/// either is written, so a rejected update changes nothing.
pub fn update_product(
    inventory: &mut Inventory,
    name: &str,
    update: ProductUpdate,
) -> Result<String, CommandError> {
    let name = require_name(name)?;
    let product = inventory
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    if let Some(raw) = &update.price {
        parse_price(raw)?;
    }
    if let Some(raw) = &update.quantity {
        parse_quantity(raw)?;
    }

    let mut notices = Vec::new();
    if let Some(raw) = &update.price {
        notices.push(product.set_price(raw)?);
    }
    if let Some(raw) = &update.quantity {
        notices.push(product.set_quantity(raw)?);
    }

    if notices.is_empty() {
        return Ok("No changes made".to_string());
    }
    Ok(notices.join("\n"))
}

pub fn remove_product(inventory: &mut Inventory, name: &str) -> Result<String, CommandError> {
    let name = require_name(name)?;
    if inventory.remove(name) {
        Ok(format!("Product '{}' removed from the inventory", name))
    } else {
        Err(CommandError::NotFound(name.to_string()))
    }
}

fn ask(theme: &ColorfulTheme, prompt: &str) -> Result<String> {
    let value = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn report(outcome: Result<String, CommandError>) {
    match outcome {
        Ok(message) => println!("{} {}", style("✓").green(), message),
        Err(e) => {
            warn!("Command failed: {}", e);
            println!("{} {}", style("✗").red(), e);
        }
    }
}

fn prompt_update(
    theme: &ColorfulTheme,
    inventory: &mut Inventory,
    currency: &str,
) -> Result<Result<String, CommandError>> {
    let name = ask(theme, "Product to update")?;
    let key = match require_name(&name) {
        Ok(key) => key,
        Err(e) => return Ok(Err(e)),
    };
    let Some(product) = inventory.find(key) else {
        return Ok(Err(CommandError::NotFound(key.to_string())));
    };

    println!("\n{}", format_product_detail(product, currency));
    let current_price = product.price();
    let current_quantity = product.quantity();

    let field = Select::with_theme(theme)
        .with_prompt("What do you want to update?")
        .items(&UPDATE_ITEMS)
        .default(0)
        .interact()?;

    let mut update = ProductUpdate::default();
    if field == 0 || field == 2 {
        update.price = Some(ask(
            theme,
            &format!("New price (current: {}{:.2})", currency, current_price),
        )?);
    }
    if field == 1 || field == 2 {
        update.quantity = Some(ask(
            theme,
            &format!("New quantity (current: {})", current_quantity),
        )?);
    }

    Ok(update_product(inventory, &name, update))
}

pub fn run_inventory_menu(config: &Config) -> Result<()> {
    let theme = ColorfulTheme::default();
    let currency = config.currency_symbol.as_str();
    let mut inventory = Inventory::new();
    info!("Inventory menu started");

    loop {
        println!("\n{}", style("INVENTORY SYSTEM").bold().cyan());
        let choice = Select::with_theme(&theme)
            .with_prompt("Select an option")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;

        let outcome = match choice {
            0 => {
                let name = ask(&theme, "Product name")?;
                let price = ask(&theme, &format!("Unit price ({})", currency))?;
                let quantity = ask(&theme, "Quantity in stock")?;
                add_product(&mut inventory, &name, &price, &quantity)
            }
            1 => {
                let name = ask(&theme, "Product to search")?;
                search_product(&inventory, &name, currency)
            }
            2 => {
                println!("\n{}", list_products(&inventory, currency));
                continue;
            }
            3 => {
                println!("\n{}", inventory_value(&inventory, currency));
                continue;
            }
            4 => prompt_update(&theme, &mut inventory, currency)?,
            5 => {
                let name = ask(&theme, "Product to remove")?;
                remove_product(&mut inventory, &name)
            }
            _ => break,
        };

        report(outcome);
    }

    info!("Inventory menu closed with {} products", inventory.len());
    println!("\n{}", style("Thanks for using the inventory system!").bold());
    Ok(())
}

pub fn run_grades_session(config: &Config) -> Result<()> {
    let theme = ColorfulTheme::default();
    let service = GradeService::from_config(config);
    let max_grade = service.max_grade();
    let mut grades = Vec::new();

    println!("\n{}", style("GRADE AVERAGE CALCULATOR").bold().cyan());
    println!("Enter subjects and their grades (0-{})", max_grade);

    loop {
        let subject = Input::<String>::with_theme(&theme)
            .with_prompt("Subject name")
            .validate_with(|input: &String| -> Result<(), String> {
                if input.trim().is_empty() {
                    Err("Subject name cannot be empty".to_string())
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        let raw_score = Input::<String>::with_theme(&theme)
            .with_prompt(format!("Grade for {} (0-{})", subject.trim(), max_grade))
            .validate_with(|input: &String| -> Result<(), String> {
                parse_score(input, max_grade)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .interact_text()?;

        match service.record(&subject, &raw_score) {
            Ok(grade) => {
                println!("{} {}: {:.1}", style("✓").green(), grade.subject, grade.score);
                grades.push(grade);
            }
            Err(e) => println!("{} {}", style("✗").red(), e),
        }

        let more = Confirm::with_theme(&theme)
            .with_prompt("Add another subject?")
            .default(true)
            .interact()?;
        if !more {
            break;
        }
    }

    match service.summarize(&grades) {
        Some(summary) => println!("\n{}", format_grade_summary(&grades, &summary)),
        None => println!("\nNo subjects were entered."),
    }
    Ok(())
}
