use console::style;
use tabled::{
    settings::{Alignment, Style},
    Table, Tabled,
};

use crate::{
    models::{grade::Grade, inventory::Inventory, product::Product},
    services::GradeSummary,
};

#[derive(Tabled)]
struct ProductTableRow {
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Total Value")]
    total: String,
}

#[derive(Tabled)]
struct GradeTableRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Grade")]
    score: String,
}

pub fn format_money(value: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, value)
}

pub fn format_product_table(products: &[Product], currency: &str) -> String {
    if products.is_empty() {
        return String::new();
    }

    let rows: Vec<ProductTableRow> = products
        .iter()
        .map(|product| ProductTableRow {
            name: if product.name().chars().count() > 30 {
                format!("{}...", product.name().chars().take(27).collect::<String>())
            } else {
                product.name().to_string()
            },
            price: format_money(product.price(), currency),
            quantity: format!("{} units", product.quantity()),
            total: format_money(product.total_value(), currency),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());

    table.to_string()
}

pub fn format_product_detail(product: &Product, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}: {}\n",
        style("Product").bold(),
        style(product.name()).green()
    ));
    output.push_str(&format!(
        "{}: {}\n",
        style("Price").bold(),
        style(format_money(product.price(), currency)).cyan()
    ));

    let quantity = format!("{} units", product.quantity());
    let quantity = if product.quantity() == 0 {
        style(quantity).red()
    } else {
        style(quantity).yellow()
    };
    output.push_str(&format!("{}: {}\n", style("Quantity").bold(), quantity));
    output.push_str(&format!(
        "{}: {}\n",
        style("Total Value").bold(),
        style(format_money(product.total_value(), currency)).green()
    ));

    output
}

pub fn format_inventory_summary(inventory: &Inventory, currency: &str) -> String {
    format!(
        "{}: {}\n{}: {}\n",
        style("Inventory value").bold(),
        style(format_money(inventory.total_value(), currency)).green(),
        style("Products in stock").bold(),
        inventory.len()
    )
}

pub fn format_grade_summary(grades: &[Grade], summary: &GradeSummary) -> String {
    let rows: Vec<GradeTableRow> = grades
        .iter()
        .enumerate()
        .map(|(i, grade)| GradeTableRow {
            position: i + 1,
            subject: grade.subject.clone(),
            score: format!("{:.1}", grade.score),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());

    let mut output = table.to_string();
    output.push('\n');

    output.push_str(&format!(
        "\n{}: {}\n",
        style("Average").bold(),
        style(format!("{:.2}", summary.average)).cyan()
    ));

    output.push_str(&format!(
        "\n{} ({}):\n",
        style("Passed subjects").bold(),
        summary.passed.len()
    ));
    output.push_str(&format_subject_list(grades, &summary.passed, "No subjects passed"));

    output.push_str(&format!(
        "\n{} ({}):\n",
        style("Failed subjects").bold(),
        summary.failed.len()
    ));
    output.push_str(&format_subject_list(grades, &summary.failed, "No subjects failed"));

    let best = &grades[summary.highest];
    let worst = &grades[summary.lowest];
    output.push_str(&format!(
        "\n{}: {} ({:.1})\n",
        style("Best grade").bold(),
        best.subject,
        best.score
    ));
    output.push_str(&format!(
        "{}: {} ({:.1})\n",
        style("Worst grade").bold(),
        worst.subject,
        worst.score
    ));

    output.push_str(&format!(
        "\n{}: {}\n{}: {:.1}%\n",
        style("Total subjects").bold(),
        grades.len(),
        style("Pass rate").bold(),
        summary.pass_rate
    ));

    let status = if summary.overall_passed {
        style("PASSED").green().bold()
    } else {
        style("FAILED").red().bold()
    };
    output.push_str(&format!("{}: {}\n", style("Overall status").bold(), status));

    output
}

fn format_subject_list(grades: &[Grade], indices: &[usize], empty: &str) -> String {
    if indices.is_empty() {
        return format!("   {}\n", style(empty).dim());
    }

    indices
        .iter()
        .map(|&i| format!("   • {}: {:.1}\n", grades[i].subject, grades[i].score))
        .collect()
}
