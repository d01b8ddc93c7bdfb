//! Output formatting module

use carlot_domain::notify::Notifier;
use carlot_types::{Car, OutputFormat, Result};

/// Notifier that prints store outcomes to the terminal
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("{}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Print a list of cars as a table or JSON
pub fn output_car_list(output_format: OutputFormat, cars: &[&Car]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&cars)?);
        return Ok(());
    }

    if cars.is_empty() {
        println!("No cars match.");
        return Ok(());
    }

    println!(
        "{:<10} {:<10} {:<14} {:>6} {:>10}  {}",
        "ID", "Make", "Model", "Year", "Price", "Status"
    );
    println!("{}", "-".repeat(66));
    for car in cars {
        println!(
            "{:<10} {:<10} {:<14} {:>6} {:>10}  {}",
            truncate_str(&car.id, 10),
            truncate_str(&car.make, 10),
            truncate_str(&car.model, 14),
            car.year,
            format_currency(car.price),
            status_label(car),
        );
    }
    println!("\n{} car(s)", cars.len());

    Ok(())
}

/// Print one listing in full
pub fn output_car(output_format: OutputFormat, car: &Car) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(car)?);
        return Ok(());
    }

    println!("\n{} {} {}", car.year, car.make, car.model);
    println!("========================");
    println!("ID:       {}", car.id);
    println!("Price:    {}", format_currency(car.price));
    println!("Status:   {}", status_label(car));
    if !car.image_url.is_empty() {
        println!("Image:    {}", car.image_url);
    }

    if !car.features.is_empty() {
        println!("\nFeatures:");
        for feature in &car.features {
            println!("  - {}", feature);
        }
    }

    if !car.description.is_empty() {
        println!("\n{}", car.description);
    }

    Ok(())
}

fn status_label(car: &Car) -> String {
    match car.buyer_id.as_deref() {
        Some(buyer) if car.sold => format!("Sold to {}", buyer),
        _ => "Available".to_string(),
    }
}

/// Format an integer amount as US-style currency (e.g., "$25,000")
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut formatted = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    format!("${}", formatted)
}

/// Truncate a string to `max_len` characters, appending "..." if cut
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(999), "$999");
        assert_eq!(format_currency(1000), "$1,000");
        assert_eq!(format_currency(25000), "$25,000");
        assert_eq!(format_currency(1234567), "$1,234,567");
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Camry", 10), "Camry");
        assert_eq!(truncate_str("Wrangler Unlimited", 11), "Wrangler...");
        assert_eq!(truncate_str("exact", 5), "exact");
    }
}
