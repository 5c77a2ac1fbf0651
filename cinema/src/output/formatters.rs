//! Output formatter implementations.

use serde_json::json;

use crate::{Metrics, Result, Snapshot};

use super::{OutputFormatter, PriceList, Purchase};

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_snapshot(&self, snapshot: &Snapshot) -> Result<String> {
        let mut lines = vec![
            "Current availability of seats:".to_string(),
            String::new(),
        ];

        for row in snapshot.rows() {
            let seats: String = row.iter().map(|state| format!(" '{state}'")).collect();
            lines.push(seats);
        }

        Ok(lines.join("\n"))
    }

    fn format_metrics(&self, metrics: &Metrics) -> Result<String> {
        let lines = [
            format!("Number of purchased tickets: {}", metrics.tickets_sold),
            format!("Percentage: {:.2}%", metrics.occupancy_percent),
            format!("Current income: ${}", metrics.current_income),
            format!("Potential total income: ${}", metrics.potential_total_income),
        ];

        Ok(lines.join("\n"))
    }

    fn format_purchase(&self, purchase: &Purchase) -> Result<String> {
        Ok(format!("Ticket price: ${}", purchase.price))
    }

    fn format_prices(&self, prices: &PriceList) -> Result<String> {
        let mut lines = vec![format!(
            "Ticket prices ({} rows, {} seats per row):",
            prices.row_prices.len(),
            prices.seats_per_row
        )];

        for (index, price) in prices.row_prices.iter().enumerate() {
            lines.push(format!("  Row {}: ${price}", index + 1));
        }
        lines.push(format!(
            "Potential total income: ${}",
            prices.potential_total_income
        ));

        Ok(lines.join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_snapshot(&self, snapshot: &Snapshot) -> Result<String> {
        let value = json!({ "seats": snapshot });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_metrics(&self, metrics: &Metrics) -> Result<String> {
        Ok(serde_json::to_string_pretty(metrics)?)
    }

    fn format_purchase(&self, purchase: &Purchase) -> Result<String> {
        Ok(serde_json::to_string_pretty(purchase)?)
    }

    fn format_prices(&self, prices: &PriceList) -> Result<String> {
        Ok(serde_json::to_string_pretty(prices)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeatInventory;

    fn sample_room() -> SeatInventory {
        let mut room = SeatInventory::new(2, 3).unwrap();
        room.purchase(1, 1).unwrap();
        room.purchase(2, 2).unwrap();
        room
    }

    #[test]
    fn test_human_snapshot() {
        let output = HumanFormatter
            .format_snapshot(&sample_room().snapshot())
            .unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Current availability of seats:");
        assert_eq!(lines[2], " 'R' 'A' 'A'");
        assert_eq!(lines[3], " 'A' 'R' 'A'");
    }

    #[test]
    fn test_human_metrics() {
        let output = HumanFormatter
            .format_metrics(&sample_room().metrics())
            .unwrap();

        assert!(output.contains("Number of purchased tickets: 2"));
        assert!(output.contains("Percentage: 33.33%"));
        assert!(output.contains("Current income: $20"));
        assert!(output.contains("Potential total income: $60"));
    }

    #[test]
    fn test_human_purchase() {
        let purchase = Purchase {
            row: 3,
            seat: 4,
            price: 12,
        };
        assert_eq!(
            HumanFormatter.format_purchase(&purchase).unwrap(),
            "Ticket price: $12"
        );
    }

    #[test]
    fn test_human_prices() {
        let prices = PriceList {
            seats_per_row: 1,
            row_prices: vec![10, 12],
            potential_total_income: 22,
        };
        let output = HumanFormatter.format_prices(&prices).unwrap();

        assert!(output.contains("2 rows, 1 seats per row"));
        assert!(output.contains("Row 1: $10"));
        assert!(output.contains("Row 2: $12"));
        assert!(output.contains("Potential total income: $22"));
    }

    #[test]
    fn test_json_snapshot() {
        let output = JsonFormatter
            .format_snapshot(&sample_room().snapshot())
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["seats"][0][0], "R");
        assert_eq!(parsed["seats"][1][1], "R");
        assert_eq!(parsed["seats"][1][2], "A");
    }

    #[test]
    fn test_json_metrics_unrounded() {
        let output = JsonFormatter
            .format_metrics(&sample_room().metrics())
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["tickets_sold"], 2);
        assert_eq!(parsed["current_income"], 20);
        let occupancy = parsed["occupancy_percent"].as_f64().unwrap();
        assert!((occupancy - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_json_purchase() {
        let purchase = Purchase {
            row: 1,
            seat: 2,
            price: 10,
        };
        let output = JsonFormatter.format_purchase(&purchase).unwrap();
        let parsed: Purchase = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, purchase);
    }
}
