//! Plain-text tables for the terminal client.

use crate::model::{Product, SaleRecord};
use chrono::{Local, TimeZone};
use std::fmt::Display;

fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<String>| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = vec![line(headers.iter().map(|h| h.to_string()).collect())];
    out.extend(rows.iter().map(|row| line(row.clone())));
    out.join("\n")
}

pub fn render_products(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products.".to_string();
    }
    let rows: Vec<Vec<String>> = products
        .iter()
        .map(|p| {
            vec![
                p.name.clone(),
                format!("${}", p.price),
                p.stock.to_string(),
                p.id.to_string(),
            ]
        })
        .collect();
    table(&["Name", "Price", "Stock", "Id"], &rows)
}

/// Sales history with dates in the local time zone.
pub fn render_sales(sales: &[SaleRecord]) -> String {
    render_sales_in(sales, &Local)
}

/// Sales whose product is gone show an empty product cell.
pub fn render_sales_in<Tz>(sales: &[SaleRecord], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if sales.is_empty() {
        return "No sales yet.".to_string();
    }
    let rows: Vec<Vec<String>> = sales
        .iter()
        .map(|s| {
            vec![
                s.product.as_ref().map(|p| p.name.clone()).unwrap_or_default(),
                s.quantity.to_string(),
                s.date
                    .with_timezone(tz)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string(),
                s.id.to_string(),
            ]
        })
        .collect();
    table(&["Product", "Quantity", "Date", "Id"], &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductId, SaleId};
    use chrono::Utc;

    #[test]
    fn products_table_shows_price_with_dollar_sign() {
        let widget = Product::new(ProductId::generate(), "Widget", 9.99, 7);
        let out = render_products(&[widget.clone()]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[1].starts_with("Widget  $9.99  7"));
        assert!(lines[1].ends_with(&widget.id.to_string()));
    }

    #[test]
    fn sales_table_leaves_missing_products_blank() {
        let widget = Product::new(ProductId::generate(), "Widget", 9.99, 7);
        let date = "2024-05-01T12:30:00Z".parse().unwrap();
        let sales = vec![
            SaleRecord {
                id: SaleId::generate(),
                product: Some(widget),
                quantity: 3,
                date,
            },
            SaleRecord {
                id: SaleId::generate(),
                product: None,
                quantity: 2,
                date,
            },
        ];
        let out = render_sales_in(&sales, &Utc);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].starts_with("Widget"));
        assert!(lines[1].contains("2024-05-01 12:30:00"));
        assert!(lines[2].starts_with(' '));
        assert!(lines[2].trim_start().starts_with('2'));
    }

    #[test]
    fn empty_lists() {
        assert_eq!(render_products(&[]), "No products.");
        assert_eq!(render_sales(&[]), "No sales yet.");
    }
}
