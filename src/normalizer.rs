use crate::model::{PricePoint, PriceRecord};
use crate::utils::parse_report_date;
use chrono::NaiveDate;
use tracing::warn;

/// Converts records into priced points sorted by date (oldest first).
/// Records with an unparseable date or a non-positive price are dropped.
pub fn to_price_points(records: &[PriceRecord]) -> Vec<PricePoint> {
    let mut points: Vec<PricePoint> = records
        .iter()
        .filter(|r| r.weighted_average > 0.0)
        .filter_map(|r| match parse_report_date(&r.report_date) {
            Some(date) => Some(PricePoint::new(date, r.weighted_average)),
            None => {
                warn!("Skipping record with bad report_date: {:?}", r.report_date);
                None
            }
        })
        .collect();
    points.sort_by_key(|p| p.date);
    points
}

/// Keeps records for one item description (exact match).
pub fn filter_item(records: Vec<PriceRecord>, item: &str) -> Vec<PriceRecord> {
    records
        .into_iter()
        .filter(|r| r.item_description == item)
        .collect()
}

/// Points inside `[start, end]`.
pub fn view_window(points: &[PricePoint], start: NaiveDate, end: NaiveDate) -> Vec<PricePoint> {
    points
        .iter()
        .filter(|p| p.date >= start && p.date <= end)
        .copied()
        .collect()
}

pub fn prices(points: &[PricePoint]) -> Vec<f64> {
    points.iter().map(|p| p.price).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, item: &str, price: f64) -> PriceRecord {
        PriceRecord {
            report_date: date.into(),
            item_description: item.into(),
            number_trades: 0.0,
            total_pounds: 0.0,
            price_range_low: 0.0,
            price_range_high: 0.0,
            weighted_average: price,
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn sorts_and_drops_unpriced() {
        let records = vec![
            record("06/05/2024", "Ribeye", 210.0),
            record("06/03/2024", "Ribeye", 200.0),
            record("06/04/2024", "Ribeye", 0.0),
            record("garbage", "Ribeye", 220.0),
        ];
        let points = to_price_points(&records);
        assert_eq!(
            points,
            vec![PricePoint::new(d(2024, 6, 3), 200.0), PricePoint::new(d(2024, 6, 5), 210.0)]
        );
        assert_eq!(prices(&points), vec![200.0, 210.0]);
    }

    #[test]
    fn filters_items_and_windows() {
        let records = vec![
            record("06/03/2024", "Ribeye", 200.0),
            record("06/03/2024", "Brisket", 150.0),
            record("07/03/2024", "Ribeye", 205.0),
        ];
        let ribeye = filter_item(records, "Ribeye");
        assert_eq!(ribeye.len(), 2);

        let points = to_price_points(&ribeye);
        let june = view_window(&points, d(2024, 6, 1), d(2024, 6, 30));
        assert_eq!(june.len(), 1);
        assert_eq!(view_window(&points, d(2024, 6, 3), d(2024, 7, 3)).len(), 2);
    }
}
