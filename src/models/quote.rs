use serde::{Deserialize, Serialize};

/// Aggregate cost and duration for a set of issues.
///
/// Serialized with its `grand_total`; the field is ignored when reading one back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "QuoteView")]
pub struct Quote {
    pub total_cost: u32,
    /// Minutes.
    pub total_time: u32,
    #[serde(default)]
    pub surcharge: u32,
}

impl Quote {
    pub fn new(total_cost: u32, total_time: u32) -> Self {
        Self { total_cost, total_time, surcharge: 0 }
    }

    /// Applies a fixed fee on top of the summed cost. Replaces any earlier surcharge.
    pub fn with_surcharge(self, surcharge: u32) -> Self {
        Self { surcharge, ..self }
    }

    pub fn grand_total(&self) -> u32 {
        self.total_cost.saturating_add(self.surcharge)
    }
}

#[derive(Serialize)]
struct QuoteView {
    total_cost: u32,
    total_time: u32,
    surcharge: u32,
    grand_total: u32,
}

impl From<Quote> for QuoteView {
    fn from(quote: Quote) -> Self {
        Self {
            total_cost: quote.total_cost,
            total_time: quote.total_time,
            surcharge: quote.surcharge,
            grand_total: quote.grand_total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grand_total_without_surcharge() {
        assert_eq!(Quote::new(70, 45).grand_total(), 70);
    }

    #[test]
    fn test_with_surcharge_replaces() {
        let q = Quote::new(70, 45).with_surcharge(20).with_surcharge(10);
        assert_eq!(q.surcharge, 10);
        assert_eq!(q.grand_total(), 80);
        assert_eq!(q.total_time, 45);
    }

    #[test]
    fn test_serialized_with_grand_total() {
        let value = serde_json::to_value(Quote::new(70, 45).with_surcharge(20)).unwrap();
        assert_eq!(value["total_cost"], 70);
        assert_eq!(value["surcharge"], 20);
        assert_eq!(value["grand_total"], 90);
    }

    #[test]
    fn test_grand_total_ignored_on_read() {
        let q: Quote = serde_json::from_str(
            r#"{"total_cost": 70, "total_time": 45, "surcharge": 20, "grand_total": 1}"#,
        )
        .unwrap();
        assert_eq!(q.grand_total(), 90);
    }

    #[test]
    fn test_surcharge_defaults_when_missing() {
        let q: Quote = serde_json::from_str(r#"{"total_cost": 5, "total_time": 3}"#).unwrap();
        assert_eq!(q.surcharge, 0);
    }
}
