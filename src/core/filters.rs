use crate::domain::model::{FilterControls, ListingCard};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?)(Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("number pattern is valid")
});

/// 寬鬆的數字解析：取字串開頭的數字部分 ("250000 USD" -> 250000)，沒有則為 None
pub fn parse_leading_number(raw: &str) -> Option<f64> {
    let caps = LEADING_NUMBER.captures(raw)?;
    let negative = &caps[1] == "-";
    let magnitude = match &caps[2] {
        "Infinity" => f64::INFINITY,
        digits => digits.parse::<f64>().ok()?,
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// 每次 change 事件時從控制項重新讀取，不做快取
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterCriteria {
    pub location: Option<String>,
    pub min_price: f64,
    pub max_price: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            location: None,
            min_price: 0.0,
            max_price: f64::INFINITY,
        }
    }
}

impl FilterCriteria {
    pub fn read(controls: &FilterControls) -> Self {
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

        // 空白用預設值；有填但無法解析的邊界不設限
        Self {
            location: non_empty(&controls.location),
            min_price: non_empty(&controls.min_price).map_or(0.0, |v| {
                parse_leading_number(&v).unwrap_or(f64::NEG_INFINITY)
            }),
            max_price: non_empty(&controls.max_price)
                .and_then(|v| parse_leading_number(&v))
                .unwrap_or(f64::INFINITY),
        }
    }

    /// 邊界值包含在內；價格無法解析時視為 0
    pub fn matches(&self, card: &ListingCard) -> bool {
        if let Some(location) = &self.location {
            let in_location = card
                .location
                .as_deref()
                .is_some_and(|card_location| card_location.contains(location.as_str()));
            if !in_location {
                return false;
            }
        }

        let price = card_price(card);
        price >= self.min_price && price <= self.max_price
    }
}

pub fn card_price(card: &ListingCard) -> f64 {
    card.price
        .as_deref()
        .and_then(parse_leading_number)
        .unwrap_or(0.0)
}

/// 重新計算所有卡片的顯示狀態，回傳顯示中的數量
pub fn apply(listings: &mut [ListingCard], criteria: &FilterCriteria) -> usize {
    let mut shown = 0;
    for card in listings.iter_mut() {
        card.visible = criteria.matches(card);
        if card.visible {
            shown += 1;
        }
    }
    tracing::debug!(
        "Filter {:?} [{}, {}] -> {}/{} listings shown",
        criteria.location,
        criteria.min_price,
        criteria.max_price,
        shown,
        listings.len()
    );
    shown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listings() -> Vec<ListingCard> {
        vec![
            ListingCard::new("Harbour flat", "Sydney CBD", "450000"),
            ListingCard::new("Beach house", "Bondi, Sydney", "1200000"),
            ListingCard::new("Studio", "Melbourne", "300000"),
            ListingCard::new("Mystery lot", "Melbourne", "call us"),
        ]
    }

    fn controls(location: &str, min: &str, max: &str) -> FilterControls {
        FilterControls {
            bound: true,
            location: Some(location.to_string()),
            min_price: Some(min.to_string()),
            max_price: Some(max.to_string()),
        }
    }

    fn visible(cards: &[ListingCard]) -> Vec<bool> {
        cards.iter().map(|card| card.visible).collect()
    }

    #[test]
    fn test_parse_leading_number() {
        assert_eq!(parse_leading_number("450000"), Some(450000.0));
        assert_eq!(parse_leading_number("  250000 USD"), Some(250000.0));
        assert_eq!(parse_leading_number("1.5e3"), Some(1500.0));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("-20"), Some(-20.0));
        assert_eq!(parse_leading_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_leading_number("$100"), None);
        assert_eq!(parse_leading_number(""), None);
    }

    #[test]
    fn test_defaults_show_everything() {
        let mut cards = listings();
        let criteria = FilterCriteria::read(&controls("", "", ""));
        assert_eq!(criteria, FilterCriteria::default());
        assert_eq!(apply(&mut cards, &criteria), 4);
    }

    #[test]
    fn test_location_substring() {
        let mut cards = listings();
        let criteria = FilterCriteria::read(&controls("Sydney", "", ""));
        apply(&mut cards, &criteria);
        assert_eq!(visible(&cards), vec![true, true, false, false]);
    }

    #[test]
    fn test_inclusive_bounds() {
        let mut cards = listings();
        let criteria = FilterCriteria::read(&controls("", "300000", "450000"));
        apply(&mut cards, &criteria);
        assert_eq!(visible(&cards), vec![true, false, true, false]);
    }

    #[test]
    fn test_unparseable_price_is_zero() {
        let cards = listings();
        assert_eq!(card_price(&cards[3]), 0.0);

        let mut cards = listings();
        apply(&mut cards, &FilterCriteria::read(&controls("", "", "0")));
        assert_eq!(visible(&cards), vec![false, false, false, true]);

        let mut missing = ListingCard::new("No price", "Perth", "");
        missing.price = None;
        assert_eq!(card_price(&missing), 0.0);
    }

    #[test]
    fn test_missing_location_hidden_when_filtering() {
        let mut card = ListingCard::new("Unlisted", "", "100");
        card.location = None;
        let mut cards = vec![card];

        apply(&mut cards, &FilterCriteria::read(&controls("Perth", "", "")));
        assert!(!cards[0].visible);

        apply(&mut cards, &FilterCriteria::read(&controls("", "", "")));
        assert!(cards[0].visible);
    }

    #[test]
    fn test_unparseable_bounds_impose_no_limit() {
        let criteria = FilterCriteria::read(&controls("", "abc", "n/a"));
        assert_eq!(criteria.min_price, f64::NEG_INFINITY);
        assert_eq!(criteria.max_price, f64::INFINITY);

        let mut cards = vec![
            ListingCard::new("Rebate", "Perth", "-5"),
            ListingCard::new("Flat", "Perth", "250000"),
        ];
        apply(&mut cards, &criteria);
        assert_eq!(visible(&cards), vec![true, true]);

        // 空白下限仍是 0
        apply(&mut cards, &FilterCriteria::read(&controls("", "", "")));
        assert_eq!(visible(&cards), vec![false, true]);
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let mut cards = listings();
        let criteria = FilterCriteria::read(&controls("Melbourne", "100000", ""));

        apply(&mut cards, &criteria);
        let first = visible(&cards);
        apply(&mut cards, &criteria);
        assert_eq!(visible(&cards), first);
        assert_eq!(cards[2].display(), "block");
        assert_eq!(cards[0].display(), "none");
    }
}
