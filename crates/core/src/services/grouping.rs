use std::collections::HashMap;

use crate::models::holding::Holding;

/// Value and count accumulated for one category label.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryTotal<'a> {
    pub label: &'a str,
    pub value: f64,
    pub count: usize,
}

/// Single pass group-by over holdings. Rows come out in first-seen order.
pub(crate) fn group_by<'a, F>(holdings: &'a [Holding], key: F) -> Vec<CategoryTotal<'a>>
where
    F: Fn(&'a Holding) -> &'a str,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal<'a>> = Vec::new();

    for holding in holdings {
        let label = key(holding);
        let slot = *index.entry(label).or_insert_with(|| {
            totals.push(CategoryTotal {
                label,
                value: 0.0,
                count: 0,
            });
            totals.len() - 1
        });
        totals[slot].value += holding.value;
        totals[slot].count += 1;
    }

    totals
}

pub(crate) fn by_sector(holdings: &[Holding]) -> Vec<CategoryTotal<'_>> {
    group_by(holdings, |h| h.sector.as_str())
}

pub(crate) fn by_market_cap(holdings: &[Holding]) -> Vec<CategoryTotal<'_>> {
    group_by(holdings, |h| h.market_cap.as_str())
}

/// `part / total`, or 0 when the total is 0.
pub(crate) fn share(part: f64, total: f64) -> f64 {
    if total != 0.0 {
        part / total
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holding(sector: &str, value: f64) -> Holding {
        let mut h = Holding::new("X", "X Ltd", 1, value, value, sector, "Large", "NSE");
        h.value = value;
        h
    }

    #[test]
    fn keeps_first_seen_order() {
        let holdings = vec![
            holding("Energy", 10.0),
            holding("Banking", 20.0),
            holding("Energy", 5.0),
        ];
        let totals = by_sector(&holdings);
        let labels: Vec<&str> = totals.iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["Energy", "Banking"]);
        assert_eq!(totals[0].value, 15.0);
        assert_eq!(totals[0].count, 2);
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(by_market_cap(&[]).is_empty());
    }

    #[test]
    fn share_of_zero_total_is_zero() {
        assert_eq!(share(42.0, 0.0), 0.0);
        assert_eq!(share(1.0, 4.0), 0.25);
    }
}
