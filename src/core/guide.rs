// StockManager - core/guide.rs
//
// Static guide text rendered by the content delegates, one guide per
// panel kind. Pure data; the ui layer decides how to lay it out.

use crate::core::model::PanelKind;

/// One section of a guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideSection {
    pub heading: &'static str,
    pub body: &'static str,
    /// Data provider the described tool reads from.
    pub source: Option<&'static str>,
    /// Example stock symbol for trying the tool.
    pub example_symbol: Option<&'static str>,
}

const STOCK_GUIDE: &[GuideSection] = &[
    GuideSection {
        heading: "Overview",
        body: "Stock agents answer questions about A-share listed companies by calling \
               data tools with a six-digit stock symbol. Each section below describes one \
               tool, where its data comes from, and a symbol to try it with.",
        source: None,
        example_symbol: None,
    },
    GuideSection {
        heading: "Main business composition",
        body: "Returns the company's main business lines, product types, product names \
               and business scope.",
        source: Some("Tonghuashun"),
        example_symbol: Some("000066"),
    },
    GuideSection {
        heading: "Financial analysis indicators",
        body: "Returns per-report indicators such as earnings per share, return on equity, \
               gross margin and debt ratio, starting from a given year.",
        source: Some("Sina Finance"),
        example_symbol: Some("600004"),
    },
    GuideSection {
        heading: "Stock news",
        body: "Returns recent news items for the symbol with title, publish time, source \
               and link.",
        source: Some("East Money"),
        example_symbol: Some("300059"),
    },
    GuideSection {
        heading: "Balance sheet",
        body: "Returns assets, liabilities and equity by reporting period, either per \
               report, per year or per quarter.",
        source: Some("Tonghuashun"),
        example_symbol: Some("000063"),
    },
    GuideSection {
        heading: "Income statement",
        body: "Returns revenue, costs and profit lines by reporting period.",
        source: Some("Tonghuashun"),
        example_symbol: Some("000063"),
    },
    GuideSection {
        heading: "Cash flow statement",
        body: "Returns operating, investing and financing cash flows by reporting period.",
        source: Some("Tonghuashun"),
        example_symbol: Some("000063"),
    },
];

/// Guide sections for a panel kind, in display order.
pub fn guide_for(kind: PanelKind) -> &'static [GuideSection] {
    match kind {
        PanelKind::Stock => STOCK_GUIDE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_guide() {
        for kind in PanelKind::all() {
            assert!(!guide_for(*kind).is_empty(), "{kind:?} has no guide");
        }
    }

    #[test]
    fn test_stock_guide_starts_with_overview() {
        let guide = guide_for(PanelKind::Stock);
        assert_eq!(guide[0].heading, "Overview");
        // Every tool section names where its data comes from.
        assert!(guide[1..].iter().all(|s| s.source.is_some()));
    }

    #[test]
    fn test_example_symbols_are_six_digits() {
        for section in guide_for(PanelKind::Stock) {
            if let Some(sym) = section.example_symbol {
                assert_eq!(sym.len(), 6, "{sym}");
                assert!(sym.chars().all(|c| c.is_ascii_digit()), "{sym}");
            }
        }
    }
}
