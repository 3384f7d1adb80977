//! Pure helpers for pulling a price out of loosely structured page text.
//!
//! The source pages offer no stable markup, so extraction is deliberately
//! tolerant: reduce the document to its visible text, then take the first
//! plausible number. Both steps are pure functions, testable offline
//! against captured fixtures.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

lazy_static! {
    /// `<script>`/`<style>` blocks, contents included.
    static ref NON_VISIBLE_BLOCKS: Regex =
        Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").unwrap();
    /// Any remaining markup tag.
    static ref TAGS: Regex = Regex::new(r"(?s)<[^>]*>").unwrap();
    /// A 5-digit low-high range like `80500-82300`, or a lone 5-digit price.
    static ref PRICE: Regex = Regex::new(r"(\d{5})\s*-\s*(\d{5})|(\d{5})").unwrap();
    /// A lone 5-digit number.
    static ref FIVE_DIGITS: Regex = Regex::new(r"\d{5}").unwrap();
}

/// A price matched in page text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExtractedPrice {
    /// A lone quote.
    Single(Decimal),

    /// A low-high range.
    Range(Decimal, Decimal),
}

impl ExtractedPrice {
    /// Midpoint for ranges, the value itself otherwise.
    pub fn midpoint(&self) -> Decimal {
        match *self {
            Self::Single(price) => price,
            Self::Range(low, high) => (low + high) / Decimal::from(2),
        }
    }
}

/// Reduce an HTML document to the text a reader would see.
///
/// Script and style blocks are dropped wholesale, remaining tags are
/// replaced by spaces, the handful of entities that show up on the source
/// pages are decoded, and whitespace is collapsed to single spaces.
pub fn visible_text(html: &str) -> String {
    let without_blocks = NON_VISIBLE_BLOCKS.replace_all(html, " ");
    let without_tags = TAGS.replace_all(&without_blocks, " ");
    let decoded = without_tags
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First 5-digit price, or 5-digit low-high range, in the text.
pub fn first_price(text: &str) -> Option<ExtractedPrice> {
    let caps = PRICE.captures(text)?;
    match (caps.get(1), caps.get(2)) {
        (Some(low), Some(high)) => {
            let low = low.as_str().parse().ok()?;
            let high = high.as_str().parse().ok()?;
            Some(ExtractedPrice::Range(low, high))
        }
        _ => caps
            .get(3)?
            .as_str()
            .parse()
            .ok()
            .map(ExtractedPrice::Single),
    }
}

/// First lone 5-digit number in the text, range or not.
pub fn first_number(text: &str) -> Option<Decimal> {
    FIVE_DIGITS.find(text).and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_first_price_range_and_midpoint() {
        let extracted = first_price("电池级碳酸锂 80500-82300 元/吨").unwrap();
        assert_eq!(extracted, ExtractedPrice::Range(dec!(80500), dec!(82300)));
        assert_eq!(extracted.midpoint(), dec!(81400));
    }

    #[test]
    fn test_first_price_single() {
        let extracted = first_price("主力合约报 79650 元/吨").unwrap();
        assert_eq!(extracted, ExtractedPrice::Single(dec!(79650)));
        assert_eq!(extracted.midpoint(), dec!(79650));
    }

    #[test]
    fn test_first_price_takes_first_match() {
        let extracted = first_price("80500-82300 然后 90000").unwrap();
        assert_eq!(extracted.midpoint(), dec!(81400));
    }

    #[test]
    fn test_first_price_no_match() {
        assert_eq!(first_price("价格待定 1234 元"), None);
        assert_eq!(first_price(""), None);
    }

    #[test]
    fn test_first_number_ignores_range_shape() {
        assert_eq!(first_number("80500-82300"), Some(dec!(80500)));
        assert_eq!(first_number("报价 79650"), Some(dec!(79650)));
        assert_eq!(first_number("no digits"), None);
    }

    #[test]
    fn test_visible_text_strips_markup() {
        let html = "<html><body><div class=\"price\">80500</div>-<span>82300</span></body></html>";
        assert_eq!(visible_text(html), "80500 - 82300");
    }

    #[test]
    fn test_visible_text_drops_script_and_style_blocks() {
        let html = "<script>var x = 99999;</script><style>.p{width:12345px}</style><p>80500</p>";
        assert_eq!(visible_text(html), "80500");
    }

    #[test]
    fn test_visible_text_decodes_common_entities() {
        let html = "<p>80500&nbsp;-&nbsp;82300 &amp; more</p>";
        assert_eq!(visible_text(html), "80500 - 82300 & more");
    }

    #[test]
    fn test_range_survives_text_reduction() {
        let html = "<td>80500</td><td>-</td><td>82300</td>";
        let extracted = first_price(&visible_text(html)).unwrap();
        assert_eq!(extracted.midpoint(), dec!(81400));
    }
}
