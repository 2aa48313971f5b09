//! Query Classifier
//!
//! Picks which enrichment (if any) a chat message gets:
//! - Currency: exchange-rate questions ("convert 10 usd to ngn")
//! - News: questions about recent events ("latest news on AI")
//! - Plain: everything else, forwarded as-is

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Currency,
    News,
    Plain,
}

/// Static keyword lists, zero allocation
const CURRENCY_KEYWORDS: &[&str] = &[
    // Intent
    "convert", "exchange rate", "currency",
    // ISO codes
    "usd", "eur", "gbp", "ngn",
    // Names
    "dollar", "euro", "pound", "naira",
];

const RECENCY_KEYWORDS: &[&str] = &[
    // Time
    "recent", "latest", "news", "today", "2024", "2023", "current",
    // Markets
    "price", "stock", "market",
];

/// Keyword-based query classifier
pub struct QueryClassifier;

impl QueryClassifier {
    /// Classify a raw user message. Currency wins over News.
    pub fn classify(message: &str) -> QueryKind {
        let text = message.to_lowercase();

        if contains_any(&text, CURRENCY_KEYWORDS) {
            QueryKind::Currency
        } else if contains_any(&text, RECENCY_KEYWORDS) {
            QueryKind::News
        } else {
            QueryKind::Plain
        }
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_queries() {
        let cases = vec![
            "What is 1 USD in NGN?",
            "convert 100 pounds",
            "What's the EXCHANGE RATE today?",
            "how strong is the naira",
            "Euro vs dollar",
        ];

        for c in cases {
            assert_eq!(QueryClassifier::classify(c), QueryKind::Currency, "{}", c);
        }
    }

    #[test]
    fn test_currency_beats_recency() {
        let cases = vec![
            "latest USD news",
            "current dollar price",
            "stock market in europe today",
        ];

        for c in cases {
            assert_eq!(QueryClassifier::classify(c), QueryKind::Currency, "{}", c);
        }
    }

    #[test]
    fn test_news_queries() {
        let cases = vec![
            "What's the latest news on AI?",
            "Recent elections",
            "Tesla STOCK",
            "who won in 2023",
        ];

        for c in cases {
            assert_eq!(QueryClassifier::classify(c), QueryKind::News, "{}", c);
        }
    }

    #[test]
    fn test_plain_queries() {
        let cases = vec!["Tell me a joke", "Explain recursion", "", "hi"];

        for c in cases {
            assert_eq!(QueryClassifier::classify(c), QueryKind::Plain, "{}", c);
        }
    }
}
