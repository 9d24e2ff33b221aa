//! Brand Display Helpers
//!
//! Card colors, text truncation and link classification.

pub const DEFAULT_CARD_COLOR: &str = "#fff";
const DARK_TEXT: &str = "#222";
const LIGHT_TEXT: &str = "#fff";
const DESCRIPTION_LIMIT: usize = 100;
/// Tags shown on a card before the "+N more" pill
pub const CARD_TAG_LIMIT: usize = 3;

/// Readable text color for a hex background (YIQ contrast).
///
/// Accepts `#rgb` and `#rrggbb`. Unparseable colors get light text.
pub fn contrast_text_color(hex: &str) -> &'static str {
    if hex.is_empty() {
        return DARK_TEXT;
    }
    let digits = hex.trim_start_matches('#');
    let expanded: String = if digits.chars().count() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let channel = |i: usize| {
        expanded
            .get(i..i + 2)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .map(u32::from)
    };
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => {
            let yiq = (r * 299 + g * 587 + b * 114) / 1000;
            if yiq >= 128 {
                DARK_TEXT
            } else {
                LIGHT_TEXT
            }
        }
        _ => LIGHT_TEXT,
    }
}

/// Card description: first 100 characters, then `...`
pub fn truncate_description(text: &str) -> String {
    if text.chars().count() > DESCRIPTION_LIMIT {
        let head: String = text.chars().take(DESCRIPTION_LIMIT).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// Count for the "+N more" pill, if any
pub fn hidden_tag_count(total: usize) -> Option<usize> {
    (total > CARD_TAG_LIMIT).then(|| total - CARD_TAG_LIMIT)
}

/// Which icon an external link gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Facebook,
    Instagram,
    TikTok,
    Twitter,
    Web,
}

impl LinkKind {
    pub fn classify(url: &str) -> Self {
        let url = url.to_lowercase();
        if url.contains("facebook.com") {
            LinkKind::Facebook
        } else if url.contains("instagram.com") {
            LinkKind::Instagram
        } else if url.contains("tiktok.com") {
            LinkKind::TikTok
        } else if url.contains("twitter.com") {
            LinkKind::Twitter
        } else {
            LinkKind::Web
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            LinkKind::Facebook => "link-icon facebook",
            LinkKind::Instagram => "link-icon instagram",
            LinkKind::TikTok => "link-icon tiktok",
            LinkKind::Twitter => "link-icon twitter",
            LinkKind::Web => "link-icon web",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::Facebook => "Facebook",
            LinkKind::Instagram => "Instagram",
            LinkKind::TikTok => "TikTok",
            LinkKind::Twitter => "Twitter",
            LinkKind::Web => "Website",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrast() {
        assert_eq!(contrast_text_color("#ffffff"), DARK_TEXT);
        assert_eq!(contrast_text_color("#fff"), DARK_TEXT);
        assert_eq!(contrast_text_color("#000"), LIGHT_TEXT);
        assert_eq!(contrast_text_color("1a237e"), LIGHT_TEXT);
        assert_eq!(contrast_text_color("#ffeb3b"), DARK_TEXT);
    }

    #[test]
    fn test_contrast_edge_inputs() {
        assert_eq!(contrast_text_color(""), DARK_TEXT);
        assert_eq!(contrast_text_color("red"), LIGHT_TEXT);
        assert_eq!(contrast_text_color("#12"), LIGHT_TEXT);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_description("short"), "short");
        let exact = "x".repeat(100);
        assert_eq!(truncate_description(&exact), exact);
        let long = "é".repeat(120);
        let cut = truncate_description(&long);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_hidden_tag_count() {
        assert_eq!(hidden_tag_count(3), None);
        assert_eq!(hidden_tag_count(5), Some(2));
    }

    #[test]
    fn test_link_kind() {
        assert_eq!(LinkKind::classify("https://www.Facebook.com/nile"), LinkKind::Facebook);
        assert_eq!(LinkKind::classify("https://instagram.com/x"), LinkKind::Instagram);
        assert_eq!(LinkKind::classify("https://www.tiktok.com/@x"), LinkKind::TikTok);
        assert_eq!(LinkKind::classify("https://twitter.com/x"), LinkKind::Twitter);
        assert_eq!(LinkKind::classify("https://nile.example"), LinkKind::Web);
    }
}
