//! Small derived values shown by the section templates.

/// Project cards show at most this many technology badges.
pub const MAX_TECH_BADGES: usize = 6;

const GMAIL_COMPOSE_URL: &str = "https://mail.google.com/mail/?view=cm&fs=1&to=";

/// First character of every space-separated word: `Ada King Lovelace` → `AKL`.
pub fn initials(name: &str) -> String {
    name.split(' ').filter_map(|word| word.chars().next()).collect()
}

/// At most two initials, for company avatars.
pub fn company_initials(company: &str) -> String {
    initials(company).chars().take(2).collect()
}

/// Lowercase, each whitespace run becomes one `-`. Used in test ids.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_whitespace = false;

    for c in text.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
        } else {
            out.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }

    out
}

pub fn gmail_compose_link(email: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(email.as_bytes()).collect();
    format!("{}{}", GMAIL_COMPOSE_URL, encoded)
}

/// A label with its slug, rendered as a badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub label: String,
    pub slug: String,
}

impl Tag {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            slug: slug(label),
        }
    }
}

/// The first [`MAX_TECH_BADGES`] badges plus how many were left out.
pub fn capped_tech_badges(technologies: &[String]) -> (Vec<Tag>, usize) {
    let shown = technologies
        .iter()
        .take(MAX_TECH_BADGES)
        .map(|t| Tag::new(t))
        .collect();
    let hidden = technologies.len().saturating_sub(MAX_TECH_BADGES);
    (shown, hidden)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_letter_of_each_word() {
        assert_eq!(initials("Ada King Lovelace"), "AKL");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn repeated_spaces_do_not_produce_extra_initials() {
        assert_eq!(initials("Ada  Lovelace"), "AL");
    }

    #[test]
    fn company_initials_are_capped_at_two() {
        assert_eq!(company_initials("Analytical Engine Works"), "AE");
        assert_eq!(company_initials("Babbage"), "B");
    }

    #[test]
    fn slug_lowercases_and_dashes_whitespace_runs() {
        assert_eq!(slug("Machine  Learning"), "machine-learning");
        assert_eq!(slug("Node.js"), "node.js");
        assert_eq!(slug("C++ \t Qt"), "c++-qt");
    }

    #[test]
    fn gmail_link_encodes_the_address() {
        assert_eq!(
            gmail_compose_link("ada@example.com"),
            "https://mail.google.com/mail/?view=cm&fs=1&to=ada%40example.com"
        );
    }

    #[test]
    fn at_most_six_badges_are_shown() {
        let techs: Vec<String> = (1..=8).map(|i| format!("Tech {}", i)).collect();

        let (shown, hidden) = capped_tech_badges(&techs);

        assert_eq!(shown.len(), 6);
        assert_eq!(shown[0], Tag::new("Tech 1"));
        assert_eq!(shown[0].slug, "tech-1");
        assert_eq!(hidden, 2);
    }

    #[test]
    fn short_lists_hide_nothing() {
        let techs = vec!["Rust".to_string()];

        let (shown, hidden) = capped_tech_badges(&techs);

        assert_eq!(shown.len(), 1);
        assert_eq!(hidden, 0);
    }
}
