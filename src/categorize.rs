use serde::{Deserialize, Serialize};

/// Category when no rule matches: a plain card-expense line.
pub const DEFAULT_CATEGORY: &str = "永豐信用卡卡費";

/// One substring rule: any keyword hit assigns the category. Rules are an
/// ordered priority list; the first matching rule wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    pub keywords: Vec<String>,
    pub category: String,
}

impl CategoryRule {
    fn matches(&self, description: &str) -> bool {
        let desc = description.to_uppercase();
        self.keywords
            .iter()
            .any(|kw| desc.contains(&kw.to_uppercase()))
    }
}

fn rule(keywords: &[&str], category: &str) -> CategoryRule {
    CategoryRule {
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        category: category.to_string(),
    }
}

/// Built-in rule table. Merchants appear on statements in Chinese or in
/// the acquirer's Latin spelling, so transport carries both.
pub fn builtin_rules() -> Vec<CategoryRule> {
    vec![
        rule(&["優步", "UBER", "和雲", "中油"], "交通"),
        rule(&["凱基"], "人壽保險費"),
        rule(&["中華電信"], "電信費"),
    ]
}

/// User rules from settings take priority over the built-ins.
pub fn effective_rules(user_rules: &[CategoryRule]) -> Vec<CategoryRule> {
    let mut rules = user_rules.to_vec();
    rules.extend(builtin_rules());
    rules
}

pub fn classify(description: &str, rules: &[CategoryRule]) -> String {
    rules
        .iter()
        .find(|r| r.matches(description))
        .map(|r| r.category.clone())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}
