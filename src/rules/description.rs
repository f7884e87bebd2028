// src/rules/description.rs
use super::{Rule, RuleTable};
use crate::error::RuleError;

/// Returned instead of a description when the title is missing or blank.
pub const GUIDANCE: &str = "Please provide a product title to generate a description.";

/// Appended after every generated category paragraph.
pub const SUSTAINABILITY_PARAGRAPH: &str = "By choosing this recyclable material, you're contributing to \
environmental sustainability and supporting the circular economy. Every purchase helps reduce \
waste and conserve natural resources for future generations.";

const RULES: &[(&str, &[&str], &str)] = &[
    (
        "battery",
        &["battery", "batteries"],
        "High-quality battery suitable for various electronic devices. \
         Environmentally friendly disposal and recycling options available. \
         Long-lasting performance with reliable power output. \
         Perfect for both household and commercial applications.",
    ),
    (
        "metal",
        &["metal", "steel", "aluminum", "copper"],
        "Premium grade metal material ideal for construction and industrial applications. \
         Excellent durability and corrosion resistance. \
         Sustainably sourced and processed for environmental responsibility. \
         Suitable for recycling and reuse in various projects.",
    ),
    (
        "plastic",
        &["plastic", "polymer"],
        "High-quality plastic material perfect for recycling and reuse. \
         Durable construction with excellent chemical resistance. \
         Environmentally conscious choice for sustainable projects. \
         Suitable for various industrial and commercial applications.",
    ),
    (
        "paper",
        &["paper", "cardboard"],
        "Premium paper/cardboard material ideal for packaging and crafts. \
         Made from recycled content to support environmental sustainability. \
         Excellent quality with consistent thickness and durability. \
         Perfect for creative projects and commercial packaging needs.",
    ),
    (
        "glass",
        &["glass", "fiberglass"],
        "High-quality glass material suitable for various applications. \
         Excellent transparency and durability characteristics. \
         Environmentally friendly and fully recyclable. \
         Ideal for construction, decoration, and industrial use.",
    ),
    (
        "textile",
        &["textile", "fabric", "leather"],
        "Quality textile material perfect for fashion and upholstery projects. \
         Durable construction with excellent wear resistance. \
         Sustainable choice supporting circular fashion economy. \
         Suitable for creative projects and commercial applications.",
    ),
    (
        "wood",
        &["wood", "lumber"],
        "Premium wood material sourced from sustainable forests. \
         Excellent grain pattern and natural durability. \
         Perfect for furniture making, construction, and craft projects. \
         Environmentally responsible choice for eco-conscious builders.",
    ),
    (
        "rubber",
        &["tire", "rubber"],
        "High-quality rubber material suitable for various applications. \
         Excellent durability and weather resistance. \
         Perfect for recycling into new products and applications. \
         Environmentally responsible disposal and reuse option.",
    ),
    (
        "electronics",
        &["electronic", "computer", "laptop"],
        "Quality electronic equipment in good working condition. \
         Thoroughly tested for functionality and performance. \
         Environmentally responsible alternative to buying new. \
         Perfect for students, professionals, or hobbyists.",
    ),
    (
        "chemical",
        &["chemical"],
        "Industrial-grade chemical suitable for various applications. \
         Properly stored and handled according to safety standards. \
         Ideal for laboratory, industrial, or commercial use. \
         Please handle with appropriate safety precautions.",
    ),
    (
        "compost",
        &["compost", "organic"],
        "Premium organic compost material rich in nutrients. \
         Perfect for gardening and agricultural applications. \
         Sustainably produced from organic waste materials. \
         Helps improve soil health and plant growth naturally.",
    ),
];

const DEFAULT_TEMPLATE: &str = "Quality recyclable material in excellent condition. \
    Carefully stored and maintained for optimal reuse potential. \
    Environmentally responsible choice supporting sustainability. \
    Perfect for various creative and practical applications.";

pub fn builtin() -> Result<RuleTable, RuleError> {
    let rules = RULES
        .iter()
        .map(|(id, keywords, template)| Rule::new(*id, keywords, *template))
        .collect();
    RuleTable::new(rules, DEFAULT_TEMPLATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_keeps_category_order() {
        let table = builtin().unwrap();
        let ids: Vec<_> = table.rules().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "battery",
                "metal",
                "plastic",
                "paper",
                "glass",
                "textile",
                "wood",
                "rubber",
                "electronics",
                "chemical",
                "compost"
            ]
        );
    }

    #[test]
    fn templates_have_four_sentences() {
        let table = builtin().unwrap();
        for rule in table.rules() {
            assert_eq!(rule.template.matches(". ").count(), 3, "{}", rule.id);
            assert!(rule.template.ends_with('.'), "{}", rule.id);
        }
        assert_eq!(table.default_template().matches(". ").count(), 3);
    }

    #[test]
    fn continuation_lines_join_with_single_spaces() {
        assert!(!SUSTAINABILITY_PARAGRAPH.contains("  "));
        assert!(SUSTAINABILITY_PARAGRAPH.contains("to environmental sustainability"));
        assert!(!DEFAULT_TEMPLATE.contains("  "));
    }
}
