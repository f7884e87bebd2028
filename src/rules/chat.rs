// src/rules/chat.rs
use super::{Rule, RuleTable};
use crate::error::RuleError;

/// Marketplace categories, in listing order.
pub const MARKETPLACE_CATEGORIES: [&str; 14] = [
    "Metals",
    "Battery Recycling",
    "Compost & Food Waste",
    "Computer & Electronics",
    "Glass & Fiberglass",
    "Chemicals",
    "Paper/Cardboard",
    "Plastic",
    "Textiles & Leather",
    "Tire & Rubber",
    "Wood",
    "Used Commercial Goods",
    "Used Clothes",
    "Used Equipment",
];

const RULES: &[(&str, &[&str], &str)] = &[
    (
        "platform",
        &["what is the platform", "platform"],
        "ReFreshAI is an innovative eco-marketplace that connects buyers and sellers of recyclable \
         materials worldwide. Our platform uses AI to help you find the best deals, recommend products \
         based on your interests, and promote sustainable trading practices. We support 14 different \
         categories of recyclable materials!",
    ),
    (
        "sell",
        &["what products can i sell", "sell"],
        "You can sell various recyclable materials including: Metals, Battery Recycling materials, \
         Compost & Food Waste, Computer & Electronics, Glass & Fiberglass, Chemicals, Paper/Cardboard, \
         Plastic, Textiles & Leather, Tire & Rubber, Wood, Used Commercial Goods, Used Clothes, \
         and Used Equipment. Our AI helps you set competitive prices based on market data!",
    ),
    (
        "about",
        &["where", "why"],
        "ReFreshAI operates globally with a focus on Moldova and surrounding regions. \
         Why choose us? We use AI-powered recommendations, provide smart pricing suggestions, \
         offer real-time chat support, and help reduce environmental waste by facilitating \
         the circular economy. Every transaction contributes to a more sustainable future!",
    ),
    (
        "pricing",
        &["price", "cost"],
        "Our AI analyzes market trends to suggest optimal pricing for your recyclable materials. \
         Prices vary by category, quality, and location. Use our smart pricing feature when listing \
         products to get AI-generated price recommendations based on similar items in your area!",
    ),
    (
        "ai",
        &["ai", "artificial intelligence"],
        "Our AI features include: Smart product recommendations based on your browsing history, \
         AI-powered price suggestions, automated product description generation, intelligent search, \
         and personalized content. The AI learns from your preferences to improve your experience!",
    ),
    (
        "help",
        &["help", "support"],
        "I'm here to help! You can ask me about: How to sell products, pricing strategies, \
         platform features, recyclable material categories, shipping options, or any other questions \
         about our eco-marketplace. What would you like to know?",
    ),
    (
        "environment",
        &["environment", "eco", "green"],
        "Great question! ReFreshAI promotes environmental sustainability by facilitating the reuse \
         and recycling of materials. Every transaction on our platform helps reduce waste, conserve \
         natural resources, and support the circular economy. Together, we're building a greener future!",
    ),
];

const DEFAULT_REPLY: &str = "Thank you for your question! I'm here to help you navigate our \
    AI-powered eco-marketplace. You can ask me about selling products, pricing, platform features, \
    or environmental benefits. How can I assist you today?";

pub fn builtin() -> Result<RuleTable, RuleError> {
    let rules = RULES
        .iter()
        .map(|(id, keywords, template)| Rule::new(*id, keywords, *template))
        .collect();
    RuleTable::new(rules, DEFAULT_REPLY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sell_reply_names_every_category() {
        let table = builtin().unwrap();
        let reply = table.classify("sell").text();
        for category in MARKETPLACE_CATEGORIES {
            assert!(reply.contains(category), "missing {category}");
        }
    }

    #[test]
    fn replies_join_without_double_spaces() {
        let table = builtin().unwrap();
        for rule in table.rules() {
            assert!(!rule.template.contains("  "), "{}", rule.id);
        }
        assert!(!DEFAULT_REPLY.contains("  "));
    }
}
