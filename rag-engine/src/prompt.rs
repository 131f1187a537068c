//! Prompt assembly: static templates + numbered context block.
//!
//! The templates encode the context-separation policy the downstream model
//! must obey: consumer renderings for personal shoppers, business renderings
//! (with profit data) for analysts, never mixed.

use std::fmt::Write as _;

use llm_service::ChatMessage;
use order_data::OrderDocument;

use crate::intent::QueryIntent;

/// System instructions for the e-commerce assistant.
pub const SYSTEM_PROMPT: &str = "\
You are an intelligent e-commerce assistant that automatically adapts to user context. \
Your role is to provide helpful, accurate, and contextually appropriate responses based \
on the provided product data.

CORE BEHAVIOR:
- AUTOMATICALLY detect if the user is asking for personal shopping advice OR business analysis
- NEVER mix personal and business language in the same response
- ALWAYS use the appropriate content format based on detected context

For PERSONAL CONTEXT (shopping, gifts, vacation, personal use):
- Use ONLY the consumer-friendly content (no profit/loss data)
- Focus on product features, benefits, quality, price, and value
- Use friendly, helpful customer service language
- NEVER mention business metrics, profitability, or internal business data

For BUSINESS CONTEXT (business analysis, profitability, revenue):
- Use ONLY the business content (with profit/loss data)
- Include business metrics, profit margins, cost analysis
- Use professional business language
- Focus on business implications and strategic insights

CRITICAL RULES:
1. ALWAYS detect context first before responding
2. NEVER show business metrics to personal shoppers
3. NEVER show personal shopping language to business users
4. Be genuinely helpful while maintaining strict context separation";

/// User prompt template; `{context_text}` and `{query}` are substituted.
pub const USER_PROMPT_TEMPLATE: &str = "\
Product Data:
{context_text}
User Question: {query}

RESPONSE REQUIREMENTS:
1. Analyze the question to determine PERSONAL or BUSINESS context, then stick
   to one format throughout the response
2. Give a direct answer first, then relevant product recommendations
3. Add practical insights and actionable advice, clearly organized
4. Never expose information inappropriate for the detected context";

/// Assembles the system + user message pair for one query.
///
/// Each hit contributes its intent-appropriate rendering as a numbered
/// context entry.
pub fn build_messages(
    query: &str,
    hits: &[OrderDocument],
    intent: QueryIntent,
) -> Vec<ChatMessage> {
    let mut context_text = String::new();
    for (i, doc) in hits.iter().enumerate() {
        let _ = writeln!(context_text, "{}. {}", i + 1, select_content(doc, intent));
    }

    let user_prompt = USER_PROMPT_TEMPLATE
        .replace("{context_text}", &context_text)
        .replace("{query}", query);

    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_prompt),
    ]
}

/// Picks the rendering a hit contributes for the given intent.
///
/// Business falls back to the consumer rendering when a hit carries no
/// business content.
pub(crate) fn select_content(doc: &OrderDocument, intent: QueryIntent) -> &str {
    match intent {
        QueryIntent::Personal => &doc.content,
        QueryIntent::Business => {
            if doc.business_content.is_empty() {
                &doc.content
            } else {
                &doc.business_content
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use llm_service::ChatRole;

    fn doc(id: &str, content: &str, business: &str) -> OrderDocument {
        OrderDocument {
            id: id.to_string(),
            order_id: "B-1".to_string(),
            amount: 50.0,
            profit: -5.0,
            quantity: 1,
            category: "Furniture".to_string(),
            sub_category: "Chairs".to_string(),
            content: content.to_string(),
            business_content: business.to_string(),
            amount_range: order_data::AmountRange::Low,
            profit_range: order_data::ProfitRange::Loss,
            quantity_range: order_data::QuantityRange::Small,
        }
    }

    #[test]
    fn personal_intent_uses_consumer_content() {
        let hits = vec![doc("a", "an affordable chair", "chair, loss of $5")];
        let messages = build_messages("a chair for me", &hits, QueryIntent::Personal);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[1].role, ChatRole::User);
        assert!(messages[1].content.contains("1. an affordable chair"));
        assert!(!messages[1].content.contains("loss of $5"));
    }

    #[test]
    fn business_intent_uses_business_content() {
        let hits = vec![doc("a", "an affordable chair", "chair, loss of $5")];
        let messages = build_messages("profit analysis", &hits, QueryIntent::Business);
        assert!(messages[1].content.contains("1. chair, loss of $5"));
        assert!(!messages[1].content.contains("affordable"));
    }

    #[test]
    fn business_falls_back_to_consumer_content_when_absent() {
        let hits = vec![doc("a", "an affordable chair", "")];
        let messages = build_messages("profit analysis", &hits, QueryIntent::Business);
        assert!(messages[1].content.contains("1. an affordable chair"));
    }

    #[test]
    fn context_entries_are_numbered_in_hit_order() {
        let hits = vec![
            doc("a", "first", "first-biz"),
            doc("b", "second", "second-biz"),
            doc("c", "third", "third-biz"),
        ];
        let messages = build_messages("q", &hits, QueryIntent::Personal);
        let body = &messages[1].content;
        assert!(body.contains("1. first\n"));
        assert!(body.contains("2. second\n"));
        assert!(body.contains("3. third\n"));
    }

    #[test]
    fn query_is_substituted_into_template() {
        let messages = build_messages("where are the chairs", &[], QueryIntent::Personal);
        assert!(messages[1].content.contains("User Question: where are the chairs"));
        assert!(!messages[1].content.contains("{query}"));
        assert!(!messages[1].content.contains("{context_text}"));
    }
}
