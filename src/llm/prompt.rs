//! Prompt construction for the external price estimation call.

use crate::utils::safe_truncate;

/// Queries are truncated before prompting; anything past this length is
/// noise for price estimation.
const MAX_PROMPT_QUERY_CHARS: usize = 100;

pub const SYSTEM_PROMPT: &str = r#"You are an e-commerce pricing analyst. Given a product search query, estimate the price range the shopper implies, in euros.

Always respond with valid JSON."#;

pub fn build_estimation_prompt(query: &str) -> String {
    let query = safe_truncate(query, MAX_PROMPT_QUERY_CHARS);

    format!(
        r#"Estimate the implied price range for this product search query.

**Query:**
"{query}"

**Examples:**
Query: "cheap shoes"
{{"min_price": null, "max_price": 100.0, "confidence": 0.7, "reasoning": "Footwear is a premium category; cheap still means up to about 100."}}

Query: "luxury watch as a gift"
{{"min_price": 250.0, "max_price": null, "confidence": 0.8, "reasoning": "Luxury watches start well above typical accessory prices."}}

Query: "red summer dress"
{{"min_price": null, "max_price": null, "confidence": 0.2, "reasoning": "No monetary signal in the query."}}

**Response Format (JSON):**
{{"min_price": <number or null>, "max_price": <number or null>, "confidence": <0.0-1.0>, "reasoning": "<one short sentence>"}}

**Important:**
- Use null for a bound the query does not imply
- confidence below 0.5 means the query carries no reliable price signal
- Respond with the JSON object only, no other fields and no prose"#
    )
}
