//! Prompt assembly: system prompt, retrieved-item context, history window.

use sous_catalog::{CatalogItem, ItemKind};
use sous_model::{ChatMessage, Role};

/// The assistant's voice: a warm, practical kitchen coach. Retrieved
/// catalog context is appended per request.
pub const SYSTEM_PROMPT: &str = "\
You are Sous, a friendly kitchen helper for a company that makes real, nourishing food for busy people. Your personality is warm, encouraging, and practical—like a supportive friend who helps make dinner easier.

Key brand values:
- REAL NOURISHING FOOD FOR BUSY PEOPLE
- Gluten-Free. Nut-Free. Stress Free. Ready in Minutes.
- Simple, fast, family-friendly meals
- Real ingredients, no filler

Your communication style:
- Use warm, encouraging language (\"You've got this\", \"Let's make dinner easier\")
- Be practical and solution-focused
- Give concrete suggestions with specific product/recipe names
- Frequently mention speed, ease, and dietary benefits (gluten-free, nut-free)
- Use simple, clear language—you're a friendly kitchen coach, not a formal nutritionist
- Don't be sales-pushy, but gently suggest relevant mixes/seasonings/collections when appropriate

When recommending items:
- Always mention specific recipe or product names
- Include time to make when available
- Highlight dietary benefits (gluten-free, nut-free)
- Give practical tips (e.g., \"Try the Marry Me Chicken mix with chicken breasts and cherry tomatoes for a 20-minute dinner.\")

Important: Always remind users that this is not medical advice and they should check ingredient labels for allergies.

Keep responses concise (2-4 sentences) unless the user asks for more detail.";

/// How many trailing history messages are forwarded to the model.
pub const HISTORY_WINDOW: usize = 6;

/// Render retrieved items as grounding context for the system prompt.
///
/// An empty slice produces fallback instructions instead: the model
/// should give generic cooking guidance rather than invent items.
pub fn items_context(items: &[CatalogItem]) -> String {
    if items.is_empty() {
        return "\n\nNo specific catalog items matched this query, but you can still provide \
                helpful general cooking advice in your warm, practical tone."
            .to_string();
    }

    let mut context = String::from("\n\nHere are some relevant recipes/products I found:\n");
    for (index, item) in items.iter().enumerate() {
        let kind = match item.kind {
            ItemKind::Recipe => "recipe",
            ItemKind::Product => "product",
        };
        context.push_str(&format!("{}. {} ({kind}): {}", index + 1, item.name, item.description));
        if let Some(time) = &item.time_to_make {
            context.push_str(&format!(" Time: {time}."));
        }
        if let Some(category) = &item.category {
            context.push_str(&format!(" Category: {category}."));
        }
        context.push('\n');
    }
    context.push_str("\nUse these specific items in your response when relevant.");
    context
}

/// Assemble the full transcript for one chat turn: grounded system
/// prompt, the last [`HISTORY_WINDOW`] history messages, then the user
/// message.
pub fn build_transcript(
    items: &[CatalogItem],
    history: &[ChatMessage],
    message: &str,
) -> Vec<ChatMessage> {
    let system = format!("{SYSTEM_PROMPT}{}", items_context(items));
    let window_start = history.len().saturating_sub(HISTORY_WINDOW);

    let mut transcript = Vec::with_capacity(2 + HISTORY_WINDOW);
    transcript.push(ChatMessage::new(Role::System, system));
    transcript.extend(history[window_start..].iter().cloned());
    transcript.push(ChatMessage::new(Role::User, message));
    transcript
}
