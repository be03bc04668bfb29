// Cross-cutting prompt fragments shared by services that call the model.

/// Strict translate-only instruction. Replace `{target_lang}` then `{text}`.
pub const TRANSLATE_PROMPT_TEMPLATE: &str = "You are a professional translator.
Translate ONLY the following text into {target_lang}.
Do NOT add explanations.
Do NOT output anything other than the translated text.
Keep emojis and formatting intact.

Text to translate:
{text}";
