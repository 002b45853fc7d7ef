//! System prompt assembly.

use fixme_core::models::RewriteOptions;

const BASE: &str = "You are a proofreader. Correct only the grammar and spelling of the \
user's text. If the text is already correct, return it unchanged. Reply with the \
corrected text only, without quotes or commentary. Copy every token of the form \
⟦URL_n⟧ exactly as written and keep it in place.";

const TRANSLATE: &str = " If the text is written in Russian or another language other \
than English, translate it to English.";

const PRESENTATION: &str = " Then rephrase the result so that it reads naturally when \
spoken aloud in a presentation, keeping the original meaning.";

/// Instructions sent as the system message for `options`.
pub fn system_prompt(options: RewriteOptions) -> String {
    let mut prompt = String::from(BASE);
    if options.translate_to_english {
        prompt.push_str(TRANSLATE);
    }
    if options.presentation_mode {
        prompt.push_str(PRESENTATION);
    }
    prompt
}
