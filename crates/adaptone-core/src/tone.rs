//! Tone engine: derives an effective tone from a profile and a conversation
//! context, renders a templated reply from it, and folds caller feedback back
//! into the profile's counters.
//!
//! Everything here is deterministic except the single pun choice, which goes
//! through an injected random source so tests can pin it.

use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};

use crate::models::{
    Enthusiasm, Exchange, Formality, Humor, Persona, TonePreferences, UserProfile, Verbosity,
};

/// Caller-supplied conversation context. Anything other than the two known
/// tags leaves the baseline tone untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    Work,
    Personal,
    #[serde(other)]
    Other,
}

impl Default for Context {
    // Chat requests that omit the field default to a personal conversation.
    fn default() -> Self {
        Context::Personal
    }
}

impl Context {
    pub fn as_str(self) -> &'static str {
        match self {
            Context::Work => "work",
            Context::Personal => "personal",
            Context::Other => "other",
        }
    }
}

/// Caller signal about the previous reply. Unknown values are a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    Positive,
    Negative,
    #[serde(other)]
    Other,
}

/// Fixed pun suffixes, one chosen uniformly when humor is `punny`.
pub const PUNS: [&str; 3] = [
    " That's a *punny* way to put it!",
    " I'm not *kitten* you, that's the answer.",
    " That's some *egg-cellent* logic!",
];

const FALLBACK_REPLY: &str = "I'm not sure how to answer that.";
const HIGH_ENTHUSIASM_CLAUSE: &str = " It's going to be absolutely fantastic!";
const DETAILED_CLAUSE: &str = " To elaborate further, this involves several steps starting with...";

/// Effective tone for one request: the profile baseline overridden by the
/// conversation context. Recomputed per request, never stored.
pub fn derive_tone(profile: &UserProfile, context: Context) -> TonePreferences {
    let mut tone = profile.tone_preferences;
    match context {
        Context::Work => {
            tone.formality = Formality::Professional;
            tone.humor = Humor::None;
            tone.persona = Persona::Professional;
        }
        Context::Personal => {
            // Humor and persona stay on the user's baseline here.
            tone.formality = Formality::Casual;
        }
        Context::Other => {}
    }
    tone
}

/// Derive the effective tone, log the prompt a real model would receive, and
/// render the canned reply. Returns the reply with the tone that produced it.
pub fn generate_response<R: Rng>(
    profile: &UserProfile,
    context: Context,
    message: &str,
    history: &[Exchange],
    rng: &mut R,
) -> (String, TonePreferences) {
    let tone = derive_tone(profile, context);

    let prompt = compose_prompt(profile, &tone, context, history, message);
    tracing::debug!(user_id = %profile.user_id, %prompt, "assembled prompt for simulated completion");

    (render_reply(message, &tone, rng), tone)
}

/// Fold feedback into the profile counters. Mutates in place; the caller is
/// responsible for persisting the profile afterwards.
pub fn process_feedback(profile: &mut UserProfile, feedback: Feedback) {
    let history = &mut profile.interaction_history;
    match feedback {
        Feedback::Positive => {
            history.feedback_score += 1;
            history.successful_tone_matches += 1;
        }
        Feedback::Negative => {
            history.feedback_score -= 1;
        }
        Feedback::Other => {}
    }
    tracing::debug!(
        user_id = %profile.user_id,
        score = history.feedback_score,
        "feedback processed"
    );
}

/// The prompt that would go to a language model. Only logged in this version;
/// the reply itself comes from `render_reply`.
fn compose_prompt(
    profile: &UserProfile,
    tone: &TonePreferences,
    context: Context,
    history: &[Exchange],
    message: &str,
) -> String {
    let tone_json = serde_json::to_string(tone).unwrap_or_default();
    let mut prompt = format!(
        "You are a helpful assistant. Your current user prefers the following tone: {tone_json}. \
         The conversation context is '{}'. The user's technical level is '{}'.\n\n",
        context.as_str(),
        profile.technical_level(),
    );
    for exchange in history {
        prompt.push_str(exchange.role.label());
        prompt.push_str(": ");
        prompt.push_str(&exchange.message);
        prompt.push('\n');
    }
    prompt.push_str(&format!("User: {message}\nAssistant:"));
    prompt
}

/// String-concatenate the reply: formality template, then the optional
/// enthusiasm, verbosity, persona and pun clauses, in that order.
fn render_reply<R: Rng>(message: &str, tone: &TonePreferences, rng: &mut R) -> String {
    let mut reply = match tone.formality {
        Formality::Casual => {
            format!("Hey there! So, about '{message}', you could probably just...")
        }
        Formality::Professional => {
            format!("Regarding your query about '{message}', the recommended course of action is...")
        }
        Formality::Formal => {
            format!("With respect to your inquiry, '{message}', it is advisable to proceed by...")
        }
        // No template for the fallback formality.
        Formality::Balanced => FALLBACK_REPLY.to_string(),
    };

    if tone.enthusiasm == Enthusiasm::High {
        reply.push_str(HIGH_ENTHUSIASM_CLAUSE);
    }
    if tone.verbosity == Verbosity::Detailed {
        reply.push_str(DETAILED_CLAUSE);
    }

    match tone.persona {
        Persona::Witty => reply.push_str(" You know, a clever person might say that..."),
        Persona::Friendly => reply.push_str(" Just a friendly thought here, but..."),
        Persona::Professional => {
            reply.push_str(" From a professional standpoint, it's clear that...")
        }
        Persona::Neutral => {}
    }

    if tone.humor == Humor::Punny {
        reply.push_str(PUNS[rng.random_range(0..PUNS.len())]);
    }

    reply
}
