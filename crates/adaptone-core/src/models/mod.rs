pub mod exchange;
pub mod profile;

pub use exchange::{Exchange, Role};
pub use profile::{
    Enthusiasm, Formality, Humor, InteractionHistory, Persona, PreferencesUpdate, TonePreferences,
    UserProfile, Verbosity,
};
