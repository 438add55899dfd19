//! Interpreters assigned to a meeting or webinar.

use crate::scalar::{Comma, Delimited};
use crate::union::{variant, Discriminant, DiscriminatorRule, UnmappedPolicy};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none};

wire_code_enum! {
    /// Interpreter kind code.
    pub enum InterpreterType {
        /// Spoken language interpreter.
        Language = 1,
        /// Sign language interpreter.
        SignLanguage = 2,
    }
}

/// Interprets between two spoken languages.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageInterpreter {
    #[serde(rename = "type")]
    pub interpreter_type: Option<InterpreterType>,

    pub email: Option<String>,

    /// Language pair, sent as `"US,FR"`.
    #[serde_as(as = "Delimited<Comma>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
}

/// Interprets into one sign language.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignLanguageInterpreter {
    #[serde(rename = "type")]
    pub interpreter_type: Option<InterpreterType>,

    pub email: Option<String>,

    pub sign_language: Option<String>,
}

/// An interpreter resolved by its `type` code.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpreter {
    Language(LanguageInterpreter),
    SignLanguage(SignLanguageInterpreter),
}

/// Resolution table for [`Interpreter`].
pub static INTERPRETER_RULE: DiscriminatorRule<Interpreter> = DiscriminatorRule {
    union: "Interpreter",
    path: &["type"],
    variants: &[
        (Discriminant::Code(1), |doc| variant(doc, Interpreter::Language)),
        (Discriminant::Code(2), |doc| variant(doc, Interpreter::SignLanguage)),
    ],
    unmapped: UnmappedPolicy::Fail,
};

union_serde!(Interpreter, INTERPRETER_RULE, [Language, SignLanguage]);
