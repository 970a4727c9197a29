//! Instruction prompt for the remote security evaluation.

use secrecy::{ExposeSecret, SecretString};

/// Builds the fixed analysis instruction with the password embedded.
///
/// The model is directed to act as a security evaluator and to never echo
/// the password back in its output.
pub(crate) fn build_prompt(password: &SecretString) -> String {
    format!(
        "Analyze the following password based on its characteristics, but DO NOT repeat \
         or display the password in your response.\n\
         Password to analyze: \"{}\"\n\n\
         Act as a cybersecurity expert. Evaluate the password's strength and potential \
         for compromise. Consider the following factors:\n\
         - Length\n\
         - Mix of character types (uppercase, lowercase, numbers, symbols)\n\
         - Use of common dictionary words, names, or places\n\
         - Presence of sequential or repeated characters (e.g., '1234', 'abc', 'aaa')\n\
         - Common keyboard patterns (e.g., 'qwerty')\n\
         - Resemblance to common passwords found in data breaches (e.g., 'password123', '123456')\n\n\
         Based on your analysis, provide a structured JSON response.",
        password.expose_secret()
    )
}
