//! Interactive prompts with CI/non-interactive fallback

use super::context::UiContext;
use crate::error::{TrolleyError, TrolleyResult};
use std::io;

/// Prompt for selection from a list of options
///
/// Returns `Ok(None)` when the user cancels. In a non-interactive
/// context the first option is chosen without prompting.
pub fn select<T: Clone + Eq>(
    ctx: &UiContext,
    message: &str,
    options: &[(T, String, String)], // (value, label, hint)
) -> TrolleyResult<Option<T>> {
    // Non-interactive mode takes the first option
    if !ctx.is_interactive() {
        let (value, _, _) = options
            .first()
            .ok_or_else(|| TrolleyError::User("Nothing to select from".to_string()))?;
        return Ok(Some(value.clone()));
    }

    let mut select = cliclack::select(message);
    for (value, label, hint) in options {
        select = select.item(value.clone(), label, hint);
    }

    match select.interact() {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(TrolleyError::User(format!("Select failed: {e}"))),
    }
}
