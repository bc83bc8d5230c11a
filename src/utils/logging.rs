use serde::Serialize;
use tracing::debug;

fn pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|error| format!("<pretty serialize failed: {error}>"))
}

/// Dumps a request payload at debug level. Serialization is skipped entirely
/// unless debug logging is enabled.
///
/// Never pass credentials through here.
pub(crate) fn debug_payload<T: Serialize>(action: &str, actor: &str, value: &T) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    debug!(action, actor, payload = %pretty_json(value), "request payload");
}

#[cfg(test)]
mod tests {
    use super::pretty_json;
    use serde_json::json;

    #[test]
    fn pretty_json_is_indented() {
        let out = pretty_json(&json!({"name": "Go"}));
        assert_eq!(out, "{\n  \"name\": \"Go\"\n}");
    }
}
