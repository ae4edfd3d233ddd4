/// Normalize a control-endpoint target into a bridge chat id: bare numbers
/// get the `@c.us` suffix, already-suffixed ids pass through untouched.
pub fn normalize_chat_id(number: &str) -> String {
    if number.contains("@c.us") {
        number.to_string()
    } else {
        format!("{number}@c.us")
    }
}
