//! String utilities

/// Bỏ khoảng trắng hai đầu
pub fn trim(s: &str) -> String {
    s.trim().to_string()
}

/// Viết hoa chữ cái đầu, phần còn lại viết thường
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// `hello_world` -> `helloWorld`. Dấu `_` thừa hoặc ở đầu bị bỏ qua.
pub fn snake_to_camel(s: &str) -> String {
    let mut words = s.split('_').filter(|w| !w.is_empty());
    let mut out = match words.next() {
        Some(first) => first.to_lowercase(),
        None => return String::new(),
    };
    for word in words {
        out.push_str(&capitalize(word));
    }
    out
}
