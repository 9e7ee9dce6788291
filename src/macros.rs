// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, or &str vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // Concatenate &str-likes into one String
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// `&[&str]` → `Vec<String>`, for header rows.
#[macro_export]
macro_rules! strings {
    ($slice:expr) => {
        $slice.iter().map(|s| ::std::string::String::from(*s)).collect::<::std::vec::Vec<_>>()
    };
}
